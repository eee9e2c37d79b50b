use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::icons::icon_class;
use crate::portfolio::{SkillGroup, Technology};
use crate::ui::palette::{tint, Tint};

use super::section::Section;

/// Pause between a card entering the viewport and its bars filling.
const FILL_DELAY: Duration = Duration::from_millis(300);

#[component]
pub fn SkillsSection(skills: Vec<SkillGroup>) -> impl IntoView {
    view! {
        <Section id="skills" class="py-20 px-4 sm:px-6 lg:px-8 bg-gray-50 dark:bg-gray-900">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16 fade-in">
                    <h2 class="section-title text-3xl md:text-4xl font-bold mb-4">
                        "Skills & Technologies"
                    </h2>
                    <p class="text-lg text-gray-500 dark:text-gray-400">
                        "Technologies I work with to build amazing applications"
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8" id="skills-container">
                    {skills
                        .into_iter()
                        .enumerate()
                        .map(|(index, group)| view! { <SkillCard group index /> })
                        .collect_view()}
                </div>
            </div>
        </Section>
    }
}

#[component]
fn SkillCard(group: SkillGroup, index: usize) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(node_ref);
    let (filled, set_filled) = signal(false);

    Effect::new(move |_| {
        if visible.get() && !filled.get_untracked() {
            set_timeout(move || set_filled(true), FILL_DELAY);
        }
    });

    let SkillGroup {
        category,
        icon,
        color,
        technologies,
    } = group;
    let tint = tint(&color);
    let delay = format!("transition-delay: {:.1}s", index as f32 * 0.1);

    view! {
        <div class="card p-6 slide-in-left" node_ref=node_ref style=delay>
            <div class="flex items-center mb-6">
                <div class=format!(
                    "w-12 h-12 {} rounded-lg flex items-center justify-center mr-4",
                    tint.tile,
                )>
                    <i class=format!("{} {} text-xl", icon_class(&icon), tint.icon)></i>
                </div>
                <h3 class="text-xl font-bold">{category}</h3>
            </div>
            <div class="space-y-4">
                {technologies
                    .into_iter()
                    .map(|tech| {
                        view! { <SkillBar tech tint filled /> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SkillBar(tech: Technology, tint: Tint, filled: ReadSignal<bool>) -> impl IntoView {
    let width = tech.fill_width();
    let data_width = width.clone();
    let Technology { name, level, icon } = tech;

    view! {
        <div>
            <div class="flex justify-between items-center mb-2">
                <span class="font-medium flex items-center gap-2">
                    <i class=format!("{} {}", icon_class(&icon), tint.accent)></i>
                    {name}
                </span>
                <span class="text-sm text-gray-500 dark:text-gray-400">{format!("{level}%")}</span>
            </div>
            <div class="skill-progress">
                <div
                    class="skill-fill"
                    data-width=data_width
                    style:width=move || if filled.get() { width.clone() } else { "0".to_string() }
                ></div>
            </div>
        </div>
    }
}
