use leptos::prelude::*;

use crate::icons::platform_icon;
use crate::portfolio::{Project, ProjectStatus};

use super::section::Section;

fn status_class(status: &ProjectStatus) -> &'static str {
    if status.is_completed() {
        "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200"
    } else {
        "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-200"
    }
}

#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    view! {
        <Section id="projects" class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16 fade-in">
                    <h2 class="section-title text-3xl md:text-4xl font-bold mb-4">
                        "Featured Projects"
                    </h2>
                    <p class="text-lg text-gray-500 dark:text-gray-400">
                        "Some of my recent work and achievements"
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8" id="projects-container">
                    {projects
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index /> })
                        .collect_view()}
                </div>
            </div>
        </Section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let highlights = project.highlights().to_vec();
    let Project {
        title,
        description,
        image,
        technologies,
        live_url,
        github_url,
        status,
        duration,
        ..
    } = project;
    let delay = format!("transition-delay: {:.1}s", index as f32 * 0.1);

    view! {
        <div class="project-card slide-in-right relative" style=delay>
            <div class="h-48 bg-gradient-to-br from-blue-500 to-purple-600 flex items-center justify-center text-6xl">
                <span role="img" aria-label="project-image">
                    {image}
                </span>
            </div>
            <div class="p-6">
                <div class="flex justify-between items-start mb-3">
                    <h3 class="text-xl font-bold">{title.clone()}</h3>
                    <span class=format!("px-2 py-1 text-xs rounded-full {}", status_class(&status))>
                        {status.label().to_string()}
                    </span>
                </div>
                <p class="mb-4 text-sm leading-relaxed text-gray-500 dark:text-gray-400">
                    {description}
                </p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {technologies
                        .into_iter()
                        .map(|tech| view! { <span class="tech-badge">{tech}</span> })
                        .collect_view()}
                </div>
                <div class="text-xs mb-4 text-gray-500 dark:text-gray-400">
                    <i class="fa-regular fa-clock mr-1"></i>
                    {duration}
                </div>
                <div class="flex gap-2">
                    <a
                        href=live_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex-1 text-center py-2 px-4 bg-blue-500 text-white rounded-lg hover:bg-blue-600 transition-colors text-sm"
                    >
                        <i class="fa-solid fa-up-right-from-square mr-1"></i>
                        "Live Demo"
                    </a>
                    <a
                        href=github_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex-1 text-center py-2 px-4 border border-gray-300 dark:border-gray-600 rounded-lg hover:bg-gray-50 dark:hover:bg-gray-800 transition-colors text-sm"
                    >
                        <i class=format!("{} mr-1", platform_icon("github"))></i>
                        "Code"
                    </a>
                </div>
            </div>
            <div class="project-overlay absolute inset-0 flex flex-col items-center justify-center gap-4 opacity-0 transition-all">
                <h4 class="text-xl font-bold text-white mb-4">{title}</h4>
                <div class="text-white text-sm space-y-2 max-w-xs text-center">
                    {highlights
                        .into_iter()
                        .map(|feature| {
                            view! {
                                <div class="flex items-center gap-2">
                                    <i class="fa-solid fa-check text-green-400"></i>
                                    <span>{feature}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-3 mt-6">
                    <a
                        href=live_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-4 py-2 bg-white text-blue-600 rounded-lg font-medium hover:bg-gray-100 transition-colors"
                    >
                        "View Live"
                    </a>
                    <a
                        href=github_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-4 py-2 border-2 border-white text-white rounded-lg font-medium hover:bg-white hover:text-blue-600 transition-colors"
                    >
                        "View Code"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class() {
        assert!(status_class(&ProjectStatus::Completed).contains("green"));
        assert!(status_class(&ProjectStatus::InProgress("Beta".to_string())).contains("yellow"));
    }
}
