use leptos::prelude::*;

use crate::icons::platform_icon;
use crate::portfolio::Profile;

use super::section::Section;

/// Placeholder document served by the "Download CV" button.
fn cv_data_url(name: &str, title: &str) -> String {
    format!("data:text/plain;charset=utf-8,{name} - {title} CV")
}

fn cv_file_name(name: &str) -> String {
    format!("{}_CV.pdf", name.split_whitespace().collect::<Vec<_>>().join("_"))
}

#[component]
fn Stat(value: String, label: &'static str, color: &'static str) -> impl IntoView {
    view! {
        <div class="p-4 bg-gray-50 dark:bg-gray-800 rounded-lg">
            <div class=format!("text-2xl font-bold {color} mb-1")>{value}</div>
            <div class="text-sm text-gray-500 dark:text-gray-400">{label}</div>
        </div>
    }
}

#[component]
pub fn Hero(
    profile: Profile,
    on_contact: Callback<()>,
    on_download_cv: Callback<()>,
) -> impl IntoView {
    let Profile {
        name,
        title,
        bio,
        stats,
        social,
    } = profile;
    let cv_href = cv_data_url(&name, &title);
    let cv_name = cv_file_name(&name);
    let experience = format!("{}+ Years Experience", stats.experience);

    view! {
        <Section id="about" class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-6xl mx-auto">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div>
                        <div class="mb-6">
                            <h1 class="hero-title text-4xl md:text-5xl lg:text-6xl font-bold mb-4">
                                "Hi, I'm "
                                <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-500 to-purple-600">
                                    {name}
                                </span>
                            </h1>
                            <p class="text-xl md:text-2xl font-light mb-6 text-gray-500 dark:text-gray-400">
                                {title}
                            </p>
                            <p class="text-lg mb-8 leading-relaxed text-gray-500 dark:text-gray-400">
                                {bio}
                            </p>
                        </div>
                        <div class="flex flex-wrap gap-4 mb-8">
                            <button class="btn-primary motion-press" on:click=move |_| on_contact.run(())>
                                <i class="fa-solid fa-envelope mr-2"></i>
                                "Get In Touch"
                            </button>
                            <a
                                class="btn-secondary motion-press"
                                href=cv_href
                                download=cv_name
                                on:click=move |_| on_download_cv.run(())
                            >
                                <i class="fa-solid fa-download mr-2"></i>
                                "Download CV"
                            </a>
                        </div>
                        <div class="flex gap-4">
                            {social
                                .into_iter()
                                .map(|(platform, link)| {
                                    view! {
                                        <a
                                            href=link.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="w-12 h-12 card flex items-center justify-center hover:text-blue-500 transition-colors motion-tilt"
                                            aria-label=platform.clone()
                                        >
                                            <i class=format!("{} text-xl", platform_icon(&platform))></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="slide-in-right">
                        <div class="card p-8">
                            <div class="text-center mb-6">
                                <div class="w-32 h-32 mx-auto mb-4 bg-gradient-to-br from-blue-500 to-purple-600 rounded-full flex items-center justify-center text-white text-4xl">
                                    <span role="img" aria-label="avatar">
                                        "👨‍💻"
                                    </span>
                                </div>
                                <h3 class="text-2xl font-bold mb-2">{experience}</h3>
                                <p class="text-gray-500 dark:text-gray-400">
                                    "Building modern web applications"
                                </p>
                            </div>
                            <div class="grid grid-cols-2 gap-4 text-center">
                                <Stat value=stats.projects label="Projects" color="text-blue-500" />
                                <Stat value=stats.clients label="Clients" color="text-purple-500" />
                                <Stat
                                    value=stats.success_rate
                                    label="Success Rate"
                                    color="text-green-500"
                                />
                                <Stat value="24/7".to_string() label="Support" color="text-orange-500" />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cv_data_url() {
        assert_eq!(
            cv_data_url("Alex Rivera", "Fullstack Developer"),
            "data:text/plain;charset=utf-8,Alex Rivera - Fullstack Developer CV"
        );
    }

    #[test]
    fn test_cv_file_name() {
        assert_eq!(cv_file_name("Alex Rivera"), "Alex_Rivera_CV.pdf");
        assert_eq!(cv_file_name("  Sam   Lee "), "Sam_Lee_CV.pdf");
    }
}
