use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{storage::use_local_storage, use_preferred_dark, use_window_scroll};

use crate::icons::platform_icon;
use crate::portfolio::HeaderIdentity;
use crate::ui::scroll::{show_scroll_to_top, NavLink};
use crate::ui::theme::{Theme, DARK_CLASS, THEME_STORAGE_KEY};

use super::navigation::scroll_to_top;

fn apply_theme(theme: Theme) {
    let root = if let Some(root) = document().document_element() {
        root
    } else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark()) {
        log::warn!("couldn't apply {theme} theme: {e:?}");
    }
}

#[component]
pub fn Header(identity: HeaderIdentity, nav_links: &'static [NavLink]) -> impl IntoView {
    let (mobile_open, set_mobile_open) = signal(false);

    // An empty stored value means no explicit choice, so the platform preference applies
    let (stored_theme, set_stored_theme, _) =
        use_local_storage::<String, FromToStringCodec>(THEME_STORAGE_KEY);
    let prefers_dark = use_preferred_dark();
    let theme = Memo::new(move |_| Theme::from_stored(&stored_theme.get(), prefers_dark.get()));
    Effect::new(move |_| apply_theme(theme.get()));

    let toggle_theme = move |_| {
        let next = theme.get_untracked().toggled();
        set_stored_theme.set(next.to_string());
    };

    let (_, scroll_y) = use_window_scroll();
    let show_up = Memo::new(move |_| show_scroll_to_top(scroll_y.get()));

    let nav_items = move |class: &'static str| {
        nav_links
            .iter()
            .map(|link| {
                view! {
                    <a href=link.href() class=class on:click=move |_| set_mobile_open(false)>
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    let HeaderIdentity {
        name,
        experience,
        avatar,
        linkedin,
        github,
        email,
        phone,
    } = identity;

    view! {
        <nav class="nav-sticky bg-white/80 dark:bg-gray-900/80 backdrop-blur border-b border-gray-200 dark:border-gray-800 shadow-sm z-50">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col md:flex-row md:items-center md:justify-between py-3 gap-2 md:gap-0">
                <div class="flex items-center gap-4 min-w-0">
                    <img
                        src=avatar
                        alt=name.clone()
                        width="48"
                        height="48"
                        class="w-12 h-12 rounded-full border-2 border-blue-500 object-cover shadow-sm"
                    />
                    <div class="min-w-0">
                        <div class="text-lg font-bold truncate mono text-blue-700 dark:text-blue-400">
                            {name}
                        </div>
                        <div class="text-xs text-gray-500 dark:text-gray-400 truncate">
                            {experience}
                        </div>
                    </div>
                </div>
                <div class="hidden md:flex items-center space-x-2">
                    {nav_items(
                        "px-3 py-1 rounded-md font-medium text-gray-600 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 hover:bg-blue-50 dark:hover:bg-blue-900 transition-colors duration-200",
                    )}
                </div>
                <div class="flex items-center gap-3">
                    <a
                        href=linkedin
                        target="_blank"
                        rel="noopener noreferrer"
                        class="w-9 h-9 flex items-center justify-center rounded-full bg-blue-100 dark:bg-blue-900 text-blue-600 dark:text-blue-300 transition-colors shadow-sm"
                        aria-label="LinkedIn"
                    >
                        <i class=platform_icon("linkedin")></i>
                    </a>
                    <a
                        href=github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="w-9 h-9 flex items-center justify-center rounded-full bg-gray-100 dark:bg-gray-800 text-gray-800 dark:text-gray-200 transition-colors shadow-sm"
                        aria-label="GitHub"
                    >
                        <i class=platform_icon("github")></i>
                    </a>
                    <a
                        href=format!("mailto:{email}")
                        class="w-9 h-9 flex items-center justify-center rounded-full bg-green-100 dark:bg-green-900 text-green-600 dark:text-green-300 transition-colors shadow-sm"
                        aria-label="Email"
                    >
                        <i class=platform_icon("email")></i>
                    </a>
                    <a
                        href=format!("tel:{phone}")
                        class="w-9 h-9 flex items-center justify-center rounded-full bg-purple-100 dark:bg-purple-900 text-purple-600 dark:text-purple-300 transition-colors shadow-sm"
                        aria-label="Phone"
                    >
                        <i class=platform_icon("phone")></i>
                    </a>
                    <button
                        class=move || if theme.get().is_dark() { "theme-toggle dark" } else { "theme-toggle" }
                        aria-label="Toggle theme"
                        on:click=toggle_theme
                    ></button>
                    <button
                        class="md:hidden p-2"
                        aria-label="Open mobile menu"
                        on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                    >
                        <i class="fa-solid fa-bars text-xl"></i>
                    </button>
                </div>
            </div>
            <div class=move || if mobile_open() { "md:hidden" } else { "md:hidden hidden" }>
                <div class="py-4 space-y-2 px-4">{nav_items("block nav-link")}</div>
            </div>
            <Show when=move || show_up.get()>
                <button
                    class="fixed bottom-6 right-6 z-50 bg-blue-600 text-white rounded-full p-3 shadow-lg hover:bg-blue-700 transition-colors"
                    on:click=move |_| scroll_to_top()
                    aria-label="Scroll to top"
                >
                    <i class="fa-solid fa-arrow-up text-xl"></i>
                </button>
            </Show>
        </nav>
    }
}
