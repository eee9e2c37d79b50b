use leptos::prelude::*;

#[component]
pub fn SuccessToast(message: Signal<String>, show: Signal<bool>) -> impl IntoView {
    view! {
        <div
            class=move || {
                format!(
                    "success-message fixed top-5 right-5 z-[1000] bg-green-500 text-white px-6 py-3 rounded-lg flex items-center gap-2 shadow-lg transition-transform duration-300 {}",
                    if show.get() { "translate-x-0" } else { "translate-x-[400px]" },
                )
            }
            role="alert"
            aria-live="polite"
        >
            <i class="fa-solid fa-check mr-2"></i>
            {message}
        </div>
    }
}
