use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Smooth-scrolls to the element with `id`. Does nothing if there is no such element.
pub fn scroll_to_section(id: &str) {
    let el = if let Some(el) = document().get_element_by_id(id) {
        el
    } else {
        log::debug!("no section with id {id}");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
