use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

fn reveal_class(animated: bool, revealed: bool) -> &'static str {
    match (animated, revealed) {
        (false, _) => "",
        (true, false) => "reveal",
        (true, true) => "reveal reveal-visible",
    }
}

/// A page section that fades and slides in the first time it scrolls into view.
///
/// With `animated = false` the content is rendered in place with no transition.
#[component]
pub fn Section(
    #[prop(into)] id: String,
    #[prop(optional, into)] class: String,
    #[prop(default = true)] animated: bool,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Section>::new();
    let visible = use_element_visibility(node_ref);
    let (revealed, set_revealed) = signal(false);

    // reveal once, never hide again when scrolled past
    Effect::new(move |_| {
        if visible.get() {
            set_revealed(true);
        }
    });

    view! {
        <section
            id=id
            node_ref=node_ref
            class=move || format!("{class} {}", reveal_class(animated, revealed.get()))
        >
            {children()}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLESHEET: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/input.css"));

    #[test]
    fn test_entrance_classes_are_styled() {
        for class in [
            "reveal",
            "reveal-visible",
            "fade-in",
            "slide-in-left",
            "slide-in-right",
        ] {
            assert!(
                STYLESHEET.contains(&format!(".{class}")),
                "input.css has no rule for .{class}"
            );
        }
    }

    #[test]
    fn test_reveal_class() {
        assert_eq!(reveal_class(false, false), "");
        assert_eq!(reveal_class(false, true), "");
        assert_eq!(reveal_class(true, false), "reveal");
        assert_eq!(reveal_class(true, true), "reveal reveal-visible");
    }
}
