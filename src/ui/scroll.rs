/// Vertical offset in pixels past which the back-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD: f64 = 200.0;

pub fn show_scroll_to_top(offset: f64) -> bool {
    offset > SCROLL_TOP_THRESHOLD
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Element id of the section the link scrolls to.
    pub target: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "About",
        target: "about",
    },
    NavLink {
        label: "Skills",
        target: "skills",
    },
    NavLink {
        label: "Projects",
        target: "projects",
    },
    NavLink {
        label: "Contact",
        target: "contact",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!show_scroll_to_top(0.0));
        assert!(!show_scroll_to_top(200.0));
        assert!(show_scroll_to_top(200.5));
        assert!(show_scroll_to_top(1800.0));
    }

    #[test]
    fn test_nav_hrefs() {
        let hrefs = NAV_LINKS.iter().map(NavLink::href).collect::<Vec<_>>();
        assert_eq!(hrefs, vec!["#about", "#skills", "#projects", "#contact"]);
    }
}
