//! Icon keys used by the portfolio data, resolved to glyph classes.
//!
//! The data refers to icons by their Font Awesome names (`faReact`, `faServer`, ...).
//! Every key the site knows about is listed in [`icon_class`]. Keys without a glyph of
//! their own are substituted explicitly, and anything unknown gets [`DEFAULT_ICON`].

/// Glyph used for any key missing from the table.
pub const DEFAULT_ICON: &str = "fa-solid fa-code";

pub fn icon_class(key: &str) -> &'static str {
    match key {
        "faLaptopCode" => "fa-solid fa-laptop-code",
        "faServer" => "fa-solid fa-server",
        "faDatabase" => "fa-solid fa-database",
        "faCode" => "fa-solid fa-code",
        "faProjectDiagram" => "fa-solid fa-diagram-project",
        "faMemory" => "fa-solid fa-memory",
        "faExchangeAlt" => "fa-solid fa-right-left",
        "faArrowRight" => "fa-solid fa-arrow-right",
        "faReact" => "fa-brands fa-react",
        "faVuejs" => "fa-brands fa-vuejs",
        "faNodeJs" => "fa-brands fa-node-js",
        "faPhp" => "fa-brands fa-php",
        "faPython" => "fa-brands fa-python",
        "faJsSquare" => "fa-brands fa-square-js",
        "faHtml5" => "fa-brands fa-html5",
        // no leaf glyph in the icon set, shown as a database
        "faLeaf" => "fa-solid fa-database",
        _ => DEFAULT_ICON,
    }
}

/// Glyph for a social platform key such as `github`.
pub fn platform_icon(platform: &str) -> &'static str {
    match platform {
        "linkedin" => "fa-brands fa-linkedin",
        "github" => "fa-brands fa-github",
        "twitter" => "fa-brands fa-twitter",
        "email" => "fa-solid fa-envelope",
        "phone" => "fa-solid fa-phone",
        _ => "fa-solid fa-link",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::static_portfolio;

    #[test]
    fn test_known_keys() {
        assert_eq!(icon_class("faReact"), "fa-brands fa-react");
        assert_eq!(icon_class("faServer"), "fa-solid fa-server");
    }

    #[test]
    fn test_leaf_substitution() {
        assert_eq!(icon_class("faLeaf"), icon_class("faDatabase"));
    }

    #[test]
    fn test_unknown_key_uses_default() {
        assert_eq!(icon_class("faDoesNotExist"), DEFAULT_ICON);
        assert_eq!(icon_class(""), DEFAULT_ICON);
    }

    #[test]
    fn test_static_data_icons_are_mapped() {
        for group in &static_portfolio().skills {
            assert_ne!(icon_class(&group.icon), DEFAULT_ICON, "{}", group.icon);
            for tech in &group.technologies {
                assert_ne!(icon_class(&tech.icon), DEFAULT_ICON, "{}", tech.icon);
            }
        }
    }

    #[test]
    fn test_platform_icons() {
        assert_eq!(platform_icon("github"), "fa-brands fa-github");
        assert_eq!(platform_icon("mastodon"), "fa-solid fa-link");
    }
}
