//! Colour tokens from the data (`"blue"`, `"green"`, ...) resolved to full class
//! strings. Tailwind only generates classes it finds spelled out in the sources,
//! so none of these are assembled at runtime.

/// Classes for one accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    /// Background of the rounded icon tile.
    pub tile: &'static str,
    /// Glyph inside the tile.
    pub icon: &'static str,
    /// Lighter glyph next to a skill name.
    pub accent: &'static str,
}

const BLUE: Tint = Tint {
    tile: "bg-blue-100 dark:bg-blue-900",
    icon: "text-blue-600",
    accent: "text-blue-500",
};

pub fn tint(token: &str) -> Tint {
    match token {
        "green" => Tint {
            tile: "bg-green-100 dark:bg-green-900",
            icon: "text-green-600",
            accent: "text-green-500",
        },
        "purple" => Tint {
            tile: "bg-purple-100 dark:bg-purple-900",
            icon: "text-purple-600",
            accent: "text-purple-500",
        },
        "orange" => Tint {
            tile: "bg-orange-100 dark:bg-orange-900",
            icon: "text-orange-600",
            accent: "text-orange-500",
        },
        "red" => Tint {
            tile: "bg-red-100 dark:bg-red-900",
            icon: "text-red-600",
            accent: "text-red-500",
        },
        _ => BLUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::static_portfolio;

    #[test]
    fn test_known_tokens() {
        assert_eq!(tint("blue"), BLUE);
        assert_eq!(tint("green").tile, "bg-green-100 dark:bg-green-900");
        assert_eq!(tint("purple").icon, "text-purple-600");
        assert_eq!(tint("orange").accent, "text-orange-500");
    }

    #[test]
    fn test_unknown_token_is_blue() {
        assert_eq!(tint("chartreuse"), BLUE);
        assert_eq!(tint(""), BLUE);
    }

    #[test]
    fn test_bundled_colors_have_their_own_tint() {
        for group in &static_portfolio().skills {
            let expected = format!("text-{}-600", group.color);
            assert_eq!(tint(&group.color).icon, expected, "{}", group.category);
        }
    }
}
