//! Theme names and their color tokens.
//!
//! The token table is a process-wide constant. Every theme carries all eight
//! tokens; there are no partial themes and no fallback for unknown names.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

// ── Theme name ─────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    pub const ALL: [ThemeName; 2] = [ThemeName::Dark, ThemeName::Light];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Dark => "dark",
            ThemeName::Light => "light",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Dark => ThemeName::Light,
            ThemeName::Light => ThemeName::Dark,
        }
    }

    /// Token set for this theme. Total over the enum.
    pub fn tokens(self) -> &'static ThemeTokens {
        match self {
            ThemeName::Dark => &DARK,
            ThemeName::Light => &LIGHT,
        }
    }

    /// Glyph shown on the toggle button: the theme you would switch to.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            ThemeName::Dark => "\u{2600}\u{fe0f}",
            ThemeName::Light => "\u{1f319}",
        }
    }
}

impl FromStr for ThemeName {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemeName::Dark),
            "light" => Ok(ThemeName::Light),
            other => Err(FolioError::InvalidThemeName(other.to_string())),
        }
    }
}

impl Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Tokens ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    pub bg: &'static str,
    pub bg_alt: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub text_alt: &'static str,
    pub accent: &'static str,
    pub accent_alt: &'static str,
    pub border: &'static str,
}

pub const DARK: ThemeTokens = ThemeTokens {
    bg: "#0a0e27",
    bg_alt: "#151a35",
    card: "#1a1f3a",
    text: "#e0e6ff",
    text_alt: "#8892b0",
    accent: "#00ffcc",
    accent_alt: "#7c3aed",
    border: "#2d3561",
};

pub const LIGHT: ThemeTokens = ThemeTokens {
    bg: "#f8fafc",
    bg_alt: "#e2e8f0",
    card: "#ffffff",
    text: "#0f172a",
    text_alt: "#475569",
    accent: "#6366f1",
    accent_alt: "#ec4899",
    border: "#cbd5e1",
};

impl ThemeTokens {
    /// `(key, color)` pairs in declaration order, keyed by the public token names.
    pub fn entries(&self) -> [(&'static str, &'static str); 8] {
        [
            ("bg", self.bg),
            ("bgAlt", self.bg_alt),
            ("card", self.card),
            ("text", self.text),
            ("textAlt", self.text_alt),
            ("accent", self.accent),
            ("accentAlt", self.accent_alt),
            ("border", self.border),
        ]
    }
}

/// Resolve a theme name string to its token set.
pub fn resolve(name: &str) -> Result<&'static ThemeTokens, FolioError> {
    name.parse::<ThemeName>().map(ThemeName::tokens)
}

/// Build the `:root` custom properties the stylesheet reads its colors from.
/// Translucent accent variants are emitted as 8-digit hex so they follow the theme too.
pub fn build_css_variables(tokens: &ThemeTokens) -> String {
    let mut css = String::from(":root {\n");
    for (key, color) in tokens.entries() {
        css.push_str(&format!("    --{}: {};\n", css_var_name(key), color));
    }
    for alpha in ["20", "30", "40", "60"] {
        css.push_str(&format!("    --accent-{alpha}: {}{alpha};\n", tokens.accent));
    }
    css.push_str(&format!("    --card-ee: {}ee;\n", tokens.card));
    css.push('}');
    css
}

/// `bgAlt` → `bg-alt`
fn css_var_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 2);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_has_eight_non_empty_tokens() {
        for theme in ThemeName::ALL {
            let entries = theme.tokens().entries();
            let keys: Vec<&str> = entries.iter().map(|(k, _)| *k).collect();
            assert_eq!(
                keys,
                ["bg", "bgAlt", "card", "text", "textAlt", "accent", "accentAlt", "border"]
            );
            for (key, color) in entries {
                assert!(color.starts_with('#') && color.len() == 7, "{theme} {key} = {color}");
            }
        }
    }

    #[test]
    fn test_resolve_known_names() {
        assert_eq!(resolve("dark").unwrap(), &DARK);
        assert_eq!(resolve("light").unwrap(), &LIGHT);
    }

    #[test]
    fn test_resolve_unknown_name_is_error() {
        match resolve("sepia") {
            Err(FolioError::InvalidThemeName(name)) => assert_eq!(name, "sepia"),
            other => panic!("expected InvalidThemeName, got {:?}", other),
        }
        assert!(resolve("Dark").is_err());
        assert!(resolve("").is_err());
    }

    #[test]
    fn test_toggle_is_an_involution() {
        for theme in ThemeName::ALL {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_css_variables_follow_tokens() {
        let css = build_css_variables(&DARK);
        assert!(css.contains("--bg-alt: #151a35;"));
        assert!(css.contains("--accent-alt: #7c3aed;"));
        assert!(css.contains("--accent-20: #00ffcc20;"));
        assert!(css.contains("--card-ee: #1a1f3aee;"));
        assert!(!css.contains("#f8fafc"));
    }

    #[test]
    fn test_name_round_trips_through_display() {
        for theme in ThemeName::ALL {
            assert_eq!(theme.to_string().parse::<ThemeName>().unwrap(), theme);
        }
    }
}
