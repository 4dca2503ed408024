use serde::{Deserialize, Serialize};

use crate::error::{CogexError, Result};

/// Prefix marking a color name that must be looked up in the seaborn palette.
pub const SEABORN_PREFIX: &str = "seaborn_";

/// Named seaborn "deep" palette entries, as RGB fractions.
pub const SEABORN_PALETTE: [(&str, [f64; 3]); 2] = [
    (
        "green",
        [0.3333333333333333, 0.6588235294117647, 0.40784313725490196],
    ),
    (
        "red",
        [0.7686274509803922, 0.3058823529411765, 0.3215686274509804],
    ),
];

/// Color as written in a stimulus definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Rgb([f64; 3]),
    Rgba([u8; 4]),
    Named(String),
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Named(name.to_string())
    }
}

/// Resolves `seaborn_*` names to their RGB triple; other colors pass through.
pub fn resolve_color(color: Color) -> Result<Color> {
    let Color::Named(name) = &color else {
        return Ok(color);
    };
    if !name.starts_with(SEABORN_PREFIX) {
        return Ok(color);
    }
    SEABORN_PALETTE
        .iter()
        .find(|(suffix, _)| name.ends_with(*suffix))
        .map(|(_, rgb)| Color::Rgb(*rgb))
        .ok_or_else(|| CogexError::UnknownColor { name: name.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_seaborn_names() {
        let green = resolve_color("seaborn_green".into()).unwrap();
        assert_eq!(green, Color::Rgb(SEABORN_PALETTE[0].1));
        let red = resolve_color("seaborn_red".into()).unwrap();
        assert_eq!(red, Color::Rgb(SEABORN_PALETTE[1].1));
    }

    #[test]
    fn unknown_seaborn_name_fails() {
        let err = resolve_color("seaborn_purple".into()).unwrap_err();
        assert!(matches!(err, CogexError::UnknownColor { ref name } if name == "seaborn_purple"));
    }

    #[test]
    fn other_colors_pass_through() {
        assert_eq!(resolve_color("white".into()).unwrap(), Color::from("white"));
        let rgba = Color::Rgba([255, 0, 0, 255]);
        assert_eq!(resolve_color(rgba.clone()).unwrap(), rgba);
    }

    #[test]
    fn deserializes_untagged() {
        let parsed: Vec<Color> = serde_json::from_str(r#"["seaborn_red", [0.1, 0.2, 0.3]]"#).unwrap();
        assert_eq!(parsed[0], Color::from("seaborn_red"));
        assert_eq!(parsed[1], Color::Rgb([0.1, 0.2, 0.3]));
    }
}
