//! Font settings handed to whatever renders a colormap.
//!
//! Nothing here is global: a [`Style`] is passed explicitly to the
//! rendering code that needs it.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Font settings for figures and colorbars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Base font size, in points.
    pub font_size: f32,
    /// Font size of the colorbar label.
    pub label_size: f32,
    /// Font size of the colorbar tick labels.
    pub tick_label_size: f32,
    /// Sans-serif families, by order of preference.
    pub sans_serif: Vec<String>,
    /// Fonts of mathematical text.
    pub mathtext: Mathtext,
}

/// Fonts used for mathematical text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mathtext {
    /// Font set; `custom` uses the fonts below.
    pub fontset: String,
    /// Font for `\mathcal`.
    pub cal: String,
    /// Font for `\mathrm`.
    pub rm: String,
    /// Font for `\mathtt`.
    pub tt: String,
    /// Font for `\mathit`.
    pub it: String,
    /// Font for `\mathbf`.
    pub bf: String,
    /// Font for `\mathsf`.
    pub sf: String,
    /// Fall back to Computer Modern for missing glyphs.
    pub fallback_to_cm: bool,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            font_size: 26.,
            label_size: 20.,
            tick_label_size: 18.,
            sans_serif: ["Arev Sans", "Bitstream Vera Sans", "Lucida Grande",
                         "Verdana", "Geneva", "Lucid", "Helvetica",
                         "Avant Garde", "sans-serif"]
                .iter().map(|s| s.to_string()).collect(),
            mathtext: Mathtext::default(),
        }
    }
}

impl Default for Mathtext {
    fn default() -> Self {
        Mathtext {
            fontset: "custom".into(),
            cal: "cursive".into(),
            rm: "sans".into(),
            tt: "monospace".into(),
            it: "sans:italic".into(),
            bf: "sans:bold".into(),
            sf: "sans".into(),
            fallback_to_cm: true,
        }
    }
}

impl Style {
    /// Parse a style from JSON.  Missing fields take their default
    /// value.
    pub fn from_json(json: &str) -> Result<Self> {
        let style: Style = serde_json::from_str(json)?;
        style.validate()?;
        Ok(style)
    }

    fn validate(&self) -> Result<()> {
        for (param, size) in [("font_size", self.font_size),
                              ("label_size", self.label_size),
                              ("tick_label_size", self.tick_label_size)] {
            if !(size.is_finite() && size > 0.) {
                return Err(Error::param(param, format!(
                    "font size must be positive, got {size}")));
            }
        }
        Ok(())
    }

    /// CSS `font-family` value.
    pub fn font_family(&self) -> String {
        self.sans_serif.iter().map(|f| {
            if f.contains(' ') { format!("'{f}'") } else { f.clone() }
        }).collect::<Vec<_>>().join(", ")
    }

    /// CSS declarations for text of the given size.
    pub fn css(&self, size: f32) -> String {
        format!("font-family: {}; font-size: {size}px", self.font_family())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Style::default();
        assert_eq!(s.font_size, 26.);
        assert_eq!(s.sans_serif.first().map(String::as_str), Some("Arev Sans"));
        assert_eq!(s.mathtext.fontset, "custom");
        assert!(s.mathtext.fallback_to_cm);
    }

    #[test]
    fn partial_json() {
        let s = Style::from_json(r#"{"font_size": 12, "mathtext": {"rm": "serif"}}"#)
            .unwrap();
        assert_eq!(s.font_size, 12.);
        assert_eq!(s.label_size, 20.);
        assert_eq!(s.mathtext.rm, "serif");
        assert_eq!(s.mathtext.tt, "monospace");
        let back = Style::from_json(&serde_json::to_string(&s).unwrap())
            .unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(Style::from_json("{"), Err(Error::Json(_))));
        assert!(matches!(Style::from_json(r#"{"tick_label_size": 0}"#),
                         Err(Error::InvalidParameter { .. })));
    }

    #[test]
    fn css() {
        let s = Style { sans_serif: vec!["Arev Sans".into(), "sans-serif".into()],
                        ..Style::default() };
        assert_eq!(s.css(18.), "font-family: 'Arev Sans', sans-serif; font-size: 18px");
    }
}
