//! Class and attribute derivation for the action button.

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base class carried by every button.
pub const BASE_CLASS: &str = "btn";
/// Class requesting full-width layout.
pub const BLOCK_CLASS: &str = "btn-block";

/// Semantic role selecting the button's colour treatment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Main call to action.
    #[default]
    Primary,
    /// Secondary action.
    Secondary,
    /// Positive or confirming action.
    Success,
    /// Destructive action.
    Danger,
    /// Action that needs attention.
    Warning,
    /// Informational action.
    Info,
    /// Light surface treatment.
    Light,
    /// Dark surface treatment.
    Dark,
    /// Renders like a hyperlink.
    Link,
}

impl ButtonVariant {
    /// Every variant in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::Primary,
            Self::Secondary,
            Self::Success,
            Self::Danger,
            Self::Warning,
            Self::Info,
            Self::Light,
            Self::Dark,
            Self::Link,
        ]
    }

    /// Returns the lowercase token used in class names (e.g. `"danger"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Link => "link",
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`ButtonVariant`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown button variant `{value}`")]
pub struct ParseVariantError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for ButtonVariant {
    type Err = ParseVariantError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = raw.trim();
        Self::all()
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ParseVariantError {
                value: raw.to_string(),
            })
    }
}

/// Display options that drive the button's class list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonStyle {
    /// Semantic role.
    pub variant: ButtonVariant,
    /// Border-only treatment of the variant.
    pub outline: bool,
    /// Full-width layout.
    pub block: bool,
}

impl ButtonStyle {
    /// Variant class for the current outline mode (`btn-danger` or `btn-outline-danger`).
    #[must_use]
    pub fn variant_class(self) -> String {
        if self.outline {
            format!("{BASE_CLASS}-outline-{}", self.variant.as_str())
        } else {
            format!("{BASE_CLASS}-{}", self.variant.as_str())
        }
    }

    /// Class names in render order: base, variant, then block when requested.
    #[must_use]
    pub fn class_names(self) -> Vec<Cow<'static, str>> {
        [
            Some(Cow::Borrowed(BASE_CLASS)),
            Some(Cow::Owned(self.variant_class())),
            self.block.then_some(Cow::Borrowed(BLOCK_CLASS)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Native `type` of the rendered `<button>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonType {
    /// Submits the enclosing form.
    Submit,
    /// Plain activation trigger.
    Button,
}

impl ButtonType {
    /// A button with an activation handler must not submit its form.
    #[must_use]
    pub const fn for_handler(has_handler: bool) -> Self {
        if has_handler { Self::Button } else { Self::Submit }
    }

    /// Attribute value for the native `type` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Button => "button",
        }
    }
}

/// Returns the value only when it is present and non-empty.
#[must_use]
pub fn visible_content<T: Deref<Target = str>>(value: Option<T>) -> Option<T> {
    value.filter(|inner| !inner.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_solid_primary() {
        assert_eq!(ButtonStyle::default().class_names(), ["btn", "btn-primary"]);
    }

    #[test]
    fn outline_swaps_variant_class() {
        for variant in ButtonVariant::all() {
            let solid = ButtonStyle {
                variant,
                ..ButtonStyle::default()
            }
            .class_names();
            let outline = ButtonStyle {
                variant,
                outline: true,
                block: false,
            }
            .class_names();

            let plain = format!("btn-{variant}");
            let outlined = format!("btn-outline-{variant}");
            assert!(solid.iter().any(|name| *name == plain));
            assert!(!solid.iter().any(|name| *name == outlined));
            assert!(outline.iter().any(|name| *name == outlined));
            assert!(!outline.iter().any(|name| *name == plain));
        }
    }

    #[test]
    fn block_class_tracks_flag() {
        let mut style = ButtonStyle::default();
        assert!(!style.class_names().iter().any(|name| *name == BLOCK_CLASS));
        style.block = true;
        assert!(style.class_names().iter().any(|name| *name == BLOCK_CLASS));
    }

    #[test]
    fn danger_outline_block_classes() {
        let style = ButtonStyle {
            variant: ButtonVariant::Danger,
            outline: true,
            block: true,
        };
        assert_eq!(
            style.class_names(),
            ["btn", "btn-outline-danger", "btn-block"]
        );
    }

    #[test]
    fn handler_selects_plain_button() {
        assert_eq!(ButtonType::for_handler(true), ButtonType::Button);
        assert_eq!(ButtonType::for_handler(false), ButtonType::Submit);
        assert_eq!(ButtonType::Button.as_str(), "button");
        assert_eq!(ButtonType::Submit.as_str(), "submit");
    }

    #[test]
    fn empty_content_is_hidden() {
        assert_eq!(visible_content(None::<&str>), None);
        assert_eq!(visible_content(Some("")), None);
        assert_eq!(visible_content(Some("Delete")), Some("Delete"));
    }

    #[test]
    fn variant_parses_case_insensitively() {
        assert_eq!("danger".parse::<ButtonVariant>(), Ok(ButtonVariant::Danger));
        assert_eq!(" Warning ".parse::<ButtonVariant>(), Ok(ButtonVariant::Warning));
        for variant in ButtonVariant::all() {
            assert_eq!(variant.as_str().parse::<ButtonVariant>(), Ok(variant));
        }
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let err = "fancy".parse::<ButtonVariant>().unwrap_err();
        assert_eq!(err.value, "fancy");
        assert_eq!(err.to_string(), "unknown button variant `fancy`");
    }

    #[test]
    fn variant_serde_uses_lowercase_tokens() {
        let parsed: ButtonVariant = serde_json::from_str("\"secondary\"").unwrap();
        assert_eq!(parsed, ButtonVariant::Secondary);
        assert_eq!(
            serde_json::to_string(&ButtonVariant::Link).unwrap(),
            "\"link\""
        );
        assert!(serde_json::from_str::<ButtonVariant>("\"Primary\"").is_err());
    }
}
