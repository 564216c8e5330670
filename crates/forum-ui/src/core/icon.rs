//! Class derivation for font glyph icons.

use std::borrow::Cow;

/// Glyph weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconStyle {
    /// Outlined glyph.
    #[default]
    Regular,
    /// Filled glyph.
    Solid,
}

impl IconStyle {
    /// Maps the boolean `solid` modifier onto a style.
    #[must_use]
    pub const fn from_solid(solid: bool) -> Self {
        if solid { Self::Solid } else { Self::Regular }
    }

    /// Style class prefix expected by the icon font.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Regular => "far",
            Self::Solid => "fas",
        }
    }
}

/// Class names for a glyph: style, glyph, then `fa-fw` for fixed width.
#[must_use]
pub fn icon_class_names(glyph: &str, style: IconStyle, fixed_width: bool) -> Vec<Cow<'static, str>> {
    [
        Some(Cow::Borrowed(style.class_name())),
        Some(Cow::Owned(format!("fa-{glyph}"))),
        fixed_width.then_some(Cow::Borrowed("fa-fw")),
    ]
    .into_iter()
    .flatten()
    .collect()
}
