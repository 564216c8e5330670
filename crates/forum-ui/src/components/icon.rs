//! Decorative font glyph rendered by the button.

use yew::prelude::*;

use crate::core::icon::{IconStyle, icon_class_names};

/// Props for a decorative font glyph.
#[derive(Properties, PartialEq)]
pub struct IconProps {
    /// Glyph identifier without the `fa-` prefix (e.g. `"trash"`).
    pub icon: AttrValue,
    /// Render the filled glyph instead of the outlined one.
    #[prop_or_default]
    pub solid: bool,
    /// Reserve a fixed width so glyphs line up in lists and buttons.
    #[prop_or_default]
    pub fixed_width: bool,
}

/// Font glyph hidden from assistive technology.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let names = icon_class_names(&props.icon, IconStyle::from_solid(props.solid), props.fixed_width);
    html! {
        <i class={classes!(names)} aria-hidden="true"></i>
    }
}
