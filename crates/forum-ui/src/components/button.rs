//! Styled action button with an optional glyph and label.

use yew::prelude::*;

use super::icon::Icon;
use crate::core::button::{ButtonStyle, ButtonType, ButtonVariant, visible_content};

/// Props for the action button.
#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    /// Semantic colour treatment.
    #[prop_or_default]
    pub variant: ButtonVariant,
    /// Border-only treatment of the variant.
    #[prop_or_default]
    pub outline: bool,
    /// Stretch to the full width of the container.
    #[prop_or_default]
    pub block: bool,
    /// Passed verbatim to the native `disabled` attribute.
    #[prop_or_default]
    pub disabled: bool,
    /// Optional glyph shown before the label.
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    /// Render the glyph filled. Ignored without `icon`.
    #[prop_or_default]
    pub icon_solid: bool,
    /// Optional label, rendered as plain text inside a `<span>`. Markup is not accepted.
    #[prop_or_default]
    pub text: Option<AttrValue>,
    /// Activation handler. Without one the button submits its form.
    #[prop_or_default]
    pub on_activate: Option<Callback<()>>,
}

impl ButtonProps {
    /// Display subset of the props.
    #[must_use]
    pub const fn style(&self) -> ButtonStyle {
        ButtonStyle {
            variant: self.variant,
            outline: self.outline,
            block: self.block,
        }
    }
}

/// Adapts an activation handler to a native event listener, discarding the event.
fn forward_activation<E: 'static>(handler: Callback<()>) -> Callback<E> {
    Callback::from(move |_: E| handler.emit(()))
}

/// Styled action button with an optional icon and label.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let classes = classes!(props.style().class_names());
    let kind = ButtonType::for_handler(props.on_activate.is_some());
    let onclick = props
        .on_activate
        .clone()
        .map(forward_activation::<MouseEvent>);
    let icon = visible_content(props.icon.clone());
    let text = visible_content(props.text.clone());

    html! {
        <button
            class={classes}
            type={kind.as_str()}
            disabled={props.disabled}
            onclick={onclick}
        >
            {icon.map(|glyph| html! {
                <Icon icon={glyph} solid={props.icon_solid} fixed_width={true} />
            }).unwrap_or_default()}
            {text.map(|label| html! { <span>{label.to_string()}</span> }).unwrap_or_default()}
        </button>
    }
}
