use gloo::console;
use yew::prelude::*;

use crate::components::Button;
use crate::core::ButtonVariant;

fn log_activation(label: &'static str) -> Callback<()> {
    Callback::from(move |()| console::log!("button activated", label))
}

#[function_component(GalleryApp)]
fn gallery_app() -> Html {
    let onsubmit = Callback::from(|event: SubmitEvent| {
        event.prevent_default();
        console::log!("gallery form submitted");
    });

    html! {
        <main class="container py-4">
            <section class="mb-4">
                <h2>{"Variants"}</h2>
                {for ButtonVariant::all().into_iter().map(|variant| html! {
                    <Button
                        variant={variant}
                        text={AttrValue::from(variant.as_str())}
                        on_activate={log_activation(variant.as_str())}
                    />
                })}
            </section>
            <section class="mb-4">
                <h2>{"Outline"}</h2>
                {for ButtonVariant::all().into_iter().map(|variant| html! {
                    <Button
                        variant={variant}
                        outline={true}
                        text={AttrValue::from(variant.as_str())}
                        on_activate={log_activation(variant.as_str())}
                    />
                })}
            </section>
            <section class="mb-4">
                <h2>{"Layout and state"}</h2>
                <Button block={true} icon="check" icon_solid={true} text="Block" on_activate={log_activation("block")} />
                <Button disabled={true} text="Disabled" on_activate={log_activation("disabled")} />
                <Button variant={ButtonVariant::Secondary} icon="bell" on_activate={log_activation("icon-only")} />
            </section>
            <section class="mb-4">
                <h2>{"Form submission"}</h2>
                <form onsubmit={onsubmit}>
                    <Button variant={ButtonVariant::Danger} outline={true} icon="trash-alt" text="Delete" />
                </form>
            </section>
        </main>
    }
}

/// Mounts the button gallery into the document body.
pub fn run_app() {
    console_error_panic_hook::set_once();
    console::info!("forum-ui gallery starting");
    yew::Renderer::<GalleryApp>::new().render();
}
