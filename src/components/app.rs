use web_sys::Element;
use yew::prelude::*;

use super::gear_scroll::GearScroll;
use crate::config::GearConfig;
use crate::model::ScrollCommand;
use crate::util::scroll_container_by;

const SECTION_COUNT: usize = 8;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    #[prop_or_default]
    pub config: GearConfig,
}

/// Host page: one scrollable panel driven by the gear.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let panel_ref = use_node_ref();

    let on_scroll = {
        let panel_ref = panel_ref.clone();
        Callback::from(move |command: ScrollCommand| {
            if let Some(panel) = panel_ref.cast::<Element>() {
                scroll_container_by(&panel, &command);
            }
        })
    };

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh;">
            <GearScroll on_scroll={on_scroll} config={props.config.clone()} />
            <div
                ref={panel_ref}
                id="scroll-panel"
                style="position:relative; height:100vh; overflow-y:auto; padding:96px 64px 64px; box-sizing:border-box;"
            >
                { for (1..=SECTION_COUNT).map(|i| html! {
                    <section key={i} style="min-height:60vh; max-width:720px; margin:0 auto 48px; border:1px solid #30363d; border-radius:12px; padding:24px;">
                        <h2>{ format!("Section {i}") }</h2>
                        <p>{ "Drag the gear clockwise to scroll down, counter-clockwise to scroll up." }</p>
                    </section>
                }) }
            </div>
        </div>
    }
}
