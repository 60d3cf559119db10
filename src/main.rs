mod components;
mod config;
mod geometry;
mod input;
mod model;
mod state;
mod util;

use components::app::{App, AppProps};
use config::GearConfig;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    let config = GearConfig::load();
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
