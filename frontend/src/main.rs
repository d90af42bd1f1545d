use crate::app::App;

mod app;
mod components;
mod config;
mod helpers;
mod logging;
mod theme;

fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}
