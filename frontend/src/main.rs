use crate::app::App;

mod api;
mod app;
mod components;
mod exporter;
mod helpers;
mod session;
mod tops_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
