mod components;
mod model;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
