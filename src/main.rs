use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod catalog;
mod components;
mod settings;
mod utils;

use components::AppView;
use settings::load_settings_or_default;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to initialize logging: {err}");
    }
    tracing::info!(albums = catalog::albums().len(), "starting album player");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let settings = use_signal(load_settings_or_default);
    use_context_provider(|| settings);

    rsx! {
        document::Meta { name: "theme-color", content: "#1f1b33" }
        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
