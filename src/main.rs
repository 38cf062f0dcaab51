use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod diagnostics;

use components::PlayerPanel;

const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Output Deck" }
        document::Meta { name: "theme-color", content: "#a38449" }
        document::Stylesheet { href: PLAYER_CSS }

        PlayerPanel {}
    }
}
