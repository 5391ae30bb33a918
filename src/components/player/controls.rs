use crate::components::{Icon, IconName};
use dioxus::prelude::*;

const TRANSPORT_CLASS: &str = "player-button";

#[component]
pub(super) fn PrevButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: TRANSPORT_CLASS,
            r#type: "button",
            aria_label: "Previous song",
            onclick: move |_| onclick.call(()),
            Icon { name: IconName::Prev, class: "icon" }
        }
    }
}

#[component]
pub(super) fn PlayPauseButton(is_playing: bool, onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            id: "play-pause",
            class: "{TRANSPORT_CLASS} player-button-primary",
            r#type: "button",
            aria_label: if is_playing { "Pause" } else { "Play" },
            onclick: move |_| onclick.call(()),
            if is_playing {
                Icon { name: IconName::Pause, class: "icon ion-pause" }
            } else {
                Icon { name: IconName::Play, class: "icon ion-play" }
            }
        }
    }
}

#[component]
pub(super) fn NextButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: TRANSPORT_CLASS,
            r#type: "button",
            aria_label: "Next song",
            onclick: move |_| onclick.call(()),
            Icon { name: IconName::Next, class: "icon" }
        }
    }
}
