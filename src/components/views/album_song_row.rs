use crate::catalog::Song;
use crate::components::{Icon, IconName};
use crate::utils::format_time;
use dioxus::prelude::*;

/// One track-list row. Clicking the row toggles playback, the number button
/// only loads the song.
#[component]
pub fn AlbumSongRow(
    song: Song,
    index: usize,
    is_current: bool,
    is_playing: bool,
    onclick: EventHandler<MouseEvent>,
    on_select: EventHandler<MouseEvent>,
) -> Element {
    let show_pause = is_current && is_playing;

    rsx! {
        tr {
            class: if is_current { "song song-current" } else { "song" },
            onclick: move |e| onclick.call(e),
            td { class: "song-actions",
                button {
                    r#type: "button",
                    aria_label: "Load {song.title}",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_select.call(evt);
                    },
                    span { class: "song-number", "{index + 1}" }
                    if show_pause {
                        span { class: "ion-pause",
                            Icon { name: IconName::Pause, class: "icon" }
                        }
                    } else {
                        span { class: "ion-play",
                            Icon { name: IconName::Play, class: "icon" }
                        }
                    }
                }
            }
            td { class: "song-title", "{song.title}" }
            td { class: "song-duration", "{format_time(song.duration)}" }
        }
    }
}
