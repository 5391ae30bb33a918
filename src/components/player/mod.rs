use crate::catalog::Song;
use crate::components::{Icon, IconName};
use dioxus::prelude::*;

mod controls;

use controls::{NextButton, PlayPauseButton, PrevButton};

/// Read a range input value as a fraction, rejecting anything outside `0..=1`.
fn parse_fraction(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    (0.0..=1.0).contains(&value).then_some(value)
}

/// Transport controls for the album page. Owns no state.
#[component]
pub fn PlayerBar(
    is_playing: bool,
    #[props(!optional)] current_song: Option<Song>,
    progress: f64,
    current_time_formatted: String,
    duration_formatted: String,
    volume: f64,
    on_toggle: EventHandler<()>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_seek: EventHandler<f64>,
    on_volume: EventHandler<f64>,
    on_volume_commit: EventHandler<f64>,
) -> Element {
    let on_seek_input = move |e: Event<FormData>| {
        if let Some(fraction) = parse_fraction(&e.value()) {
            on_seek.call(fraction);
        }
    };

    let on_volume_input = move |e: Event<FormData>| {
        if let Some(level) = parse_fraction(&e.value()) {
            on_volume.call(level);
        }
    };

    // Fires once the slider is released; the input handler above fires on every step.
    let on_volume_change = move |e: Event<FormData>| {
        if let Some(level) = parse_fraction(&e.value()) {
            on_volume_commit.call(level);
        }
    };

    rsx! {
        section { class: "player-bar",
            div { class: "player-now-playing",
                {
                    match &current_song {
                        Some(song) => rsx! {
                            Icon { name: IconName::Music, class: "icon" }
                            span { class: "player-song-title", "{song.title}" }
                        },
                        None => rsx! {
                            span { class: "player-song-title player-idle", "Select a song to start" }
                        },
                    }
                }
            }
            section { id: "buttons",
                PrevButton { onclick: on_prev }
                PlayPauseButton { is_playing, onclick: on_toggle }
                NextButton { onclick: on_next }
            }
            section { id: "time-control",
                span { class: "current-time", "{current_time_formatted}" }
                input {
                    r#type: "range",
                    class: "seek-bar",
                    min: "0",
                    max: "1",
                    step: "0.01",
                    value: progress,
                    oninput: on_seek_input,
                }
                span { class: "total-time", "{duration_formatted}" }
            }
            section { id: "volume-control",
                Icon { name: IconName::Volume, class: "icon" }
                input {
                    r#type: "range",
                    class: "seek-bar",
                    min: "0",
                    max: "1",
                    step: "0.01",
                    value: volume,
                    oninput: on_volume_input,
                    onchange: on_volume_change,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_values_are_read_as_fractions() {
        assert_eq!(parse_fraction("0.5"), Some(0.5));
        assert_eq!(parse_fraction(" 1 "), Some(1.0));
        assert_eq!(parse_fraction("0"), Some(0.0));
    }

    #[test]
    fn out_of_range_or_garbage_values_are_dropped() {
        assert_eq!(parse_fraction("50"), None);
        assert_eq!(parse_fraction("-0.1"), None);
        assert_eq!(parse_fraction("abc"), None);
        assert_eq!(parse_fraction("NaN"), None);
    }
}
