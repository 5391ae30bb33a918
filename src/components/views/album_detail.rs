use crate::catalog::{find_album, Album};
use crate::components::audio_manager::{
    create_audio, AlbumPlayer, DefaultAudio, PlaybackSession, SignalSession,
};
use crate::components::views::album_song_row::AlbumSongRow;
use crate::components::{AppView, PlayerBar};
use crate::settings::{save_settings, AppSettings};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

type PagePlayer = Rc<RefCell<AlbumPlayer<DefaultAudio, SignalSession>>>;

#[component]
pub fn AlbumDetailView(slug: String) -> Element {
    match find_album(&slug) {
        Ok(album) => rsx! {
            AlbumPage { key: "{slug}", album: album.clone() }
        },
        Err(err) => {
            tracing::warn!("{err}");
            rsx! {
                AlbumNotFound { slug }
            }
        }
    }
}

#[component]
fn AlbumNotFound(slug: String) -> Element {
    rsx! {
        section { class: "album album-missing",
            h1 { "Album not found" }
            p { "There is no album called \"{slug}\"." }
            Link { class: "back-link", to: AppView::LibraryView {}, "Back to the library" }
        }
    }
}

#[component]
fn AlbumPage(album: Album) -> Element {
    let mut settings = use_context::<Signal<AppSettings>>();
    let session = use_signal(|| PlaybackSession::with_volume(settings.peek().volume));

    let player: PagePlayer = use_hook(|| {
        let store = SignalSession::new(session);
        Rc::new(RefCell::new(AlbumPlayer::new(
            album.clone(),
            create_audio(),
            store,
        )))
    });

    use_effect({
        let player = player.clone();
        move || player.borrow_mut().attach()
    });

    use_drop({
        let player = player.clone();
        move || player.borrow_mut().detach()
    });

    let on_toggle = {
        let player = player.clone();
        move |_| player.borrow_mut().toggle_playback()
    };
    let on_prev = {
        let player = player.clone();
        move |_| player.borrow_mut().handle_prev_click()
    };
    let on_next = {
        let player = player.clone();
        move |_| player.borrow_mut().handle_next_click()
    };
    let on_seek = {
        let player = player.clone();
        move |fraction: f64| player.borrow_mut().handle_time_change(fraction)
    };
    let on_volume = {
        let player = player.clone();
        move |level: f64| {
            player.borrow_mut().handle_volume_change(level);
            settings.with_mut(|s| s.volume = level);
        }
    };
    let on_volume_commit = move |level: f64| {
        settings.with_mut(|s| s.volume = level);
        if let Err(err) = save_settings(&settings.peek()) {
            tracing::warn!("could not save volume: {err}");
        }
    };

    let state = session();
    let current_song = player.borrow().current_song().cloned();

    rsx! {
        section { class: "album",
            section { id: "album-info",
                img {
                    id: "album-cover-art",
                    src: "{album.album_cover}",
                    alt: "{album.title}",
                }
                div { class: "album-details",
                    h1 { id: "album-title", "{album.title}" }
                    h2 { class: "artist", "{album.artist}" }
                    div { id: "release-info", "{album.release_info}" }
                    div { class: "song-count", "{album.song_count_label()}" }
                }
            }
            table { id: "song-list",
                colgroup {
                    col { id: "song-number-column" }
                    col { id: "song-title-column" }
                    col { id: "song-duration-column" }
                }
                tbody {
                    for (index , song) in album.songs.iter().enumerate() {
                        AlbumSongRow {
                            key: "{index}",
                            song: song.clone(),
                            index,
                            is_current: state.is_current(index),
                            is_playing: state.is_playing,
                            onclick: {
                                let player = player.clone();
                                move |_| player.borrow_mut().handle_song_click(index)
                            },
                            on_select: {
                                let player = player.clone();
                                move |_| player.borrow_mut().set_song(index)
                            },
                        }
                    }
                }
            }
            PlayerBar {
                is_playing: state.is_playing,
                current_song,
                progress: state.progress(),
                current_time_formatted: state.current_time_formatted.clone(),
                duration_formatted: state.duration_formatted.clone(),
                volume: state.volume,
                on_toggle,
                on_prev,
                on_next,
                on_seek,
                on_volume,
                on_volume_commit,
            }
        }
    }
}
