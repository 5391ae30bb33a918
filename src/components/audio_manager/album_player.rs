use super::{MediaEvent, PlaybackResource, SessionStore, SubscriptionId};
use crate::catalog::{Album, Song};

/// Transport controller for one album page.
///
/// Owns the media resource exclusively; every state change goes through the
/// session store so the page can render from a single value.
pub struct AlbumPlayer<R: PlaybackResource, S: SessionStore> {
    album: Album,
    audio: R,
    session: S,
    subscriptions: Vec<SubscriptionId>,
}

impl<R: PlaybackResource, S: SessionStore> AlbumPlayer<R, S> {
    pub fn new(album: Album, mut audio: R, session: S) -> Self {
        let volume = session.snapshot().volume;
        audio.set_volume(volume);
        Self {
            album,
            audio,
            session,
            subscriptions: Vec::new(),
        }
    }

    pub fn current_song(&self) -> Option<&Song> {
        self.session
            .snapshot()
            .current_song
            .and_then(|index| self.album.songs.get(index))
    }

    #[cfg(test)]
    pub fn audio(&self) -> &R {
        &self.audio
    }

    #[cfg(test)]
    pub fn audio_mut(&mut self) -> &mut R {
        &mut self.audio
    }

    pub fn is_attached(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Start mirroring position and duration notifications into the session.
    pub fn attach(&mut self) {
        if self.is_attached() {
            return;
        }
        let session = self.session.clone();
        let on_time = self.audio.subscribe(
            MediaEvent::TimeUpdate,
            Box::new(move |seconds| session.update(|s| s.set_current_time(seconds))),
        );
        let session = self.session.clone();
        let on_duration = self.audio.subscribe(
            MediaEvent::DurationChange,
            Box::new(move |seconds| session.update(|s| s.set_duration(seconds))),
        );
        self.subscriptions = vec![on_time, on_duration];
        tracing::debug!(album = %self.album.slug, "album player attached");
    }

    /// Release the media source and every listener. Safe to call repeatedly.
    pub fn detach(&mut self) {
        // The source goes even if attach never ran, so nothing keeps playing.
        self.audio.clear_source();
        if !self.is_attached() {
            return;
        }
        for id in self.subscriptions.drain(..) {
            self.audio.unsubscribe(id);
        }
        tracing::debug!(album = %self.album.slug, "album player detached");
    }

    pub fn play(&mut self) {
        self.audio.play();
        self.session.update(|s| s.is_playing = true);
    }

    pub fn pause(&mut self) {
        self.audio.pause();
        self.session.update(|s| s.is_playing = false);
    }

    /// Load a song without changing whether we are playing.
    pub fn set_song(&mut self, index: usize) {
        let Some(song) = self.album.songs.get(index) else {
            tracing::warn!(index, album = %self.album.slug, "ignoring unknown song index");
            return;
        };
        tracing::info!(title = %song.title, "loading song");
        self.audio.set_source(&song.audio_src);
        self.session.update(|s| s.current_song = Some(index));
    }

    /// Row click: pause the song that is playing, otherwise play the clicked song.
    pub fn handle_song_click(&mut self, index: usize) {
        let session = self.session.snapshot();
        let is_same_song = session.is_current(index);
        if session.is_playing && is_same_song {
            self.pause();
            return;
        }
        if !is_same_song {
            self.set_song(index);
        }
        self.play();
    }

    /// Play/pause for the current song, starting the album when nothing is loaded.
    pub fn toggle_playback(&mut self) {
        match self.session.snapshot().current_song {
            Some(index) => self.handle_song_click(index),
            None if !self.album.songs.is_empty() => self.handle_song_click(0),
            None => {}
        }
    }

    pub fn handle_prev_click(&mut self) {
        self.step(-1);
    }

    pub fn handle_next_click(&mut self) {
        self.step(1);
    }

    fn step(&mut self, offset: isize) {
        let Some(last) = self.album.songs.len().checked_sub(1) else {
            return;
        };
        // No current song behaves like a position just before the first track
        let current = self
            .session
            .snapshot()
            .current_song
            .map(|index| index as isize)
            .unwrap_or(-1);
        let target = (current + offset).clamp(0, last as isize) as usize;
        self.set_song(target);
        self.play();
    }

    /// Seek to a fraction of the media duration, mirroring the position right away.
    pub fn handle_time_change(&mut self, fraction: f64) {
        let seconds = self.audio.duration() * fraction;
        if !seconds.is_finite() {
            tracing::debug!(fraction, "duration unknown, ignoring seek");
            return;
        }
        self.audio.seek(seconds);
        self.session.update(|s| s.set_current_time(seconds));
    }

    pub fn handle_volume_change(&mut self, level: f64) {
        self.audio.set_volume(level);
        self.session.update(|s| s.volume = level);
    }
}

impl<R: PlaybackResource, S: SessionStore> Drop for AlbumPlayer<R, S> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::audio_manager::{HeadlessAudio, PlaybackSession};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Store = Rc<RefCell<PlaybackSession>>;

    fn song(title: &str) -> Song {
        Song {
            title: title.to_string(),
            duration: Some(180.0),
            audio_src: format!("/sounds/{}.mp3", title.to_lowercase()),
        }
    }

    fn album() -> Album {
        Album {
            slug: "letters".to_string(),
            title: "Letters".to_string(),
            artist: "Alphabet".to_string(),
            release_info: "2020".to_string(),
            album_cover: "/cover.png".to_string(),
            songs: vec![song("A"), song("B"), song("C")],
        }
    }

    fn player() -> (AlbumPlayer<HeadlessAudio, Store>, Store) {
        let store: Store = Rc::new(RefCell::new(PlaybackSession::default()));
        let mut player = AlbumPlayer::new(album(), HeadlessAudio::new(), store.clone());
        player.attach();
        (player, store)
    }

    #[test]
    fn construction_applies_session_volume() {
        let (player, _) = player();
        assert_eq!(player.audio().volume(), 0.5);
        assert_eq!(player.audio().src(), None);
    }

    #[test]
    fn play_and_pause_track_state() {
        let (mut player, store) = player();
        player.set_song(0);
        player.play();
        assert!(store.snapshot().is_playing);
        assert!(!player.audio().paused());

        player.pause();
        assert!(!store.snapshot().is_playing);
        assert!(player.audio().paused());
    }

    #[test]
    fn set_song_keeps_playing_flag() {
        let (mut player, store) = player();
        player.set_song(1);
        assert_eq!(store.snapshot().current_song, Some(1));
        assert_eq!(player.audio().src(), Some("/sounds/b.mp3"));
        assert!(!store.snapshot().is_playing);

        player.play();
        player.set_song(2);
        assert!(store.snapshot().is_playing);
        assert_eq!(player.current_song().map(|s| s.title.as_str()), Some("C"));
    }

    #[test]
    fn set_song_ignores_unknown_index() {
        let (mut player, store) = player();
        player.set_song(7);
        assert_eq!(store.snapshot().current_song, None);
        assert_eq!(player.audio().src(), None);
    }

    #[test]
    fn song_click_pauses_only_the_playing_song() {
        let (mut player, store) = player();
        player.set_song(0);
        player.play();

        player.handle_song_click(0);
        assert!(!store.snapshot().is_playing);

        player.handle_song_click(0);
        assert!(store.snapshot().is_playing);
    }

    #[test]
    fn song_click_on_other_song_selects_and_plays_it() {
        let (mut player, store) = player();
        player.set_song(0);
        player.play();

        player.handle_song_click(2);
        let session = store.snapshot();
        assert!(session.is_playing);
        assert_eq!(session.current_song, Some(2));
        assert_eq!(player.audio().src(), Some("/sounds/c.mp3"));

        player.pause();
        player.handle_song_click(1);
        assert!(store.snapshot().is_playing);
        assert_eq!(store.snapshot().current_song, Some(1));
    }

    #[test]
    fn prev_at_first_song_replays_it() {
        let (mut player, store) = player();
        player.set_song(0);
        player.handle_prev_click();
        assert_eq!(store.snapshot().current_song, Some(0));
        assert!(store.snapshot().is_playing);
    }

    #[test]
    fn next_moves_forward_and_clamps_at_last_song() {
        let (mut player, store) = player();
        player.set_song(0);
        player.handle_next_click();
        assert_eq!(store.snapshot().current_song, Some(1));
        assert!(store.snapshot().is_playing);

        player.set_song(2);
        player.handle_next_click();
        assert_eq!(store.snapshot().current_song, Some(2));
        assert_eq!(player.audio().src(), Some("/sounds/c.mp3"));
    }

    #[test]
    fn navigation_without_current_song_starts_at_first() {
        let (mut player, store) = player();
        player.handle_next_click();
        assert_eq!(store.snapshot().current_song, Some(0));

        let (mut player, store) = self::player();
        player.handle_prev_click();
        assert_eq!(store.snapshot().current_song, Some(0));
    }

    #[test]
    fn navigation_on_empty_album_is_a_no_op() {
        let store: Store = Rc::new(RefCell::new(PlaybackSession::default()));
        let empty = Album {
            songs: Vec::new(),
            ..album()
        };
        let mut player = AlbumPlayer::new(empty, HeadlessAudio::new(), store.clone());
        player.handle_next_click();
        player.handle_prev_click();
        player.toggle_playback();
        assert_eq!(store.snapshot(), PlaybackSession::default());
    }

    #[test]
    fn toggle_playback_starts_first_song_then_pauses() {
        let (mut player, store) = player();
        player.toggle_playback();
        assert_eq!(store.snapshot().current_song, Some(0));
        assert!(store.snapshot().is_playing);

        player.toggle_playback();
        assert!(!store.snapshot().is_playing);
    }

    #[test]
    fn time_change_updates_position_immediately() {
        let (mut player, store) = player();
        player.set_song(0);
        player.audio_mut().load_metadata(200.0);

        player.handle_time_change(0.5);
        assert_eq!(player.audio().current_time(), 100.0);
        // Seeking reports nothing back, so the position comes from the command itself
        assert_eq!(store.snapshot().current_time, 100.0);
        assert_eq!(store.snapshot().current_time_formatted, "1:40");
    }

    #[test]
    fn later_position_report_overrides_optimistic_seek() {
        let (mut player, store) = player();
        player.set_song(0);
        player.play();
        player.audio_mut().load_metadata(200.0);

        player.handle_time_change(0.5);
        player.audio_mut().advance(2.0);
        assert_eq!(store.snapshot().current_time, 102.0);
    }

    #[test]
    fn detach_without_attach_still_releases_the_source() {
        let store: Store = Rc::new(RefCell::new(PlaybackSession::default()));
        let mut player = AlbumPlayer::new(album(), HeadlessAudio::new(), store);
        player.set_song(0);
        player.play();

        player.detach();
        assert_eq!(player.audio().src(), None);
        assert!(player.audio().paused());
    }

    #[test]
    fn time_change_without_duration_is_ignored() {
        let (mut player, store) = player();
        player.set_song(0);
        player.handle_time_change(0.5);
        assert_eq!(store.snapshot().current_time, 0.0);
    }

    #[test]
    fn volume_change_is_mirrored() {
        let (mut player, store) = player();
        player.handle_volume_change(0.8);
        assert_eq!(store.snapshot().volume, 0.8);
        assert_eq!(player.audio().volume(), 0.8);
    }

    #[test]
    fn notifications_update_session() {
        let (mut player, store) = player();
        player.set_song(0);
        player.play();
        player.audio_mut().load_metadata(125.0);
        player.audio_mut().advance(61.0);

        let session = store.snapshot();
        assert_eq!(session.duration, 125.0);
        assert_eq!(session.duration_formatted, "2:05");
        assert_eq!(session.current_time, 61.0);
        assert_eq!(session.current_time_formatted, "1:01");
    }

    #[test]
    fn attach_is_idempotent() {
        let (mut player, _) = player();
        player.attach();
        assert_eq!(player.audio().listener_count(), 2);
    }

    #[test]
    fn detach_stops_notifications() {
        let (mut player, store) = player();
        player.set_song(0);
        player.play();
        player.detach();
        player.detach();

        assert_eq!(player.audio().listener_count(), 0);
        assert_eq!(player.audio().src(), None);

        player.audio_mut().play();
        player.audio_mut().load_metadata(90.0);
        player.audio_mut().advance(5.0);
        let session = store.snapshot();
        assert_eq!(session.duration, 0.0);
        assert_eq!(session.current_time, 0.0);
    }

    #[test]
    fn dropping_the_player_releases_listeners() {
        let (player, store) = player();
        assert_eq!(Rc::strong_count(&store), 4);
        drop(player);
        assert_eq!(Rc::strong_count(&store), 1);
    }
}
