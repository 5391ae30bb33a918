use crate::utils::{format_time, TIME_PLACEHOLDER};
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// State of record for one album page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSession {
    /// Index into the album's song list.
    pub current_song: Option<usize>,
    pub is_playing: bool,
    pub current_time: f64,
    pub duration: f64,
    pub current_time_formatted: String,
    pub duration_formatted: String,
    pub volume: f64,
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::with_volume(crate::settings::DEFAULT_VOLUME)
    }
}

impl PlaybackSession {
    pub fn with_volume(volume: f64) -> Self {
        Self {
            current_song: None,
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            current_time_formatted: TIME_PLACEHOLDER.to_string(),
            duration_formatted: TIME_PLACEHOLDER.to_string(),
            volume,
        }
    }

    pub fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds;
        self.current_time_formatted = format_time(Some(seconds));
    }

    pub fn set_duration(&mut self, seconds: f64) {
        self.duration = seconds;
        self.duration_formatted = format_time(Some(seconds));
    }

    /// Position as a fraction of the duration, for the seek bar.
    pub fn progress(&self) -> f64 {
        if self.duration.is_finite() && self.duration > 0.0 {
            (self.current_time / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.current_song == Some(index)
    }
}

/// Where a player keeps its [`PlaybackSession`].
///
/// Media listeners hold a clone of the store, so cloning must share state.
pub trait SessionStore: Clone + 'static {
    fn snapshot(&self) -> PlaybackSession;
    fn update(&self, f: impl FnOnce(&mut PlaybackSession));
}

impl SessionStore for Rc<RefCell<PlaybackSession>> {
    fn snapshot(&self) -> PlaybackSession {
        self.borrow().clone()
    }

    fn update(&self, f: impl FnOnce(&mut PlaybackSession)) {
        f(&mut self.borrow_mut());
    }
}

/// Session kept in a Dioxus signal so the page re-renders on every change.
#[derive(Clone)]
pub struct SignalSession {
    state: Signal<PlaybackSession>,
    runtime: Rc<Runtime>,
}

impl SignalSession {
    /// Must be created inside a component so the runtime can be captured.
    pub fn new(state: Signal<PlaybackSession>) -> Self {
        Self {
            state,
            runtime: Runtime::current(),
        }
    }
}

impl SessionStore for SignalSession {
    fn snapshot(&self) -> PlaybackSession {
        let _guard = RuntimeGuard::new(self.runtime.clone());
        self.state.peek().clone()
    }

    fn update(&self, f: impl FnOnce(&mut PlaybackSession)) {
        // Media callbacks fire from the browser event loop, outside any render.
        let _guard = RuntimeGuard::new(self.runtime.clone());
        let mut state = self.state;
        state.with_mut(f);
    }
}
