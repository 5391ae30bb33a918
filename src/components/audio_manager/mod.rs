//! Audio Manager - owns the hidden media element behind an album page and the
//! playback state mirrored from it.

mod album_player;
mod controller_native;
#[cfg(target_arch = "wasm32")]
mod controller_web;
mod session;

pub use album_player::AlbumPlayer;
pub use controller_native::HeadlessAudio;
#[cfg(target_arch = "wasm32")]
pub use controller_web::WebAudio;
pub use session::{PlaybackSession, SessionStore, SignalSession};

/// Notifications a media resource reports on its own schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaEvent {
    /// Playback position moved; payload is the new position in seconds.
    TimeUpdate,
    /// Media duration became known or changed; payload may be NaN.
    DurationChange,
}

impl MediaEvent {
    pub fn dom_name(self) -> &'static str {
        match self {
            MediaEvent::TimeUpdate => "timeupdate",
            MediaEvent::DurationChange => "durationchange",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

pub type Listener = Box<dyn FnMut(f64)>;

/// A single audio output that plays one source at a time.
pub trait PlaybackResource {
    fn set_source(&mut self, src: &str);
    fn clear_source(&mut self);
    fn play(&mut self);
    fn pause(&mut self);
    fn current_time(&self) -> f64;
    /// Total length of the current source, NaN while unknown.
    fn duration(&self) -> f64;
    fn seek(&mut self, seconds: f64);
    fn set_volume(&mut self, level: f64);
    fn subscribe(&mut self, event: MediaEvent, listener: Listener) -> SubscriptionId;
    /// Returns false when the subscription was already gone.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}

#[cfg(target_arch = "wasm32")]
pub type DefaultAudio = WebAudio;
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultAudio = HeadlessAudio;

/// Create the platform audio resource with no source loaded.
#[cfg(target_arch = "wasm32")]
pub fn create_audio() -> DefaultAudio {
    WebAudio::new()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn create_audio() -> DefaultAudio {
    tracing::debug!("no browser media element on this platform, using headless audio");
    HeadlessAudio::new()
}
