use super::{Listener, MediaEvent, PlaybackResource, SubscriptionId};

/// In-memory media resource for platforms without a browser audio element.
///
/// It tracks everything a real element would. Tests drive notifications
/// through `load_metadata` and `advance`; nothing is emitted on its own.
pub struct HeadlessAudio {
    src: Option<String>,
    paused: bool,
    current_time: f64,
    duration: f64,
    volume: f64,
    listeners: Vec<(SubscriptionId, MediaEvent, Listener)>,
    next_id: u64,
}

impl Default for HeadlessAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessAudio {
    pub fn new() -> Self {
        Self {
            src: None,
            paused: true,
            current_time: 0.0,
            duration: f64::NAN,
            volume: 1.0,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    #[cfg(test)]
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    #[cfg(test)]
    pub fn paused(&self) -> bool {
        self.paused
    }

    #[cfg(test)]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Metadata for the current source arrived.
    #[cfg(test)]
    pub fn load_metadata(&mut self, duration: f64) {
        self.duration = duration;
        self.emit(MediaEvent::DurationChange, duration);
    }

    /// Move the playhead forward as if audio had been playing.
    #[cfg(test)]
    pub fn advance(&mut self, seconds: f64) {
        if self.paused {
            return;
        }
        self.current_time += seconds;
        if self.duration.is_finite() {
            self.current_time = self.current_time.min(self.duration);
        }
        self.emit(MediaEvent::TimeUpdate, self.current_time);
    }

    #[cfg(test)]
    fn emit(&mut self, event: MediaEvent, value: f64) {
        for (_, kind, listener) in self.listeners.iter_mut() {
            if *kind == event {
                listener(value);
            }
        }
    }
}

impl PlaybackResource for HeadlessAudio {
    fn set_source(&mut self, src: &str) {
        self.src = Some(src.to_string());
        self.current_time = 0.0;
        self.duration = f64::NAN;
    }

    fn clear_source(&mut self) {
        self.src = None;
        self.paused = true;
        self.current_time = 0.0;
        self.duration = f64::NAN;
    }

    fn play(&mut self) {
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    // Browsers report the new position later through `timeupdate`; use `advance` for that.
    fn seek(&mut self, seconds: f64) {
        self.current_time = seconds;
    }

    fn set_volume(&mut self, level: f64) {
        self.volume = level;
    }

    fn subscribe(&mut self, event: MediaEvent, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, event, listener));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _, _)| *existing != id);
        self.listeners.len() != before
    }
}
