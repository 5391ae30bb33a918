use super::{Listener, MediaEvent, PlaybackResource, SubscriptionId};
use js_sys::Promise;
use std::collections::HashMap;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlAudioElement};

/// Browser-backed resource: one detached `<audio>` element per album page.
pub struct WebAudio {
    audio: Option<HtmlAudioElement>,
    listeners: HashMap<SubscriptionId, (MediaEvent, Closure<dyn FnMut()>)>,
    // Shared by every play() call; lives as long as the element.
    on_play_rejected: Closure<dyn FnMut(JsValue)>,
    next_id: u64,
}

fn create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;
    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    // Keep preload light so we stream instead of buffering entire files
    audio.set_attribute("preload", "metadata").ok()?;
    Some(audio)
}

impl WebAudio {
    pub fn new() -> Self {
        let audio = create_audio_element();
        if audio.is_none() {
            tracing::error!("could not create an audio element; playback is disabled");
        }
        Self {
            audio,
            listeners: HashMap::new(),
            on_play_rejected: Closure::wrap(Box::new(|err: JsValue| {
                tracing::warn!("playback was rejected: {err:?}");
            }) as Box<dyn FnMut(JsValue)>),
            next_id: 0,
        }
    }
}

impl Drop for WebAudio {
    fn drop(&mut self) {
        let ids: Vec<SubscriptionId> = self.listeners.keys().copied().collect();
        for id in ids {
            self.unsubscribe(id);
        }
    }
}

impl PlaybackResource for WebAudio {
    fn set_source(&mut self, src: &str) {
        if let Some(audio) = &self.audio {
            audio.set_src(src);
        }
    }

    fn clear_source(&mut self) {
        if let Some(audio) = &self.audio {
            let _ = audio.pause();
            let _ = audio.remove_attribute("src");
            audio.load();
        }
    }

    fn play(&mut self) {
        let Some(audio) = &self.audio else {
            return;
        };
        match audio.play() {
            Ok(promise) => {
                // Autoplay policies and missing sources reject the promise asynchronously.
                let promise: Promise = promise;
                let _ = promise.catch(&self.on_play_rejected);
            }
            Err(err) => tracing::warn!("play() failed: {err:?}"),
        }
    }

    fn pause(&mut self) {
        if let Some(audio) = &self.audio {
            if let Err(err) = audio.pause() {
                tracing::warn!("pause() failed: {err:?}");
            }
        }
    }

    fn current_time(&self) -> f64 {
        self.audio.as_ref().map(|a| a.current_time()).unwrap_or(0.0)
    }

    fn duration(&self) -> f64 {
        self.audio.as_ref().map(|a| a.duration()).unwrap_or(f64::NAN)
    }

    fn seek(&mut self, seconds: f64) {
        if let Some(audio) = &self.audio {
            audio.set_current_time(seconds);
        }
    }

    fn set_volume(&mut self, level: f64) {
        if let Some(audio) = &self.audio {
            // The DOM throws on volumes outside 0..=1
            let level = if level.is_finite() { level.clamp(0.0, 1.0) } else { 1.0 };
            audio.set_volume(level);
        }
    }

    fn subscribe(&mut self, event: MediaEvent, mut listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let Some(audio) = self.audio.clone() else {
            return id;
        };
        let source = audio.clone();
        let closure = Closure::wrap(Box::new(move || {
            let value = match event {
                MediaEvent::TimeUpdate => source.current_time(),
                MediaEvent::DurationChange => source.duration(),
            };
            listener(value);
        }) as Box<dyn FnMut()>);

        if let Err(err) = audio
            .add_event_listener_with_callback(event.dom_name(), closure.as_ref().unchecked_ref())
        {
            tracing::warn!("could not listen for {}: {err:?}", event.dom_name());
            return id;
        }
        self.listeners.insert(id, (event, closure));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some((event, closure)) = self.listeners.remove(&id) else {
            return false;
        };
        if let Some(audio) = &self.audio {
            let _ = audio.remove_event_listener_with_callback(
                event.dom_name(),
                closure.as_ref().unchecked_ref(),
            );
        }
        true
    }
}
