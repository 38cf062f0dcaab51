// Media element handle for the browser build.
use super::PlaybackHandle;
use crate::diagnostics;
use dioxus::prelude::spawn;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlAudioElement};

/// Look up the deck's audio element by id.
pub fn find_audio_element(id: &str) -> Option<HtmlAudioElement> {
    let document = window()?.document()?;
    document.get_element_by_id(id)?.dyn_into::<HtmlAudioElement>().ok()
}

pub struct WebPlayback {
    audio: HtmlAudioElement,
}

impl WebPlayback {
    pub fn new(audio: HtmlAudioElement) -> Self {
        Self { audio }
    }
}

impl PlaybackHandle for WebPlayback {
    fn paused(&self) -> bool {
        self.audio.paused()
    }

    fn play(&mut self) {
        if let Ok(promise) = self.audio.play() {
            spawn(async move {
                if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    diagnostics::report_play_rejected(&format!("{err:?}"));
                }
            });
        }
    }

    fn pause(&mut self) {
        if let Err(err) = self.audio.pause() {
            diagnostics::report_pause_failed(&format!("{err:?}"));
        }
    }

    fn source(&self) -> Option<String> {
        let src = self.audio.src();
        if src.is_empty() {
            None
        } else {
            Some(src)
        }
    }

    fn set_source(&mut self, url: &str) {
        self.audio.set_src(url);
    }

    fn looping(&self) -> bool {
        self.audio.loop_()
    }

    fn set_looping(&mut self, looping: bool) {
        self.audio.set_loop(looping);
    }

    fn playback_rate(&self) -> f64 {
        self.audio.playback_rate()
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.audio.set_playback_rate(rate);
    }
}
