use super::PlaybackHandle;

/// Playback handle with no audio output behind it. It records the fields the
/// controller writes; native builds use it since there is no media element.
/// Loading a source pauses it, as the browser's media load does.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
#[derive(Debug, Clone, PartialEq)]
pub struct DetachedPlayback {
    paused: bool,
    source: Option<String>,
    looping: bool,
    rate: f64,
}

impl Default for DetachedPlayback {
    fn default() -> Self {
        Self {
            paused: true,
            source: None,
            looping: false,
            rate: 1.0,
        }
    }
}

impl PlaybackHandle for DetachedPlayback {
    fn paused(&self) -> bool {
        self.paused
    }

    fn play(&mut self) {
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn source(&self) -> Option<String> {
        self.source.clone()
    }

    fn set_source(&mut self, url: &str) {
        self.source = Some(url.to_string());
        self.paused = true;
    }

    fn looping(&self) -> bool {
        self.looping
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn playback_rate(&self) -> f64 {
        self.rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.rate = rate;
    }
}
