use crate::api::fetch_audio_files;
use crate::components::{
    loop_label, ControlSurface, ControllerEvent, MediaEvent, PlaybackController, UiEvent,
    PLAY_LABEL,
};
use crate::config::load_config;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[cfg(not(target_arch = "wasm32"))]
use crate::components::DetachedPlayback;
#[cfg(target_arch = "wasm32")]
use crate::components::{find_audio_element, install_keyboard_shortcuts, WebPlayback};
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::error;

const AUDIO_SELECT_ID: &str = "audio-select";
const AUDIO_PLAYER_ID: &str = "audio-player";
const PLAY_PAUSE_ID: &str = "play-pause-btn";
const LOOP_ID: &str = "loop-btn";

#[cfg(target_arch = "wasm32")]
type DeckHandle = WebPlayback;
#[cfg(not(target_arch = "wasm32"))]
type DeckHandle = DetachedPlayback;

type DeckController = PlaybackController<DeckHandle, SignalSurface>;

/// Widget display state backed by signals, so the controller's writes re-render the deck.
#[derive(Clone, Copy)]
pub struct SignalSurface {
    options: Signal<Vec<String>>,
    play_label: Signal<String>,
    loop_label: Signal<String>,
}

impl ControlSurface for SignalSurface {
    fn append_option(&mut self, file_name: &str) {
        self.options.write().push(file_name.to_string());
    }

    fn set_play_label(&mut self, label: &str) {
        if *self.play_label.peek() != label {
            self.play_label.set(label.to_string());
        }
    }

    fn set_loop_label(&mut self, label: &str) {
        if *self.loop_label.peek() != label {
            self.loop_label.set(label.to_string());
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn build_handle() -> Option<DeckHandle> {
    match find_audio_element(AUDIO_PLAYER_ID) {
        Some(audio) => {
            install_keyboard_shortcuts(PLAY_PAUSE_ID);
            Some(WebPlayback::new(audio))
        }
        None => {
            error!("[playback] audio element #{AUDIO_PLAYER_ID} is missing");
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_handle() -> Option<DeckHandle> {
    crate::diagnostics::report_detached_playback();
    Some(DetachedPlayback::default())
}

/// File selector, transport buttons and the audio element they drive.
#[component]
pub fn PlayerPanel() -> Element {
    let config = use_hook(load_config);
    let options = use_signal(Vec::<String>::new);
    let play_label = use_signal(|| PLAY_LABEL.to_string());
    let loop_text = use_signal(|| loop_label(false).to_string());
    let controller: Rc<RefCell<Option<DeckController>>> = use_hook(|| Rc::new(RefCell::new(None)));

    // One-time setup: bind the controller to the mounted audio element, then
    // load the file list without holding up the controls.
    {
        let controller = controller.clone();
        let config = config.clone();
        use_effect(move || {
            if controller.borrow().is_some() {
                return;
            }
            let Some(handle) = build_handle() else {
                return;
            };
            let surface = SignalSurface {
                options,
                play_label,
                loop_label: loop_text,
            };
            *controller.borrow_mut() =
                Some(PlaybackController::new(handle, surface, config.clone()));

            let controller = controller.clone();
            let config = config.clone();
            spawn(async move {
                let result = fetch_audio_files(&config).await;
                if let Some(deck) = controller.borrow_mut().as_mut() {
                    deck.apply_file_list(result);
                }
            });
        });
    }

    let send = {
        let controller = controller.clone();
        move |event: ControllerEvent| {
            if let Some(deck) = controller.borrow_mut().as_mut() {
                deck.dispatch(event);
            }
        }
    };

    let on_select = {
        let send = send.clone();
        move |evt: FormEvent| send(UiEvent::SelectionChanged(evt.value()).into())
    };
    let on_play_pause = {
        let send = send.clone();
        move |_| send(UiEvent::PlayPauseClicked.into())
    };
    let on_loop = {
        let send = send.clone();
        move |_| send(UiEvent::LoopClicked.into())
    };
    let on_media_play = {
        let send = send.clone();
        move |_| send(MediaEvent::Played.into())
    };
    let on_media_pause = {
        let send = send.clone();
        move |_| send(MediaEvent::Paused.into())
    };

    rsx! {
        div { class: "deck",
            select { id: AUDIO_SELECT_ID, onchange: on_select,
                for (idx , name) in options.read().iter().enumerate() {
                    option { key: "{idx}", value: "{name}", "{name}" }
                }
            }
            audio {
                id: AUDIO_PLAYER_ID,
                controls: true,
                preload: "metadata",
                onplay: on_media_play,
                onpause: on_media_pause,
            }
            div { class: "deck-controls",
                button { id: PLAY_PAUSE_ID, r#type: "button", onclick: on_play_pause, "{play_label}" }
                button { id: LOOP_ID, r#type: "button", onclick: on_loop, "{loop_text}" }
                for speed in config.speed_presets.iter().cloned() {
                    button {
                        key: "{speed}",
                        class: "speed-btn",
                        r#type: "button",
                        "data-speed": "{speed}",
                        onclick: {
                            let send = send.clone();
                            let raw = speed.clone();
                            move |_| send(UiEvent::SpeedClicked(raw.clone()).into())
                        },
                        "{speed}x"
                    }
                }
            }
        }
    }
}
