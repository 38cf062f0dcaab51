use super::UiEvent;

#[cfg(target_arch = "wasm32")]
use std::cell::Cell;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlElement, KeyboardEvent};

/// The parts of a keydown the deck cares about.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[derive(Debug, Clone, Default)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub code: &'a str,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub handled: bool,
    pub composing: bool,
    pub editable_target: bool,
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn shortcut_event(press: &KeyPress<'_>) -> Option<UiEvent> {
    if press.handled || press.composing || press.editable_target {
        return None;
    }

    if press.key == "MediaPlayPause" || press.code == "MediaPlayPause" {
        return Some(UiEvent::PlayPauseClicked);
    }

    if !press.ctrl
        && !press.meta
        && !press.alt
        && (press.key == " " || press.key == "Spacebar" || press.code == "Space")
    {
        return Some(UiEvent::PlayPauseClicked);
    }

    None
}

#[cfg(target_arch = "wasm32")]
fn is_editable_shortcut_target(event: &KeyboardEvent) -> bool {
    let Some(target) = event.target() else {
        return false;
    };

    let mut current = target.dyn_into::<web_sys::Element>().ok();
    while let Some(element) = current {
        let tag = element.tag_name().to_ascii_lowercase();
        if tag == "input" || tag == "textarea" || tag == "select" {
            return true;
        }
        if element
            .get_attribute("contenteditable")
            .is_some_and(|v| !v.eq_ignore_ascii_case("false"))
        {
            return true;
        }
        current = element.parent_element();
    }

    false
}

#[cfg(target_arch = "wasm32")]
fn click_control(id: &str) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
    {
        if let Ok(html) = element.dyn_into::<HtmlElement>() {
            html.click();
        }
    }
}

/// Route keyboard shortcuts through the matching deck button so they share
/// its click handler. Installs once per page.
#[cfg(target_arch = "wasm32")]
pub fn install_keyboard_shortcuts(play_pause_id: &'static str) {
    thread_local! {
        static INSTALLED: Cell<bool> = Cell::new(false);
    }
    if INSTALLED.with(|c| c.replace(true)) {
        return;
    }

    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };

    let key_cb = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let key = event.key();
        let code = event.code();
        let press = KeyPress {
            key: &key,
            code: &code,
            ctrl: event.ctrl_key(),
            meta: event.meta_key(),
            alt: event.alt_key(),
            handled: event.default_prevented(),
            composing: event.is_composing(),
            editable_target: is_editable_shortcut_target(&event),
        };
        if let Some(UiEvent::PlayPauseClicked) = shortcut_event(&press) {
            event.prevent_default();
            click_control(play_pause_id);
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    if let Err(err) =
        doc.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
    {
        crate::diagnostics::report_shortcuts_unavailable(&format!("{err:?}"));
        INSTALLED.with(|c| c.set(false));
        return;
    }
    key_cb.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_toggles_playback() {
        let press = KeyPress {
            key: " ",
            code: "Space",
            ..KeyPress::default()
        };
        assert_eq!(shortcut_event(&press), Some(UiEvent::PlayPauseClicked));
    }

    #[test]
    fn test_media_key_toggles_playback() {
        let press = KeyPress {
            key: "MediaPlayPause",
            ..KeyPress::default()
        };
        assert_eq!(shortcut_event(&press), Some(UiEvent::PlayPauseClicked));
    }

    #[test]
    fn test_space_in_editable_target_is_left_alone() {
        let press = KeyPress {
            key: " ",
            code: "Space",
            editable_target: true,
            ..KeyPress::default()
        };
        assert_eq!(shortcut_event(&press), None);
    }

    #[test]
    fn test_modified_or_handled_space_is_ignored() {
        let ctrl = KeyPress {
            key: " ",
            ctrl: true,
            ..KeyPress::default()
        };
        let handled = KeyPress {
            key: " ",
            handled: true,
            ..KeyPress::default()
        };
        let composing = KeyPress {
            key: " ",
            composing: true,
            ..KeyPress::default()
        };
        assert_eq!(shortcut_event(&ctrl), None);
        assert_eq!(shortcut_event(&handled), None);
        assert_eq!(shortcut_event(&composing), None);
    }

    #[test]
    fn test_other_keys_do_nothing() {
        let press = KeyPress {
            key: "l",
            code: "KeyL",
            ..KeyPress::default()
        };
        assert_eq!(shortcut_event(&press), None);
    }
}
