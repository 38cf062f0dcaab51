/// Something the user did to a control. These flow click -> handle state.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SelectionChanged(String),
    PlayPauseClicked,
    LoopClicked,
    /// Raw `data-speed` value of the clicked speed control.
    SpeedClicked(String),
}

/// Notification from the media element itself. These flow handle state -> label
/// and never write back to the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    Played,
    Paused,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControllerEvent {
    Ui(UiEvent),
    Media(MediaEvent),
}

impl From<UiEvent> for ControllerEvent {
    fn from(event: UiEvent) -> Self {
        Self::Ui(event)
    }
}

impl From<MediaEvent> for ControllerEvent {
    fn from(event: MediaEvent) -> Self {
        Self::Media(event)
    }
}
