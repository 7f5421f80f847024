use std::time::Duration;

/// Default intersection ratio above which a video counts as "in view"
pub const DEFAULT_ENTRY_RATIO: f64 = 0.6;
/// Threshold for the second watcher, fires when an element leaves the viewport entirely
pub const EXIT_RATIO: f64 = 0.0;

pub const MAX_VOLUME: f64 = 1.0;
pub const MIN_VOLUME: f64 = 0.0;

pub mod fade {
    use super::Duration;

    pub const TICK_INTERVAL: Duration = Duration::from_millis(200);
    pub const FADE_IN_STEP: f64 = 0.4;
    pub const FADE_OUT_STEP: f64 = 0.1;
}

pub mod delays {
    use super::Duration;

    /// Wait before pausing a video that scrolled fully out of view
    pub const EXIT_PAUSE_DELAY: Duration = Duration::from_millis(1000);
    // freeze frame videos are injected by another component after page load
    pub const FREEZE_FRAME_DISCOVERY_DELAY: Duration = Duration::from_millis(1000);
}

pub mod selectors {
    pub const VIDEO_PLAYER: &str = ".VideoPlayer";
    pub const PLAYER_MEDIA: &str = "video";
    pub const PLAYER_MUTE_CONTROL: &str = ".VideoControls-mute";
    pub const FREEZE_FRAME_VIDEO: &str = ".AC_W_aNL video";
    /// Property on the player container holding the playback api object
    pub const PLAYER_API_PROP: &str = "api";
    pub const DARK_MODE_CLASS: &str = "is-dark-mode";
}

pub mod element_ids {
    pub const INLINE_TOGGLE: &str = "toggle-global-audio-button";
    pub const FLOATING_TOGGLE: &str = "toggle-global-audio-float";
}

pub mod captions {
    pub const WHILE_MUTED: &str = "THIS STORY IS BEST EXPERIENCED WITH SOUND ON";
    pub const WHILE_UNMUTED: &str = "KEEP SCROLLING TO READ THE STORY";
    pub const ENABLE_AUDIO: &str = "ENABLE AUDIO";
    pub const MUTE_AUDIO: &str = "MUTE AUDIO";
}
