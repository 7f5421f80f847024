pub mod audio_state;
pub mod media_registry;
pub mod mute_controller;
pub mod playback;
