pub mod audio_toggle;
pub mod icons;
