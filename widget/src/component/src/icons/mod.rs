pub mod airpods_icon;
pub mod sound_off_icon;
pub mod sound_on_icon;
