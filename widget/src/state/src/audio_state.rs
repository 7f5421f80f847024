use leptos::prelude::*;

/// Reactive state the toggle buttons render from.
#[derive(Clone, Copy, Debug)]
pub struct AudioState {
    pub muted: RwSignal<bool>,
    /// Whether the floating toggle is on screen
    pub show_floating: RwSignal<bool>,
    /// Read once at startup, picks the inverted icon
    pub dark_mode: bool,
}

impl Default for AudioState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl AudioState {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            muted: RwSignal::new(true),
            show_floating: RwSignal::new(false),
            dark_mode,
        }
    }

    pub fn register_global(dark_mode: bool) -> Self {
        let this = Self::new(dark_mode);
        provide_context(this);
        this
    }

    pub fn get() -> Self {
        let this: Self = expect_context();
        this
    }
}
