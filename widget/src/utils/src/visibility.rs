/// What a single intersection change means for a tracked player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityAction {
    /// Fully out of view, pause after a short delay
    PauseLater,
    /// Visible enough to resume and fade in
    Enter,
    /// Partially visible, fade out
    Leave,
}

pub fn classify(ratio: f64, entry_ratio: f64) -> VisibilityAction {
    if ratio <= 0.0 {
        VisibilityAction::PauseLater
    } else if ratio >= entry_ratio {
        VisibilityAction::Enter
    } else {
        VisibilityAction::Leave
    }
}

/// The floating toggle shows only while the inline one is entirely off screen
pub fn floating_toggle_visible(inline_ratio: f64) -> bool {
    inline_ratio == 0.0
}

/// Player index registered for `target`.
///
/// Player counts per story are in the single digits, so a linear scan per
/// intersection entry beats tagging the host page's elements.
pub fn tracked_index<T: PartialEq>(tracked: &[(T, usize)], target: &T) -> Option<usize> {
    tracked
        .iter()
        .find(|(candidate, _)| candidate == target)
        .map(|(_, idx)| *idx)
}
