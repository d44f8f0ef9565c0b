//! Watch-list scan deciding which cursor image a tick should apply.

use strum::Display;

/// Which of the two session images is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CursorChoice {
    /// Free-roam cursor, shown while no watched object is active.
    Overworld,
    /// UI cursor, shown while any watched object is active.
    Ui,
}

/// Scans a snapshot of watch-list activity and picks the cursor image.
///
/// Returns `None` for an empty snapshot: a session with nothing to watch
/// leaves the cursor alone rather than forcing the overworld image.
pub fn select_cursor(watch: &[bool]) -> Option<CursorChoice> {
    if watch.is_empty() {
        return None;
    }

    if watch.iter().any(|active| *active) {
        Some(CursorChoice::Ui)
    } else {
        Some(CursorChoice::Overworld)
    }
}
