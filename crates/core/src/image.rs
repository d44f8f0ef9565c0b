//! Cursor image handles and the per-session image set.

use crate::selection::CursorChoice;

/// Opaque handle to a cursor image registered with the host.
///
/// The library never inspects pixel data; the host maps the handle back to
/// whatever image resource it registered (a texture, an OS cursor id, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CursorImage(pub u32);

/// Pixel offset within a cursor image used as the pointer's logical click
/// point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hotspot {
    pub x: f32,
    pub y: f32,
}

impl Hotspot {
    pub const ZERO: Hotspot = Hotspot { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The fixed pair of images a session switches between, plus their shared
/// hotspot. Immutable once configured.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CursorImageSet {
    /// Image shown while no watched object is active.
    pub overworld: CursorImage,
    /// Image shown while at least one watched object (a menu, a dialog) is
    /// active.
    pub ui: CursorImage,
    pub hotspot: Hotspot,
}

impl CursorImageSet {
    pub fn new(overworld: CursorImage, ui: CursorImage) -> Self {
        Self {
            overworld,
            ui,
            hotspot: Hotspot::ZERO,
        }
    }

    pub fn with_hotspot(mut self, hotspot: Hotspot) -> Self {
        self.hotspot = hotspot;
        self
    }

    /// Resolves a selection to the concrete image handle.
    pub fn image_for(&self, choice: CursorChoice) -> CursorImage {
        match choice {
            CursorChoice::Overworld => self.overworld,
            CursorChoice::Ui => self.ui,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_set_resolves_each_choice() {
        let set = CursorImageSet::new(CursorImage(1), CursorImage(2));
        assert_eq!(set.image_for(CursorChoice::Overworld), CursorImage(1));
        assert_eq!(set.image_for(CursorChoice::Ui), CursorImage(2));
    }
}
