//! Last-active-controller detection.
//!
//! The device-aware poller asks the input layer which controller the player
//! touched last and folds the answer into a gamepad-connected flag. While the
//! flag is set the cursor is hidden and image polling is suppressed.

use strum::Display;

/// Category of input device last used by the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControllerType {
    Keyboard,
    Joystick,
    Mouse,
    /// Vendor-specific devices; observing one changes nothing.
    Custom,
}

/// What a controller observation asks of the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GamepadUpdate {
    /// New value of the gamepad-connected flag, if it changed.
    pub connected: Option<bool>,
    /// Joystick input hides the cursor immediately, without waiting for the
    /// next image tick.
    pub hide_cursor: bool,
}

impl GamepadUpdate {
    const NONE: GamepadUpdate = GamepadUpdate {
        connected: None,
        hide_cursor: false,
    };
}

/// Gamepad-connected flag folded over controller observations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GamepadFlag {
    connected: bool,
}

impl GamepadFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connected(&self) -> bool {
        self.connected
    }

    /// Folds one observation into the flag.
    ///
    /// `None` (no controller touched yet) and `Custom` leave the flag as-is.
    pub fn apply(&mut self, observed: Option<ControllerType>) -> GamepadUpdate {
        let Some(controller) = observed else {
            return GamepadUpdate::NONE;
        };

        match controller {
            ControllerType::Joystick => {
                let changed = !self.connected;
                self.connected = true;
                GamepadUpdate {
                    connected: changed.then_some(true),
                    hide_cursor: true,
                }
            }
            ControllerType::Keyboard | ControllerType::Mouse => {
                let changed = self.connected;
                self.connected = false;
                GamepadUpdate {
                    connected: changed.then_some(false),
                    hide_cursor: false,
                }
            }
            ControllerType::Custom => GamepadUpdate::NONE,
        }
    }
}
