//! Two-state mouse lock machine.
//!
//! Lock mode and visibility always move together: a locked mouse is hidden,
//! an unlocked mouse is visible. Encoding the pair as a single enum makes the
//! inconsistent combinations unrepresentable.

/// Consistent lock/visibility pairs the mouse can be in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseLockState {
    /// Mouse confined to the window and hidden (gameplay).
    LockedHidden,
    /// Mouse free and visible (menus, UI).
    #[default]
    UnlockedVisible,
}

/// What a `lock`/`unlock` call actually did, so the caller knows whether the
/// host needs to be told anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockTransition {
    Locked,
    Unlocked,
    NoChange,
}

impl MouseLockState {
    /// Requests the locked-hidden state.
    pub fn lock(&mut self) -> LockTransition {
        match self {
            MouseLockState::LockedHidden => LockTransition::NoChange,
            MouseLockState::UnlockedVisible => {
                *self = MouseLockState::LockedHidden;
                LockTransition::Locked
            }
        }
    }

    /// Requests the unlocked-visible state.
    pub fn unlock(&mut self) -> LockTransition {
        match self {
            MouseLockState::UnlockedVisible => LockTransition::NoChange,
            MouseLockState::LockedHidden => {
                *self = MouseLockState::UnlockedVisible;
                LockTransition::Unlocked
            }
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, MouseLockState::LockedHidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_from_unlocked_transitions() {
        let mut state = MouseLockState::UnlockedVisible;
        assert_eq!(state.lock(), LockTransition::Locked);
        assert_eq!(state, MouseLockState::LockedHidden);
    }

    #[test]
    fn repeated_requests_are_idempotent() {
        let mut state = MouseLockState::UnlockedVisible;
        assert_eq!(state.unlock(), LockTransition::NoChange);
        state.lock();
        assert_eq!(state.lock(), LockTransition::NoChange);
        assert_eq!(state, MouseLockState::LockedHidden);
    }

    #[test]
    fn unlock_after_lock_round_trips() {
        let mut state = MouseLockState::default();
        state.lock();
        assert_eq!(state.unlock(), LockTransition::Unlocked);
        assert_eq!(state, MouseLockState::UnlockedVisible);
    }
}
