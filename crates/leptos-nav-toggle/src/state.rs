use std::fmt;

/// Display state of a navigation trigger.
///
/// A trigger starts out [`ToggleState::Inactive`] and flips on every
/// activation. There is no terminal state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleState {
    /// Menu closed, no active marker on the trigger.
    #[default]
    Inactive,
    /// Menu open, the trigger carries the active marker.
    Active,
}

impl ToggleState {
    /// Returns `true` when the trigger should carry the active marker.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns the opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    /// Flips the state in place.
    pub fn activate(&mut self) {
        *self = self.toggled();
    }
}

impl From<bool> for ToggleState {
    fn from(active: bool) -> Self {
        if active {
            Self::Active
        } else {
            Self::Inactive
        }
    }
}

impl From<ToggleState> for bool {
    fn from(state: ToggleState) -> Self {
        state.is_active()
    }
}

impl fmt::Display for ToggleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("active"),
            Self::Inactive => f.write_str("inactive"),
        }
    }
}
