//! Cart lifecycle states.

use serde::{Deserialize, Serialize};

/// The state of a cart across its checkout lifecycle.
///
/// State transitions:
/// ```text
/// Building ──► CheckoutInProgress ──┬──► Completed
///                                   └──► Failed
/// ```
///
/// CheckoutInProgress is the in-flight phase of a running checkout call.
/// The stored state moves straight to the outcome when the call commits;
/// an interrupted checkout leaves the previous state in place. Checkout
/// is repeatable from either outcome. The state is observational; it
/// never gates what the cart accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CartState {
    /// Items and discounts are being collected.
    #[default]
    Building,

    /// A checkout sequence is running.
    CheckoutInProgress,

    /// The last checkout finished with an approved payment.
    Completed,

    /// The last checkout finished with a declined payment.
    Failed,
}

impl CartState {
    /// Returns true if no checkout has been started yet.
    pub fn is_building(&self) -> bool {
        matches!(self, CartState::Building)
    }

    /// Returns true while a checkout sequence is running.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, CartState::CheckoutInProgress)
    }

    /// Returns true if the last checkout succeeded.
    pub fn is_completed(&self) -> bool {
        matches!(self, CartState::Completed)
    }

    /// Returns true if the last checkout failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, CartState::Failed)
    }

    /// Returns true once a checkout has run to either outcome.
    pub fn is_settled(&self) -> bool {
        matches!(self, CartState::Completed | CartState::Failed)
    }

    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CartState::Building => "Building",
            CartState::CheckoutInProgress => "CheckoutInProgress",
            CartState::Completed => "Completed",
            CartState::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for CartState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_building() {
        assert_eq!(CartState::default(), CartState::Building);
    }

    #[test]
    fn test_building_predicates() {
        assert!(CartState::Building.is_building());
        assert!(!CartState::Building.is_in_progress());
        assert!(!CartState::Building.is_settled());
    }

    #[test]
    fn test_settled_states() {
        assert!(CartState::Completed.is_settled());
        assert!(CartState::Failed.is_settled());
        assert!(!CartState::Building.is_settled());
        assert!(!CartState::CheckoutInProgress.is_settled());
    }

    #[test]
    fn test_outcome_predicates() {
        assert!(CartState::Completed.is_completed());
        assert!(!CartState::Completed.is_failed());
        assert!(CartState::Failed.is_failed());
        assert!(!CartState::Failed.is_completed());
    }

    #[test]
    fn test_display() {
        assert_eq!(CartState::Building.to_string(), "Building");
        assert_eq!(CartState::CheckoutInProgress.to_string(), "CheckoutInProgress");
        assert_eq!(CartState::Completed.to_string(), "Completed");
        assert_eq!(CartState::Failed.to_string(), "Failed");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let state = CartState::CheckoutInProgress;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CartState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
