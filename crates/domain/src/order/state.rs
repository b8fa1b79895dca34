//! Order state machine.

use serde::{Deserialize, Serialize};

/// The state of an order in its lifecycle.
///
/// State transitions:
/// ```text
/// Open ──► Shipped
/// ```
/// There is no partially shipped state: shipping runs to completion and the
/// order leaves the ledger in the same step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderState {
    /// Order holds claims on its source locations and waits in the ledger.
    #[default]
    Open,

    /// Stock has been taken from the source locations (terminal state).
    Shipped,
}

impl OrderState {
    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::Open => "Open",
            OrderState::Shipped => "Shipped",
        }
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_open() {
        assert_eq!(OrderState::default(), OrderState::Open);
    }

    #[test]
    fn test_display() {
        assert_eq!(OrderState::Open.to_string(), "Open");
        assert_eq!(OrderState::Shipped.to_string(), "Shipped");
    }
}
