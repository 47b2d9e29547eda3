//! Enumeration types for the Lexigraph simulation.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// One of the four actions an agent can take on its turn.
///
/// The declaration order is also the slot order of an agent's
/// action-probability vector: `[form, steal, pass, think]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Complete the current target word if no letters are missing.
    FormWord,
    /// Copy a needed letter from the first neighbor that holds it.
    StealLetter,
    /// Give one of the agent's initial letters to a neighbor lacking it.
    PassLetter,
    /// Do nothing this turn.
    Think,
}

impl ActionKind {
    /// All actions, in probability-vector slot order.
    pub const ALL: [Self; 4] = [Self::FormWord, Self::StealLetter, Self::PassLetter, Self::Think];

    /// Stable name used in logs and exported audit records.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FormWord => "form_word",
            Self::StealLetter => "steal_letter",
            Self::PassLetter => "pass_letter",
            Self::Think => "think",
        }
    }
}

impl core::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Strategy label attached to a node by the graph generator.
///
/// The label only selects which action-probability profile a node gets;
/// the core never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Favors stealing over passing.
    Selfish,
    /// Favors passing over stealing.
    Altruistic,
}

impl Strategy {
    /// Stable name used in logs and exported audit records.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Selfish => "selfish",
            Self::Altruistic => "altruistic",
        }
    }
}

impl core::fmt::Display for Strategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_slots_follow_declaration_order() {
        assert_eq!(ActionKind::ALL[0], ActionKind::FormWord);
        assert_eq!(ActionKind::ALL[3], ActionKind::Think);
    }

    #[test]
    fn action_serializes_snake_case() {
        let json = serde_json::to_string(&ActionKind::StealLetter).ok();
        assert_eq!(json.as_deref(), Some("\"steal_letter\""));
        assert_eq!(ActionKind::PassLetter.to_string(), "pass_letter");
    }

    #[test]
    fn strategy_round_trips_through_serde() {
        let parsed: Result<Strategy, _> = serde_json::from_str("\"altruistic\"");
        assert_eq!(parsed.ok(), Some(Strategy::Altruistic));
        assert_eq!(Strategy::Selfish.to_string(), "selfish");
    }
}
