//! Other persisted state shapes
//!
//! The contract stores these next to the status records. Only their layout
//! and field invariants live here; timestamps are passed in by the caller.

use crate::error::CodecError;
use crate::types::BorshState;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// One entry of an account's status history
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct StatusEntry {
    /// Status text
    pub message: String,

    /// Block timestamp when the status was set (nanoseconds)
    pub timestamp: u64,

    /// Block timestamp after which the status is hidden (nanoseconds)
    pub expires_at: Option<u64>,
}

impl StatusEntry {
    /// Create a validated history entry
    pub fn new(
        message: impl Into<String>,
        timestamp: u64,
        expires_at: Option<u64>,
    ) -> Result<Self, CodecError> {
        let entry = Self {
            message: message.into(),
            timestamp,
            expires_at,
        };
        BorshState::validate(&entry)?;
        Ok(entry)
    }

    /// Whether the entry has expired at block time `now`
    pub fn is_expired(&self, now: u64) -> bool {
        self.expires_at.is_some_and(|expiry| now > expiry)
    }
}

impl BorshState for StatusEntry {
    const TYPE_NAME: &'static str = "StatusEntry";

    fn validate(&self) -> Result<(), CodecError> {
        if self.message.is_empty() {
            return Err(CodecError::Validation("Message cannot be empty".into()));
        }
        if let Some(expiry) = self.expires_at {
            if expiry <= self.timestamp {
                return Err(CodecError::Validation(format!(
                    "Expiry {} is not after timestamp {}",
                    expiry, self.timestamp
                )));
            }
        }
        Ok(())
    }
}

/// Public profile attached to an account
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,

    /// Free-form biography
    pub bio: String,

    /// Whether the profile is listed publicly
    pub is_public: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            bio: String::new(),
            is_public: true,
        }
    }
}

impl BorshState for UserProfile {
    const TYPE_NAME: &'static str = "UserProfile";

    fn validate(&self) -> Result<(), CodecError> {
        Ok(())
    }
}

/// A reaction left by one account on another account's status
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct Reaction {
    /// Account that reacted
    pub account_id: String,

    /// Reaction kind, e.g. "like"
    pub reaction_type: String,

    /// Block timestamp of the reaction (nanoseconds)
    pub timestamp: u64,
}

impl BorshState for Reaction {
    const TYPE_NAME: &'static str = "Reaction";

    fn validate(&self) -> Result<(), CodecError> {
        if self.account_id.is_empty() {
            return Err(CodecError::Validation(
                "Reaction account_id must be a non-empty string".into(),
            ));
        }
        if self.reaction_type.is_empty() {
            return Err(CodecError::Validation(
                "Reaction type must be a non-empty string".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_expiry() {
        let entry = StatusEntry::new("brb", 100, Some(200)).unwrap();
        assert!(!entry.is_expired(150));
        assert!(!entry.is_expired(200));
        assert!(entry.is_expired(201));

        let forever = StatusEntry::new("here", 100, None).unwrap();
        assert!(!forever.is_expired(u64::MAX));
    }

    #[test]
    fn test_entry_rejects_bad_expiry() {
        assert!(StatusEntry::new("x", 100, Some(100)).is_err());
        assert!(StatusEntry::new("", 100, None).is_err());
    }

    #[test]
    fn test_profile_default_is_public() {
        let profile = UserProfile::default();
        assert!(profile.is_public);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_reaction_validation() {
        let ok = Reaction {
            account_id: "alice.testnet".into(),
            reaction_type: "like".into(),
            timestamp: 0,
        };
        assert!(ok.validate().is_ok());

        let bad = Reaction {
            reaction_type: String::new(),
            ..ok
        };
        assert!(matches!(bad.validate(), Err(CodecError::Validation(_))));
    }
}
