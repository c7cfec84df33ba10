//! Library entry for statusmsg-cli used by integration tests and embedding.

pub mod commands;

use statusmsg_core::schema::{self, StructDef};

/// Which persisted shape a payload holds
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StateKind {
    /// `StatusMessage { records: [Record] }`
    #[default]
    Message,
    /// One status history entry
    Entry,
    /// A user profile
    Profile,
    /// A reaction
    Reaction,
}

impl StateKind {
    /// Schema definition for this shape
    pub fn schema(self) -> &'static StructDef {
        match self {
            StateKind::Message => &schema::STATUS_MESSAGE,
            StateKind::Entry => &schema::STATUS_ENTRY,
            StateKind::Profile => &schema::USER_PROFILE,
            StateKind::Reaction => &schema::REACTION,
        }
    }
}

// Re-export commonly used items
pub use crate::commands::{decode, encode, inspect, lookup, state_key};
