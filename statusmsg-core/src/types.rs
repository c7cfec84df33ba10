//! Core types for status state

use crate::constants::{messages, MIN_MESSAGE_SIZE, MIN_RECORD_SIZE};
use crate::error::CodecError;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// Trait for values that are persisted as Borsh contract state
///
/// Every value passes `validate` before it is encoded and again after it is
/// decoded, so invalid state never crosses the codec boundary.
pub trait BorshState: BorshSerialize + BorshDeserialize {
    /// Name used in schema lookups and log lines
    const TYPE_NAME: &'static str;

    /// Check the value's field invariants
    fn validate(&self) -> Result<(), CodecError>;
}

/// A single status record keyed by account identifier
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
pub struct Record {
    /// Account identifier (must be non-empty)
    pub k: String,

    /// Status text (may be empty)
    pub v: String,
}

impl Record {
    /// Create a validated record
    pub fn new(k: impl Into<String>, v: impl Into<String>) -> Result<Self, CodecError> {
        let record = Self {
            k: k.into(),
            v: v.into(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), CodecError> {
        if self.k.is_empty() {
            return Err(CodecError::Validation(messages::INVALID_KEY.into()));
        }
        Ok(())
    }

    /// Encoded size in bytes
    pub fn encoded_len(&self) -> usize {
        MIN_RECORD_SIZE + self.k.len() + self.v.len()
    }
}

impl BorshState for Record {
    const TYPE_NAME: &'static str = "Record";

    fn validate(&self) -> Result<(), CodecError> {
        Record::validate(self)
    }
}

/// Ordered association list of status records
///
/// Keys are not deduplicated: adding a record for an account that already
/// has one appends a second entry, and lookups act on the first match.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
pub struct StatusMessage {
    /// Records in insertion order
    pub records: Vec<Record>,
}

impl StatusMessage {
    /// Create a message from existing records (not validated)
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Start building a message
    pub fn builder() -> StatusMessageBuilder {
        StatusMessageBuilder::new()
    }

    /// Turn this message back into a builder for in-place edits
    pub fn into_builder(self) -> StatusMessageBuilder {
        StatusMessageBuilder {
            records: self.records,
        }
    }

    /// Validate the message and every record in it
    pub fn validate(&self) -> Result<(), CodecError> {
        self.records.iter().try_for_each(Record::validate)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the message has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in order
    pub fn iter(&self) -> core::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// First record for `account`, if any
    pub fn record_by_account(&self, account: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.k == account)
    }

    /// Return a new message with a record appended
    pub fn with_record(
        &self,
        account: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, CodecError> {
        let record = Record::new(account, message)?;
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.extend_from_slice(&self.records);
        records.push(record);
        Ok(Self { records })
    }

    /// Return a new message without the first record for `account`
    ///
    /// The flag is `true` when a record was removed.
    pub fn without_account(&self, account: &str) -> (Self, bool) {
        match self.records.iter().position(|record| record.k == account) {
            Some(index) => {
                let mut records = self.records.clone();
                records.remove(index);
                (Self { records }, true)
            }
            None => (self.clone(), false),
        }
    }

    /// Encoded size in bytes
    pub fn encoded_len(&self) -> usize {
        MIN_MESSAGE_SIZE + self.records.iter().map(Record::encoded_len).sum::<usize>()
    }
}

impl BorshState for StatusMessage {
    const TYPE_NAME: &'static str = "StatusMessage";

    fn validate(&self) -> Result<(), CodecError> {
        StatusMessage::validate(self)
    }
}

impl FromIterator<Record> for StatusMessage {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StatusMessage {
    type Item = &'a Record;
    type IntoIter = core::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Builder for editing a message in place before freezing it
#[derive(Debug, Clone, Default)]
pub struct StatusMessageBuilder {
    records: Vec<Record>,
}

impl StatusMessageBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record (validated on `build`)
    pub fn record(mut self, account: impl Into<String>, message: impl Into<String>) -> Self {
        self.records.push(Record {
            k: account.into(),
            v: message.into(),
        });
        self
    }

    /// Append a validated record
    pub fn add_record(
        &mut self,
        account: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<&mut Self, CodecError> {
        let record = Record::new(account, message)?;
        self.records.push(record);
        Ok(self)
    }

    /// First record for `account`, if any
    pub fn get_record_by_account(&self, account: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.k == account)
    }

    /// Remove the first record for `account`, returning whether one was found
    pub fn remove_record_by_account(&mut self, account: &str) -> bool {
        match self.records.iter().position(|record| record.k == account) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of records so far
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records have been added
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate and freeze the message
    pub fn build(self) -> Result<StatusMessage, CodecError> {
        let message = StatusMessage {
            records: self.records,
        };
        message.validate()?;
        Ok(message)
    }
}
