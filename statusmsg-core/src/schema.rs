//! Static description of the Borsh layout
//!
//! The registry mirrors the derived encodings in `types` and `state`. It is
//! used to walk a raw buffer field by field without decoding it into typed
//! values, which is what `describe` does for diagnostics.

use crate::constants::{LENGTH_PREFIX_SIZE, TAG_SIZE, U64_SIZE};
use crate::error::CodecError;

/// Kind of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// u32-LE byte length followed by UTF-8 bytes
    String,
    /// u64 little-endian
    U64,
    /// One byte, 0 or 1
    Bool,
    /// One tag byte (0 = None, 1 = Some) followed by the inner value
    Option(&'static FieldKind),
    /// u32-LE element count followed by each element of the named struct
    Seq(&'static str),
}

/// A named field within a struct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name
    pub name: &'static str,
    /// Field kind
    pub kind: FieldKind,
}

/// A struct: fields encoded in declaration order, no padding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructDef {
    /// Struct name
    pub name: &'static str,
    /// Fields in encoding order
    pub fields: &'static [FieldDef],
}

/// `StatusMessage { records: [Record] }`
pub const STATUS_MESSAGE: StructDef = StructDef {
    name: "StatusMessage",
    fields: &[FieldDef {
        name: "records",
        kind: FieldKind::Seq("Record"),
    }],
};

/// `Record { k: string, v: string }`
pub const RECORD: StructDef = StructDef {
    name: "Record",
    fields: &[
        FieldDef {
            name: "k",
            kind: FieldKind::String,
        },
        FieldDef {
            name: "v",
            kind: FieldKind::String,
        },
    ],
};

/// `StatusEntry { message: string, timestamp: u64, expires_at: Option<u64> }`
pub const STATUS_ENTRY: StructDef = StructDef {
    name: "StatusEntry",
    fields: &[
        FieldDef {
            name: "message",
            kind: FieldKind::String,
        },
        FieldDef {
            name: "timestamp",
            kind: FieldKind::U64,
        },
        FieldDef {
            name: "expires_at",
            kind: FieldKind::Option(&FieldKind::U64),
        },
    ],
};

/// `UserProfile { name: string, bio: string, is_public: bool }`
pub const USER_PROFILE: StructDef = StructDef {
    name: "UserProfile",
    fields: &[
        FieldDef {
            name: "name",
            kind: FieldKind::String,
        },
        FieldDef {
            name: "bio",
            kind: FieldKind::String,
        },
        FieldDef {
            name: "is_public",
            kind: FieldKind::Bool,
        },
    ],
};

/// `Reaction { account_id: string, reaction_type: string, timestamp: u64 }`
pub const REACTION: StructDef = StructDef {
    name: "Reaction",
    fields: &[
        FieldDef {
            name: "account_id",
            kind: FieldKind::String,
        },
        FieldDef {
            name: "reaction_type",
            kind: FieldKind::String,
        },
        FieldDef {
            name: "timestamp",
            kind: FieldKind::U64,
        },
    ],
};

/// Every struct known to the codec
pub const SCHEMA: &[StructDef] = &[STATUS_MESSAGE, RECORD, STATUS_ENTRY, USER_PROFILE, REACTION];

/// Find a struct definition by name
pub fn lookup(name: &str) -> Option<&'static StructDef> {
    SCHEMA.iter().find(|def| def.name == name)
}

/// A located field inside an encoded buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpan {
    /// Dotted path, e.g. `StatusMessage.records[0].k`
    pub path: String,
    /// Byte offset of the field (including its prefix)
    pub offset: usize,
    /// Encoded length of the field (including its prefix)
    pub len: usize,
    /// Human-readable value
    pub value: String,
}

/// Walk `bytes` against `root` and list every leaf field
///
/// The walk is strict: a truncated buffer, a bad tag, invalid UTF-8 or
/// trailing bytes all fail with a decoding error.
pub fn describe(bytes: &[u8], root: &StructDef) -> Result<Vec<FieldSpan>, CodecError> {
    let mut walker = Walker {
        bytes,
        pos: 0,
        spans: Vec::new(),
    };
    walker.walk_struct(root, root.name)?;

    if walker.pos != bytes.len() {
        return Err(CodecError::Decoding(format!(
            "{} trailing bytes after {}",
            bytes.len() - walker.pos,
            root.name
        )));
    }

    Ok(walker.spans)
}

struct Walker<'a> {
    bytes: &'a [u8],
    pos: usize,
    spans: Vec<FieldSpan>,
}

impl<'a> Walker<'a> {
    fn take(&mut self, n: usize, path: &str) -> Result<&'a [u8], CodecError> {
        let bytes: &'a [u8] = self.bytes;
        let available = bytes.len() - self.pos;
        if n > available {
            return Err(CodecError::Decoding(format!(
                "Unexpected end of buffer at {}: need {} bytes at offset {}, have {}",
                path, n, self.pos, available
            )));
        }
        let slice = &bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn read_u32(&mut self, path: &str) -> Result<u32, CodecError> {
        let b = self.take(LENGTH_PREFIX_SIZE, path)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn push(&mut self, path: &str, start: usize, value: String) {
        self.spans.push(FieldSpan {
            path: path.to_string(),
            offset: start,
            len: self.pos - start,
            value,
        });
    }

    fn walk_struct(&mut self, def: &StructDef, path: &str) -> Result<(), CodecError> {
        for field in def.fields {
            self.walk_field(&field.kind, &format!("{}.{}", path, field.name))?;
        }
        Ok(())
    }

    fn walk_field(&mut self, kind: &FieldKind, path: &str) -> Result<(), CodecError> {
        let start = self.pos;
        match kind {
            FieldKind::String => {
                let len = self.read_u32(path)? as usize;
                let raw = self.take(len, path)?;
                let text = std::str::from_utf8(raw).map_err(|e| {
                    CodecError::Decoding(format!("Invalid UTF-8 at {}: {}", path, e))
                })?;
                self.push(path, start, format!("{:?}", text));
            }
            FieldKind::U64 => {
                let b = self.take(U64_SIZE, path)?;
                let mut raw = [0u8; U64_SIZE];
                raw.copy_from_slice(b);
                self.push(path, start, u64::from_le_bytes(raw).to_string());
            }
            FieldKind::Bool => {
                let value = match self.take(TAG_SIZE, path)?[0] {
                    0 => "false",
                    1 => "true",
                    other => {
                        return Err(CodecError::Decoding(format!(
                            "Invalid bool value {} at {}",
                            other, path
                        )))
                    }
                };
                self.push(path, start, value.to_string());
            }
            FieldKind::Option(inner) => match self.take(TAG_SIZE, path)?[0] {
                0 => self.push(path, start, "None".to_string()),
                1 => {
                    self.push(path, start, "Some".to_string());
                    self.walk_field(inner, path)?;
                }
                other => {
                    return Err(CodecError::Decoding(format!(
                        "Invalid option tag {} at {}",
                        other, path
                    )))
                }
            },
            FieldKind::Seq(name) => {
                let count = self.read_u32(path)?;
                self.push(path, start, format!("{} element(s)", count));
                let def = lookup(name).ok_or_else(|| {
                    CodecError::Decoding(format!("Unknown struct {} at {}", name, path))
                })?;
                for i in 0..count {
                    self.walk_struct(def, &format!("{}[{}]", path, i))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("Record"), Some(&RECORD));
        assert!(lookup("Nope").is_none());
    }

    #[test]
    fn test_record_field_order() {
        let names: Vec<_> = RECORD.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, ["k", "v"]);
    }

    #[test]
    fn test_describe_message() {
        // count=1, k="ab", v=""
        let bytes = [1, 0, 0, 0, 2, 0, 0, 0, b'a', b'b', 0, 0, 0, 0];
        let spans = describe(&bytes, &STATUS_MESSAGE).unwrap();

        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].path, "StatusMessage.records");
        assert_eq!(spans[0].len, 4);
        assert_eq!(spans[1].path, "StatusMessage.records[0].k");
        assert_eq!(spans[1].offset, 4);
        assert_eq!(spans[1].len, 6);
        assert_eq!(spans[1].value, "\"ab\"");
        assert_eq!(spans[2].offset, 10);
        assert_eq!(spans[2].value, "\"\"");
    }

    #[test]
    fn test_describe_truncated() {
        let bytes = [1, 0, 0, 0, 9, 0, 0, 0, b'a'];
        assert!(matches!(
            describe(&bytes, &STATUS_MESSAGE),
            Err(CodecError::Decoding(_))
        ));
    }

    #[test]
    fn test_describe_trailing_bytes() {
        let bytes = [0, 0, 0, 0, 0xFF];
        assert!(describe(&bytes, &STATUS_MESSAGE).is_err());
    }

    #[test]
    fn test_describe_option() {
        let mut bytes = vec![1, 0, 0, 0, b'x'];
        bytes.extend_from_slice(&5u64.to_le_bytes());
        bytes.push(1);
        bytes.extend_from_slice(&9u64.to_le_bytes());

        let spans = describe(&bytes, &STATUS_ENTRY).unwrap();
        let values: Vec<_> = spans.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, ["\"x\"", "5", "Some", "9"]);
    }
}
