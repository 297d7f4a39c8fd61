//! Decoded records, as handed out by the parser.

use tinyvec::ArrayVec;

/// Maximum number of payload bytes held for a single record.
///
/// The byte count field can express up to 255 bytes. Records declaring more
/// than this are rejected by the parser.
pub const MAX_PAYLOAD_LEN: usize = 50;

/// Fixed-capacity storage for a record payload.
pub type Payload = ArrayVec<[u8; MAX_PAYLOAD_LEN]>;

/// The kind of a record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// No record has been completed, or a record is still being parsed.
    #[default]
    Invalid,
    /// Record type `00`.
    Data,
    /// Record type `01`.
    EndOfFile,
}

/// A decoded record.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Record {
    pub record_type: RecordType,
    /// Starting address of the record.
    pub address: u16,
    /// Payload bytes. Always empty for records other than [`RecordType::Data`].
    pub payload: Payload,
}

impl Record {
    /// Number of payload bytes.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    pub fn is_end_of_file(&self) -> bool {
        self.record_type == RecordType::EndOfFile
    }
}
