//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module run the parser over a whole document held in a
//! slice or read from a reader, publishing each completed record to the
//! [`FromRecords`] trait. Line terminators (`\r` and `\n`) between records are
//! skipped. Decoding stops after the first end-of-file record; any input
//! following it is left unread.

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;

use crate::sans::record::Record;

/// Receive records decoded from a document.
///
/// Implemented for closures taking a record, so a simple collector can be
/// written inline:
///
/// ```
/// let mut image = Vec::new();
/// decode_slice(data, &mut |r: &Record| image.extend_from_slice(&r.payload))?;
/// ```
pub trait FromRecords {
    /// Add a completed record. The final record of a document is always an
    /// end-of-file record.
    fn add_record(&mut self, record: &Record);
}

impl<F: FnMut(&Record)> FromRecords for F {
    fn add_record(&mut self, record: &Record) {
        self(record)
    }
}

/// Whether a byte terminates a line.
fn is_line_ending(b: u8) -> bool {
    matches!(b, b'\r' | b'\n')
}
