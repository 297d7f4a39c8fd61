//! Slice-based decoder implementation.

use thiserror::Error;

use crate::sans::{Decoder, record::Record};

use super::{FromRecords, is_line_ending};

/// Errors occurring while decoding from a slice.
#[derive(Debug, Error)]
pub enum Error {
    /// Unexpectedly reached the end of the slice within a record.
    #[error("Unexpectedly reached the end of the slice.")]
    EndOfSlice,
    /// The parser rejected the chunk starting at `offset`.
    #[error("Malformed record at offset {offset}.")]
    Malformed { offset: usize },
    /// Reached the end of the slice without finding an end-of-file record.
    #[error("Missing end-of-file record.")]
    MissingEndOfFile,
}

/// Decode records from a slice of a document, publishing to a receiver.
///
/// This method is also re-exported as `hexline::avec::decode_slice`.
pub fn decode(r: &[u8], o: &mut impl FromRecords) -> Result<(), Error> {
    let i = &mut 0; // Offset of the next unread byte.
    let mut decoder = Decoder::new();

    loop {
        while r.get(*i).copied().is_some_and(is_line_ending) {
            *i += 1;
        }

        if *i == r.len() {
            Err(Error::MissingEndOfFile)?;
        }

        let record = decode_record(&mut decoder, r, i)?;
        o.add_record(&record);

        if record.is_end_of_file() {
            return Ok(());
        }
    }
}

/// Feed a single record to the decoder, starting from its start delimiter.
fn decode_record(decoder: &mut Decoder, r: &[u8], i: &mut usize) -> Result<Record, Error> {
    let mut request = decoder.request();

    loop {
        let offset = *i;
        request = decoder.feed(take(r, i, request)?);

        if decoder.has_error() {
            Err(Error::Malformed { offset })?;
        }

        if decoder.is_record_ready() {
            return Ok(decoder.record());
        }
    }
}

/// Take a number of bytes from an offset in a slice, advancing the offset.
fn take<'a>(r: &'a [u8], i: &mut usize, n: usize) -> Result<&'a [u8], Error> {
    let s = *i;
    *i += n;

    r.get(s..*i).ok_or(Error::EndOfSlice)
}
