//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::{ErrorKind, Read};

use thiserror::Error;

use crate::sans::{Decoder, record::MAX_PAYLOAD_LEN};

use super::{FromRecords, is_line_ending};

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Unexpectedly reached the end of the stream within a record.
    #[error("Unexpectedly reached the end of the stream.")]
    EndOfStream,
    /// The parser rejected the chunk starting at `offset`.
    #[error("Malformed record at offset {offset}.")]
    Malformed { offset: usize },
    /// Reached the end of the stream without finding an end-of-file record.
    #[error("Missing end-of-file record.")]
    MissingEndOfFile,
}

/// Decode records from a reader of a document, publishing to a receiver.
///
/// Reads are issued for exactly the number of characters the parser requests,
/// so wrapping an unbuffered source in a [`std::io::BufReader`] is
/// recommended.
///
/// This method is also re-exported as `hexline::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl Read, o: &mut impl FromRecords) -> Result<(), Error> {
    let i = &mut 0; // Counter of bytes read, used to report offsets.
    let mut decoder = Decoder::new();
    let mut buf = [0; 2 * MAX_PAYLOAD_LEN];

    loop {
        // Skip line terminators, keeping the first byte of the next record.
        let start = loop {
            let [b] = match take::<1>(r, i) {
                Err(Error::EndOfStream) => Err(Error::MissingEndOfFile)?,
                b => b?,
            };

            if !is_line_ending(b) {
                break b;
            }
        };

        let mut offset = *i - 1;
        let mut request = decoder.feed(&[start]);

        while !decoder.has_error() && !decoder.is_record_ready() {
            offset = *i;

            let chunk = &mut buf[..request];
            read(r, i, chunk)?;
            request = decoder.feed(chunk);
        }

        if decoder.has_error() {
            Err(Error::Malformed { offset })?;
        }

        let record = decoder.record();
        o.add_record(&record);

        if record.is_end_of_file() {
            return Ok(());
        }
    }
}

/// Take an exact number of bytes from a reader, advancing a counter.
fn take<const N: usize>(r: &mut impl Read, i: &mut usize) -> Result<[u8; N], Error> {
    let mut buf = [0; N];
    read(r, i, &mut buf)?;

    Ok(buf)
}

/// Fill a buffer from a reader, advancing a counter.
fn read(r: &mut impl Read, i: &mut usize, buf: &mut [u8]) -> Result<(), Error> {
    r.read_exact(buf).map_err(|err| match err.kind() {
        ErrorKind::UnexpectedEof => Error::EndOfStream,
        _ => Error::Io(err),
    })?;
    *i += buf.len();

    Ok(())
}
