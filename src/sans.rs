//! Pull-driven parser for implementing decoders.
//!
//! This module is intended for applications that manage their own input, such
//! as those reading from a serial port on an embedded system. See
//! [`crate::avec`] for drivers covering slices and readers.
//!
//! # Architecture
//!
//! A record has the shape `: BB AAAA TT [DD...] CC`, where each pair of
//! characters is one hexadecimal byte:
//!
//! - `BB`: number of payload bytes.
//! - `AAAA`: 16-bit starting address, most significant byte first.
//! - `TT`: record type, `00` for data and `01` for end of file.
//! - `DD...`: payload, present for data records.
//! - `CC`: two's-complement of the low byte of the sum of all preceding bytes.
//!
//! The [`Decoder`] consumes one field per call. Rather than scanning a buffer
//! for boundaries, it tells the caller how many characters it needs next, and
//! the caller supplies exactly that many. A loop driving it looks like:
//!
//! ```
//! let mut decoder = Decoder::new();
//! let mut request = 1;
//! let mut i = 0;
//!
//! while !decoder.is_record_ready() && !decoder.has_error() {
//!     let chunk = &line[i..i + request];
//!     i += request;
//!     request = decoder.feed(chunk);
//! }
//! ```
//!
//! Some areas of the decoding process are not represented in the parser and
//! are left to the caller:
//!
//! - Skipping line terminators between records.
//! - Copying out a ready record before feeding the next start delimiter.
//! - Resynchronizing after an error. The parser only leaves its error phase
//!   through [`reset`](parser::Parser::reset); finding the start of the next
//!   record in the input is up to the caller.

pub mod check;
pub mod digit;
pub mod parser;
pub mod record;

/// Entrypoint to the parser.
pub type Decoder = parser::Parser;
