//! The record-level finite-state machine.

use log::{debug, trace};
use thiserror::Error;

use super::{
    check::Checksum,
    digit::{decode_byte, decode_pairs},
    record::{MAX_PAYLOAD_LEN, Payload, Record, RecordType},
};

/// A step of the parser, named for the field it is waiting on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting on the `:` start delimiter.
    #[default]
    AwaitStart,
    AwaitByteCount,
    AwaitAddress,
    AwaitRecordType,
    AwaitData,
    AwaitChecksum,
    /// Terminal. Only [`Parser::reset`] leaves this phase.
    Error,
}

/// Reason a chunk was rejected. Only ever logged; the parser itself reports
/// every failure through its error phase.
#[derive(Debug, Error)]
enum Rejection {
    #[error("expected {expected} characters, received {received}")]
    Length { expected: usize, received: usize },
    #[error("expected start delimiter, found {0:#04x}")]
    StartDelimiter(u8),
    #[error("non-hexadecimal character in field")]
    NotHex,
    #[error("byte count {0} exceeds payload capacity")]
    ByteCount(u8),
    #[error("unsupported record type")]
    RecordType,
    #[error("checksum mismatch (residue {0:#04x})")]
    Checksum(u8),
}

/// Pull-driven parser for colon-prefixed hexadecimal records.
///
/// The parser never scans for field boundaries itself. After each call to
/// [`feed`](Self::feed) it returns the exact number of characters it needs
/// next, and the caller must supply exactly that many on the following call.
/// The very first call supplies a single character: the start delimiter.
///
/// A single record is held at a time. Once [`is_record_ready`] reports true,
/// copy it out with [`record`](Self::record) or
/// [`read_record`](Self::read_record) before feeding the next record's start
/// delimiter, which discards it.
///
/// Any malformed input moves the parser into the terminal [`Phase::Error`],
/// after which `feed` does nothing until [`reset`](Self::reset) is called.
///
/// [`is_record_ready`]: Self::is_record_ready
#[derive(Debug, Default, Clone)]
pub struct Parser {
    phase: Phase,
    record_type: RecordType,
    byte_count: u8,
    address: u16,
    payload: Payload,
    checksum: Checksum,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed exactly the number of characters last requested.
    ///
    /// Returns the number of characters required next. Returns 0 when the
    /// parser is already in its error phase. When this chunk is rejected, the
    /// returned value is the width the current phase expected and carries no
    /// meaning for the caller.
    pub fn feed(&mut self, r: &[u8]) -> usize {
        let expected = self.request();

        if self.phase == Phase::Error {
            return 0;
        }

        if self.phase == Phase::AwaitStart {
            self.record_type = RecordType::Invalid;
        }

        let advanced = if r.len() == expected {
            self.advance(r)
        } else {
            Err(Rejection::Length {
                expected,
                received: r.len(),
            })
        };

        match advanced {
            Ok(phase) => {
                trace!("{:?} -> {:?}", self.phase, phase);
                self.phase = phase;
                self.request()
            }
            Err(reason) => {
                debug!("record rejected in {:?}: {}", self.phase, reason);
                self.phase = Phase::Error;
                expected
            }
        }
    }

    /// Number of characters the current phase expects.
    pub fn request(&self) -> usize {
        match self.phase {
            Phase::AwaitStart => 1,
            Phase::AwaitByteCount => 2,
            Phase::AwaitAddress => 4,
            Phase::AwaitRecordType => 2,
            Phase::AwaitData => self.byte_count as usize * 2,
            Phase::AwaitChecksum => 2,
            Phase::Error => 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a complete record with a valid checksum is available.
    pub fn is_record_ready(&self) -> bool {
        self.phase == Phase::AwaitStart && self.record_type != RecordType::Invalid
    }

    /// Type of the record most recently latched.
    ///
    /// This is [`RecordType::Invalid`] from the moment a start delimiter is fed
    /// until the record's type field (for end-of-file records) or payload (for
    /// data records) has been decoded.
    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn has_error(&self) -> bool {
        self.phase == Phase::Error
    }

    /// Copy the current record into `o`.
    ///
    /// Records other than data records report an empty payload. The contents
    /// are meaningful once [`is_record_ready`](Self::is_record_ready)
    /// has been observed.
    pub fn read_record(&self, o: &mut Record) {
        o.record_type = self.record_type;
        o.address = self.address;
        o.payload = match self.record_type {
            RecordType::Data => self.payload.clone(),
            _ => Payload::default(),
        };
    }

    /// Copy out the current record.
    pub fn record(&self) -> Record {
        let mut o = Record::default();
        self.read_record(&mut o);
        o
    }

    /// Return to waiting on a start delimiter, discarding any partial record
    /// and clearing the error phase.
    pub fn reset(&mut self) {
        trace!("{:?} -> reset", self.phase);
        self.phase = Phase::AwaitStart;
        self.record_type = RecordType::Invalid;
        self.checksum = Checksum::default();
    }

    /// Decode a chunk of the expected width, returning the successor phase.
    fn advance(&mut self, r: &[u8]) -> Result<Phase, Rejection> {
        let phase = match self.phase {
            Phase::AwaitStart => {
                if r[0] != b':' {
                    Err(Rejection::StartDelimiter(r[0]))?;
                }

                self.checksum = Checksum::default();
                Phase::AwaitByteCount
            }
            Phase::AwaitByteCount => {
                let byte_count = hex_byte(r[0], r[1])?;

                if byte_count as usize > MAX_PAYLOAD_LEN {
                    Err(Rejection::ByteCount(byte_count))?;
                }

                self.checksum.add(byte_count);
                self.byte_count = byte_count;
                Phase::AwaitAddress
            }
            Phase::AwaitAddress => {
                let msb = hex_byte(r[0], r[1])?;
                let lsb = hex_byte(r[2], r[3])?;

                self.checksum.add(msb);
                self.checksum.add(lsb);
                self.address = u16::from_be_bytes([msb, lsb]);
                Phase::AwaitRecordType
            }
            Phase::AwaitRecordType => match r {
                b"00" => {
                    self.checksum.add(0x00);
                    Phase::AwaitData
                }
                b"01" => {
                    self.checksum.add(0x01);
                    self.record_type = RecordType::EndOfFile;
                    Phase::AwaitChecksum
                }
                _ => Err(Rejection::RecordType)?,
            },
            Phase::AwaitData => {
                self.payload.clear();

                for b in decode_pairs(r) {
                    let b = b.ok_or(Rejection::NotHex)?;
                    self.checksum.add(b);
                    // Capacity is guaranteed by the byte count bound.
                    self.payload.push(b);
                }

                self.record_type = RecordType::Data;
                Phase::AwaitChecksum
            }
            Phase::AwaitChecksum => {
                self.checksum.add(hex_byte(r[0], r[1])?);

                if !self.checksum.is_valid() {
                    Err(Rejection::Checksum(self.checksum.low_byte()))?;
                }

                Phase::AwaitStart
            }
            Phase::Error => Phase::Error,
        };

        Ok(phase)
    }
}

fn hex_byte(high: u8, low: u8) -> Result<u8, Rejection> {
    decode_byte(high, low).ok_or(Rejection::NotHex)
}
