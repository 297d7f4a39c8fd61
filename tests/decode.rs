#![cfg(feature = "std")]

use std::{io::BufReader, path::Path};

use csv::ReaderBuilder;
use hexline::{
    avec::{reader, slice},
    sans::{
        digit::decode_pairs,
        record::{Record, RecordType},
    },
};

#[test]
fn decode_slice_blink() {
    const PATH: &str = "fixtures/blink.hex";
    let data = std::fs::read(PATH).unwrap();
    let mut records = vec![];
    hexline::avec::decode_slice(&data, &mut |r: &Record| records.push(r.clone())).unwrap();
    assert_eq!(records, expected(PATH));
}

#[test]
fn decode_slice_mixed() {
    const PATH: &str = "fixtures/mixed.hex";
    let data = std::fs::read(PATH).unwrap();
    let mut records = vec![];
    hexline::avec::decode_slice(&data, &mut |r: &Record| records.push(r.clone())).unwrap();
    assert_eq!(records, expected(PATH));
}

#[test]
fn decode_reader_blink() {
    const PATH: &str = "fixtures/blink.hex";
    let mut file = BufReader::new(std::fs::File::open(PATH).unwrap());
    let mut records = vec![];
    hexline::avec::decode_reader(&mut file, &mut |r: &Record| records.push(r.clone())).unwrap();
    assert_eq!(records, expected(PATH));
}

#[test]
fn decode_reader_mixed() {
    const PATH: &str = "fixtures/mixed.hex";
    let mut file = BufReader::new(std::fs::File::open(PATH).unwrap());
    let mut records = vec![];
    hexline::avec::decode_reader(&mut file, &mut |r: &Record| records.push(r.clone())).unwrap();
    assert_eq!(records, expected(PATH));
}

const CORRUPT_CHECKSUM: &[u8] = b":0B0010006164647265737320676170A7\n:0B0020006164647265737320676170A6\n";
const UNSUPPORTED_TYPE: &[u8] = b":020000040800F2\n:00000001FF\n";
const NO_END_OF_FILE: &[u8] = b":0B0010006164647265737320676170A7\n\n";
const TRUNCATED: &[u8] = b":0B00100061646472657373";

#[test]
fn decode_slice_corrupt_checksum() {
    let mut count = 0;
    let err = slice::decode(CORRUPT_CHECKSUM, &mut |_: &Record| count += 1).unwrap_err();
    assert!(matches!(err, slice::Error::Malformed { offset: 65 }), "{err:?}");
    assert_eq!(count, 1);
}

#[test]
fn decode_slice_unsupported_type() {
    let err = slice::decode(UNSUPPORTED_TYPE, &mut |_: &Record| {}).unwrap_err();
    assert!(matches!(err, slice::Error::Malformed { offset: 7 }), "{err:?}");
}

#[test]
fn decode_slice_missing_end_of_file() {
    let err = slice::decode(NO_END_OF_FILE, &mut |_: &Record| {}).unwrap_err();
    assert!(matches!(err, slice::Error::MissingEndOfFile), "{err:?}");
}

#[test]
fn decode_slice_truncated() {
    let err = slice::decode(TRUNCATED, &mut |_: &Record| {}).unwrap_err();
    assert!(matches!(err, slice::Error::EndOfSlice), "{err:?}");
}

#[test]
fn decode_slice_stops_at_end_of_file() {
    let mut records = vec![];
    slice::decode(b":00000001FF\n:garbage", &mut |r: &Record| records.push(r.clone())).unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].is_end_of_file());
}

#[test]
fn decode_reader_corrupt_checksum() {
    let mut count = 0;
    let err = reader::decode(&mut &CORRUPT_CHECKSUM[..], &mut |_: &Record| count += 1).unwrap_err();
    assert!(matches!(err, reader::Error::Malformed { offset: 65 }), "{err:?}");
    assert_eq!(count, 1);
}

#[test]
fn decode_reader_unsupported_type() {
    let err = reader::decode(&mut &UNSUPPORTED_TYPE[..], &mut |_: &Record| {}).unwrap_err();
    assert!(matches!(err, reader::Error::Malformed { offset: 7 }), "{err:?}");
}

#[test]
fn decode_reader_missing_end_of_file() {
    let err = reader::decode(&mut &NO_END_OF_FILE[..], &mut |_: &Record| {}).unwrap_err();
    assert!(matches!(err, reader::Error::MissingEndOfFile), "{err:?}");
}

#[test]
fn decode_reader_truncated() {
    let err = reader::decode(&mut &TRUNCATED[..], &mut |_: &Record| {}).unwrap_err();
    assert!(matches!(err, reader::Error::EndOfStream), "{err:?}");
}

#[test]
fn decode_reader_malformed_start() {
    let err = reader::decode(&mut &b"\r\n;00000001FF"[..], &mut |_: &Record| {}).unwrap_err();
    assert!(matches!(err, reader::Error::Malformed { offset: 2 }), "{err:?}");
}

/// Read the records listed in the CSV file accompanying a fixture.
///
/// Each row holds the record kind (`data` or `eof`), the address, and the
/// payload, with numbers in hexadecimal.
fn expected(path: impl AsRef<Path>) -> Vec<Record> {
    let path = path.as_ref().with_extension("csv");

    let mut rows = ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path)
        .unwrap();

    rows.records()
        .map(|r| {
            let r = r.unwrap();

            let record_type = match &r[0] {
                "data" => RecordType::Data,
                "eof" => RecordType::EndOfFile,
                kind => panic!("unknown record kind {kind}"),
            };
            let address = u16::from_str_radix(&r[1], 16).unwrap();
            let payload = decode_pairs(r[2].as_bytes()).map(Option::unwrap).collect();

            Record {
                record_type,
                address,
                payload,
            }
        })
        .collect()
}
