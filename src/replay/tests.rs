//! Record trimming tests. Session-level behavior lives in the integration
//! suite under `tests/`.
use super::*;

#[test]
/// CR, LF, and trailing spaces are stripped; leading content is untouched.
fn trim_strips_line_endings() {
    assert_eq!(trim_record(b"0,090,1,FF\r\n"), "0,090,1,FF");
    assert_eq!(trim_record(b"0,090,1,FF\n"), "0,090,1,FF");
    assert_eq!(trim_record(b"END\r\n"), END_OF_SESSION);
    assert_eq!(trim_record(b"END \t"), END_OF_SESSION);
}

#[test]
/// Non-UTF-8 bytes degrade to an empty record rather than panicking.
fn trim_tolerates_invalid_utf8() {
    assert_eq!(trim_record(&[0xFF, 0xFE, b'\n']), "");
}

#[test]
/// A bare terminator is an empty record.
fn trim_empty_line() {
    assert_eq!(trim_record(b"\r\n"), "");
    assert_eq!(trim_record(b""), "");
}
