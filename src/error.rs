//! Error definitions shared across library modules.
//! Each type models a specific failure scenario (record decoding,
//! serial transport loss, and related issues).
use thiserror_no_std::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors that can occur while decoding one replay record.
///
/// Both variants are recoverable: the session drops the record and moves on
/// to the next line without transmitting or acknowledging anything.
pub enum DecodeError {
    /// The record holds fewer than two delimiters (timestamp, id, and DLC
    /// are the minimum field set).
    #[error("Malformed record: fewer than three fields")]
    MalformedRecord,
    /// The record holds more delimiters than the fixed tracking table.
    #[error("Too many fields in record")]
    TooManyFields,
}

#[derive(Error, Debug)]
/// Fatal session failures: the serial link is the session's lifeline, so a
/// read or write error ends the replay. Bus send failures are NOT in this
/// taxonomy; they are counted per frame and the session keeps running.
pub enum ReplayError<E: core::fmt::Debug> {
    /// Serial link failed while reading the next record.
    #[error("Serial link read error: {0:?}")]
    Read(E),

    /// Serial link failed while writing an acknowledgment.
    #[error("Serial link write error: {0:?}")]
    Write(E),
}
