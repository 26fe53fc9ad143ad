//! `can-replay` library: the device-side core of a CAN log replay link in a
//! `no_std` environment. A host streams newline-delimited text records over a
//! serial transport; this crate decodes each record into a classic CAN frame,
//! hands it to a pluggable bus driver, and acknowledges every transmitted
//! frame with a literal `OK` line. A literal `END` record ends the session.
#![no_std]
//==================================================================================
/// Record decoder: turns one comma-separated text line into a CAN frame.
pub mod decoder;
/// Domain errors (record decoding and session transport failures).
pub mod error;
/// Classic CAN frame representation handed to the bus driver.
pub mod frame;
/// Session driver: read, decode, transmit, acknowledge, looped per line.
pub mod replay;
/// Abstraction traits for the serial link and the CAN bus sink.
pub mod traits;
//==================================================================================
