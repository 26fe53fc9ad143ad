//! Replay session driver: reads records from the serial link, decodes them,
//! transmits the resulting frames on the CAN bus, and acknowledges every
//! transmission with an `OK` line.
//!
//! The loop is fully sequential: each iteration completes (read, decode,
//! send, acknowledge) before the next line is consumed, so reading, decoding,
//! and transmitting never overlap and at most one frame is in flight.
use crate::{
    decoder,
    error::ReplayError,
    traits::{can_bus::CanBus, serial_link::SerialLink},
};

//==================================================================================Constants

/// Record terminating a replay session. Checked before any field parsing, so
/// whatever the host streams after it is never interpreted.
pub const END_OF_SESSION: &str = "END";

/// Acknowledgment emitted after each successful bus transmission. The host
/// counts these to track replay progress.
pub const FRAME_ACK: &str = "OK";

/// Line buffer capacity. The longest well-formed record (decimal timestamp,
/// eight-digit hex id, DLC, eight data bytes) stays under 70 bytes; the
/// headroom absorbs host-side padding.
pub const MAX_LINE_LEN: usize = 256;

//==================================================================================Stats

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Counters accumulated over one replay session, returned at termination.
pub struct ReplayStats {
    /// Frames decoded, transmitted, and acknowledged.
    pub sent: u32,
    /// Records dropped by the decoder (malformed or oversized).
    pub dropped: u32,
    /// Frames the bus driver rejected. No acknowledgment is emitted for
    /// these; the host notices the gap.
    pub bus_errors: u32,
}

//==================================================================================Session

/// One replay session over a serial link and a CAN bus sink.
///
/// Owns its line buffer; every decoded frame is a fresh, fully initialized
/// value, so a short frame can never inherit stale payload bytes from a
/// longer predecessor.
pub struct ReplaySession<L, B> {
    link: L,
    bus: B,
    line: [u8; MAX_LINE_LEN],
}

impl<L, B> ReplaySession<L, B>
where
    L: SerialLink,
    B: CanBus,
{
    /// Bind a session to its transport and bus driver.
    pub fn new(link: L, bus: B) -> Self {
        Self {
            link,
            bus,
            line: [0u8; MAX_LINE_LEN],
        }
    }

    /// Run the replay loop until the host sends the end-of-session record.
    ///
    /// Per record: sentinel check, decode, transmit, acknowledge. Decode
    /// failures and bus rejections are counted and skipped; only a serial
    /// link failure aborts the session, since without the link there is
    /// nothing left to replay or acknowledge.
    pub async fn run(&mut self) -> Result<ReplayStats, ReplayError<L::Error>> {
        let mut stats = ReplayStats::default();

        loop {
            let read = self
                .link
                .read_line(&mut self.line)
                .await
                .map_err(ReplayError::Read)?;
            let record = trim_record(&self.line[..read.min(MAX_LINE_LEN)]);

            // Sentinel check happens before any field parsing.
            if record == END_OF_SESSION {
                return Ok(stats);
            }

            let frame = match decoder::decode(record) {
                Ok(frame) => frame,
                Err(_) => {
                    // Dropped silently; the host never receives an ack.
                    stats.dropped += 1;
                    continue;
                }
            };

            if self.bus.send(&frame).await.is_err() {
                // Fire and forget: no retry, no ack.
                stats.bus_errors += 1;
                continue;
            }

            self.link
                .write_line(FRAME_ACK)
                .await
                .map_err(ReplayError::Write)?;
            stats.sent += 1;
        }
    }

    /// Release the transport and the bus driver.
    pub fn into_parts(self) -> (L, B) {
        (self.link, self.bus)
    }
}

/// Strip line-ending whitespace from a raw line. Non-UTF-8 input degrades to
/// an empty record, which the decoder then rejects as malformed.
fn trim_record(raw: &[u8]) -> &str {
    core::str::from_utf8(raw).unwrap_or("").trim_end()
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
