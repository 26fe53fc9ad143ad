//! Minimal abstraction for the CAN bus sink. Allows the replay core to plug
//! into various implementations (embedded HAL, desktop driver, etc.).
//!
//! The core only ever transmits; controller initialization, pin
//! configuration, and bus-error recovery belong to the implementation.
use crate::frame::CanFrame;
use futures_util::Future;

/// Contract to emit CAN frames.
pub trait CanBus {
    type Error: core::fmt::Debug;
    /// Emit a frame on the bus. Asynchronous to accommodate non-blocking
    /// drivers; the replay session awaits the result before reading the next
    /// record, so at most one frame is ever in flight.
    fn send<'a>(
        &'a mut self,
        frame: &'a CanFrame,
    ) -> impl Future<Output = Result<(), Self::Error>> + 'a;
}
