//! Byte-line transport abstraction: the inbound side delivers replay records,
//! the outbound side carries acknowledgments back to the host.
//!
//! Transport setup (baud rate, port selection, flow control) is entirely the
//! implementation's concern.
use futures_util::Future;

/// Contract for a newline-delimited, bidirectional serial link.
pub trait SerialLink {
    type Error: core::fmt::Debug;

    /// Read one terminated line into `buf` and return the number of bytes
    /// written. Terminator bytes (`\r`, `\n`) may be included; the session
    /// trims them. A bare terminator yields zero bytes.
    ///
    /// Implementations should accept at least
    /// [`MAX_LINE_LEN`](crate::replay::MAX_LINE_LEN)-byte buffers and
    /// truncate anything longer than the caller's buffer.
    fn read_line<'a>(
        &'a mut self,
        buf: &'a mut [u8],
    ) -> impl Future<Output = Result<usize, Self::Error>> + 'a;

    /// Write one line on the outbound side. The implementation appends the
    /// line terminator.
    fn write_line<'a>(
        &'a mut self,
        line: &'a str,
    ) -> impl Future<Output = Result<(), Self::Error>> + 'a;
}
