//! In-memory representation of a classic CAN 2.0 frame as handed to the bus
//! driver. Interoperates with HAL drivers through [`embedded_can::Frame`].
use embedded_can::{ExtendedId, Id, StandardId};

/// Highest arbitration identifier representable in the 11-bit standard format.
/// Anything above it is carried as a 29-bit extended identifier.
pub const STANDARD_ID_MAX: u32 = 0x7FF;

/// Classic CAN payload capacity in bytes.
pub const MAX_FRAME_DATA: usize = 8;

//==================================================================================CAN_FRAME
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// One CAN frame, fully initialized at construction. The payload buffer always
/// provides eight bytes; slots at or beyond `len` are zero.
pub struct CanFrame {
    /// Arbitration identifier (11-bit standard or 29-bit extended).
    pub id: u32,
    /// Extended-identifier flag, derived from `id`, never supplied separately.
    pub extended: bool,
    /// Remote transmission request flag. Replay records never set it.
    pub remote_request: bool,
    /// Number of valid payload bytes (Data Length Code, 0 to 8).
    pub len: usize,
    /// Payload buffer.
    pub data: [u8; MAX_FRAME_DATA],
}

impl CanFrame {
    /// Build a data frame. The extended flag is a pure function of `id`, and
    /// a DLC above eight is clamped rather than rejected.
    pub fn data_frame(id: u32, len: usize, data: [u8; MAX_FRAME_DATA]) -> Self {
        Self {
            id,
            extended: id > STANDARD_ID_MAX,
            remote_request: false,
            len: len.min(MAX_FRAME_DATA),
            data,
        }
    }
}

//==================================================================================EMBEDDED_CAN
impl embedded_can::Frame for CanFrame {
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        if data.len() > MAX_FRAME_DATA {
            return None;
        }
        let (raw, extended) = match id.into() {
            Id::Standard(sid) => (sid.as_raw() as u32, false),
            Id::Extended(eid) => (eid.as_raw(), true),
        };
        let mut payload = [0u8; MAX_FRAME_DATA];
        payload[..data.len()].copy_from_slice(data);
        Some(Self {
            id: raw,
            extended,
            remote_request: false,
            len: data.len(),
            data: payload,
        })
    }

    fn new_remote(id: impl Into<Id>, dlc: usize) -> Option<Self> {
        if dlc > MAX_FRAME_DATA {
            return None;
        }
        let (raw, extended) = match id.into() {
            Id::Standard(sid) => (sid.as_raw() as u32, false),
            Id::Extended(eid) => (eid.as_raw(), true),
        };
        Some(Self {
            id: raw,
            extended,
            remote_request: true,
            len: dlc,
            data: [0u8; MAX_FRAME_DATA],
        })
    }

    fn is_extended(&self) -> bool {
        self.extended
    }

    fn is_remote_frame(&self) -> bool {
        self.remote_request
    }

    fn id(&self) -> Id {
        if self.extended {
            // The mask keeps the raw value inside the 29-bit range, so the
            // constructor cannot refuse it.
            Id::Extended(ExtendedId::new(self.id & ExtendedId::MAX.as_raw()).unwrap_or(ExtendedId::MAX))
        } else {
            Id::Standard(StandardId::new(self.id as u16).unwrap_or(StandardId::MAX))
        }
    }

    fn dlc(&self) -> usize {
        self.len
    }

    fn data(&self) -> &[u8] {
        if self.remote_request {
            &[]
        } else {
            &self.data[..self.len]
        }
    }
}
