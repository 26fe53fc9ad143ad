//! Record decoder: splits one comma-separated replay line into fields and
//! assembles a [`CanFrame`] from them.
//!
//! Expected wire format, one record per line:
//!
//! ```text
//! timestamp,id_hex,length_dec,data0_hex,data1_hex,...,dataN_hex
//! ```
//!
//! The timestamp is the host's business (it drives replay pacing on the
//! sending side) and is skipped here. Hex fields carry no `0x` prefix.
use crate::error::DecodeError;
use crate::frame::{CanFrame, MAX_FRAME_DATA};

//==================================================================================Constants

/// Maximum number of delimiter positions tracked per record. A well-formed
/// record needs ten (timestamp, id, DLC, eight data bytes); the headroom
/// absorbs hosts that pad extra columns. A record exceeding the table is a
/// decode failure, never an out-of-bounds write.
pub const MAX_DELIMITERS: usize = 20;

//==================================================================================Decode

/// Decode one trimmed record into a [`CanFrame`].
///
/// Field layout rules:
/// - at least two delimiters are required (three fields);
/// - the arbitration id is base-16, the DLC base-10, data bytes base-16;
/// - a DLC above eight is clamped to eight;
/// - data fields missing from the record leave their byte slots at zero.
///
/// Numeric conversion follows the lenient-zero policy of
/// [`parse_hex_or_zero`]; a record is only rejected for a wrong field count,
/// never for unparseable digits.
pub fn decode(record: &str) -> Result<CanFrame, DecodeError> {
    // First pass: locate every delimiter in left-to-right order.
    let mut positions = [0usize; MAX_DELIMITERS];
    let mut count = 0;
    for (index, byte) in record.bytes().enumerate() {
        if byte == b',' {
            if count == MAX_DELIMITERS {
                return Err(DecodeError::TooManyFields);
            }
            positions[count] = index;
            count += 1;
        }
    }

    // Timestamp, id, and DLC are mandatory; data fields are optional.
    if count < 2 {
        return Err(DecodeError::MalformedRecord);
    }

    // Field 1: arbitration identifier.
    let id = parse_hex_or_zero(&record[positions[0] + 1..positions[1]]);

    // Field 2: Data Length Code. The field runs to the next delimiter or, for
    // a record without data fields, to the end of the line.
    let dlc_end = if count >= 3 { positions[2] } else { record.len() };
    let len = (parse_dec_or_zero(&record[positions[1] + 1..dlc_end]) as usize).min(MAX_FRAME_DATA);

    // Data fields: bounded by BOTH the declared DLC and the delimiters
    // actually present. Hosts may truncate trailing fields; the unfilled
    // slots stay zero.
    let mut data = [0u8; MAX_FRAME_DATA];
    let present = count - 2;
    for slot in 0..len.min(present) {
        let field = 3 + slot;
        let start = positions[field - 1] + 1;
        let end = if field < count {
            positions[field]
        } else {
            record.len()
        };
        data[slot] = parse_hex_or_zero(&record[start..end]) as u8;
    }

    Ok(CanFrame::data_frame(id, len, data))
}

//==================================================================================Lenient conversion

/// Lenient base-16 conversion: invalid or empty text yields 0.
///
/// Inherited from the original firmware, where every numeric field fell back
/// to zero instead of failing. Host-side acknowledgment accounting relies on
/// such records still being transmitted, so the fallback is an explicit
/// policy here rather than a parsing accident.
pub fn parse_hex_or_zero(text: &str) -> u32 {
    lenient_u32(text, 16)
}

/// Lenient base-10 conversion: invalid or empty text yields 0.
pub fn parse_dec_or_zero(text: &str) -> u32 {
    lenient_u32(text, 10)
}

fn lenient_u32(text: &str, radix: u32) -> u32 {
    u32::from_str_radix(text.trim(), radix).unwrap_or(0)
}
