pub mod param;


use auto_impl::auto_impl;

use crate::constant::{CapabilityFlags, ColumnFlags, ColumnType, ServerStatusFlags};
use crate::error::Result;
use crate::value::Value;

/// Produces the binary protocol encoding of one non-NULL value
///
/// The bytes are appended to `out` and consumed verbatim by the binary row
/// encoder. NULLs never reach the encoder; they live in the row's NULL bitmap.
#[auto_impl(&, Box)]
pub trait BinaryFieldEncoder {
    fn encode_field(
        &self,
        value: &Value,
        column_type: ColumnType,
        flags: ColumnFlags,
        out: &mut Vec<u8>,
    ) -> Result<()>;
}

/// Produces the payloads of the status packets that frame a result set
///
/// The result set decides when these packets are sent and with which sequence
/// id; the implementation decides their layout.
#[auto_impl(&, Box)]
pub trait StatusPackets {
    /// Command-completion packet, sent in place of an empty result set
    fn write_ok(
        &self,
        out: &mut Vec<u8>,
        capabilities: CapabilityFlags,
        affected_rows: u64,
        last_insert_id: u64,
        status_flags: ServerStatusFlags,
    );

    /// End-of-metadata and end-of-rows marker
    fn write_eof(
        &self,
        out: &mut Vec<u8>,
        capabilities: CapabilityFlags,
        status_flags: ServerStatusFlags,
    );
}
