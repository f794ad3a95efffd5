use std::io::{ErrorKind, Read};

use zerocopy::{FromBytes, FromZeros, Immutable, IntoBytes, KnownLayout};

use crate::constant::MAX_PAYLOAD_LEN;
use crate::error::{Error, Result};

/// MySQL packet header (zero-copy)
///
/// Layout matches MySQL wire protocol:
/// - length: 3 bytes (little-endian, payload length)
/// - sequence_id: 1 byte
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable, IntoBytes)]
pub struct PacketHeader {
    pub length: [u8; 3],
    pub sequence_id: u8,
}

impl PacketHeader {
    pub const SIZE: usize = 4;

    pub fn encode(length: usize, sequence_id: u8) -> Result<Self> {
        if length > MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLarge(length));
        }
        let len = u32::to_le_bytes(length as u32);
        Ok(Self {
            length: [len[0], len[1], len[2]],
            sequence_id,
        })
    }

    pub fn length(&self) -> usize {
        u32::from_le_bytes([self.length[0], self.length[1], self.length[2], 0]) as usize
    }

    pub fn from_bytes(data: &[u8]) -> Result<&Self> {
        if data.len() < Self::SIZE {
            return Err(Error::InvalidPacket);
        }
        Self::ref_from_bytes(&data[..Self::SIZE]).map_err(|_| Error::InvalidPacket)
    }
}

/// Read one packet into `buffer`, returning its sequence id
///
/// Payloads continued over several packets are not joined; each call reads
/// exactly one frame.
#[tracing::instrument(skip_all)]
pub fn read_packet<R: Read>(reader: &mut R, buffer: &mut Vec<u8>) -> Result<u8> {
    buffer.clear();

    let mut header = PacketHeader::new_zeroed();
    reader
        .read_exact(header.as_mut_bytes())
        .map_err(map_eof)?;

    let length = header.length();
    buffer.resize(length, 0);
    reader.read_exact(buffer).map_err(map_eof)?;

    tracing::trace!(sequence_id = header.sequence_id, length, "read packet");
    Ok(header.sequence_id)
}

fn map_eof(err: std::io::Error) -> Error {
    match err.kind() {
        ErrorKind::UnexpectedEof => Error::UnexpectedEof,
        _ => Error::IoError(err),
    }
}
