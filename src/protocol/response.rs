use crate::constant::{CapabilityFlags, ServerStatusFlags};
use crate::error::{Error, Result};
use crate::protocol::primitive::*;
use crate::protocol::r#trait::StatusPackets;
use zerocopy::byteorder::little_endian::U16 as U16LE;
use zerocopy::{FromBytes, Immutable, KnownLayout};

/// OK and EOF packets as MySQL 4.1+ servers send them
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardStatusPackets;

impl StatusPackets for StandardStatusPackets {
    fn write_ok(
        &self,
        out: &mut Vec<u8>,
        capabilities: CapabilityFlags,
        affected_rows: u64,
        last_insert_id: u64,
        status_flags: ServerStatusFlags,
    ) {
        write_int_1(out, 0x00);
        write_int_lenenc(out, affected_rows);
        write_int_lenenc(out, last_insert_id);
        if capabilities.contains(CapabilityFlags::CLIENT_PROTOCOL_41) {
            write_int_2(out, status_flags.bits());
            // warnings
            write_int_2(out, 0);
        } else if capabilities.contains(CapabilityFlags::CLIENT_TRANSACTIONS) {
            write_int_2(out, status_flags.bits());
        }
    }

    fn write_eof(
        &self,
        out: &mut Vec<u8>,
        capabilities: CapabilityFlags,
        status_flags: ServerStatusFlags,
    ) {
        write_int_1(out, 0xFE);
        if capabilities.contains(CapabilityFlags::CLIENT_PROTOCOL_41) {
            // warnings
            write_int_2(out, 0);
            write_int_2(out, status_flags.bits());
        }
    }
}

/// OK packet payload (minimal header only)
///
/// Layout: 0x00 followed by variable-length fields:
/// - affected_rows: length-encoded integer
/// - last_insert_id: length-encoded integer
/// - status_flags: 2 bytes
/// - warnings: 2 bytes
#[derive(Debug)]
pub struct OkPayloadBytes<'a>(pub &'a [u8]);

/// OK packet response (CLIENT_PROTOCOL_41 layout)
#[derive(Debug, Clone)]
pub struct OkPayload {
    pub affected_rows: u64,
    pub last_insert_id: u64,
    pub status_flags: ServerStatusFlags,
    pub warnings: u16,
}

impl TryFrom<OkPayloadBytes<'_>> for OkPayload {
    type Error = Error;

    fn try_from(bytes: OkPayloadBytes<'_>) -> Result<Self> {
        let (header, data) = read_int_1(bytes.0)?;
        if header != 0x00 && header != 0xFE {
            return Err(Error::InvalidPacket);
        }

        let (affected_rows, rest) = read_int_lenenc(data)?;
        let (last_insert_id, rest) = read_int_lenenc(rest)?;
        let (status_flags, rest) = read_int_2(rest)?;
        let (warnings, _rest) = read_int_2(rest)?;

        Ok(OkPayload {
            affected_rows,
            last_insert_id,
            status_flags: ServerStatusFlags::from_bits_retain(status_flags),
            warnings,
        })
    }
}

/// EOF packet response (zero-copy)
///
/// Layout matches MySQL wire protocol after header byte 0xFE:
/// - warnings: 2 bytes (little-endian)
/// - status_flags: 2 bytes (little-endian)
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable)]
pub struct EofPacket {
    pub warnings: U16LE,
    pub status_flags: U16LE,
}

impl EofPacket {
    pub fn status_flags(&self) -> ServerStatusFlags {
        ServerStatusFlags::from_bits_retain(self.status_flags.get())
    }
}

/// Read EOF packet (header byte 0xFE, length < 9) - zero-copy
pub fn read_eof_packet(payload: &[u8]) -> Result<&EofPacket> {
    let (header, data) = read_int_1(payload)?;
    if header != 0xFE || payload.len() >= 9 {
        return Err(Error::InvalidPacket);
    }

    if data.len() < 4 {
        return Err(Error::UnexpectedEof);
    }

    EofPacket::ref_from_bytes(&data[..4]).map_err(|_| Error::InvalidPacket)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_ok_protocol_41() {
        let mut out = Vec::new();
        StandardStatusPackets.write_ok(
            &mut out,
            CapabilityFlags::CLIENT_PROTOCOL_41,
            300,
            7,
            ServerStatusFlags::SERVER_STATUS_AUTOCOMMIT,
        );
        assert_eq!(out, vec![0x00, 0xFC, 0x2C, 0x01, 0x07, 0x02, 0x00, 0x00, 0x00]);

        let ok = OkPayload::try_from(OkPayloadBytes(&out)).unwrap();
        assert_eq!(ok.affected_rows, 300);
        assert_eq!(ok.last_insert_id, 7);
        assert_eq!(ok.status_flags, ServerStatusFlags::SERVER_STATUS_AUTOCOMMIT);
        assert_eq!(ok.warnings, 0);
    }

    #[test]
    fn test_write_ok_pre_41() {
        let mut out = Vec::new();
        StandardStatusPackets.write_ok(
            &mut out,
            CapabilityFlags::CLIENT_TRANSACTIONS,
            0,
            0,
            ServerStatusFlags::SERVER_STATUS_IN_TRANS,
        );
        assert_eq!(out, vec![0x00, 0x00, 0x00, 0x01, 0x00]);

        out.clear();
        StandardStatusPackets.write_ok(
            &mut out,
            CapabilityFlags::empty(),
            0,
            0,
            ServerStatusFlags::SERVER_STATUS_IN_TRANS,
        );
        assert_eq!(out, vec![0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_write_eof() {
        let mut out = Vec::new();
        StandardStatusPackets.write_eof(
            &mut out,
            CapabilityFlags::CLIENT_PROTOCOL_41,
            ServerStatusFlags::SERVER_MORE_RESULTS_EXISTS,
        );
        assert_eq!(out, vec![0xFE, 0x00, 0x00, 0x08, 0x00]);

        let eof = read_eof_packet(&out).unwrap();
        assert_eq!(eof.warnings.get(), 0);
        assert_eq!(eof.status_flags(), ServerStatusFlags::SERVER_MORE_RESULTS_EXISTS);

        out.clear();
        StandardStatusPackets.write_eof(&mut out, CapabilityFlags::empty(), ServerStatusFlags::empty());
        assert_eq!(out, vec![0xFE]);
    }

    #[test]
    fn test_read_eof_rejects_other_packets() {
        assert!(matches!(
            read_eof_packet(&[0x00, 0x00, 0x00, 0x02, 0x00]),
            Err(Error::InvalidPacket)
        ));
        assert!(matches!(read_eof_packet(&[0xFE, 0x00]), Err(Error::UnexpectedEof)));
    }
}
