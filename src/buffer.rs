use std::io::Write;

use zerocopy::IntoBytes;

use crate::error::Result;
use crate::protocol::packet::PacketHeader;

/// A reusable buffer holding one outgoing packet
///
/// Layout: [4-byte header space][payload]. The header is filled in by
/// [`FrameBuffer::write_to`] once the payload is complete, so a payload is
/// built in place and handed to the sink with a single write.
#[derive(Debug)]
pub struct FrameBuffer {
    buffer: Vec<u8>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            buffer: vec![0; PacketHeader::SIZE],
        }
    }

    /// Clear the buffer, reserve 4 bytes for the header, and return the payload for writing.
    #[inline]
    pub fn new_payload(&mut self) -> &mut Vec<u8> {
        self.buffer.clear();
        self.buffer.extend_from_slice(&[0u8; PacketHeader::SIZE]);
        &mut self.buffer
    }

    /// Payload bytes written so far.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.buffer[PacketHeader::SIZE..]
    }

    /// Get the payload length (total buffer length minus 4-byte header).
    #[inline]
    pub fn payload_len(&self) -> usize {
        self.buffer.len().saturating_sub(PacketHeader::SIZE)
    }

    /// Stamp the header with `sequence_id` and write the whole packet.
    ///
    /// Returns the number of bytes handed to the sink, header included.
    pub fn write_to<W: Write>(&mut self, sink: &mut W, sequence_id: u8) -> Result<usize> {
        let header = PacketHeader::encode(self.payload_len(), sequence_id)?;
        self.buffer[..PacketHeader::SIZE].copy_from_slice(header.as_bytes());
        sink.write_all(&self.buffer)?;
        tracing::trace!(sequence_id, length = self.payload_len(), "wrote packet");
        Ok(self.buffer.len())
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
