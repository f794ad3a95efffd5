use std::io::Write;

use crate::buffer::FrameBuffer;
use crate::col::Column;
use crate::constant::{ColumnType, MAX_PAYLOAD_LEN, ServerStatusFlags};
use crate::error::{Error, Result};
use crate::opts::{ColumnOpts, Protocol, ResultSetOpts};
use crate::protocol::command::column_definition::write_column_definition;
use crate::protocol::command::prepared::write_binary_row;
use crate::protocol::command::text::write_text_row;
use crate::protocol::primitive::*;
use crate::protocol::response::StandardStatusPackets;
use crate::protocol::r#trait::param::StandardBinaryEncoder;
use crate::protocol::r#trait::{BinaryFieldEncoder, StatusPackets};
use crate::protocol::wire::WireValue;
use crate::row::IntoRow;

/// Result set metadata header
#[derive(Debug, Clone)]
pub struct ResultSetHeader {
    pub column_count: u64,
}

/// Read result set header (column count), identical in both protocols
pub fn read_resultset_header(payload: &[u8]) -> Result<ResultSetHeader> {
    let (column_count, _rest) = read_int_lenenc(payload)?;
    Ok(ResultSetHeader { column_count })
}

/// A result set built in memory and serialized once into MySQL packets
///
/// Columns are added first. The first row (or [`ResultSet::freeze`]) fixes
/// the column list. Rows are encoded as they are added, in the protocol
/// selected by [`ResultSetOpts::protocol`], so [`ResultSet::write_out`] only
/// frames and writes bytes.
///
/// ```rs
/// let mut rs = ResultSet::new(ResultSetOpts::default());
/// rs.add_column("id", ColumnType::MYSQL_TYPE_LONG, 11, ColumnOpts::default())?;
/// rs.add_column("name", ColumnType::MYSQL_TYPE_VAR_STRING, 64, ColumnOpts::default())?;
/// rs.add_row((1, "alice"))?;
/// rs.add_row((2, None::<&str>))?;
/// let (bytes_written, last_sequence_id) = rs.write_out(&mut socket)?;
/// ```
#[derive(Debug)]
pub struct ResultSet<E = StandardBinaryEncoder, S = StandardStatusPackets> {
    opts: ResultSetOpts,
    columns: Vec<Column>,
    /// Encoded row payloads, without packet headers
    rows: Vec<Vec<u8>>,
    frozen: bool,
    encoder: E,
    status_packets: S,
}

impl ResultSet {
    pub fn new(opts: ResultSetOpts) -> Self {
        Self::with_collaborators(opts, StandardBinaryEncoder, StandardStatusPackets)
    }
}

impl<E: BinaryFieldEncoder, S: StatusPackets> ResultSet<E, S> {
    /// Use a custom binary field encoder and status packet layout
    pub fn with_collaborators(opts: ResultSetOpts, encoder: E, status_packets: S) -> Self {
        Self {
            opts,
            columns: Vec::new(),
            rows: Vec::new(),
            frozen: false,
            encoder,
            status_packets,
        }
    }

    pub fn opts(&self) -> &ResultSetOpts {
        &self.opts
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Whether columns can no longer be added
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Append a column
    ///
    /// `char_length` is the display length in characters; see [`Column::new`].
    pub fn add_column(
        &mut self,
        name: impl Into<String>,
        column_type: ColumnType,
        char_length: u32,
        opts: ColumnOpts,
    ) -> Result<()> {
        if self.frozen {
            return Err(Error::ColumnsFrozen);
        }
        self.columns.push(Column::new(name, column_type, char_length, opts));
        Ok(())
    }

    /// Fix the column list without adding a row
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Encode and append one row
    ///
    /// On error the result set is left unchanged.
    pub fn add_row(&mut self, row: impl IntoRow) -> Result<()> {
        let values = row.into_row();
        if values.len() != self.columns.len() {
            return Err(Error::ArityMismatch {
                expected: self.columns.len(),
                actual: values.len(),
            });
        }

        let mut payload = Vec::new();
        match self.opts.protocol {
            Protocol::Text => write_text_row(&mut payload, &values)?,
            Protocol::Binary => {
                write_binary_row(&mut payload, &self.columns, &values, &self.encoder)?
            }
        }
        // rows are sent as a single packet
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLarge(payload.len()));
        }

        self.frozen = true;
        self.rows.push(payload);
        Ok(())
    }

    /// Write the whole result set to `sink`
    ///
    /// Returns the number of bytes written (packet headers included) and the
    /// sequence id of the last packet.
    #[tracing::instrument(skip_all)]
    pub fn write_out<W: Write>(self, sink: &mut W) -> Result<(usize, u8)> {
        let mut buffer = FrameBuffer::new();
        let first_sequence_id = self.opts.sequence_id;

        if self.columns.is_empty() || self.rows.is_empty() {
            let bytes = self.send_ok(sink, &mut buffer, first_sequence_id)?;
            tracing::debug!(bytes, "wrote empty result set");
            return Ok((bytes, first_sequence_id));
        }

        let (column_bytes, sequence_id) =
            self.send_column_info(sink, &mut buffer, first_sequence_id)?;
        let (row_bytes, sequence_id) = self.send_row_info(sink, &mut buffer, sequence_id)?;
        Ok((column_bytes + row_bytes, sequence_id))
    }

    fn send_ok<W: Write>(
        &self,
        sink: &mut W,
        buffer: &mut FrameBuffer,
        sequence_id: u8,
    ) -> Result<usize> {
        self.status_packets.write_ok(
            buffer.new_payload(),
            self.opts.capabilities,
            0,
            0,
            self.final_status_flags(),
        );
        buffer.write_to(sink, sequence_id)
    }

    /// Column count, one definition per column, then EOF
    ///
    /// `sequence_id` is the id of the first packet; returns the last one used.
    fn send_column_info<W: Write>(
        &self,
        sink: &mut W,
        buffer: &mut FrameBuffer,
        sequence_id: u8,
    ) -> Result<(usize, u8)> {
        let mut sequence_id = sequence_id;

        WireValue::lenenc_int(self.columns.len() as u64).write_to(buffer.new_payload());
        let mut bytes = buffer.write_to(sink, sequence_id)?;

        for column in &self.columns {
            sequence_id = sequence_id.wrapping_add(1);
            write_column_definition(buffer.new_payload(), column)?;
            bytes += buffer.write_to(sink, sequence_id)?;
        }

        sequence_id = sequence_id.wrapping_add(1);
        self.status_packets.write_eof(
            buffer.new_payload(),
            self.opts.capabilities,
            self.opts.status_flags,
        );
        bytes += buffer.write_to(sink, sequence_id)?;

        tracing::debug!(columns = self.columns.len(), bytes, sequence_id, "wrote column info");
        Ok((bytes, sequence_id))
    }

    /// One packet per row, then EOF
    ///
    /// `sequence_id` is the last id already used. With an open cursor in the
    /// binary protocol, rows are fetched later and nothing is written:
    /// returns `(0, sequence_id)`.
    fn send_row_info<W: Write>(
        &self,
        sink: &mut W,
        buffer: &mut FrameBuffer,
        sequence_id: u8,
    ) -> Result<(usize, u8)> {
        if self.opts.protocol == Protocol::Binary
            && self
                .opts
                .status_flags
                .contains(ServerStatusFlags::SERVER_STATUS_CURSOR_EXISTS)
        {
            tracing::debug!(rows = self.rows.len(), "cursor open, rows not sent");
            return Ok((0, sequence_id));
        }

        let mut sequence_id = sequence_id;
        let mut bytes = 0;
        for row in &self.rows {
            sequence_id = sequence_id.wrapping_add(1);
            buffer.new_payload().extend_from_slice(row);
            bytes += buffer.write_to(sink, sequence_id)?;
        }

        sequence_id = sequence_id.wrapping_add(1);
        self.status_packets.write_eof(
            buffer.new_payload(),
            self.opts.capabilities,
            self.final_status_flags(),
        );
        bytes += buffer.write_to(sink, sequence_id)?;

        tracing::debug!(rows = self.rows.len(), bytes, sequence_id, "wrote rows");
        Ok((bytes, sequence_id))
    }

    fn final_status_flags(&self) -> ServerStatusFlags {
        if self.opts.more_results {
            self.opts.status_flags | ServerStatusFlags::SERVER_MORE_RESULTS_EXISTS
        } else {
            self.opts.status_flags
        }
    }
}
