use crate::col::Column;
use crate::error::{Error, Result, eyre};
use crate::protocol::BinaryRowPayload;
use crate::protocol::primitive::*;
use crate::protocol::r#trait::BinaryFieldEncoder;
use crate::protocol::value::{NullBitmap, NullBitmapMut};
use crate::value::Value;

/// Header byte of every binary protocol row
const BINARY_ROW_HEADER: u8 = 0x00;

/// Write the payload of a binary protocol row
///
/// Layout: 0x00, NULL bitmap (offset 2), then the non-NULL values in column
/// order as produced by `encoder`. NULL columns add no value bytes.
pub fn write_binary_row<E: BinaryFieldEncoder>(
    out: &mut Vec<u8>,
    columns: &[Column],
    values: &[Value],
    encoder: &E,
) -> Result<()> {
    if columns.len() != values.len() {
        return Err(Error::LibraryBug(eyre!(
            "binary row with {} values for {} columns",
            values.len(),
            columns.len()
        )));
    }

    let mut null_bitmap = NullBitmapMut::for_result_set(columns.len());
    for (idx, value) in values.iter().enumerate() {
        if value.is_null() {
            null_bitmap.set_null(idx);
        }
    }

    write_int_1(out, BINARY_ROW_HEADER);
    write_bytes_fix(out, null_bitmap.as_bytes());
    for (column, value) in columns.iter().zip(values) {
        if !value.is_null() {
            encoder.encode_field(value, column.column_type, column.flags, out)?;
        }
    }
    Ok(())
}

/// Read binary protocol row
pub fn read_binary_row(payload: &[u8], num_columns: usize) -> Result<BinaryRowPayload<'_>> {
    let (header, data) = read_int_1(payload)?;
    if header != BINARY_ROW_HEADER {
        return Err(Error::InvalidPacket);
    }

    // NULL bitmap: (num_columns + 7 + 2) / 8 bytes
    let null_bitmap_len = (num_columns + 7 + 2) >> 3;
    let (null_bitmap, values) = read_string_fix(data, null_bitmap_len)?;

    Ok(BinaryRowPayload::new(
        NullBitmap::for_result_set(null_bitmap),
        values,
        num_columns,
    ))
}
