use crate::constant::{ColumnFlags, ColumnType};
use crate::error::{Error, Result};
use crate::protocol::primitive::*;
use crate::protocol::r#trait::BinaryFieldEncoder;
use crate::value::Value;

/// Binary protocol encodings for the column types a [`Value`] can fill
///
/// - Integers: little-endian, width given by the column type, truncated
/// - FLOAT/DOUBLE: IEEE 754 little-endian
/// - Strings, blobs, decimals and the other text-like types: length-encoded
///   bytes (numbers are rendered as text)
///
/// Temporal columns and `MYSQL_TYPE_NULL` have no counterpart in [`Value`]
/// and are reported as unimplemented.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardBinaryEncoder;

impl BinaryFieldEncoder for StandardBinaryEncoder {
    fn encode_field(
        &self,
        value: &Value,
        column_type: ColumnType,
        _flags: ColumnFlags,
        out: &mut Vec<u8>,
    ) -> Result<()> {
        match column_type {
            // ─── Integer Types ──────────────────────────────────────────
            ColumnType::MYSQL_TYPE_TINY => {
                write_int_1(out, integer_bits(value, column_type)? as u8);
                Ok(())
            }
            ColumnType::MYSQL_TYPE_SHORT | ColumnType::MYSQL_TYPE_YEAR => {
                write_int_2(out, integer_bits(value, column_type)? as u16);
                Ok(())
            }
            ColumnType::MYSQL_TYPE_INT24 | ColumnType::MYSQL_TYPE_LONG => {
                write_int_4(out, integer_bits(value, column_type)? as u32);
                Ok(())
            }
            ColumnType::MYSQL_TYPE_LONGLONG => {
                write_int_8(out, integer_bits(value, column_type)?);
                Ok(())
            }

            // ─── Floating Point Types ───────────────────────────────────
            ColumnType::MYSQL_TYPE_FLOAT => {
                let v = match *value {
                    Value::Float(v) => v,
                    Value::Double(v) => v as f32,
                    Value::SignedInt(v) => v as f32,
                    Value::UnsignedInt(v) => v as f32,
                    _ => return Err(mismatch(value, column_type)),
                };
                write_int_4(out, v.to_bits());
                Ok(())
            }
            ColumnType::MYSQL_TYPE_DOUBLE => {
                let v = match *value {
                    Value::Double(v) => v,
                    Value::Float(v) => f64::from(v),
                    Value::SignedInt(v) => v as f64,
                    Value::UnsignedInt(v) => v as f64,
                    _ => return Err(mismatch(value, column_type)),
                };
                write_int_8(out, v.to_bits());
                Ok(())
            }

            // ─── String-like Types ──────────────────────────────────────
            ColumnType::MYSQL_TYPE_VARCHAR
            | ColumnType::MYSQL_TYPE_VAR_STRING
            | ColumnType::MYSQL_TYPE_STRING
            | ColumnType::MYSQL_TYPE_BLOB
            | ColumnType::MYSQL_TYPE_TINY_BLOB
            | ColumnType::MYSQL_TYPE_MEDIUM_BLOB
            | ColumnType::MYSQL_TYPE_LONG_BLOB
            | ColumnType::MYSQL_TYPE_GEOMETRY
            | ColumnType::MYSQL_TYPE_JSON
            | ColumnType::MYSQL_TYPE_DECIMAL
            | ColumnType::MYSQL_TYPE_NEWDECIMAL
            | ColumnType::MYSQL_TYPE_ENUM
            | ColumnType::MYSQL_TYPE_SET
            | ColumnType::MYSQL_TYPE_BIT
            | ColumnType::MYSQL_TYPE_TYPED_ARRAY => match value.text() {
                Some(text) => {
                    write_bytes_lenenc(out, &text);
                    Ok(())
                }
                None => Err(mismatch(value, column_type)),
            },

            // ─── Temporal Types ─────────────────────────────────────────
            ColumnType::MYSQL_TYPE_DATE
            | ColumnType::MYSQL_TYPE_DATETIME
            | ColumnType::MYSQL_TYPE_TIMESTAMP
            | ColumnType::MYSQL_TYPE_TIMESTAMP2
            | ColumnType::MYSQL_TYPE_DATETIME2
            | ColumnType::MYSQL_TYPE_NEWDATE
            | ColumnType::MYSQL_TYPE_TIME
            | ColumnType::MYSQL_TYPE_TIME2 => Err(Error::Unimplemented(
                "binary encoding of temporal columns",
            )),

            ColumnType::MYSQL_TYPE_NULL => Err(Error::Unimplemented(
                "binary encoding of a non-NULL value in a NULL-typed column",
            )),
        }
    }
}

fn integer_bits(value: &Value, column_type: ColumnType) -> Result<u64> {
    match *value {
        Value::SignedInt(v) => Ok(v as u64),
        Value::UnsignedInt(v) => Ok(v),
        _ => Err(mismatch(value, column_type)),
    }
}

fn mismatch(value: &Value, column_type: ColumnType) -> Error {
    Error::ValueTypeMismatch {
        column_type,
        value: value.kind(),
    }
}
