use crate::constant::TEXT_NULL;
use crate::error::{Error, Result};
use crate::protocol::primitive::*;
use crate::protocol::value::NullBitmap;

/// The payload part of a binary row packet.
#[derive(Debug, Clone)]
pub struct BinaryRowPayload<'a> {
    pub(crate) null_bitmap: NullBitmap<'a>,
    pub(crate) values: &'a [u8],
    pub(crate) num_columns: usize,
}

impl<'a> BinaryRowPayload<'a> {
    pub fn new(null_bitmap: NullBitmap<'a>, values: &'a [u8], num_columns: usize) -> Self {
        Self {
            null_bitmap,
            values,
            num_columns,
        }
    }

    pub fn null_bitmap(&self) -> NullBitmap<'_> {
        self.null_bitmap
    }

    /// Concatenated encodings of the non-NULL columns
    pub fn values(&self) -> &[u8] {
        self.values
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }
}

/// The payload part of a text row packet.
#[derive(Debug, Clone)]
pub struct TextRowPayload<'a>(pub &'a [u8]);

impl<'a> TextRowPayload<'a> {
    /// Split the payload into one entry per column, `None` for NULL
    pub fn values(&self, num_columns: usize) -> Result<Vec<Option<&'a [u8]>>> {
        let mut data = self.0;
        let mut values = Vec::with_capacity(num_columns);
        for _ in 0..num_columns {
            if data.first() == Some(&TEXT_NULL) {
                values.push(None);
                data = &data[1..];
            } else {
                let (value, rest) = read_string_lenenc(data)?;
                values.push(Some(value));
                data = rest;
            }
        }
        if !data.is_empty() {
            return Err(Error::InvalidPacket);
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_row_values() {
        let row = TextRowPayload(&[0x01, b'5', 0xFB, 0x00, 0x03, b'a', b'b', b'c']);
        let values = row.values(4).unwrap();
        assert_eq!(
            values,
            vec![Some(&b"5"[..]), None, Some(&b""[..]), Some(&b"abc"[..])]
        );
    }

    #[test]
    fn test_text_row_arity_checked() {
        let row = TextRowPayload(&[0x01, b'5', 0xFB]);
        assert!(matches!(row.values(1), Err(Error::InvalidPacket)));
        assert!(matches!(row.values(3), Err(Error::UnexpectedEof)));
    }
}
