use crate::constant::TEXT_NULL;
use crate::error::Result;
use crate::protocol::TextRowPayload;
use crate::protocol::wire::WireValue;
use crate::value::Value;

/// Write the payload of a text protocol row
///
/// Every value becomes a length-encoded string of its text form; NULL is the
/// single byte 0xFB.
pub fn write_text_row(out: &mut Vec<u8>, values: &[Value]) -> Result<()> {
    for value in values {
        let field = match value.text() {
            Some(text) => WireValue::lenenc_string(text.into_owned()),
            None => WireValue::fixed_string(1, [TEXT_NULL])?,
        };
        field.write_to(out);
    }
    Ok(())
}

/// Read text protocol row
pub fn read_text_row(payload: &[u8]) -> TextRowPayload<'_> {
    TextRowPayload(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_text_row() {
        let mut out = Vec::new();
        write_text_row(&mut out, &[Value::from("5"), Value::Null]).unwrap();
        assert_eq!(out, vec![0x01, b'5', 0xFB]);
    }

    #[test]
    fn test_write_text_row_numbers() {
        let mut out = Vec::new();
        write_text_row(
            &mut out,
            &[Value::from(-12i32), Value::from(7u64), Value::from(1.5f64)],
        )
        .unwrap();
        assert_eq!(out, b"\x03-12\x017\x031.5");
    }

    #[test]
    fn test_write_text_row_long_value() {
        let long = "x".repeat(300);
        let mut out = Vec::new();
        write_text_row(&mut out, &[Value::from(long.as_str())]).unwrap();
        assert_eq!(&out[..3], &[0xFC, 0x2C, 0x01]);
        assert_eq!(out.len(), 303);

        let values = read_text_row(&out).values(1).unwrap();
        assert_eq!(values, vec![Some(long.as_bytes())]);
    }
}
