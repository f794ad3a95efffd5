use crate::constant::{ColumnFlags, ColumnType, charset_max_bytes_per_char};
use crate::opts::ColumnOpts;

/// Metadata of one result set column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub org_name: String,
    pub schema: String,
    pub table: String,
    pub org_table: String,
    pub column_type: ColumnType,
    /// Declared length in bytes
    pub column_length: u32,
    pub charset: u16,
    pub flags: ColumnFlags,
    pub decimals: u8,
    /// `Some` when the default value fields are sent, holding the default
    /// (empty when the column has none)
    pub default_value: Option<Vec<u8>>,
}

impl Column {
    /// `char_length` is in characters; the declared byte length accounts for
    /// the widest character of the charset and saturates at `u32::MAX`.
    pub fn new(name: impl Into<String>, column_type: ColumnType, char_length: u32, opts: ColumnOpts) -> Self {
        let column_length = char_length.saturating_mul(charset_max_bytes_per_char(opts.charset));
        let default_value = if opts.show_default {
            Some(opts.default_value.unwrap_or_default())
        } else {
            None
        };
        Self {
            name: name.into(),
            org_name: opts.org_name,
            schema: opts.schema,
            table: opts.table,
            org_table: opts.org_table,
            column_type,
            column_length,
            charset: opts.charset,
            flags: opts.flags,
            decimals: opts.decimals,
            default_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::CHARSET_BINARY;

    #[test]
    fn test_utf8_length_multiplier() {
        let col = Column::new("id", ColumnType::MYSQL_TYPE_LONG, 11, ColumnOpts::default());
        assert_eq!(col.column_length, 33);
        assert_eq!(col.charset, 33);
        assert_eq!(col.default_value, None);
    }

    #[test]
    fn test_binary_charset_keeps_length() {
        let opts = ColumnOpts {
            charset: CHARSET_BINARY,
            ..Default::default()
        };
        let col = Column::new("blob", ColumnType::MYSQL_TYPE_BLOB, 65535, opts);
        assert_eq!(col.column_length, 65535);
    }

    #[test]
    fn test_length_saturates() {
        let col = Column::new("huge", ColumnType::MYSQL_TYPE_LONG_BLOB, u32::MAX, ColumnOpts::default());
        assert_eq!(col.column_length, u32::MAX);
    }

    #[test]
    fn test_show_default() {
        let opts = ColumnOpts {
            show_default: true,
            default_value: Some(b"abc".to_vec()),
            ..Default::default()
        };
        let col = Column::new("c", ColumnType::MYSQL_TYPE_VAR_STRING, 10, opts);
        assert_eq!(col.default_value.as_deref(), Some(&b"abc"[..]));

        let opts = ColumnOpts {
            show_default: true,
            ..Default::default()
        };
        let col = Column::new("c", ColumnType::MYSQL_TYPE_VAR_STRING, 10, opts);
        assert_eq!(col.default_value.as_deref(), Some(&b""[..]));

        let opts = ColumnOpts {
            default_value: Some(b"ignored".to_vec()),
            ..Default::default()
        };
        let col = Column::new("c", ColumnType::MYSQL_TYPE_VAR_STRING, 10, opts);
        assert_eq!(col.default_value, None);
    }
}
