use smart_default::SmartDefault;

use crate::constant::{
    CHARSET_UTF8_GENERAL_CI, CapabilityFlags, ColumnFlags, DEFAULT_CLIENT_CAPABILITIES,
    ServerStatusFlags,
};

/// Which result set format to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    /// COM_QUERY responses: every value as a length-encoded string
    #[default]
    Text,
    /// COM_STMT_EXECUTE responses: NULL bitmap and per-type binary values
    Binary,
}

/// A configuration for one result set
///
/// ```rs
/// let mut opts = ResultSetOpts::default();
/// opts.protocol = Protocol::Binary;
/// opts.more_results = true;
/// ```
#[derive(Debug, Clone, SmartDefault)]
pub struct ResultSetOpts {
    /// The capabilities negotiated with the client during the handshake
    #[default(DEFAULT_CLIENT_CAPABILITIES)]
    pub capabilities: CapabilityFlags,

    pub protocol: Protocol,

    /// Sequence id of the first packet of the response
    ///
    /// The command packet that triggered the response has sequence id 0.
    #[default = 1]
    pub sequence_id: u8,

    /// Another result set follows this one (multi-statement responses)
    pub more_results: bool,

    /// Server status sent on the EOF packets
    #[default(ServerStatusFlags::empty())]
    pub status_flags: ServerStatusFlags,
}

/// Optional attributes of a column
#[derive(Debug, Clone, SmartDefault)]
pub struct ColumnOpts {
    pub org_name: String,
    pub schema: String,
    pub table: String,
    pub org_table: String,

    /// Also multiplies the declared length by the charset's widest character
    #[default(CHARSET_UTF8_GENERAL_CI)]
    pub charset: u16,

    #[default(ColumnFlags::empty())]
    pub flags: ColumnFlags,

    pub decimals: u8,

    /// Append the default value fields (COM_FIELD_LIST responses)
    pub show_default: bool,

    pub default_value: Option<Vec<u8>>,
}
