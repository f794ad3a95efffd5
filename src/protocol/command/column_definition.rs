use crate::col::Column;
use crate::constant::{ColumnFlags, ColumnType};
use crate::error::{Error, Result, eyre};
use crate::protocol::primitive::*;
use crate::protocol::wire::WireValue;
use zerocopy::byteorder::little_endian::{U16 as U16LE, U32 as U32LE};
use zerocopy::{FromBytes, Immutable, KnownLayout};

/// Length of the fixed-size fields that follow the names, always 0x0c
const FIXED_FIELDS_LENGTH: u64 = 0x0c;

/// The fields of a ColumnDefinition41 packet, in wire order
pub fn column_definition_fields(column: &Column) -> Result<Vec<WireValue>> {
    let mut fields = vec![
        WireValue::lenenc_string("def"),
        WireValue::lenenc_string(column.schema.as_bytes()),
        WireValue::lenenc_string(column.table.as_bytes()),
        WireValue::lenenc_string(column.org_table.as_bytes()),
        WireValue::lenenc_string(column.name.as_bytes()),
        WireValue::lenenc_string(column.org_name.as_bytes()),
        WireValue::lenenc_int(FIXED_FIELDS_LENGTH),
        WireValue::fixed_int(2, u64::from(column.charset))?,
        WireValue::fixed_int(4, u64::from(column.column_length))?,
        WireValue::fixed_int(1, column.column_type as u64)?,
        WireValue::fixed_int(2, u64::from(column.flags.bits()))?,
        WireValue::fixed_int(1, u64::from(column.decimals))?,
        WireValue::fixed_string(2, [0x00, 0x00])?,
    ];
    if let Some(default_value) = &column.default_value {
        fields.push(WireValue::lenenc_int(default_value.len() as u64));
        fields.push(WireValue::tail(default_value.as_slice()));
    }
    Ok(fields)
}

/// Write the payload of a ColumnDefinition41 packet
pub fn write_column_definition(out: &mut Vec<u8>, column: &Column) -> Result<()> {
    for field in column_definition_fields(column)? {
        field.write_to(out);
    }
    Ok(())
}

/// Represents a payload part of a column definition packet
#[derive(Debug, Clone, Copy)]
pub struct ColumnDefinitionBytes<'a>(pub &'a [u8]);

/// The column definition parsed from `ColumnDefinitionBytes`
#[derive(Debug, Clone)]
pub struct ColumnDefinition<'a> {
    pub schema: &'a [u8],
    pub table_alias: &'a [u8],
    pub table_original: &'a [u8],
    pub name_alias: &'a [u8],
    pub name_original: &'a [u8],
    pub tail: &'a ColumnDefinitionTail,
    pub default_value: Option<&'a [u8]>,
}

impl<'a> TryFrom<ColumnDefinitionBytes<'a>> for ColumnDefinition<'a> {
    type Error = Error;

    fn try_from(bytes: ColumnDefinitionBytes<'a>) -> Result<Self> {
        let data = bytes.0;

        // ─── Variable Length String Fields ───────────────────────────
        let (catalog, data) = read_string_lenenc(data)?;
        if catalog != b"def" {
            return Err(Error::InvalidPacket);
        }
        let (schema, data) = read_string_lenenc(data)?;
        let (table_alias, data) = read_string_lenenc(data)?;
        let (table_original, data) = read_string_lenenc(data)?;
        let (name_alias, data) = read_string_lenenc(data)?;
        let (name_original, data) = read_string_lenenc(data)?;

        // ─── Columndefinitiontail ────────────────────────────────────
        let (length, data) = read_int_lenenc(data)?;
        if length != FIXED_FIELDS_LENGTH {
            return Err(Error::InvalidPacket);
        }
        let (tail, data) =
            ColumnDefinitionTail::ref_from_prefix(data).map_err(|_| Error::UnexpectedEof)?;

        // ─── Default Value (COM_FIELD_LIST only) ─────────────────────
        let default_value = if data.is_empty() {
            None
        } else {
            let (len, rest) = read_int_lenenc(data)?;
            let len = usize::try_from(len).map_err(|_| Error::InvalidPacket)?;
            let (value, _rest) = read_string_fix(rest, len)?;
            Some(value)
        };

        Ok(Self {
            schema,
            table_alias,
            table_original,
            name_alias,
            name_original,
            tail,
            default_value,
        })
    }
}

/// Fixed-size tail of Column Definition packet (12 bytes)
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable)]
pub struct ColumnDefinitionTail {
    charset: U16LE,
    column_length: U32LE,
    column_type: u8,
    flags: U16LE,
    decimals: u8,
    reserved: U16LE,
}

impl ColumnDefinitionTail {
    pub fn charset(&self) -> u16 {
        self.charset.get()
    }

    pub fn column_length(&self) -> u32 {
        self.column_length.get()
    }

    pub fn column_type(&self) -> Result<ColumnType> {
        ColumnType::from_u8(self.column_type).ok_or_else(|| {
            Error::LibraryBug(eyre!("unknown column type: 0x{:02X}", self.column_type))
        })
    }

    pub fn flags(&self) -> Result<ColumnFlags> {
        ColumnFlags::from_bits(self.flags.get()).ok_or_else(|| {
            Error::LibraryBug(eyre!("invalid column flags: 0x{:04X}", self.flags.get()))
        })
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn reserved(&self) -> u16 {
        self.reserved.get()
    }
}
