pub mod buffer;
pub mod col;
pub mod constant;
pub mod error;
mod opts;
pub mod protocol;
pub mod row;
pub mod value;

pub use opts::{ColumnOpts, Protocol, ResultSetOpts};
pub use protocol::command::ResultSet;
pub use row::IntoRow;
pub use value::Value;

#[cfg(feature = "derive")]
pub mod r#macro {
    pub use mysql_wire_derive::IntoRow;
}

#[cfg(test)]
mod opts_test;
