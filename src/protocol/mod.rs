pub mod command;
pub mod packet;
pub mod primitive;
pub mod response;
mod row;
pub mod r#trait;
pub mod value;
pub mod wire;

pub use row::{BinaryRowPayload, TextRowPayload};
pub use r#trait::{BinaryFieldEncoder, StatusPackets};
