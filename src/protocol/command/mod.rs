mod column_definition;
pub mod prepared;
pub mod resultset;
pub mod text;


pub use column_definition::ColumnDefinition;
pub use column_definition::ColumnDefinitionBytes;
pub use column_definition::ColumnDefinitionTail;
pub use column_definition::{column_definition_fields, write_column_definition};
pub use resultset::ResultSet;
