//! Tests for IntoRow derive macro.
//!
//! Run with: cargo test --features derive --test derive

use mysql_wire::constant::ColumnType;
use mysql_wire::protocol::command::text::read_text_row;
use mysql_wire::protocol::packet::read_packet;
use mysql_wire::r#macro::IntoRow;
use mysql_wire::{ColumnOpts, IntoRow as _, ResultSet, ResultSetOpts, Value};

// ============================================================================
// Struct definitions
// ============================================================================

#[derive(Debug, IntoRow)]
struct User {
    id: i64,
    name: String,
    age: u8,
}

#[derive(Debug, IntoRow)]
struct UserWithOptional {
    id: i64,
    name: String,
    email: Option<String>,
}

#[derive(Debug, IntoRow)]
struct Measurement<'a> {
    sensor: &'a str,
    reading: f64,
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_fields_in_declaration_order() {
    let user = User {
        id: -1,
        name: "alice".to_string(),
        age: 30,
    };
    assert_eq!(
        user.into_row(),
        vec![
            Value::SignedInt(-1),
            Value::Bytes(b"alice".to_vec()),
            Value::UnsignedInt(30),
        ]
    );
}

#[test]
fn test_optional_field_becomes_null() {
    let user = UserWithOptional {
        id: 7,
        name: "bob".to_string(),
        email: None,
    };
    assert_eq!(user.into_row()[2], Value::Null);

    let user = UserWithOptional {
        id: 7,
        name: "bob".to_string(),
        email: Some("bob@example.com".to_string()),
    };
    assert_eq!(user.into_row()[2], Value::from("bob@example.com"));
}

#[test]
fn test_borrowed_fields() {
    let m = Measurement {
        sensor: "t0",
        reading: 21.5,
    };
    assert_eq!(
        m.into_row(),
        vec![Value::from("t0"), Value::Double(21.5)]
    );
}

#[test]
fn test_derived_rows_in_result_set() {
    let mut rs = ResultSet::new(ResultSetOpts::default());
    rs.add_column("id", ColumnType::MYSQL_TYPE_LONGLONG, 20, ColumnOpts::default())
        .unwrap();
    rs.add_column("name", ColumnType::MYSQL_TYPE_VAR_STRING, 32, ColumnOpts::default())
        .unwrap();
    rs.add_column("email", ColumnType::MYSQL_TYPE_VAR_STRING, 64, ColumnOpts::default())
        .unwrap();
    rs.add_row(UserWithOptional {
        id: 1,
        name: "carol".to_string(),
        email: None,
    })
    .unwrap();

    let mut sink = Vec::new();
    rs.write_out(&mut sink).unwrap();

    let mut data = sink.as_slice();
    let mut payload = Vec::new();
    // column count, 3 definitions, EOF
    for _ in 0..5 {
        read_packet(&mut data, &mut payload).unwrap();
    }
    read_packet(&mut data, &mut payload).unwrap();
    let values = read_text_row(&payload).values(3).unwrap();
    assert_eq!(values, vec![Some(&b"1"[..]), Some(&b"carol"[..]), None]);
}
