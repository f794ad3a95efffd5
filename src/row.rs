use crate::value::Value;

/// Converts an application record into one result set row
///
/// Values are positional: the n-th value fills the n-th column.
///
/// Implemented for `Vec<T>`, arrays and tuples (up to 12 elements) of
/// `Into<Value>` types. With the `derive` feature, structs with named fields
/// can `#[derive(IntoRow)]`; their fields are taken in declaration order.
pub trait IntoRow {
    fn into_row(self) -> Vec<Value>;
}

impl<T: Into<Value>> IntoRow for Vec<T> {
    fn into_row(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Value>, const N: usize> IntoRow for [T; N] {
    fn into_row(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

// ============================================================================
// IntoRow implementations for tuples
// ============================================================================

macro_rules! impl_into_row_tuple {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T: Into<Value>),+> IntoRow for ($($T,)+) {
            fn into_row(self) -> Vec<Value> {
                vec![$(self.$idx.into()),+]
            }
        }
    };
}

impl_into_row_tuple!(0: A);
impl_into_row_tuple!(0: A, 1: B);
impl_into_row_tuple!(0: A, 1: B, 2: C);
impl_into_row_tuple!(0: A, 1: B, 2: C, 3: D);
impl_into_row_tuple!(0: A, 1: B, 2: C, 3: D, 4: E);
impl_into_row_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F);
impl_into_row_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G);
impl_into_row_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H);
impl_into_row_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I);
impl_into_row_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I, 9: J);
impl_into_row_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I, 9: J, 10: K);
impl_into_row_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I, 9: J, 10: K, 11: L);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_into_row() {
        let row = (1i32, "a", None::<u8>, 2.5f64).into_row();
        assert_eq!(
            row,
            vec![
                Value::SignedInt(1),
                Value::Bytes(b"a".to_vec()),
                Value::Null,
                Value::Double(2.5),
            ]
        );
    }

    #[test]
    fn test_array_and_vec_into_row() {
        assert_eq!(
            ["x", "y"].into_row(),
            vec![Value::from("x"), Value::from("y")]
        );
        assert_eq!(
            vec![Value::Null, Value::from(3u16)].into_row(),
            vec![Value::Null, Value::UnsignedInt(3)]
        );
        assert!(Vec::<Value>::new().into_row().is_empty());
    }
}
