//! NULL bitmap of binary protocol rows

/// Read-only view of a NULL bitmap
///
/// Result set rows reserve the first two bits, so column `i` lives at bit
/// `i + 2`.
#[derive(Debug, Clone, Copy)]
pub struct NullBitmap<'a> {
    bitmap: &'a [u8],
    offset: usize,
}

impl<'a> NullBitmap<'a> {
    /// Create a NULL bitmap for result sets (offset = 2)
    pub fn for_result_set(bitmap: &'a [u8]) -> Self {
        Self { bitmap, offset: 2 }
    }

    /// Check if the column at the given index is NULL
    ///
    /// # Arguments
    /// * `idx` - Column index (0-based)
    ///
    /// # Returns
    /// `true` if the column is NULL, `false` otherwise
    pub fn is_null(&self, idx: usize) -> bool {
        let bit_pos = idx + self.offset;
        let byte_pos = bit_pos >> 3;
        let bit_offset = bit_pos & 7;

        if byte_pos >= self.bitmap.len() {
            return false;
        }

        (self.bitmap[byte_pos] & (1 << bit_offset)) != 0
    }

    /// Get the raw bitmap bytes
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bitmap
    }
}

/// Owned, writable NULL bitmap used while encoding a binary row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullBitmapMut {
    bitmap: Vec<u8>,
    offset: usize,
}

impl NullBitmapMut {
    /// All-zero bitmap sized for `num_columns` result set columns
    pub fn for_result_set(num_columns: usize) -> Self {
        let offset = 2;
        Self {
            bitmap: vec![0; (num_columns + offset).div_ceil(8)],
            offset,
        }
    }

    /// Mark column `idx` as NULL
    ///
    /// Indices beyond the sized column count are ignored.
    pub fn set_null(&mut self, idx: usize) {
        let bit_pos = idx + self.offset;
        if let Some(byte) = self.bitmap.get_mut(bit_pos >> 3) {
            *byte |= 1 << (bit_pos & 7);
        }
    }

    pub fn len(&self) -> usize {
        self.bitmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bitmap.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bitmap
    }

    pub fn as_view(&self) -> NullBitmap<'_> {
        NullBitmap {
            bitmap: &self.bitmap,
            offset: self.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_bitmap_result_set() {
        // Bitmap for result set with offset=2
        // - Bit 2 (col 0) = 1 -> NULL
        // - Bit 3 (col 1) = 0
        // - Bit 12 (col 10) = 1 -> NULL
        let bitmap = [0b00000100, 0b00010000];
        let null_bitmap = NullBitmap::for_result_set(&bitmap);

        assert!(null_bitmap.is_null(0));
        assert!(!null_bitmap.is_null(1));
        assert!(!null_bitmap.is_null(2));
        assert!(null_bitmap.is_null(10));
        assert!(!null_bitmap.is_null(100));
    }

    #[test]
    fn test_null_bitmap_mut_sizes() {
        assert_eq!(NullBitmapMut::for_result_set(0).len(), 1);
        assert_eq!(NullBitmapMut::for_result_set(1).len(), 1);
        assert_eq!(NullBitmapMut::for_result_set(6).len(), 1);
        assert_eq!(NullBitmapMut::for_result_set(7).len(), 2);
        assert_eq!(NullBitmapMut::for_result_set(14).len(), 2);
        assert_eq!(NullBitmapMut::for_result_set(15).len(), 3);
        assert!(!NullBitmapMut::for_result_set(0).is_empty());
    }

    #[test]
    fn test_null_bitmap_mut_set_null() {
        let mut bitmap = NullBitmapMut::for_result_set(11);
        bitmap.set_null(0);
        bitmap.set_null(5);
        bitmap.set_null(6);
        bitmap.set_null(10);
        assert_eq!(bitmap.as_bytes(), &[0b1000_0100, 0b0001_0001]);

        let view = bitmap.as_view();
        for idx in 0..11 {
            assert_eq!(view.is_null(idx), matches!(idx, 0 | 5 | 6 | 10), "column {idx}");
        }
    }

    #[test]
    fn test_null_bitmap_mut_out_of_range_is_ignored() {
        let mut bitmap = NullBitmapMut::for_result_set(3);
        bitmap.set_null(40);
        assert_eq!(bitmap.as_bytes(), &[0]);
    }
}
