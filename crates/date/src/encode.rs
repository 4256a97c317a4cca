//! Fixed-width binary encoding of lunar dates.
//!
//! The format is 5 bytes: year high byte, year low byte, month, day, and
//! the leap flag as 0 or 1. Decoding revalidates every field, so malformed
//! input is rejected with the same errors as direct construction.

use crate::date::LunarDate;
use crate::error::LunarDateError;

impl LunarDate {
    /// Encodes the date as its canonical 5-byte form.
    pub fn to_bytes(self) -> [u8; 5] {
        let [year_hi, year_lo] = self.year().to_be_bytes();
        [
            year_hi,
            year_lo,
            self.month(),
            self.day(),
            u8::from(self.is_leap_month()),
        ]
    }

    /// Decodes a date from its canonical 5-byte form.
    ///
    /// # Errors
    ///
    /// Returns [`LunarDateError::InvalidEncoding`] if the leap byte is not
    /// 0 or 1, and any [`LunarDate::new`] validation error if the decoded
    /// fields do not name a valid date.
    pub fn from_bytes(bytes: [u8; 5]) -> Result<Self, LunarDateError> {
        let [year_hi, year_lo, month, day, leap] = bytes;
        let leap_month = match leap {
            0 => false,
            1 => true,
            byte => return Err(LunarDateError::InvalidEncoding { byte }),
        };
        Self::new(u16::from_be_bytes([year_hi, year_lo]), month, day, leap_month)
    }
}
