//! # nongli-date
//!
//! A Chinese lunar calendar date type, convertible losslessly to and from
//! the proleptic Gregorian (solar) calendar for lunar years 1900..=2100.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["packed tables (table)"] -->|"decode"| B["LunarYear months"]
//!     B --> C["solar_to_lunar / lunar_to_solar (convert)"]
//!     C --> D["LunarDate"]
//!     D -->|"to_solar() / to_ordinal()"| E["chrono::NaiveDate"]
//!     D -->|"to_bytes() / from_bytes()"| F["5-byte encoding"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use nongli_date::LunarDate;
//!
//! // Field construction with validation
//! let date = LunarDate::new(2017, 6, 1, true)?; // leap month 6 of 2017
//!
//! // Solar conversions
//! let solar = NaiveDate::from_ymd_opt(1945, 11, 12).unwrap();
//! assert_eq!(LunarDate::from_solar(solar)?, LunarDate::new(1945, 10, 8, false)?);
//!
//! // Day arithmetic through ordinals
//! let next = date.checked_add(chrono::TimeDelta::days(1))?;
//! assert_eq!(next - date, chrono::TimeDelta::days(1));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `table` | Packed per-year calendar data and bit decoding |
//! | `year` | Lunar year structure and month-length queries |
//! | `convert` | Solar-to-lunar and lunar-to-solar algorithms |
//! | `date` | The `LunarDate` value type and its arithmetic |
//! | `encode` | 5-byte binary encoding |
//! | `error` | Error types |
//!
//! All data is static and immutable, so every type here is freely shareable
//! across threads.

mod convert;
mod date;
mod encode;
mod error;
mod table;
mod year;

pub use date::LunarDate;
pub use error::LunarDateError;
pub use year::{LunarMonth, LunarYear};

/// First lunar year covered by the calendar tables.
pub const MIN_YEAR: u16 = 1900;

/// Last lunar year covered by the calendar tables.
pub const MAX_YEAR: u16 = 2100;

/// Ordinal of solar 1900-01-31, the first convertible day.
pub(crate) const MIN_ORDINAL: i32 = 693_626;

/// Ordinal of solar 2100-12-31, the last convertible day.
pub(crate) const MAX_ORDINAL: i32 = 767_009;
