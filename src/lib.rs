//! Conversion between Gregorian dates and the fixed 364-day Tekufah calendar.
//!
//! The sacred year has twelve months of 30 days, except months 3, 6, 9 and 12,
//! which end with a 31st "Tekufah" day, for exactly 52 weeks.  Every
//! conversion takes the anchor (the Gregorian date of Month 1, Day 1) as an
//! explicit argument; nothing here holds state.
//!
//! ```
//! use tekufah::{gregorian_to_sacred, sacred_to_gregorian, SacredDate};
//! use time::macros::date;
//!
//! let anchor = date!(2024 - 03 - 25);
//! assert_eq!(sacred_to_gregorian(anchor, 3, 31), Ok(date!(2024 - 06 - 23)));
//! assert_eq!(
//!     gregorian_to_sacred(anchor, date!(2024 - 04 - 24)),
//!     SacredDate::new(2, 1).ok(),
//! );
//! assert_eq!(gregorian_to_sacred(anchor, date!(2023 - 01 - 01)), None);
//! ```
mod calendar;
mod error;
mod presets;
pub use crate::calendar::*;
pub use crate::error::CalendarError;
pub use crate::presets::{PresetError, Presets};
