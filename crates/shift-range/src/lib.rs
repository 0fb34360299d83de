//! # shift-range
//!
//! Deterministic parsing of free-form shift-time range strings.
//!
//! Upstream scheduling systems export shift times as loosely formatted text
//! (`"1900-0000"`, `"11:00 AM - 08:00 PM"`, `"LA 7:00 PM - 12:00 AM"`).
//! This crate turns such a string plus a calendar date into an unambiguous
//! start/end timestamp pair: timezone abbreviations are resolved to IANA
//! zones, overnight shifts roll the end over to the next calendar day, and
//! the result can be reprojected into a target timezone while preserving the
//! absolute instant.
//!
//! ## Modules
//!
//! - [`range`] — shape recognition, timestamp construction, rollover, reprojection
//! - [`error`] — error types
//!
//! ## Example
//!
//! ```
//! use shift_range::parse_range;
//!
//! let range = parse_range("2022-07-22", "LA 7:00 PM - 12:00 AM", "SAST", None).unwrap();
//! assert_eq!(range.start, "2022-07-22 19:00:00");
//! assert_eq!(range.end, "2022-07-23 00:00:00");
//! ```

pub mod error;
pub mod range;

pub use error::ShiftRangeError;
pub use range::{parse_range, ShiftRange};
