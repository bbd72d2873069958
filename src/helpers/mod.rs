//! # Helpers
//!
//! Small pure functions that batch operations commonly lean on: string templating
//! and numeric wrapping, clamping and rounding. None of them touch the scheduler.

pub mod numeric;
pub mod template;

pub use numeric::{clamp, local_format_number, mod_with_neg, roll, round_digits};
pub use template::format_template;
