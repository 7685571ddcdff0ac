//! Digit-sum reduction with master number retention.

use crate::consts::{MASTER_NUMBERS, MAX_SINGLE_DIGIT, RADIX};

/// Returns true for 11, 22 and 33.
#[inline]
pub fn is_master_number(value: u32) -> bool {
    MASTER_NUMBERS.contains(&value)
}

/// Sum of the decimal digits of `value`.
pub const fn digit_sum(mut value: u32) -> u32 {
    let mut sum = 0;
    while value > 0 {
        sum += value % RADIX;
        value /= RADIX;
    }
    sum
}

/// Repeatedly replaces `value` with its digit sum until it is a single digit
/// or a master number.
///
/// The master check runs before every step, so a value that already is 11,
/// 22 or 33 comes back unchanged.
pub fn reduce(mut value: u32) -> u32 {
    while value > MAX_SINGLE_DIGIT && !is_master_number(value) {
        let next = digit_sum(value);
        tracing::trace!(from = value, to = next, "digit sum step");
        value = next;
    }
    value
}
