/// Numbers that are never reduced further
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Largest value that counts as reduced without being a master number
pub const MAX_SINGLE_DIGIT: u32 = 9;

/// Base used for digit sums
pub(crate) const RADIX: u32 = 10;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: u8 = b'-';

/// Number of digit characters in the year field
pub const YEAR_WIDTH: usize = 4;
/// Number of digit characters in the month field
pub const MONTH_WIDTH: usize = 2;
/// Number of digit characters in the day field
pub const DAY_WIDTH: usize = 2;

/// Total length of a `YYYY-MM-DD` string
pub const DATE_LENGTH: usize = YEAR_WIDTH + 1 + MONTH_WIDTH + 1 + DAY_WIDTH;

/// Byte offsets of the two separators
pub(crate) const FIRST_SEPARATOR_AT: usize = YEAR_WIDTH;
pub(crate) const SECOND_SEPARATOR_AT: usize = YEAR_WIDTH + 1 + MONTH_WIDTH;

/// Largest value a four digit year field can hold
pub const MAX_YEAR_FIELD: u16 = 9999;
/// Largest value a two digit field can hold
pub const MAX_TWO_DIGIT_FIELD: u8 = 99;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;
