//! DATE, TIME and TIMESTAMP decoders.
//!
//! DATE is a 4-byte big-endian signed day count. Day 0 is 1858-11-17.
//! Adding `DATE_DAY_OFFSET` gives the day number fed to the integer
//! Julian-day-to-Gregorian conversion below.
//!
//! TIME is a 4-byte big-endian unsigned count of ten-thousandths of a second
//! since midnight.
//!
//! TIMESTAMP is a DATE followed by a TIME (8 bytes).
//!
//! No timezone is carried on the wire, so all results are naive values.

use crate::error::{Error, Result};
use crate::protocol::buffer::{read_i32_be, read_u32_be, split_window};
use crate::protocol::constants::{
    DATE_DAY_OFFSET, DAYS_PER_400_YEARS, DAYS_PER_4_YEARS, NANOS_PER_TIME_FRACTION,
    SECONDS_PER_DAY, TIME_FRACTIONS_PER_SECOND,
};
use crate::protocol::types::SqlType;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Convert a wire day count to `(year, month, day)`.
///
/// Integer arithmetic only; division truncates toward zero.
pub fn date_fields(day_count: i32) -> (i64, i64, i64) {
    let nday = day_count as i64 + DATE_DAY_OFFSET;

    let century = (4 * nday - 1) / DAYS_PER_400_YEARS;
    let day_of_century = 4 * nday - 1 - DAYS_PER_400_YEARS * century;
    let day_in_cent_year = day_of_century / 4;

    let year_in_century = (4 * day_in_cent_year + 3) / DAYS_PER_4_YEARS;
    let day_of_year = (4 * day_in_cent_year + 3 - DAYS_PER_4_YEARS * year_in_century + 4) / 4;

    // Months counted from March, so the leap day falls at the end of the year
    let month = (5 * day_of_year - 3) / 153;
    let day = (5 * day_of_year - 3 - 153 * month + 5) / 5;
    let year = 100 * century + year_in_century;

    if month < 10 {
        (year, month + 3, day)
    } else {
        (year + 1, month - 9, day)
    }
}

/// Split a wire time fraction into `(hour, minute, second, nanosecond)`.
///
/// Hours are not reduced modulo 24.
pub fn time_fields(fraction: u32) -> (u32, u32, u32, u32) {
    let total_seconds = fraction / TIME_FRACTIONS_PER_SECOND;
    let second = total_seconds % 60;
    let minute = (total_seconds / 60) % 60;
    let hour = total_seconds / 3600;
    let nano = (fraction % TIME_FRACTIONS_PER_SECOND) * NANOS_PER_TIME_FRACTION;
    (hour, minute, second, nano)
}

fn date_from_day_count(day_count: i32) -> Result<NaiveDate> {
    let (year, month, day) = date_fields(day_count);
    let invalid = || Error::InvalidDate { year, month, day };

    let y = i32::try_from(year).map_err(|_| invalid())?;
    let m = u32::try_from(month).map_err(|_| invalid())?;
    let d = u32::try_from(day).map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(invalid)
}

fn time_from_fraction(fraction: u32) -> Result<NaiveTime> {
    // One full day or more is not a time of day
    if fraction >= SECONDS_PER_DAY * TIME_FRACTIONS_PER_SECOND {
        return Err(Error::InvalidTime { fraction });
    }
    let (hour, minute, second, nano) = time_fields(fraction);
    NaiveTime::from_hms_nano_opt(hour, minute, second, nano)
        .ok_or(Error::InvalidTime { fraction })
}

/// Decode a DATE from 4 bytes.
///
/// # Errors
/// Returns `Error::InvalidLength` if data is not exactly 4 bytes, and
/// `Error::InvalidDate` if the day count is outside chrono's range.
///
/// # Example
/// ```ignore
/// let date = decode_date(&[0x00, 0x00, 0xc9, 0x58])?;
/// // Returns: 2000-01-01
/// ```
pub fn decode_date(data: &[u8]) -> Result<NaiveDate> {
    date_from_day_count(read_i32_be(data, SqlType::Date)?)
}

/// Decode a TIME from 4 bytes.
///
/// # Errors
/// Returns `Error::InvalidLength` if data is not exactly 4 bytes, and
/// `Error::InvalidTime` if the value is 24:00:00 or later.
pub fn decode_time(data: &[u8]) -> Result<NaiveTime> {
    time_from_fraction(read_u32_be(data, SqlType::Time)?)
}

/// Decode a TIMESTAMP from 8 bytes: DATE first, then TIME.
pub fn decode_timestamp(data: &[u8]) -> Result<NaiveDateTime> {
    let (date_part, time_part) = split_window(data, 4, SqlType::Timestamp)?;
    let date = date_from_day_count(read_i32_be(date_part, SqlType::Timestamp)?)?;
    let time = time_from_fraction(read_u32_be(time_part, SqlType::Timestamp)?)?;
    Ok(NaiveDateTime::new(date, time))
}
