//! `MM/DD/YYYY` birth date parsing.

use chrono::NaiveDate;
use numen_core::errors::InputError;

const FORMAT_HINT: &str = "expected MM/DD/YYYY";

/// A parsed birth date. Only the numeric components matter to numerology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate {
    pub month: u32,
    pub day: u32,
    pub year: u32,
}

impl BirthDate {
    /// Parse `MM/DD/YYYY`. Leading zeros are optional, surrounding whitespace
    /// per component is ignored. With `validate_calendar`, dates that do not
    /// exist (`02/30/1990`) are rejected.
    pub fn parse(input: &str, validate_calendar: bool) -> Result<Self, InputError> {
        let parts: Vec<&str> = input.split('/').collect();
        let [month, day, year] = parts.as_slice() else {
            return Err(malformed(input, FORMAT_HINT));
        };

        let month = component(input, "month", month)?;
        let day = component(input, "day", day)?;
        let year = component(input, "year", year)?;

        if !(1..=12).contains(&month) {
            return Err(out_of_range(input, "month", month));
        }
        if !(1..=31).contains(&day) {
            return Err(out_of_range(input, "day", day));
        }

        let date = Self { month, day, year };
        if validate_calendar && date.to_naive_date().is_none() {
            return Err(InputError::ImpossibleDate {
                input: input.to_string(),
            });
        }
        Ok(date)
    }

    /// month + day + year, the input to life path reduction.
    pub fn component_sum(&self) -> u64 {
        u64::from(self.month) + u64::from(self.day) + u64::from(self.year)
    }

    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let year = i32::try_from(self.year).ok()?;
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

fn component(input: &str, name: &'static str, raw: &str) -> Result<u32, InputError> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(input, &format!("{name} is not a number")));
    }
    raw.parse::<u32>()
        .map_err(|_| malformed(input, &format!("{name} is too large")))
}

fn malformed(input: &str, reason: &str) -> InputError {
    InputError::MalformedDate {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

fn out_of_range(input: &str, component: &'static str, value: u32) -> InputError {
    InputError::InvalidDateComponent {
        input: input.to_string(),
        component,
        value,
    }
}
