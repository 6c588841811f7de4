//! Year/day values picked by the operator and the path they resolve to.

use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::config::LauncherConfig;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{input:?} is not a number; year must be {min} or later")]
    #[diagnostic(code(launcher::year_not_numeric))]
    YearNotNumeric { input: String, min: u32 },

    #[error("year must be {min} or later")]
    #[diagnostic(code(launcher::year_too_early))]
    YearTooEarly { year: u64, min: u32 },

    #[error("year {input} is larger than {} and cannot be represented", u64::MAX)]
    #[diagnostic(code(launcher::year_too_large))]
    YearTooLarge { input: String },

    #[error("{input:?} is not a number; day must be between 1 and {max}")]
    #[diagnostic(code(launcher::day_not_numeric))]
    DayNotNumeric { input: String, max: u32 },

    #[error("day must be between 1 and {max}")]
    #[diagnostic(code(launcher::day_out_of_range))]
    DayOutOfRange { input: String, max: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Year(u64);

impl Year {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day(u32);

impl Day {
    pub fn get(self) -> u32 {
        self.0
    }

    /// Directory name for the day, zero padded to two digits.
    pub fn dir_name(self) -> String {
        format!("{:02}", self.0)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn overflowed(err: &ParseIntError) -> bool {
    matches!(err.kind(), IntErrorKind::PosOverflow)
}

pub fn validate_year(config: &LauncherConfig, input: &str) -> Result<Year, ValidationError> {
    let input = input.trim();
    let year: u64 = input.parse().map_err(|err: ParseIntError| {
        if overflowed(&err) {
            ValidationError::YearTooLarge {
                input: input.to_string(),
            }
        } else {
            ValidationError::YearNotNumeric {
                input: input.to_string(),
                min: config.min_year,
            }
        }
    })?;
    if year < u64::from(config.min_year) {
        return Err(ValidationError::YearTooEarly {
            year,
            min: config.min_year,
        });
    }
    Ok(Year(year))
}

pub fn validate_day(config: &LauncherConfig, input: &str) -> Result<Day, ValidationError> {
    let input = input.trim();
    let out_of_range = || ValidationError::DayOutOfRange {
        input: input.to_string(),
        max: config.max_day,
    };
    let day: u32 = input.parse().map_err(|err: ParseIntError| {
        if overflowed(&err) {
            out_of_range()
        } else {
            ValidationError::DayNotNumeric {
                input: input.to_string(),
                max: config.max_day,
            }
        }
    })?;
    if !(1..=config.max_day).contains(&day) {
        return Err(out_of_range());
    }
    Ok(Day(day))
}

/// A validated year and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub year: Year,
    pub day: Day,
}

impl Selection {
    /// `<base>/<year>/<dd>/<entry point>`
    pub fn resolve(&self, config: &LauncherConfig) -> PathBuf {
        config
            .base_dir
            .join(self.year.to_string())
            .join(self.day.dir_name())
            .join(&config.entry_point)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Year {} Day {}", self.year, self.day)
    }
}
