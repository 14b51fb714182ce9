//! Forecast frequency codes and timeline stepping
//!
//! A frequency knows how to produce the next timestamp strictly after a given
//! one. Monthly stepping lands on calendar month-ends, which is what the KNMI
//! monthly aggregates use as well.

use anyhow::{Result, anyhow};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Hourly,
    Daily,
    Monthly,
}

impl Frequency {
    /// Single-letter code as used in the config (`H`, `D`, `M`).
    pub fn code(&self) -> &'static str {
        match self {
            Frequency::Hourly => "H",
            Frequency::Daily => "D",
            Frequency::Monthly => "M",
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "H" => Ok(Frequency::Hourly),
            "D" => Ok(Frequency::Daily),
            "M" => Ok(Frequency::Monthly),
            other => Err(anyhow!("Unknown frequency code: '{}'", other)),
        }
    }

    /// The first timestamp on this frequency's grid strictly after `t`.
    pub fn next_after(&self, t: NaiveDateTime) -> NaiveDateTime {
        match self {
            Frequency::Hourly => t + Duration::hours(1),
            Frequency::Daily => t + Duration::days(1),
            Frequency::Monthly => {
                let candidate = midnight(month_end(t.date().year(), t.date().month()));
                if candidate > t {
                    candidate
                } else {
                    let (year, month) = next_month(t.date().year(), t.date().month());
                    midnight(month_end(year, month))
                }
            }
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label = match self {
            Frequency::Hourly => "hourly",
            Frequency::Daily => "daily",
            Frequency::Monthly => "monthly",
        };
        write!(f, "{}", label)
    }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

/// Last calendar day of the given month.
fn month_end(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_mon) = next_month(year, month);
    NaiveDate::from_ymd_opt(next_year, next_mon, 1)
        .expect("valid calendar date")
        .pred_opt()
        .expect("month end exists")
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("midnight exists")
}
