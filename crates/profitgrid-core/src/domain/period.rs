use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::ValidationError;

const DAY_MONTH: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day]");
const MONTH_YEAR: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] '[year repr:last_two]");
const YEAR: &[BorrowedFormatItem<'static>] = format_description!("[year]");

/// Price-history window selectable on the analyzer chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartPeriod {
    #[default]
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "5Y")]
    FiveYears,
}

impl ChartPeriod {
    pub const ALL: [Self; 4] = [
        Self::OneMonth,
        Self::ThreeMonths,
        Self::OneYear,
        Self::FiveYears,
    ];

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim().to_ascii_uppercase().as_str() {
            "1M" => Ok(Self::OneMonth),
            "3M" => Ok(Self::ThreeMonths),
            "1Y" => Ok(Self::OneYear),
            "5Y" => Ok(Self::FiveYears),
            _ => Err(ValidationError::InvalidPeriod {
                value: input.to_owned(),
            }),
        }
    }

    /// Day count sent as `?days=N` to the price endpoint.
    pub const fn days(self) -> u32 {
        match self {
            Self::OneMonth => 30,
            Self::ThreeMonths => 90,
            Self::OneYear => 365,
            Self::FiveYears => 1825,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::OneYear => "1Y",
            Self::FiveYears => "5Y",
        }
    }

    /// Axis label for a chart point. Longer windows drop the day, then the month.
    pub fn format_label(self, date: Date) -> String {
        let format = match self {
            Self::OneMonth | Self::ThreeMonths => DAY_MONTH,
            Self::OneYear => MONTH_YEAR,
            Self::FiveYears => YEAR,
        };

        date.format(format).unwrap_or_else(|_| date.to_string())
    }
}

impl Display for ChartPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartPeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
