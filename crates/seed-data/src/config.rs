//! Configuration types for fleet data generation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use time::{Date, Month, OffsetDateTime};

use crate::db::SeedError;

/// Trip volume of the default plan, oldest month first.
pub const DEFAULT_MONTHLY_TRIPS: [usize; 12] = [14, 16, 18, 20, 22, 24, 26, 28, 30, 32, 34, 36];

/// Number of trips to generate in one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthPlan {
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u8,
    pub trips: usize,
}

impl MonthPlan {
    pub const fn new(year: i32, month: u8, trips: usize) -> Self {
        Self { year, month, trips }
    }

    /// Builds a plan covering `counts.len()` consecutive months ending with
    /// the anchor's month.
    pub fn trailing(anchor: Date, counts: &[usize]) -> Vec<MonthPlan> {
        let anchor_index = anchor.year() * 12 + i32::from(u8::from(anchor.month())) - 1;
        let first = anchor_index - counts.len() as i32 + 1;

        counts
            .iter()
            .enumerate()
            .map(|(offset, trips)| {
                let index = first + offset as i32;
                MonthPlan::new(index.div_euclid(12), (index.rem_euclid(12) + 1) as u8, *trips)
            })
            .collect()
    }

    pub fn calendar_month(&self) -> Result<Month, SeedError> {
        Month::try_from(self.month).map_err(SeedError::from)
    }

    /// Returns the date of `day` within this month.
    pub fn day(&self, day: u8) -> Result<Date, SeedError> {
        Ok(Date::from_calendar_date(self.year, self.calendar_month()?, day)?)
    }

    /// Whether `date` falls within this month.
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && u8::from(date.month()) == self.month
    }

    /// `YYYY-MM` label used in summaries.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Configuration for a seeding run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Seed of the pseudo-random generator.
    pub seed: u64,

    /// Rows per `create_many` call for high-volume entities.
    pub batch_size: usize,

    /// Explicit month plan. The last entry is the current month. When absent
    /// the trailing twelve months of the anchor are used.
    pub months: Option<Vec<MonthPlan>>,

    /// Reference "now" for every relative date. Defaults to the wall clock.
    #[serde(with = "time::serde::rfc3339::option")]
    pub anchor: Option<OffsetDateTime>,

    /// Password given to every seeded user.
    pub default_password: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            batch_size: 50,
            months: None,
            anchor: None,
            default_password: "fleetops123".to_string(),
        }
    }
}

impl SeedConfig {
    /// Reads a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SeedError::InvalidConfig(format!("{}: {e}", path.display())))?;
        let config: SeedConfig = serde_json::from_str(&raw)
            .map_err(|e| SeedError::InvalidConfig(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that cannot produce a dataset.
    pub fn validate(&self) -> Result<(), SeedError> {
        if self.batch_size == 0 {
            return Err(SeedError::InvalidConfig("batch_size must be at least 1".into()));
        }
        if let Some(months) = &self.months {
            if months.is_empty() {
                return Err(SeedError::InvalidConfig("month plan is empty".into()));
            }
            for plan in months {
                if !(1..=12).contains(&plan.month) {
                    return Err(SeedError::InvalidConfig(format!(
                        "month {} of {} is out of range",
                        plan.month, plan.year
                    )));
                }
            }
        }
        Ok(())
    }

    /// Returns the month plan for a run anchored at `anchor`.
    pub fn resolve_months(&self, anchor: Date) -> Vec<MonthPlan> {
        match &self.months {
            Some(months) => months.clone(),
            None => MonthPlan::trailing(anchor, &DEFAULT_MONTHLY_TRIPS),
        }
    }
}
