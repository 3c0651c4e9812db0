//! Resolves date presets into inclusive calendar windows.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};
use penny_domain::date_range::{DatePreset, DateRange};

use crate::Clock;

pub struct DateRangeService;

impl DateRangeService {
    /// Resolves `preset` relative to `now`, used as given (no timezone conversion).
    pub fn resolve(preset: DatePreset, now: NaiveDateTime) -> DateRange {
        let current = first_of_month(now.date());
        let range = match preset {
            DatePreset::ThisMonth => DateRange::Bounded {
                start: current,
                end: last_of_month(current),
            },
            DatePreset::LastMonth => {
                let previous = months_before(current, 1);
                DateRange::Bounded {
                    start: previous,
                    end: last_of_month(previous),
                }
            }
            DatePreset::Last3Months => DateRange::Bounded {
                start: months_before(current, 2),
                end: last_of_month(current),
            },
            DatePreset::All => DateRange::Unbounded,
        };
        tracing::debug!(preset = preset.key(), %now, ?range, "date range resolved");
        range
    }

    /// Resolves `preset` against the clock's current instant.
    pub fn resolve_now(preset: DatePreset, clock: &dyn Clock) -> DateRange {
        Self::resolve(preset, clock.now())
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

// Results outside chrono's representable range clamp to its bounds.
fn months_before(first: NaiveDate, months: u32) -> NaiveDate {
    first
        .checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

fn last_of_month(first: NaiveDate) -> NaiveDate {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn last_of_month_handles_varied_lengths() {
        assert_eq!(last_of_month(date(2023, 2, 1)), date(2023, 2, 28));
        assert_eq!(last_of_month(date(2024, 2, 1)), date(2024, 2, 29));
        assert_eq!(last_of_month(date(2000, 2, 1)), date(2000, 2, 29));
        assert_eq!(last_of_month(date(1900, 2, 1)), date(1900, 2, 28));
        assert_eq!(last_of_month(date(2024, 4, 1)), date(2024, 4, 30));
        assert_eq!(last_of_month(date(2024, 12, 1)), date(2024, 12, 31));
    }

    #[test]
    fn months_before_crosses_year_boundaries() {
        assert_eq!(months_before(date(2024, 1, 1), 1), date(2023, 12, 1));
        assert_eq!(months_before(date(2024, 2, 1), 2), date(2023, 12, 1));
        assert_eq!(months_before(date(2024, 5, 1), 2), date(2024, 3, 1));
    }

    #[test]
    fn first_of_month_drops_the_day() {
        assert_eq!(first_of_month(date(2024, 7, 31)), date(2024, 7, 1));
    }
}
