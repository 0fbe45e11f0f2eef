use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};

/// Day/hour/minute/second breakdown of the span left until a target instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownRemaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownRemaining {
    /// A fully elapsed remainder.
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Splits the whole seconds between `now` and `target` into calendar-free
    /// units. A target at or before `now` yields [`CountdownRemaining::ZERO`].
    pub fn between<Tz: TimeZone>(now: &DateTime<Tz>, target: &DateTime<Tz>) -> Self {
        let total = target.clone().signed_duration_since(now.clone()).num_seconds();
        if total <= 0 {
            return Self::ZERO;
        }
        Self {
            days: total / 86_400,
            hours: total % 86_400 / 3_600,
            minutes: total % 3_600 / 60,
            seconds: total % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Renders the remainder starting at the largest non-zero unit and keeping
    /// every unit below it, e.g. `2m 5s` or `1d 0h 0m 0s`. An elapsed
    /// remainder renders as `0s`.
    pub fn format(&self) -> String {
        let mut parts = Vec::with_capacity(4);
        for (value, unit) in [(self.days, "d"), (self.hours, "h"), (self.minutes, "m")] {
            if value > 0 || !parts.is_empty() {
                parts.push(format!("{value}{unit}"));
            }
        }
        parts.push(format!("{}s", self.seconds));
        parts.join(" ")
    }
}

/// Snapshot of the countdown that the backend pushes to the frontend once per
/// second while the countdown is armed.
#[derive(Debug, Clone)]
pub struct CountdownState {
    /// The instant the countdown runs towards.
    pub target: DateTime<Local>,
    /// Time left until `target`, all zero once `ended` flips.
    pub remaining: CountdownRemaining,
    /// True from the first tick at which `target` is no longer in the future.
    pub ended: bool,
}

impl CountdownState {
    /// Computes the countdown state as observed at `now`.
    pub fn at(now: &DateTime<Local>, target: DateTime<Local>) -> Self {
        let remaining = CountdownRemaining::between(now, &target);
        Self {
            target,
            ended: remaining.is_zero(),
            remaining,
        }
    }
}

/// Resolves the next occurrence of a recurring `month`/`day` anniversary
/// strictly after `now`, at local midnight. An anniversary that already passed
/// this year rolls over to next year. A February 29 anniversary falls through
/// to March 1 in non-leap years.
///
/// Returns `None` when `month`/`day` is not a real calendar date.
pub fn next_occurrence<Tz: TimeZone>(
    now: &DateTime<Tz>,
    month: u32,
    day: u32,
) -> Option<DateTime<Tz>> {
    // Validate against a leap year so that February 29 itself is accepted.
    NaiveDate::from_ymd_opt(2024, month, day)?;
    let tz = now.timezone();
    for year in [now.year(), now.year() + 1] {
        let date = NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
            (month == 2 && day == 29)
                .then(|| NaiveDate::from_ymd_opt(year, 3, 1))
                .flatten()
        })?;
        // A DST gap at midnight shifts the target to the first mappable hour.
        let candidate = tz
            .from_local_datetime(&date.and_hms_opt(0, 0, 0)?)
            .earliest()
            .or_else(|| tz.from_local_datetime(&date.and_hms_opt(1, 0, 0)?).earliest())?;
        if candidate > *now {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn ninety_seconds_breaks_into_one_minute_thirty() {
        let now = Utc.with_ymd_and_hms(2026, 8, 21, 12, 0, 0).unwrap();
        let target = now + Duration::seconds(90);
        let remaining = CountdownRemaining::between(&now, &target);
        assert_eq!(
            remaining,
            CountdownRemaining {
                days: 0,
                hours: 0,
                minutes: 1,
                seconds: 30
            }
        );
    }

    #[test]
    fn remaining_decreases_towards_zero() {
        let start = Utc.with_ymd_and_hms(2026, 8, 21, 12, 0, 0).unwrap();
        let target = start + Duration::seconds(90);
        let mut previous = CountdownRemaining::between(&start, &target);
        for tick in 1..=90 {
            let now = start + Duration::seconds(tick);
            let current = CountdownRemaining::between(&now, &target);
            let previous_total =
                previous.days * 86_400 + previous.hours * 3_600 + previous.minutes * 60 + previous.seconds;
            let current_total =
                current.days * 86_400 + current.hours * 3_600 + current.minutes * 60 + current.seconds;
            assert_eq!(current_total, previous_total - 1);
            previous = current;
        }
        assert!(previous.is_zero());
    }

    #[test]
    fn past_target_yields_zero() {
        let now = Utc.with_ymd_and_hms(2026, 8, 21, 12, 0, 0).unwrap();
        let target = now - Duration::seconds(5);
        assert!(CountdownRemaining::between(&now, &target).is_zero());
    }

    #[test]
    fn multi_day_breakdown_carries_each_unit() {
        let now = Utc.with_ymd_and_hms(2026, 8, 21, 12, 0, 0).unwrap();
        let target = now + Duration::seconds(2 * 86_400 + 3 * 3_600 + 5 * 60 + 1);
        assert_eq!(
            CountdownRemaining::between(&now, &target),
            CountdownRemaining {
                days: 2,
                hours: 3,
                minutes: 5,
                seconds: 1
            }
        );
    }

    #[test]
    fn format_omits_leading_zero_units_only() {
        let two_minutes_five = CountdownRemaining {
            days: 0,
            hours: 0,
            minutes: 2,
            seconds: 5,
        };
        assert_eq!(two_minutes_five.format(), "2m 5s");

        let one_day = CountdownRemaining {
            days: 1,
            hours: 0,
            minutes: 0,
            seconds: 0,
        };
        assert_eq!(one_day.format(), "1d 0h 0m 0s");

        assert_eq!(CountdownRemaining::ZERO.format(), "0s");
    }

    #[test]
    fn state_at_past_target_is_ended() {
        let now = Local.timestamp_opt(1_700_000_000, 0).unwrap();
        let target = now - Duration::hours(1);
        let state = CountdownState::at(&now, target);
        assert!(state.ended);
        assert!(state.remaining.is_zero());
    }

    #[test]
    fn state_at_future_target_is_running() {
        let now = Local.timestamp_opt(1_700_000_000, 0).unwrap();
        let target = now + Duration::seconds(61);
        let state = CountdownState::at(&now, target);
        assert!(!state.ended);
        assert_eq!(state.remaining.minutes, 1);
        assert_eq!(state.remaining.seconds, 1);
    }

    #[test]
    fn next_occurrence_stays_in_current_year_when_upcoming() {
        let now = Utc.with_ymd_and_hms(2026, 8, 21, 12, 0, 0).unwrap();
        let target = next_occurrence(&now, 10, 24).unwrap();
        assert_eq!(target, Utc.with_ymd_and_hms(2026, 10, 24, 0, 0, 0).unwrap());
    }

    #[test]
    fn next_occurrence_rolls_past_dates_to_next_year() {
        let now = Utc.with_ymd_and_hms(2026, 8, 21, 12, 0, 0).unwrap();
        let target = next_occurrence(&now, 3, 14).unwrap();
        assert_eq!(target, Utc.with_ymd_and_hms(2027, 3, 14, 0, 0, 0).unwrap());
    }

    #[test]
    fn next_occurrence_rolls_over_on_the_day_itself() {
        let now = Utc.with_ymd_and_hms(2026, 8, 21, 12, 0, 0).unwrap();
        let target = next_occurrence(&now, 8, 21).unwrap();
        assert_eq!(target, Utc.with_ymd_and_hms(2027, 8, 21, 0, 0, 0).unwrap());
    }

    #[test]
    fn february_29_falls_through_to_march_1_outside_leap_years() {
        let now = Utc.with_ymd_and_hms(2026, 8, 21, 12, 0, 0).unwrap();
        let target = next_occurrence(&now, 2, 29).unwrap();
        assert_eq!(target, Utc.with_ymd_and_hms(2027, 3, 1, 0, 0, 0).unwrap());

        let before_leap_day = Utc.with_ymd_and_hms(2028, 1, 10, 0, 0, 0).unwrap();
        let target = next_occurrence(&before_leap_day, 2, 29).unwrap();
        assert_eq!(target, Utc.with_ymd_and_hms(2028, 2, 29, 0, 0, 0).unwrap());
    }

    #[test]
    fn impossible_dates_are_rejected() {
        let now = Utc.with_ymd_and_hms(2026, 8, 21, 12, 0, 0).unwrap();
        assert!(next_occurrence(&now, 13, 1).is_none());
        assert!(next_occurrence(&now, 4, 31).is_none());
        assert!(next_occurrence(&now, 0, 10).is_none());
    }
}
