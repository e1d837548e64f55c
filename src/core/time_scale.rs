use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::core::ticks::{tick_increment, ticks};
use crate::error::{ChartError, ChartResult};

const SECOND: f64 = 1_000.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const WEEK: f64 = 7.0 * DAY;
const MONTH: f64 = 30.0 * DAY;
const YEAR: f64 = 365.0 * DAY;

/// A single-date extent is widened by this much on each side.
const DEGENERATE_HALF_SPAN: f64 = DAY / 2.0;
const MAX_TICKS: usize = 1_000;

/// Calendar interval used to place time-axis ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickInterval {
    Millis(i64),
    Days(u32),
    Weeks,
    Months(u32),
    Years(i32),
}

const TICK_INTERVALS: [(TickInterval, f64); 17] = [
    (TickInterval::Millis(1_000), SECOND),
    (TickInterval::Millis(5_000), 5.0 * SECOND),
    (TickInterval::Millis(15_000), 15.0 * SECOND),
    (TickInterval::Millis(30_000), 30.0 * SECOND),
    (TickInterval::Millis(60_000), MINUTE),
    (TickInterval::Millis(300_000), 5.0 * MINUTE),
    (TickInterval::Millis(900_000), 15.0 * MINUTE),
    (TickInterval::Millis(1_800_000), 30.0 * MINUTE),
    (TickInterval::Millis(3_600_000), HOUR),
    (TickInterval::Millis(10_800_000), 3.0 * HOUR),
    (TickInterval::Millis(21_600_000), 6.0 * HOUR),
    (TickInterval::Millis(43_200_000), 12.0 * HOUR),
    (TickInterval::Days(1), DAY),
    (TickInterval::Days(2), 2.0 * DAY),
    (TickInterval::Weeks, WEEK),
    (TickInterval::Months(1), MONTH),
    (TickInterval::Months(3), 3.0 * MONTH),
];

/// Time axis mapping epoch milliseconds to pixels.
///
/// The domain is the extent of the supplied times, not a calendar range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(time_start: f64, time_end: f64, range: (f64, f64)) -> ChartResult<Self> {
        let domain = normalize_range(time_start, time_end, DEGENERATE_HALF_SPAN)?;
        Ok(Self {
            linear: LinearScale::new(domain, range)?,
        })
    }

    /// Fits the domain to the min/max of `times`.
    pub fn from_extent(times: impl IntoIterator<Item = f64>, range: (f64, f64)) -> ChartResult<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut seen = false;
        for time in times {
            if !time.is_finite() {
                return Err(ChartError::InvalidData(
                    "time values must be finite".to_owned(),
                ));
            }
            seen = true;
            min = min.min(time);
            max = max.max(time);
        }
        if !seen {
            return Err(ChartError::InvalidData(
                "time scale cannot be built from empty data".to_owned(),
            ));
        }
        Self::new(min, max, range)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn time_to_pixel(self, time: f64) -> f64 {
        self.linear.map(time)
    }

    pub fn pixel_to_time(self, pixel: f64) -> ChartResult<f64> {
        self.linear.invert(pixel)
    }

    /// Roughly `count` ticks aligned to a calendar interval (UTC).
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let (start, stop) = self.domain();
        let count = count.max(1) as f64;
        let target = (stop - start) / count;

        let index = TICK_INTERVALS.partition_point(|(_, duration)| *duration <= target);
        let interval = if index == TICK_INTERVALS.len() {
            let step = tick_increment(start / YEAR, stop / YEAR, count).round().max(1.0);
            TickInterval::Years(step as i32)
        } else if index == 0 {
            return ticks(start, stop, count)
                .into_iter()
                .map(f64::round)
                .collect();
        } else {
            let (before, before_duration) = TICK_INTERVALS[index - 1];
            let (after, after_duration) = TICK_INTERVALS[index];
            if target / before_duration < after_duration / target {
                before
            } else {
                after
            }
        };

        interval_ticks(interval, start, stop)
    }
}

/// Formats an epoch-millisecond tick with a strftime pattern.
#[must_use]
pub fn format_time(millis: f64, pattern: &str) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis.round() as i64)
        .map(|time| time.format(pattern).to_string())
        .unwrap_or_default()
}

fn interval_ticks(interval: TickInterval, start: f64, stop: f64) -> Vec<f64> {
    let mut out = Vec::new();
    match interval {
        TickInterval::Millis(step) => {
            let step = step as f64;
            let mut tick = (start / step).ceil() * step;
            while tick <= stop && out.len() < MAX_TICKS {
                out.push(tick);
                tick += step;
            }
        }
        TickInterval::Days(every) => {
            let mut day = (start / DAY).ceil() * DAY;
            while day <= stop && out.len() < MAX_TICKS {
                let keep = DateTime::<Utc>::from_timestamp_millis(day as i64)
                    .is_some_and(|time| time.day0() % every == 0);
                if keep {
                    out.push(day);
                }
                day += DAY;
            }
        }
        TickInterval::Weeks => {
            let mut day_index = (start / DAY).ceil() as i64;
            // 1970-01-01 was a Thursday; ticks fall on Sundays.
            while (day_index + 4).rem_euclid(7) != 0 {
                day_index += 1;
            }
            let mut tick = day_index as f64 * DAY;
            while tick <= stop && out.len() < MAX_TICKS {
                out.push(tick);
                tick += WEEK;
            }
        }
        TickInterval::Months(every) => {
            let Some(mut month) = first_month_start_at_or_after(start) else {
                return out;
            };
            loop {
                let tick = month_start_millis(month);
                if tick > stop || out.len() >= MAX_TICKS {
                    break;
                }
                if month.month0() % every == 0 {
                    out.push(tick);
                }
                let Some(next) = next_month(month) else {
                    break;
                };
                month = next;
            }
        }
        TickInterval::Years(every) => {
            let Some(first) = DateTime::<Utc>::from_timestamp_millis(start.ceil() as i64) else {
                return out;
            };
            let mut year = first.year();
            if month_start_millis_ymd(year, 1) < start {
                year += 1;
            }
            year += (every - year.rem_euclid(every)) % every;
            while out.len() < MAX_TICKS {
                let tick = month_start_millis_ymd(year, 1);
                if !tick.is_finite() || tick > stop {
                    break;
                }
                out.push(tick);
                year += every;
            }
        }
    }
    out
}

fn first_month_start_at_or_after(millis: f64) -> Option<NaiveDate> {
    let time = DateTime::<Utc>::from_timestamp_millis(millis.ceil() as i64)?;
    let first = NaiveDate::from_ymd_opt(time.year(), time.month(), 1)?;
    if month_start_millis(first) >= millis {
        Some(first)
    } else {
        next_month(first)
    }
}

fn next_month(date: NaiveDate) -> Option<NaiveDate> {
    if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    }
}

fn month_start_millis(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis() as f64
}

fn month_start_millis_ymd(year: i32, month: u32) -> f64 {
    NaiveDate::from_ymd_opt(year, month, 1).map_or(f64::NAN, month_start_millis)
}

fn normalize_range(start: f64, end: f64, half_span: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "scale range must be finite".to_owned(),
        ));
    }

    if start == end {
        return Ok((start - half_span, end + half_span));
    }

    Ok((start.min(end), start.max(end)))
}
