use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Timelike, Utc};

use crate::errors::InternalError;
use crate::types::db::event;
use crate::types::internal::schedule::{DayBucket, HourSlot, MonthCalendar, WeeklySchedule};

const SECONDS_PER_HOUR: i64 = 3600;
const HOURS_PER_WEEK: i64 = 7 * 24;

/// Sunday on or before `date`, `None` past the edge of the calendar
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_signed(Duration::days(date.weekday().num_days_from_sunday() as i64))
}

/// The Sunday starting the week of `anchor` and the Sunday after it
pub fn week_bounds(anchor: NaiveDate) -> Result<(NaiveDate, NaiveDate), InternalError> {
    week_start(anchor)
        .and_then(|start| Some((start, start.checked_add_signed(Duration::days(7))?)))
        .ok_or_else(|| InternalError::invalid_field("anchor", "is outside the supported date range"))
}

/// Midnight UTC at the start of `date`
pub fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Saturday on or after `date`
fn week_end(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(6 - date.weekday().num_days_from_sunday() as i64))
}

/// Project events onto the Sunday-first UTC week containing `anchor`
///
/// Day buckets hold events by the date of their start. Hour slots hold
/// every event whose half-open interval intersects the hour; an event
/// whose end is not after its start occupies only its start hour.
/// Slots falling outside the week are dropped.
pub fn project_week(anchor: NaiveDate, events: &[event::Model]) -> Result<WeeklySchedule, InternalError> {
    let (week_start, _) = week_bounds(anchor)?;
    let week_dates: Vec<NaiveDate> = week_start.iter_days().take(7).collect();

    let mut ordered: Vec<&event::Model> = events.iter().collect();
    ordered.sort_by_key(|e| (e.start_time, e.id));

    let days = week_dates
        .iter()
        .map(|date| bucket_for(*date, &ordered))
        .collect();

    let week_first_hour = hour_index(&day_start(week_start));
    let week_hours = week_first_hour..week_first_hour + HOURS_PER_WEEK;

    let mut cells: BTreeMap<i64, Vec<i32>> = BTreeMap::new();
    for event in &ordered {
        for hour in occupied_hours(event) {
            if week_hours.contains(&hour) {
                cells.entry(hour).or_default().push(event.id);
            }
        }
    }

    let slots = cells
        .into_iter()
        .filter_map(|(hour, event_ids)| {
            let at = DateTime::from_timestamp(hour * SECONDS_PER_HOUR, 0)?;
            Some(HourSlot {
                date: at.date_naive(),
                hour: at.hour(),
                event_ids,
            })
        })
        .collect();

    Ok(WeeklySchedule {
        week_start,
        days,
        slots,
    })
}

/// First and last day of the Sunday-first grid covering a month
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), InternalError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| InternalError::invalid_field("month", "must be between 1 and 12"))?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(out_of_range_year)?;
    let last = next_month.pred_opt().ok_or_else(out_of_range_year)?;

    match (week_start(first), week_end(last)) {
        (Some(grid_start), Some(grid_end)) => Ok((grid_start, grid_end)),
        _ => Err(out_of_range_year()),
    }
}

fn out_of_range_year() -> InternalError {
    InternalError::invalid_field("year", "is out of range")
}

/// Month grid padded to whole Sunday-first weeks
pub fn month_grid(year: i32, month: u32, events: &[event::Model]) -> Result<MonthCalendar, InternalError> {
    let (grid_start, grid_end) = month_bounds(year, month)?;

    let mut ordered: Vec<&event::Model> = events.iter().collect();
    ordered.sort_by_key(|e| (e.start_time, e.id));

    let days = grid_start
        .iter_days()
        .take_while(|date| *date <= grid_end)
        .map(|date| bucket_for(date, &ordered))
        .collect();

    Ok(MonthCalendar {
        year,
        month,
        grid_start,
        grid_end,
        days,
    })
}

fn bucket_for(date: NaiveDate, ordered: &[&event::Model]) -> DayBucket {
    DayBucket {
        date,
        events: ordered
            .iter()
            .filter(|e| e.start_time.date_naive() == date)
            .map(|e| (*e).clone())
            .collect(),
    }
}

fn hour_index(at: &DateTime<Utc>) -> i64 {
    at.timestamp().div_euclid(SECONDS_PER_HOUR)
}

/// Hour indices (hours since the Unix epoch) an event occupies
fn occupied_hours(event: &event::Model) -> std::ops::RangeInclusive<i64> {
    let first = hour_index(&event.start_time);
    if event.end_time <= event.start_time {
        return first..=first;
    }

    let end = event.end_time;
    let on_boundary = end.timestamp().rem_euclid(SECONDS_PER_HOUR) == 0 && end.timestamp_subsec_nanos() == 0;
    let last = if on_boundary {
        hour_index(&end) - 1
    } else {
        hour_index(&end)
    };

    first..=last
}
