use chrono::NaiveDate;

use crate::types::db::event;

/// Events grouped under one calendar day
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub events: Vec<event::Model>,
}

/// Hour cell of the weekly grid occupied by at least one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourSlot {
    pub date: NaiveDate,
    /// Hour of day, 0-23
    pub hour: u32,
    pub event_ids: Vec<i32>,
}

/// Projection of events onto the Sunday-first week containing an anchor date
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySchedule {
    pub week_start: NaiveDate,
    /// Always seven buckets, Sunday first
    pub days: Vec<DayBucket>,
    /// Occupied hour cells ordered by date then hour
    pub slots: Vec<HourSlot>,
}

/// Month view padded to whole Sunday-first weeks
#[derive(Debug, Clone, PartialEq)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    pub grid_start: NaiveDate,
    pub grid_end: NaiveDate,
    pub days: Vec<DayBucket>,
}

/// An event together with every event it overlaps at the same location
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictGroup {
    pub event: event::Model,
    pub conflicts_with: Vec<event::Model>,
}
