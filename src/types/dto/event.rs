use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::{payload::Json, ApiResponse, Object};
use sea_orm::{ActiveValue::NotSet, Set};

use crate::errors::internal::{ValidationError, Violations};
use crate::types::db::event;
use crate::types::internal::schedule::{ConflictGroup, DayBucket, HourSlot, MonthCalendar, WeeklySchedule};
use crate::types::internal::Campus;

#[derive(Object, Debug, Clone)]
pub struct CreateEventRequest {
    #[oai(validator(max_length = 200))]
    pub title: String,
    pub description: Option<String>,
    /// Free-form category such as training, class or ceremony
    pub event_type: String,
    pub start_time: DateTime<Utc>,
    /// Must be after start_time
    pub end_time: DateTime<Utc>,
    pub location: Option<String>,
    /// Defaults to oahu
    pub campus: Option<Campus>,
    pub max_participants: Option<i32>,
    pub is_required: Option<bool>,
}

impl CreateEventRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Violations::new();
        v.not_blank(&self.title, "title")
            .not_blank(&self.event_type, "event_type")
            .check(self.end_time > self.start_time, "end_time", "must be after start_time")
            .non_negative(self.max_participants, "max_participants");
        v.into_result()
    }

    pub fn into_active_model(self, created_by: &str, now: DateTime<Utc>) -> event::ActiveModel {
        event::ActiveModel {
            id: NotSet,
            title: Set(self.title),
            description: Set(self.description),
            event_type: Set(self.event_type),
            start_time: Set(self.start_time),
            end_time: Set(self.end_time),
            location: Set(self.location),
            campus: Set(self.campus.unwrap_or_default().as_str().to_string()),
            max_participants: Set(self.max_participants),
            current_participants: Set(Some(0)),
            is_required: Set(Some(self.is_required.unwrap_or(false))),
            created_by: Set(created_by.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

#[derive(Object, Debug, Clone, PartialEq)]
pub struct EventResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub event_type: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: Option<String>,
    pub campus: String,
    pub max_participants: Option<i32>,
    pub current_participants: Option<i32>,
    pub is_required: Option<bool>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<event::Model> for EventResponse {
    fn from(m: event::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            event_type: m.event_type,
            start_time: m.start_time,
            end_time: m.end_time,
            location: m.location,
            campus: m.campus,
            max_participants: m.max_participants,
            current_participants: m.current_participants,
            is_required: m.is_required,
            created_by: m.created_by,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(ApiResponse, Debug)]
pub enum CreateEventResponse {
    /// Event scheduled
    #[oai(status = 201)]
    Created(Json<EventResponse>),
}

/// An event and the events it overlaps at the same location
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ConflictGroupResponse {
    pub event: EventResponse,
    pub conflicts_with: Vec<EventResponse>,
}

impl From<ConflictGroup> for ConflictGroupResponse {
    fn from(group: ConflictGroup) -> Self {
        Self {
            event: group.event.into(),
            conflicts_with: group.conflicts_with.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Object, Debug, Clone, PartialEq)]
pub struct DayBucketResponse {
    pub date: NaiveDate,
    pub events: Vec<EventResponse>,
}

impl From<DayBucket> for DayBucketResponse {
    fn from(bucket: DayBucket) -> Self {
        Self {
            date: bucket.date,
            events: bucket.events.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Object, Debug, Clone, PartialEq)]
pub struct HourSlotResponse {
    pub date: NaiveDate,
    /// 0-23, UTC
    pub hour: u32,
    pub event_ids: Vec<i32>,
}

impl From<HourSlot> for HourSlotResponse {
    fn from(slot: HourSlot) -> Self {
        Self {
            date: slot.date,
            hour: slot.hour,
            event_ids: slot.event_ids,
        }
    }
}

/// Sunday-first week view
#[derive(Object, Debug, Clone, PartialEq)]
pub struct WeeklyScheduleResponse {
    pub week_start: NaiveDate,
    pub days: Vec<DayBucketResponse>,
    /// Occupied hour cells only
    pub slots: Vec<HourSlotResponse>,
}

impl From<WeeklySchedule> for WeeklyScheduleResponse {
    fn from(week: WeeklySchedule) -> Self {
        Self {
            week_start: week.week_start,
            days: week.days.into_iter().map(Into::into).collect(),
            slots: week.slots.into_iter().map(Into::into).collect(),
        }
    }
}

/// Month view padded to whole weeks
#[derive(Object, Debug, Clone, PartialEq)]
pub struct MonthCalendarResponse {
    pub year: i32,
    pub month: u32,
    pub grid_start: NaiveDate,
    pub grid_end: NaiveDate,
    pub days: Vec<DayBucketResponse>,
}

impl From<MonthCalendar> for MonthCalendarResponse {
    fn from(calendar: MonthCalendar) -> Self {
        Self {
            year: calendar.year,
            month: calendar.month,
            grid_start: calendar.grid_start,
            grid_end: calendar.grid_end,
            days: calendar.days.into_iter().map(Into::into).collect(),
        }
    }
}
