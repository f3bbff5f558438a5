use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::providers::{conflict_provider, schedule_provider};
use crate::stores::{EventFilter, EventStore};
use crate::types::db::event;
use crate::types::dto::event::CreateEventRequest;
use crate::types::internal::schedule::{ConflictGroup, MonthCalendar, WeeklySchedule};
use crate::types::internal::{Campus, RequestContext};

/// Event scheduling and the calendar projections built on it
pub struct EventCoordinator {
    db: DatabaseConnection,
    event_store: Arc<EventStore>,
}

impl EventCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
            event_store: Arc::clone(&app_data.event_store),
        }
    }

    /// Events whose start falls within the inclusive date range
    pub async fn list(
        &self,
        ctx: &RequestContext,
        campus: Option<Campus>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<event::Model>, InternalError> {
        let filter = date_range_filter(ctx.scope(campus), start_date, end_date)?;
        self.event_store.list(&self.db, &filter).await
    }

    pub async fn create(&self, ctx: &RequestContext, request: CreateEventRequest) -> Result<event::Model, InternalError> {
        request.validate()?;

        let event = self
            .event_store
            .insert(&self.db, request.into_active_model(&ctx.actor_id, Utc::now()))
            .await?;

        tracing::info!(
            request_id = %ctx.request_id,
            actor = %ctx.actor_id,
            "Event {} scheduled at {}",
            event.id,
            event.location.as_deref().unwrap_or("no location")
        );
        Ok(event)
    }

    pub async fn conflicts(
        &self,
        ctx: &RequestContext,
        campus: Option<Campus>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<ConflictGroup>, InternalError> {
        let events = self.list(ctx, campus, start_date, end_date).await?;
        let groups = conflict_provider::detect_conflicts(&events);

        if !groups.is_empty() {
            tracing::debug!("{} of {} events have location conflicts", groups.len(), events.len());
        }
        Ok(groups)
    }

    /// Week view around `anchor`, today when absent
    pub async fn week(
        &self,
        ctx: &RequestContext,
        anchor: Option<NaiveDate>,
        campus: Option<Campus>,
    ) -> Result<WeeklySchedule, InternalError> {
        let anchor = anchor.unwrap_or_else(|| Utc::now().date_naive());
        let (week_start, next_week) = schedule_provider::week_bounds(anchor)?;

        // Events running into the week from before it still occupy its hours
        let filter = EventFilter {
            campus: ctx.scope(campus),
            starts_from: None,
            starts_before: Some(schedule_provider::day_start(next_week)),
            ends_after: Some(schedule_provider::day_start(week_start)),
        };
        let events = self.event_store.list(&self.db, &filter).await?;

        schedule_provider::project_week(anchor, &events)
    }

    pub async fn calendar(
        &self,
        ctx: &RequestContext,
        year: i32,
        month: u32,
        campus: Option<Campus>,
    ) -> Result<MonthCalendar, InternalError> {
        let (grid_start, grid_end) = schedule_provider::month_bounds(year, month)?;
        let after_grid = grid_end
            .succ_opt()
            .ok_or_else(|| InternalError::invalid_field("year", "is out of range"))?;

        let filter = EventFilter {
            campus: ctx.scope(campus),
            starts_from: Some(schedule_provider::day_start(grid_start)),
            starts_before: Some(schedule_provider::day_start(after_grid)),
            ends_after: None,
        };
        let events = self.event_store.list(&self.db, &filter).await?;

        schedule_provider::month_grid(year, month, &events)
    }
}

fn date_range_filter(
    campus: Option<Campus>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<EventFilter, InternalError> {
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end < start {
            return Err(InternalError::invalid_field("end_date", "must not be before start_date"));
        }
    }

    let starts_before = match end_date {
        Some(end) => {
            let next_day = end
                .succ_opt()
                .ok_or_else(|| InternalError::invalid_field("end_date", "is outside the supported date range"))?;
            Some(schedule_provider::day_start(next_day))
        }
        None => None,
    };

    Ok(EventFilter {
        campus,
        starts_from: start_date.map(schedule_provider::day_start),
        starts_before,
        ends_after: None,
    })
}
