use std::sync::Arc;

use chrono::NaiveDate;
use poem_openapi::{param::Query, payload::Json, OpenApi};

use crate::api::{auth::staff_context, ApiTags, BearerAuth};
use crate::app_data::AppData;
use crate::coordinators::EventCoordinator;
use crate::errors::ApiError;
use crate::providers::TokenProvider;
use crate::types::dto::event::{
    ConflictGroupResponse, CreateEventRequest, CreateEventResponse, EventResponse, MonthCalendarResponse,
    WeeklyScheduleResponse,
};
use crate::types::internal::Campus;

/// Event scheduling and calendar endpoints
pub struct EventsApi {
    coordinator: Arc<EventCoordinator>,
    token_provider: Arc<TokenProvider>,
}

impl EventsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            token_provider: Arc::clone(&app_data.token_provider),
            coordinator: Arc::new(EventCoordinator::new(app_data)),
        }
    }
}

#[OpenApi]
impl EventsApi {
    /// List events ordered by start time
    ///
    /// `start_date` and `end_date` are inclusive and apply to the start time
    #[oai(path = "/events", method = "get", tag = "ApiTags::Events")]
    async fn list(
        &self,
        auth: BearerAuth,
        campus: Query<Option<Campus>>,
        start_date: Query<Option<NaiveDate>>,
        end_date: Query<Option<NaiveDate>>,
    ) -> Result<Json<Vec<EventResponse>>, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let events = self.coordinator.list(&ctx, campus.0, start_date.0, end_date.0).await?;
        Ok(Json(events.into_iter().map(Into::into).collect()))
    }

    /// Schedule an event; the caller is recorded as its creator
    #[oai(path = "/events", method = "post", tag = "ApiTags::Events")]
    async fn create(&self, auth: BearerAuth, body: Json<CreateEventRequest>) -> Result<CreateEventResponse, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let event = self.coordinator.create(&ctx, body.0).await?;
        Ok(CreateEventResponse::Created(Json(event.into())))
    }

    /// Events double-booked at the same location
    #[oai(path = "/events/conflicts", method = "get", tag = "ApiTags::Events")]
    async fn conflicts(
        &self,
        auth: BearerAuth,
        campus: Query<Option<Campus>>,
        start_date: Query<Option<NaiveDate>>,
        end_date: Query<Option<NaiveDate>>,
    ) -> Result<Json<Vec<ConflictGroupResponse>>, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let groups = self
            .coordinator
            .conflicts(&ctx, campus.0, start_date.0, end_date.0)
            .await?;
        Ok(Json(groups.into_iter().map(Into::into).collect()))
    }

    /// Sunday-first week containing `anchor` (default today, UTC)
    #[oai(path = "/events/week", method = "get", tag = "ApiTags::Events")]
    async fn week(
        &self,
        auth: BearerAuth,
        anchor: Query<Option<NaiveDate>>,
        campus: Query<Option<Campus>>,
    ) -> Result<Json<WeeklyScheduleResponse>, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let week = self.coordinator.week(&ctx, anchor.0, campus.0).await?;
        Ok(Json(week.into()))
    }

    /// Month grid padded to whole weeks
    #[oai(path = "/events/calendar", method = "get", tag = "ApiTags::Events")]
    async fn calendar(
        &self,
        auth: BearerAuth,
        #[oai(validator(minimum(value = "1"), maximum(value = "9999")))] year: Query<i32>,
        #[oai(validator(minimum(value = "1"), maximum(value = "12")))] month: Query<u32>,
        campus: Query<Option<Campus>>,
    ) -> Result<Json<MonthCalendarResponse>, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let calendar = self.coordinator.calendar(&ctx, year.0, month.0, campus.0).await?;
        Ok(Json(calendar.into()))
    }
}

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;
