// Coordinators layer - Workflow orchestration
//
// Coordinators compose store and provider operations for specific API
// endpoints: resolve the campus scope, open a transaction for writes,
// persist, write any activity intents in the same transaction, commit.

pub mod activity_coordinator;
pub mod application_coordinator;
pub mod cadet_coordinator;
pub mod dashboard_coordinator;
pub mod event_coordinator;
pub mod inventory_coordinator;
pub mod mentorship_coordinator;

pub use activity_coordinator::ActivityCoordinator;
pub use application_coordinator::ApplicationCoordinator;
pub use cadet_coordinator::CadetCoordinator;
pub use dashboard_coordinator::DashboardCoordinator;
pub use event_coordinator::EventCoordinator;
pub use inventory_coordinator::InventoryCoordinator;
pub use mentorship_coordinator::MentorshipCoordinator;

use sea_orm::ConnectionTrait;

use crate::errors::InternalError;
use crate::stores::ActivityStore;
use crate::types::internal::{ActionOutcome, RequestContext};

/// Write every activity intent of `outcome` on `conn` and return its value
pub(crate) async fn record_activities<T>(
    conn: &impl ConnectionTrait,
    activity_store: &ActivityStore,
    ctx: &RequestContext,
    outcome: ActionOutcome<T>,
) -> Result<T, InternalError> {
    for intent in outcome.activities {
        activity_store.record(conn, intent, &ctx.actor_id).await?;
    }
    Ok(outcome.value)
}
