// Internal types - domain values shared by coordinators, providers and stores
pub mod action_outcome;
pub mod activity_intent;
pub mod auth;
pub mod campus;
pub mod context;
pub mod metrics;
pub mod narrative;
pub mod progress;
pub mod schedule;
pub mod status;

pub use action_outcome::ActionOutcome;
pub use activity_intent::ActivityIntent;
pub use campus::Campus;
pub use context::{RequestContext, RequestSource};
pub use status::{ActivityType, ApplicationStatus, CadetStatus, MentorshipStatus};
