// Providers layer - Work performers and business logic
//
// Providers hold the reductions and external calls that coordinators
// orchestrate. The metric, progress, conflict and schedule providers are
// pure functions over already-loaded rows.

pub mod conflict_provider;
pub mod metrics_provider;
pub mod narrative_provider;
pub mod progress_provider;
pub mod schedule_provider;
pub mod token_provider;

pub use narrative_provider::{ChatCompletionsClient, NarrativeGenerator, NarrativeProvider};
pub use token_provider::TokenProvider;
