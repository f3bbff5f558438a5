// Stores layer - Data access
//
// Stores are stateless; every method takes the connection or transaction
// to run against so coordinators decide the transaction boundary.
pub mod activity_store;
pub mod application_store;
pub mod cadet_store;
pub mod event_store;
pub mod inventory_store;
pub mod mentorship_store;
pub mod metrics_store;

pub use activity_store::ActivityStore;
pub use application_store::ApplicationStore;
pub use cadet_store::CadetStore;
pub use event_store::{EventFilter, EventStore};
pub use inventory_store::InventoryStore;
pub use mentorship_store::MentorshipStore;
pub use metrics_store::MetricsStore;

#[cfg(test)]
mod store_test;
