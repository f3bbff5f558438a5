// Request and response bodies of the HTTP API
pub mod application;
pub mod cadet;
pub mod common;
pub mod dashboard;
pub mod event;
pub mod inventory;
pub mod mentorship;
pub mod narrative;
