// Database entities - SeaORM models
pub mod activity;
pub mod application;
pub mod cadet;
pub mod event;
pub mod inventory_item;
pub mod mentorship;
