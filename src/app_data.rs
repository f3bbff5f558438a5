use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::{AppConfig, SecretManager};
use crate::errors::InternalError;
use crate::providers::{ChatCompletionsClient, NarrativeGenerator, NarrativeProvider, TokenProvider};
use crate::stores::{
    ActivityStore, ApplicationStore, CadetStore, EventStore, InventoryStore, MentorshipStore, MetricsStore,
};

/// Centralized application data following the main-owned stores pattern
///
/// Everything is created once at startup and shared read-only across
/// coordinators and API handlers.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(db, config)
///   ├─ db (DatabaseConnection)
///   ├─ secret_manager / token_provider
///   ├─ narrative_provider (chat-completions client)
///   └─ stores (stateless, one per table group)
///   ↓ wrapped in Arc<AppData>
///   ↓ passed to coordinators
/// ```
pub struct AppData {
    pub db: DatabaseConnection,
    pub secret_manager: Arc<SecretManager>,
    pub token_provider: Arc<TokenProvider>,
    pub narrative_provider: Arc<NarrativeProvider>,
    pub cadet_store: Arc<CadetStore>,
    pub application_store: Arc<ApplicationStore>,
    pub event_store: Arc<EventStore>,
    pub mentorship_store: Arc<MentorshipStore>,
    pub inventory_store: Arc<InventoryStore>,
    pub activity_store: Arc<ActivityStore>,
    pub metrics_store: Arc<MetricsStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database should be connected and migrated before calling this.
    pub fn init(db: DatabaseConnection, config: AppConfig) -> Result<Self, InternalError> {
        tracing::info!("Initializing AppData...");

        let api_key = config.secrets.narrative_api_key().map(str::to_string);
        if api_key.is_none() {
            tracing::warn!("NARRATIVE_API_KEY is not set; analysis endpoints will fail");
        }
        let generator = Arc::new(ChatCompletionsClient::new(config.narrative, api_key)?);

        Ok(Self::with_generator(db, Arc::new(config.secrets), generator))
    }

    /// Assemble application data around a given narrative generator
    pub fn with_generator(
        db: DatabaseConnection,
        secret_manager: Arc<SecretManager>,
        generator: Arc<dyn NarrativeGenerator>,
    ) -> Self {
        Self {
            db,
            token_provider: Arc::new(TokenProvider::new(secret_manager.clone())),
            secret_manager,
            narrative_provider: Arc::new(NarrativeProvider::new(generator)),
            cadet_store: Arc::new(CadetStore::new()),
            application_store: Arc::new(ApplicationStore::new()),
            event_store: Arc::new(EventStore::new()),
            mentorship_store: Arc::new(MentorshipStore::new()),
            inventory_store: Arc::new(InventoryStore::new()),
            activity_store: Arc::new(ActivityStore::new()),
            metrics_store: Arc::new(MetricsStore::new()),
        }
    }
}
