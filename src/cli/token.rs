use std::sync::Arc;

use crate::config::SecretManager;
use crate::providers::TokenProvider;
use crate::types::internal::{Campus, RequestContext};

/// Print a signed staff token to stdout
pub fn issue_token(
    secret_manager: Arc<SecretManager>,
    subject: &str,
    name: Option<String>,
    campus: Option<Campus>,
    ttl_minutes: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    if ttl_minutes <= 0 {
        return Err("ttl-minutes must be positive".into());
    }

    let ctx = RequestContext::for_cli("token");
    let token = TokenProvider::new(secret_manager).issue(subject, name, campus, ttl_minutes)?;

    tracing::info!(actor = %ctx.actor_id, "Issued staff token for {} ({} minutes)", subject, ttl_minutes);
    println!("{}", token);

    Ok(())
}
