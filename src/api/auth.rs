use poem_openapi::{auth::Bearer, SecurityScheme};

use crate::errors::ApiError;
use crate::providers::TokenProvider;
use crate::types::internal::RequestContext;

/// JWT Bearer token issued to staff by the identity provider
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(pub Bearer);

/// Validate the bearer token and build the staff request context
pub fn staff_context(token_provider: &TokenProvider, auth: &BearerAuth) -> Result<RequestContext, ApiError> {
    let claims = token_provider.validate(&auth.0.token)?;
    Ok(RequestContext::for_staff(claims))
}
