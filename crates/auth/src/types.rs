//! Auth read-model types
//!
//! Lightweight view of the users row owned by the users domain. Carries
//! only the fields needed for authentication and authorization.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Identity resolved for an authenticated request.
///
/// Request-scoped: attached to the request via the guard extractors and
/// discarded after the response. Handlers needing the full `User` load it
/// from their domain's repository.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuthIdentity {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
