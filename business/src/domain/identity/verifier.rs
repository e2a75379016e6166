use async_trait::async_trait;

use super::errors::IdentityError;
use crate::domain::shared::value_objects::FarmerId;

/// Port for resolving an opaque identity token into the subject it was issued for.
///
/// Implementations must be side-effect free from the caller's point of view and
/// fail closed: anything short of a fully validated token is `Unauthenticated`.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, id_token: &str) -> Result<FarmerId, IdentityError>;
}
