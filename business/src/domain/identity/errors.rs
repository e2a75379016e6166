#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// Token missing, malformed, expired, or rejected by the issuer checks.
    #[error("identity.unauthenticated")]
    Unauthenticated,
    #[error("identity.timeout")]
    Timeout,
}
