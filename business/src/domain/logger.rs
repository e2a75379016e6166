/// Logging port used by the use cases, so the business crate stays free of a
/// concrete logging backend and tests can swap in a mock.
///
/// Messages must not carry tokens or store credentials.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
