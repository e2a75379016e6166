pub mod service_account;
pub mod verifier;
