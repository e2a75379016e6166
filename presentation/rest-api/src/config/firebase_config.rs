use anyhow::Context;
use firebase::service_account::ServiceAccount;

pub struct FirebaseConfig {
    pub project_id: String,
}

impl FirebaseConfig {
    /// Environment variables:
    /// - FIREBASE_SERVICE_ACCOUNT: path to the service-account key file (required)
    ///
    /// # Errors
    /// Returns error if the variable is unset or the file is missing or invalid
    pub fn from_env() -> anyhow::Result<Self> {
        let path = std::env::var("FIREBASE_SERVICE_ACCOUNT")
            .context("FIREBASE_SERVICE_ACCOUNT environment variable is not set")?;
        let account = ServiceAccount::from_file(&path)?;

        Ok(Self {
            project_id: account.project_id,
        })
    }
}
