use std::path::Path;

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ServiceAccountError {
    #[error("firebase.service_account_unreadable: {0}")]
    Unreadable(String),
    #[error("firebase.service_account_invalid: {0}")]
    Invalid(String),
}

/// The parts of a Firebase service-account key file the verifier needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccount {
    pub project_id: String,
    #[serde(default)]
    pub client_email: Option<String>,
}

impl ServiceAccount {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ServiceAccountError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ServiceAccountError::Unreadable(format!("{}: {e}", path.display())))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ServiceAccountError> {
        let account: ServiceAccount =
            serde_json::from_str(raw).map_err(|e| ServiceAccountError::Invalid(e.to_string()))?;

        if account.project_id.trim().is_empty() {
            return Err(ServiceAccountError::Invalid("empty project_id".to_string()));
        }
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_project_id_from_key_file_json() {
        let raw = r#"{
            "type": "service_account",
            "project_id": "farmer-market-dev",
            "private_key_id": "abc",
            "client_email": "svc@farmer-market-dev.iam.gserviceaccount.com"
        }"#;

        let account = ServiceAccount::from_json(raw).unwrap();

        assert_eq!(account.project_id, "farmer-market-dev");
        assert_eq!(
            account.client_email.as_deref(),
            Some("svc@farmer-market-dev.iam.gserviceaccount.com")
        );
    }

    #[test]
    fn should_reject_key_file_without_project_id() {
        let result = ServiceAccount::from_json(r#"{"type": "service_account"}"#);
        assert!(matches!(result.unwrap_err(), ServiceAccountError::Invalid(_)));
    }

    #[test]
    fn should_reject_blank_project_id() {
        let result = ServiceAccount::from_json(r#"{"project_id": "  "}"#);
        assert!(matches!(result.unwrap_err(), ServiceAccountError::Invalid(_)));
    }

    #[test]
    fn should_fail_when_file_is_missing() {
        let result = ServiceAccount::from_file("/definitely/not/here.json");
        assert!(matches!(result.unwrap_err(), ServiceAccountError::Unreadable(_)));
    }
}
