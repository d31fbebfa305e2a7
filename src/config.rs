//! Backend Configuration
//!
//! Connection parameters for the remote document store. The field names
//! mirror the Firebase web configuration block a deployment ships with, so
//! that JSON can be deserialized directly.

use serde::Deserialize;

/// Connection parameters for the Cloud Firestore backend
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirestoreConfig {
    /// Web API key, sent as the `key` query parameter on every request
    pub api_key: String,
    /// Firebase project identifier
    pub project_id: String,
    /// Database identifier within the project
    #[serde(default = "default_database_id")]
    pub database_id: String,
    /// REST endpoint; override this for emulators and tests
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl FirestoreConfig {
    /// Configuration for a production project with the default database
    pub fn new(api_key: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            project_id: project_id.into(),
            database_id: default_database_id(),
            endpoint: default_endpoint(),
        }
    }
}

fn default_database_id() -> String {
    "(default)".to_string()
}

fn default_endpoint() -> String {
    "https://firestore.googleapis.com".to_string()
}
