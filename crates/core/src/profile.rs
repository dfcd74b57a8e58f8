//! Backend connection facts the stock variable table resolves against.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Connection facts provided by the backend deployment.
///
/// The fallible providers return `Err` when the backend cannot answer
/// (endpoint not configured, token store unavailable); the registry treats
/// that as an absent live value, so generation only fails if the variable
/// is required.
pub trait BackendProfile {
    /// Public URL of the backend site.
    fn home_url(&self) -> Option<String>;

    /// Address of the backend itself, when it differs from the home URL.
    fn site_url(&self) -> Option<String>;

    /// Relative path of the GraphQL endpoint.
    fn graphql_endpoint(&self) -> Result<String>;

    /// Prefix of the backend REST API.
    fn rest_url_prefix(&self) -> Option<String>;

    /// Relative path of the uploads directory.
    fn uploads_directory(&self) -> Option<String>;

    /// Token authenticating schema introspection requests.
    fn introspection_token(&self) -> Result<String>;
}

/// File-backed profile used by the CLI and tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StaticProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_url: Option<String>,

    /// Falls back to `home_url` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphql_endpoint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_url_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploads_directory: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub introspection_token: Option<String>,
}

impl StaticProfile {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let profile = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse profile: {e}")))?;
        Ok(profile)
    }
}

impl BackendProfile for StaticProfile {
    fn home_url(&self) -> Option<String> {
        self.home_url.clone()
    }

    fn site_url(&self) -> Option<String> {
        self.site_url.clone().or_else(|| self.home_url.clone())
    }

    fn graphql_endpoint(&self) -> Result<String> {
        self.graphql_endpoint
            .clone()
            .ok_or_else(|| Error::ProfileError("no GraphQL endpoint configured".to_string()))
    }

    fn rest_url_prefix(&self) -> Option<String> {
        self.rest_url_prefix.clone()
    }

    fn uploads_directory(&self) -> Option<String> {
        self.uploads_directory.clone()
    }

    fn introspection_token(&self) -> Result<String> {
        self.introspection_token
            .clone()
            .ok_or_else(|| Error::ProfileError("no introspection token configured".to_string()))
    }
}
