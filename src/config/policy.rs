use crate::core::reservation::ReservationTable;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_domain_name, validate_non_empty_string, validate_positive_number, Validate,
};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Deployment policy loaded from a TOML file. Everything is optional in the
/// file; missing sections fall back to the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub deployment: DeploymentConfig,
    pub content: Option<ContentPolicyConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentConfig {
    pub base_domain: String,
    pub reservation_ttl_minutes: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPolicyConfig {
    pub blocked_terms: Vec<String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            deployment: DeploymentConfig {
                base_domain: "machups.com".to_string(),
                reservation_ttl_minutes: None,
            },
            content: None,
        }
    }
}

impl PolicyConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn base_domain(&self) -> &str {
        &self.deployment.base_domain
    }

    pub fn reservation_ttl_minutes(&self) -> u64 {
        self.deployment
            .reservation_ttl_minutes
            .unwrap_or(crate::core::reservation::DEFAULT_TTL_MINUTES as u64)
    }

    pub fn blocked_terms(&self) -> Vec<String> {
        self.content
            .as_ref()
            .map(|c| c.blocked_terms.clone())
            .unwrap_or_default()
    }

    /// Reservation table honoring the configured TTL.
    pub fn reservation_table(&self) -> ReservationTable {
        ReservationTable::with_ttl(Duration::minutes(self.reservation_ttl_minutes() as i64))
    }
}

impl Validate for PolicyConfig {
    fn validate(&self) -> Result<()> {
        validate_domain_name("deployment.base_domain", &self.deployment.base_domain)?;

        if let Some(ttl) = self.deployment.reservation_ttl_minutes {
            validate_positive_number("deployment.reservation_ttl_minutes", ttl, 1)?;
        }

        if let Some(content) = &self.content {
            for term in &content.blocked_terms {
                validate_non_empty_string("content.blocked_terms", term)?;
            }
        }

        Ok(())
    }
}
