use crate::domain::ports::{ResolveOutcome, Resolver};
use crate::utils::error::{KitError, Result};
use async_trait::async_trait;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::TokioAsyncResolver;

/// Production [`Resolver`] backed by hickory. NXDOMAIN maps to `NotFound`;
/// everything else that goes wrong is surfaced as `Failed` so the subdomain
/// engine can apply its fail-closed policy.
pub struct DnsResolver {
    inner: TokioAsyncResolver,
}

impl DnsResolver {
    /// Resolver with the default public configuration.
    pub fn new() -> Self {
        Self {
            inner: TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default()),
        }
    }

    /// Resolver from the host's /etc/resolv.conf.
    pub fn from_system_conf() -> Result<Self> {
        let inner = TokioAsyncResolver::tokio_from_system_conf().map_err(|e| {
            KitError::ResolverError {
                message: format!("Failed to read system resolver configuration: {}", e),
            }
        })?;
        Ok(Self { inner })
    }
}

impl Default for DnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Resolver for DnsResolver {
    async fn resolve(&self, host: &str) -> ResolveOutcome {
        match self.inner.lookup_ip(host).await {
            Ok(_) => ResolveOutcome::Resolved,
            Err(e) => match e.kind() {
                ResolveErrorKind::NoRecordsFound { .. } => ResolveOutcome::NotFound,
                _ => ResolveOutcome::Failed(e.to_string()),
            },
        }
    }
}
