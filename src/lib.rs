pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::PolicyConfig;

pub use adapters::dns::DnsResolver;
pub use core::reservation::{InMemoryStore, ReservationTable};
pub use core::subdomain::SubdomainChecker;
pub use domain::model::{
    AdjustedColor, ColorRamp, ContrastResult, Rgb, SubdomainCheckResult, WcagLevel,
};
pub use domain::ports::{Clock, ResolveOutcome, Resolver, ReservationStore};
pub use utils::error::{KitError, Result};
