#[cfg(feature = "cli")]
pub mod cli;
pub mod policy;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, KitCommand};
pub use policy::PolicyConfig;
