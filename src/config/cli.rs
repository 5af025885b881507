use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "machups-kit")]
#[command(about = "WCAG contrast and subdomain checks for MACHUPS deployments")]
pub struct CliConfig {
    #[arg(long, help = "Base domain to check subdomains against (overrides the policy file)")]
    pub base_domain: Option<String>,

    #[arg(long, help = "Path to a TOML policy file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: KitCommand,
}

#[derive(Debug, Subcommand)]
pub enum KitCommand {
    /// Check the WCAG contrast ratio of a foreground/background pair
    Contrast {
        foreground: String,
        background: String,

        #[arg(long, default_value = "AA")]
        level: String,

        #[arg(long, help = "Use the relaxed large-text thresholds")]
        large_text: bool,
    },

    /// Step a color toward a target contrast ratio against a background
    Adjust {
        color: String,
        background: String,

        #[arg(long, default_value_t = 4.5)]
        target_ratio: f64,

        #[arg(long, default_value_t = 100)]
        max_iterations: u32,
    },

    /// Print a five-step tint/shade ramp for a color
    Palette { color: String },

    /// Normalize a brand name into a DNS label
    Normalize { name: String },

    /// Generate ranked subdomain candidates for a brand
    Suggest {
        brand_name: String,

        #[arg(long)]
        industry: Option<String>,

        #[arg(long, value_delimiter = ',')]
        keywords: Vec<String>,
    },

    /// Validate a subdomain and check its DNS availability
    Check {
        subdomain: String,

        #[arg(long)]
        brand_name: Option<String>,

        #[arg(long)]
        industry: Option<String>,

        #[arg(long, value_delimiter = ',')]
        keywords: Vec<String>,
    },
}
