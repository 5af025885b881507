use clap::Parser;
use machups_kit::config::{CliConfig, KitCommand, PolicyConfig};
use machups_kit::core::{contrast, subdomain};
use machups_kit::domain::model::{Rgb, WcagLevel};
use machups_kit::utils::logger;
use machups_kit::{DnsResolver, SubdomainChecker};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting machups-kit");

    let policy = match &cli.config {
        Some(path) => PolicyConfig::from_file(path)?,
        None => PolicyConfig::default(),
    };
    let base_domain = cli
        .base_domain
        .clone()
        .unwrap_or_else(|| policy.base_domain().to_string());

    match cli.command {
        KitCommand::Contrast {
            foreground,
            background,
            level,
            large_text,
        } => {
            let fg = Rgb::from_hex(&foreground)?;
            let bg = Rgb::from_hex(&background)?;
            let level: WcagLevel = level.parse()?;

            let result = contrast::check_contrast(fg, bg, large_text);
            println!("{}", serde_json::to_string_pretty(&result)?);

            if !result.passes(level) {
                tracing::warn!("Contrast {:.2}:1 fails WCAG {}", result.ratio, level);
                std::process::exit(1);
            }
        }

        KitCommand::Adjust {
            color,
            background,
            target_ratio,
            max_iterations,
        } => {
            let color = Rgb::from_hex(&color)?;
            let bg = Rgb::from_hex(&background)?;

            let outcome =
                contrast::adjust_color_for_contrast(color, bg, target_ratio, max_iterations);
            println!("{}", serde_json::to_string_pretty(&outcome)?);

            if !outcome.converged {
                tracing::warn!(
                    "Gave up at {:.2}:1 after {} iterations (target {:.2}:1)",
                    outcome.ratio,
                    max_iterations,
                    target_ratio
                );
            }
        }

        KitCommand::Palette { color } => {
            let base = Rgb::from_hex(&color)?;
            let ramp = contrast::generate_color_variations(base);
            println!("{}", serde_json::to_string_pretty(&ramp)?);
        }

        KitCommand::Normalize { name } => {
            println!("{}", subdomain::normalize(&name));
        }

        KitCommand::Suggest {
            brand_name,
            industry,
            keywords,
        } => {
            let candidates =
                subdomain::generate_suggestions(&brand_name, industry.as_deref(), &keywords);
            println!("{}", serde_json::to_string_pretty(&candidates)?);
        }

        KitCommand::Check {
            subdomain: requested,
            brand_name,
            industry,
            keywords,
        } => {
            let checker = SubdomainChecker::new(DnsResolver::new(), base_domain)
                .with_blocked_terms(policy.blocked_terms());

            let result = checker
                .check_subdomain(
                    &requested,
                    brand_name.as_deref(),
                    industry.as_deref(),
                    &keywords,
                )
                .await;
            println!("{}", serde_json::to_string_pretty(&result)?);

            if !result.available {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
