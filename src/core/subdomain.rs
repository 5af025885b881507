//! Brand-name normalization, DNS-label validation, and availability checking.
//!
//! Validation reports every applicable error at once. Availability is
//! fail-closed: only a clean NXDOMAIN counts as available.

use crate::domain::model::{
    CandidateSource, LabelValidation, SubdomainCandidate, SubdomainCheckResult,
};
use crate::domain::ports::{ResolveOutcome, Resolver};
use regex::Regex;

pub const MIN_LABEL_LENGTH: usize = 3;
pub const MAX_LABEL_LENGTH: usize = 63;

/// Labels kept back for platform infrastructure.
pub const RESERVED_LABELS: [&str; 20] = [
    "www", "api", "app", "admin", "dashboard", "cdn", "static", "blog", "docs", "help", "support",
    "status", "mail", "ftp", "test", "staging", "dev", "demo", "beta", "alpha",
];

/// Minimal built-in content policy; deployments extend it via config.
pub const BLOCKED_TERMS: [&str; 3] = ["offensive", "inappropriate", "blocked"];

const SUGGESTION_SUFFIXES: [&str; 7] = ["app", "hq", "io", "co", "studio", "lab", "works"];
const NUMERIC_SUFFIXES: [u32; 3] = [2, 3, 99];
const MAX_SUGGESTIONS: usize = 5;
const MAX_KEYWORD_CANDIDATES: usize = 2;

/// Converts free text into a DNS-label candidate: lowercase, strip anything
/// outside `[a-z0-9-]` and whitespace, collapse whitespace and hyphen runs to
/// a single hyphen, trim hyphens, truncate to 63.
///
/// Idempotent: truncation re-trims trailing hyphens so a second pass is a
/// no-op.
pub fn normalize(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut label = String::with_capacity(lowered.len());
    let mut last_was_hyphen = false;

    for ch in lowered.trim().chars() {
        let mapped = if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            Some(ch)
        } else if ch == '-' || ch.is_whitespace() {
            Some('-')
        } else {
            None
        };

        match mapped {
            Some('-') => {
                if !last_was_hyphen {
                    label.push('-');
                    last_was_hyphen = true;
                }
            }
            Some(c) => {
                label.push(c);
                last_was_hyphen = false;
            }
            None => {}
        }
    }

    let trimmed: String = label.trim_matches('-').chars().take(MAX_LABEL_LENGTH).collect();
    trimmed.trim_end_matches('-').to_string()
}

/// Validates a label against format, length, reserved-word, content-policy,
/// double-hyphen, and numeric-only rules. All failures are reported together.
pub fn validate_label(label: &str) -> LabelValidation {
    validate_label_with(label, &[])
}

/// [`validate_label`] with extra blocked terms layered on top of the
/// built-in content policy.
pub fn validate_label_with(label: &str, extra_blocked: &[String]) -> LabelValidation {
    let pattern = Regex::new(r"^[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?$").unwrap();
    let mut errors = Vec::new();

    if !pattern.is_match(label) {
        errors.push(
            "Subdomain must contain only lowercase letters, numbers, and hyphens, and must start and end with a letter or number".to_string(),
        );
    }

    if label.len() < MIN_LABEL_LENGTH {
        errors.push(format!(
            "Subdomain must be at least {} characters",
            MIN_LABEL_LENGTH
        ));
    }

    if label.len() > MAX_LABEL_LENGTH {
        errors.push(format!(
            "Subdomain must be at most {} characters",
            MAX_LABEL_LENGTH
        ));
    }

    if RESERVED_LABELS.contains(&label) {
        errors.push("This subdomain is reserved for system use".to_string());
    }

    let blocked = BLOCKED_TERMS
        .iter()
        .any(|term| label.contains(term))
        || extra_blocked.iter().any(|term| label.contains(term.as_str()));
    if blocked {
        errors.push("Subdomain contains blocked content".to_string());
    }

    if label.contains("--") {
        errors.push("Subdomain cannot contain consecutive hyphens".to_string());
    }

    if !label.is_empty() && label.chars().all(|c| c.is_ascii_digit()) {
        errors.push("Subdomain cannot be numeric only".to_string());
    }

    LabelValidation {
        valid: errors.is_empty(),
        errors,
    }
}

/// Produces ranked alternative labels for a brand name.
///
/// Strategies, in priority order: the normalized name itself (1.0), fixed
/// suffixes (0.8), industry (0.7), up to two keywords (0.6), initials of a
/// multi-word name (0.5), numeric suffixes as a last resort (0.3).
/// Duplicates collapse to their first occurrence, invalid labels are dropped,
/// and the final order is by descending score with ties keeping generation
/// order.
pub fn generate_suggestions(
    brand_name: &str,
    industry: Option<&str>,
    keywords: &[String],
) -> Vec<SubdomainCandidate> {
    let normalized = normalize(brand_name);
    let mut candidates = Vec::new();

    let push = |label: String, score: f64, candidates: &mut Vec<SubdomainCandidate>| {
        candidates.push(SubdomainCandidate {
            label,
            relevance_score: score,
            source: CandidateSource::TemplateBased,
        });
    };

    push(normalized.clone(), 1.0, &mut candidates);

    for suffix in SUGGESTION_SUFFIXES {
        let label = format!("{}-{}", normalized, suffix);
        if label.len() <= MAX_LABEL_LENGTH {
            push(label, 0.8, &mut candidates);
        }
    }

    if let Some(industry) = industry {
        let label = format!("{}-{}", normalized, normalize(industry));
        push(label, 0.7, &mut candidates);
    }

    for keyword in keywords.iter().take(MAX_KEYWORD_CANDIDATES) {
        let label = format!("{}-{}", normalized, normalize(keyword));
        push(label, 0.6, &mut candidates);
    }

    let words: Vec<&str> = brand_name.split_whitespace().collect();
    if words.len() > 1 {
        let initials: String = words
            .iter()
            .filter_map(|w| w.chars().next())
            .collect::<String>()
            .to_lowercase();
        if initials.len() >= MIN_LABEL_LENGTH {
            push(initials, 0.5, &mut candidates);
        }
    }

    for num in NUMERIC_SUFFIXES {
        push(format!("{}{}", normalized, num), 0.3, &mut candidates);
    }

    // First occurrence wins on duplicates; invalid labels drop out.
    let mut seen = std::collections::HashSet::new();
    let mut unique: Vec<SubdomainCandidate> = candidates
        .into_iter()
        .filter(|c| seen.insert(c.label.clone()))
        .filter(|c| validate_label(&c.label).valid)
        .collect();

    // Stable sort: ties keep generation order.
    unique.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
    unique
}

/// Availability checking against `{label}.{base_domain}` through an injected
/// [`Resolver`].
pub struct SubdomainChecker<R: Resolver> {
    resolver: R,
    base_domain: String,
    extra_blocked: Vec<String>,
}

impl<R: Resolver> SubdomainChecker<R> {
    pub fn new(resolver: R, base_domain: impl Into<String>) -> Self {
        Self {
            resolver,
            base_domain: base_domain.into(),
            extra_blocked: Vec::new(),
        }
    }

    /// Layers deployment-specific blocked terms on top of the built-in list.
    pub fn with_blocked_terms(mut self, terms: Vec<String>) -> Self {
        self.extra_blocked = terms;
        self
    }

    pub fn base_domain(&self) -> &str {
        &self.base_domain
    }

    pub fn validate(&self, label: &str) -> LabelValidation {
        validate_label_with(label, &self.extra_blocked)
    }

    /// A label is available iff its lookup comes back NXDOMAIN. A successful
    /// resolution means taken; any other resolver failure is treated as
    /// unavailable rather than risking a double-provision.
    pub async fn check_availability(&self, label: &str) -> bool {
        let host = format!("{}.{}", label, self.base_domain);

        match self.resolver.resolve(&host).await {
            ResolveOutcome::Resolved => false,
            ResolveOutcome::NotFound => true,
            ResolveOutcome::Failed(reason) => {
                // Fail closed on resolver trouble.
                tracing::warn!(
                    "DNS check for {} failed ({}); reporting unavailable",
                    host,
                    reason
                );
                false
            }
        }
    }

    /// Full check: validate, then probe availability, then fall back to
    /// ranked suggestions (up to five available ones, probed in priority
    /// order). `reserved` reflects the reserved-word set on every path.
    pub async fn check_subdomain(
        &self,
        requested: &str,
        brand_name: Option<&str>,
        industry: Option<&str>,
        keywords: &[String],
    ) -> SubdomainCheckResult {
        let reserved = RESERVED_LABELS.contains(&requested);

        let validation = self.validate(requested);
        if !validation.valid {
            tracing::debug!(
                "Rejected subdomain '{}': {}",
                requested,
                validation.errors.join("; ")
            );
            return SubdomainCheckResult {
                requested: requested.to_string(),
                available: false,
                suggestions: Vec::new(),
                reserved,
                validation_errors: validation.errors,
            };
        }

        if self.check_availability(requested).await {
            return SubdomainCheckResult {
                requested: requested.to_string(),
                available: true,
                suggestions: Vec::new(),
                reserved,
                validation_errors: Vec::new(),
            };
        }

        tracing::info!("Subdomain '{}' is taken; generating alternatives", requested);
        let candidates =
            generate_suggestions(brand_name.unwrap_or(requested), industry, keywords);

        let mut suggestions = Vec::new();
        for candidate in candidates {
            if suggestions.len() >= MAX_SUGGESTIONS {
                break;
            }
            if self.check_availability(&candidate.label).await {
                suggestions.push(candidate.label);
            }
        }

        SubdomainCheckResult {
            requested: requested.to_string(),
            available: false,
            suggestions,
            reserved,
            validation_errors: Vec::new(),
        }
    }
}
