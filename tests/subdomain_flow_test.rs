use async_trait::async_trait;
use machups_kit::{ResolveOutcome, Resolver, SubdomainChecker};
use std::collections::HashSet;
use std::sync::Mutex;

/// Scripted resolver: every host is taken unless listed as available, and
/// hosts in `failing` simulate resolver trouble. Records every lookup so
/// tests can assert which hosts were probed.
struct StubResolver {
    available: HashSet<String>,
    failing: HashSet<String>,
    lookups: Mutex<Vec<String>>,
}

impl StubResolver {
    fn new(available: &[&str], failing: &[&str]) -> Self {
        Self {
            available: available.iter().map(|s| s.to_string()).collect(),
            failing: failing.iter().map(|s| s.to_string()).collect(),
            lookups: Mutex::new(Vec::new()),
        }
    }

    fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }
}

#[async_trait]
impl Resolver for &StubResolver {
    async fn resolve(&self, host: &str) -> ResolveOutcome {
        self.lookups.lock().unwrap().push(host.to_string());

        if self.failing.contains(host) {
            ResolveOutcome::Failed("SERVFAIL".to_string())
        } else if self.available.contains(host) {
            ResolveOutcome::NotFound
        } else {
            ResolveOutcome::Resolved
        }
    }
}

#[tokio::test]
async fn test_available_subdomain_returns_immediately() {
    let resolver = StubResolver::new(&["fresh-name.machups.com"], &[]);
    let checker = SubdomainChecker::new(&resolver, "machups.com");

    let result = checker.check_subdomain("fresh-name", None, None, &[]).await;

    assert!(result.available);
    assert!(result.suggestions.is_empty());
    assert!(result.validation_errors.is_empty());
    assert!(!result.reserved);
    assert_eq!(resolver.lookup_count(), 1);
}

#[tokio::test]
async fn test_invalid_subdomain_skips_dns_entirely() {
    let resolver = StubResolver::new(&[], &[]);
    let checker = SubdomainChecker::new(&resolver, "machups.com");

    let result = checker.check_subdomain("my--brand", None, None, &[]).await;

    assert!(!result.available);
    assert!(result.suggestions.is_empty());
    assert!(!result.validation_errors.is_empty());
    assert_eq!(resolver.lookup_count(), 0);
}

#[tokio::test]
async fn test_taken_subdomain_collects_the_one_available_suggestion() {
    // Requested label is taken; of all generated alternatives only
    // taken-label-hq resolves to NXDOMAIN.
    let resolver = StubResolver::new(&["taken-label-hq.machups.com"], &[]);
    let checker = SubdomainChecker::new(&resolver, "machups.com");

    let result = checker.check_subdomain("taken-label", None, None, &[]).await;

    assert!(!result.available);
    assert_eq!(result.suggestions, vec!["taken-label-hq".to_string()]);
    assert!(result.validation_errors.is_empty());
    assert!(!result.reserved);
}

#[tokio::test]
async fn test_suggestions_cap_at_five() {
    // Requested taken, everything else free.
    let suffixes = ["app", "hq", "io", "co", "studio", "lab", "works"];
    let hosts: Vec<String> = suffixes
        .iter()
        .map(|s| format!("busy-{}.machups.com", s))
        .collect();
    let available: Vec<&str> = hosts.iter().map(String::as_str).collect();
    let resolver = StubResolver::new(&available, &[]);
    let checker = SubdomainChecker::new(&resolver, "machups.com");

    let result = checker.check_subdomain("busy", None, None, &[]).await;

    assert!(!result.available);
    assert_eq!(result.suggestions.len(), 5);
    // Priority order: the direct name is taken, suffix combos come next.
    assert_eq!(result.suggestions[0], "busy-app");
}

#[tokio::test]
async fn test_resolver_failure_is_fail_closed() {
    let resolver = StubResolver::new(&[], &["flaky.machups.com"]);
    let checker = SubdomainChecker::new(&resolver, "machups.com");

    // A SERVFAIL must read as unavailable, never as free.
    assert!(!checker.check_availability("flaky").await);
}

#[tokio::test]
async fn test_check_availability_outcomes() {
    let resolver = StubResolver::new(&["free.machups.com"], &[]);
    let checker = SubdomainChecker::new(&resolver, "machups.com");

    assert!(checker.check_availability("free").await);
    assert!(!checker.check_availability("occupied").await);
}

#[tokio::test]
async fn test_reserved_word_is_flagged_and_rejected() {
    let resolver = StubResolver::new(&[], &[]);
    let checker = SubdomainChecker::new(&resolver, "machups.com");

    let result = checker.check_subdomain("www", None, None, &[]).await;

    assert!(result.reserved);
    assert!(!result.available);
    assert!(result
        .validation_errors
        .iter()
        .any(|e| e.contains("reserved")));
}

#[tokio::test]
async fn test_suggestions_use_brand_name_when_given() {
    let resolver = StubResolver::new(&["gonads-hq.machups.com"], &[]);
    let checker = SubdomainChecker::new(&resolver, "machups.com");

    let keywords = vec!["meme".to_string()];
    let result = checker
        .check_subdomain("taken-label", Some("Gonads"), Some("Web3"), &keywords)
        .await;

    assert!(!result.available);
    assert_eq!(result.suggestions, vec!["gonads-hq".to_string()]);
}

#[tokio::test]
async fn test_policy_blocked_terms_extend_validation() {
    let resolver = StubResolver::new(&[], &[]);
    let checker = SubdomainChecker::new(&resolver, "machups.com")
        .with_blocked_terms(vec!["casino".to_string()]);

    let result = checker.check_subdomain("mega-casino", None, None, &[]).await;

    assert!(!result.available);
    assert!(result
        .validation_errors
        .iter()
        .any(|e| e.contains("blocked content")));
    assert_eq!(resolver.lookup_count(), 0);
}
