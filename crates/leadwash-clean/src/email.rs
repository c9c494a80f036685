//! Email normalization: fuzzy domain and TLD typo-correction, then strict
//! RFC validation.
//!
//! Correction is best-effort and never fails: values that do not look like
//! `local@domain.tld` pass through unchanged and are left to the validator
//! to reject. The correction tables are small fixed sets; this is not a
//! learned address-correction system.

use std::str::FromStr;

use email_address::EmailAddress;
use rapidfuzz::distance::indel;

/// Canonical domains used as fuzzy-correction targets.
pub const KNOWN_DOMAINS: [&str; 6] = [
    "gmail.com",
    "hotmail.com",
    "outlook.com",
    "yahoo.com",
    "icloud.com",
    "live.com",
];

/// Canonical top-level domains used as fuzzy-correction targets.
pub const KNOWN_TLDS: [&str; 6] = ["com", "org", "net", "edu", "gov", "br"];

/// Minimum similarity ratio for a correction candidate.
const SIMILARITY_CUTOFF: f64 = 0.8;

/// Closest member of `set` by sequence-similarity ratio.
///
/// Returns the highest-scoring member at or above `cutoff`; ties keep the
/// first member encountered in set order.
fn closest_match<'a>(candidate: &str, set: &[&'a str], cutoff: f64) -> Option<&'a str> {
    let mut best: Option<(&'a str, f64)> = None;
    for member in set {
        let score = indel::normalized_similarity(candidate.chars(), member.chars());
        if score < cutoff {
            continue;
        }
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((member, score));
        }
    }
    best.map(|(member, _)| member)
}

/// Split at the single `@` separator, rejecting zero or multiple `@`s.
fn split_single_at(email: &str) -> Option<(&str, &str)> {
    let mut parts = email.splitn(3, '@');
    let local_part = parts.next()?;
    let domain = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((local_part, domain))
}

/// Correct the domain of an address against the known domain and TLD sets.
///
/// The TLD is corrected first, then the whole reassembled domain. Values
/// without exactly one `@`, or whose domain has no `.`, are returned
/// unchanged; correction never rejects an address.
pub fn correct_domain(email: &str) -> String {
    let Some((local_part, domain)) = split_single_at(email) else {
        return email.to_string();
    };
    let Some((domain_name, tld)) = domain.rsplit_once('.') else {
        return email.to_string();
    };

    let tld = if KNOWN_TLDS.contains(&tld) {
        tld
    } else {
        closest_match(tld, &KNOWN_TLDS, SIMILARITY_CUTOFF).unwrap_or(tld)
    };

    let reassembled = format!("{domain_name}.{tld}");
    match closest_match(&reassembled, &KNOWN_DOMAINS, SIMILARITY_CUTOFF) {
        Some(known) => format!("{local_part}@{known}"),
        None => format!("{local_part}@{reassembled}"),
    }
}

/// Normalize a raw email value.
///
/// Trims and lowercases, applies [`correct_domain`], then validates the
/// result against the RFC grammar. Returns the validator's canonical form,
/// or `None` when the corrected address is still invalid.
pub fn normalize_email(raw: Option<&str>) -> Option<String> {
    let email = raw?.trim().to_lowercase();
    let corrected = correct_domain(&email);
    EmailAddress::from_str(&corrected)
        .ok()
        .map(|address| address.to_string())
}
