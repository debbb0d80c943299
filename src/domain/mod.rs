//! Domain extraction from raw URL strings.
//!
//! This module turns a URL (or anything URL-shaped) into the domain used for
//! grouping and joining: subdomains are kept, a single leading `www.` is dropped,
//! and everything after the host is cut off.
//!
//! Key functions:
//! - `extract_domain()` - Null-propagating entry point used by the pipeline
//! - `domain_of()` - Borrowing core for non-null input
//! - `trace_domain()` - Same result plus the rules that changed the value
//!
//! Rules run in a fixed order: scheme, `www.`, path, query. A rule whose
//! pattern does not match is a no-op, so no input is ever rejected.

use strum_macros::{Display, EnumIter};

/// Schemes removed from the start of the input, tried in order.
const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Leading label removed after the scheme.
const WWW_PREFIX: &str = "www.";

/// A single rewrite rule applied by the extractor.
///
/// Variants are declared in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Rule {
    /// A leading `http://` or `https://` was removed.
    Scheme,
    /// A leading `www.` was removed.
    Www,
    /// Everything from the first `/` was removed.
    Path,
    /// Everything from the first `?` was removed.
    Query,
}

/// Result of running the extractor with rule tracing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<'a> {
    /// The extracted domain, borrowed from the input.
    pub domain: &'a str,
    /// Rules that changed the value, in the order they ran.
    pub applied: Vec<Rule>,
}

/// Extracts the domain from a URL value, propagating null.
///
/// # Arguments
///
/// * `input` - The URL value, or `None` for a null cell
///
/// # Returns
///
/// `None` if the input is `None`, otherwise the domain. Never fails.
///
/// # Examples
///
/// ```
/// use url_domain::extract_domain;
///
/// assert_eq!(
///     extract_domain(Some("https://www.dagster.io/blog?ref=x")),
///     Some("dagster.io".to_string())
/// );
/// assert_eq!(extract_domain(None), None);
/// ```
pub fn extract_domain(input: Option<&str>) -> Option<String> {
    input.map(|url| domain_of(url).to_string())
}

/// Extracts the domain from a non-null URL without allocating.
///
/// The returned slice always borrows from `url`. Casing of the domain is
/// preserved; only the scheme and `www.` prefixes match case-insensitively.
pub fn domain_of(url: &str) -> &str {
    let rest = strip_scheme(url).unwrap_or(url);
    let rest = strip_www(rest).unwrap_or(rest);
    let rest = truncate_at(rest, '/').unwrap_or(rest);
    truncate_at(rest, '?').unwrap_or(rest)
}

/// Runs the extractor and records which rules fired.
pub fn trace_domain(url: &str) -> Extraction<'_> {
    let mut applied = Vec::with_capacity(4);
    let mut rest = url;

    for rule in [Rule::Scheme, Rule::Www, Rule::Path, Rule::Query] {
        let next = match rule {
            Rule::Scheme => strip_scheme(rest),
            Rule::Www => strip_www(rest),
            Rule::Path => truncate_at(rest, '/'),
            Rule::Query => truncate_at(rest, '?'),
        };
        if let Some(next) = next {
            applied.push(rule);
            rest = next;
        }
    }

    Extraction {
        domain: rest,
        applied,
    }
}

fn strip_scheme(s: &str) -> Option<&str> {
    SCHEMES
        .iter()
        .find_map(|scheme| strip_prefix_ignore_ascii_case(s, scheme))
}

fn strip_www(s: &str) -> Option<&str> {
    strip_prefix_ignore_ascii_case(s, WWW_PREFIX)
}

/// Returns `s` with `prefix` removed if `s` starts with it, ignoring ASCII case.
///
/// `str::get` returns `None` when the prefix length falls inside a multi-byte
/// character, which cannot match an ASCII prefix anyway.
fn strip_prefix_ignore_ascii_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

/// Cuts `s` at the first `delimiter`, or `None` if it does not occur.
fn truncate_at(s: &str, delimiter: char) -> Option<&str> {
    s.find(delimiter).map(|idx| &s[..idx])
}
