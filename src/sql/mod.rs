//! SQL renditions of the domain extractor.
//!
//! Query engines call the extractor inline, so this module emits a SQL
//! expression over an arbitrary text expression (usually a column reference)
//! that applies the same rules as [`crate::domain_of`]. NULL handling is left
//! to the engine: every function used here returns NULL for NULL input.

use clap::ValueEnum;
use strum_macros::Display;

/// SQL dialect to emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SqlDialect {
    /// SQLite (no regex functions; built from `substr`, `instr` and `CASE`)
    Sqlite,
    /// PostgreSQL
    Postgres,
    /// Snowflake
    Snowflake,
}

/// Builds a SQL expression that extracts the domain from `expr`.
///
/// `expr` is inserted verbatim (wrapped in parentheses), so it may be any
/// text-valued expression. Use [`quote_identifier`] to build a safe column
/// reference from a raw name.
///
/// # Examples
///
/// ```
/// use url_domain::sql::{domain_expression, SqlDialect};
///
/// let sql = domain_expression("url", SqlDialect::Postgres);
/// assert!(sql.starts_with("split_part(split_part(regexp_replace("));
/// ```
pub fn domain_expression(expr: &str, dialect: SqlDialect) -> String {
    match dialect {
        SqlDialect::Sqlite => sqlite_expression(expr),
        SqlDialect::Postgres => regex_expression(expr, "'i'"),
        SqlDialect::Snowflake => regex_expression(expr, "1, 1, 'i'"),
    }
}

/// Quotes an identifier with ANSI double quotes, doubling embedded quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Postgres and Snowflake share the same shape and differ only in the
/// trailing `regexp_replace` arguments (flags, or position/occurrence/flags).
///
/// Without the `g` flag Postgres replaces the first match only, and Snowflake
/// is told so explicitly with occurrence `1`. `[.]` avoids backslash escaping,
/// which Snowflake string literals treat differently.
fn regex_expression(expr: &str, replace_args: &str) -> String {
    let no_scheme = format!("regexp_replace(({expr}), '^https?://', '', {replace_args})");
    let no_www = format!("regexp_replace({no_scheme}, '^www[.]', '', {replace_args})");
    format!("split_part(split_part({no_www}, '/', 1), '?', 1)")
}

/// SQLite has no regex by default, so each rule is a `substr` whose start
/// offset is picked by a case-insensitive prefix test. Each step references
/// its input only a couple of times to keep the nested text small.
fn sqlite_expression(expr: &str) -> String {
    let input = format!("({expr})");
    let no_scheme = format!(
        "substr({input}, CASE WHEN lower(substr({input}, 1, 8)) = 'https://' THEN 9 \
         WHEN lower(substr({input}, 1, 7)) = 'http://' THEN 8 ELSE 1 END)"
    );
    let no_www = format!(
        "substr({no_scheme}, CASE WHEN lower(substr({no_scheme}, 1, 4)) = 'www.' THEN 5 ELSE 1 END)"
    );
    let no_path = sqlite_truncate_at(&no_www, '/');
    sqlite_truncate_at(&no_path, '?')
}

/// Keeps the characters of `expr` before the first `delimiter`. Appending the
/// delimiter makes `instr` land one past the end when it is absent.
fn sqlite_truncate_at(expr: &str, delimiter: char) -> String {
    format!("substr({expr}, 1, instr({expr} || '{delimiter}', '{delimiter}') - 1)")
}
