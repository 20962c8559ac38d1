//! Search query compiler.
//!
//! Turns a raw query or an ordered field mapping, plus an optional boolean
//! operator clause, into the URL-encoded `q=...&type=...` string sent to the
//! search endpoint. Pure: no I/O and no shared state.
//!
//! Two inputs are tolerated rather than rejected, because they have always
//! been: an operator other than `OR`/`NOT`, and a clause that is not a string.
//! Both leave the query text untouched. The compiler records which case applied
//! in [`OperatorOutcome`] so callers can log it.

use serde_json::Value;
use tracing::debug;
use url::form_urlencoded;

use crate::error::{CatalogError, Result};

/// Search input: either query text used as-is, or `field:value` filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Text(String),
    /// Field filters in insertion order; keys are unique.
    Fields(Vec<(String, String)>),
}

impl Query {
    pub fn text(text: impl Into<String>) -> Self {
        Query::Text(text.into())
    }

    /// Builds a field mapping, preserving first-insertion order.
    ///
    /// A repeated key keeps its original position and takes the later value.
    pub fn fields<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields: Vec<(String, String)> = Vec::new();
        for (key, value) in pairs {
            let (key, value) = (key.into(), value.into());
            match fields.iter_mut().find(|(k, _)| *k == key) {
                Some(existing) => existing.1 = value,
                None => fields.push((key, value)),
            }
        }
        Query::Fields(fields)
    }

    /// Query text before any operator clause is appended.
    pub fn render(&self) -> String {
        match self {
            Query::Text(text) => text.clone(),
            Query::Fields(fields) => fields
                .iter()
                .map(|(k, v)| format!("{k}:{v}"))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Query::text(text)
    }
}

impl From<String> for Query {
    fn from(text: String) -> Self {
        Query::Text(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Or,
    Not,
}

impl Operator {
    /// Case-insensitive match against `or` / `not`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "or" => Some(Operator::Or),
            "not" => Some(Operator::Not),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Or => "OR",
            Operator::Not => "NOT",
        }
    }
}

/// What happened to the operator clause during compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorOutcome {
    /// Operator or clause was absent.
    NotRequested,
    Applied(Operator),
    IgnoredUnrecognized(String),
    IgnoredNonStringClause,
}

/// A compiled search, before and after URL encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    pub text: String,
    pub search_type: String,
    pub outcome: OperatorOutcome,
}

impl CompiledQuery {
    /// `q=<text>&type=<search_type>`, form-encoded.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("q", &self.text)
            .append_pair("type", &self.search_type)
            .finish()
    }
}

/// Compiles a search without encoding it.
///
/// # Errors
///
/// [`CatalogError::InvalidQuery`] if `query` is `None`.
pub fn compile_query(
    query: Option<&Query>,
    operator: Option<&str>,
    operator_clause: Option<&Value>,
    search_type: &str,
) -> Result<CompiledQuery> {
    let query = query.ok_or_else(|| CatalogError::InvalidQuery("a query is required".into()))?;
    let mut text = query.render();

    let outcome = match (operator, operator_clause) {
        (Some(op), Some(clause)) => match (Operator::parse(op), clause) {
            (None, _) => OperatorOutcome::IgnoredUnrecognized(op.to_string()),
            (Some(op), Value::String(clause)) => {
                text = format!("{text} {} {clause}", op.as_str());
                OperatorOutcome::Applied(op)
            }
            (Some(_), _) => OperatorOutcome::IgnoredNonStringClause,
        },
        _ => OperatorOutcome::NotRequested,
    };

    debug!(query = %text, ?outcome, "search query compiled");

    Ok(CompiledQuery {
        text,
        search_type: search_type.to_lowercase(),
        outcome,
    })
}

/// Compiles and URL-encodes a search as `q=<query>&type=<search_type>`.
///
/// # Example
///
/// ```
/// let params = compile(Some(&Query::text("a")), Some("or"), Some(&json!("b")), "Track")?;
/// assert_eq!(params, "q=a+OR+b&type=track");
/// ```
pub fn compile(
    query: Option<&Query>,
    operator: Option<&str>,
    operator_clause: Option<&Value>,
    search_type: &str,
) -> Result<String> {
    compile_query(query, operator, operator_clause, search_type).map(|c| c.encode())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn operator_parse_is_case_insensitive() {
        assert_eq!(Operator::parse("oR"), Some(Operator::Or));
        assert_eq!(Operator::parse("NOT"), Some(Operator::Not));
        assert_eq!(Operator::parse("and"), None);
    }

    #[test]
    fn non_string_clause_is_ignored() {
        let compiled =
            compile_query(Some(&Query::text("a")), Some("not"), Some(&json!(42)), "artist")
                .unwrap();
        assert_eq!(compiled.text, "a");
        assert_eq!(compiled.outcome, OperatorOutcome::IgnoredNonStringClause);
    }

    #[test]
    fn operator_without_clause_is_not_requested() {
        let compiled = compile_query(Some(&Query::text("a")), Some("or"), None, "artist").unwrap();
        assert_eq!(compiled.text, "a");
        assert_eq!(compiled.outcome, OperatorOutcome::NotRequested);
    }

    #[test]
    fn repeated_field_keeps_position_and_takes_last_value() {
        let query = Query::fields([("artist", "A"), ("year", "2020"), ("artist", "B")]);
        assert_eq!(query.render(), "artist:B year:2020");
    }
}
