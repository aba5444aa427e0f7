//! Sensitive-content rule catalog
//!
//! Rules are declared in static group modules and compiled into a
//! validated, immutable [`Catalog`] at construction time. Group
//! membership exists purely for maintainability; the scanner sees one
//! flat, ordered rule list.

mod business;
mod contact;
mod credentials;
mod financial;
mod identity;
mod medical;
mod misc;

use crate::risk::Severity;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Semantic class of sensitive content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// API keys, private keys, and other named secrets
    SecretCredential,

    /// SQL statements or injection fragments
    SqlStatement,

    /// Passwords, personal identifiers, contact and financial data
    GenericCredential,

    /// Internal hostnames and network references
    InternalNetworkReference,

    /// Content marked confidential or proprietary
    ProprietaryMarker,
}

impl Category {
    /// Stable snake_case name, used in finding ids and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SecretCredential => "secret_credential",
            Category::SqlStatement => "sql_statement",
            Category::GenericCredential => "generic_credential",
            Category::InternalNetworkReference => "internal_network_reference",
            Category::ProprietaryMarker => "proprietary_marker",
        }
    }
}

/// Errors raised while building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate rule id: {0}")]
    DuplicateRule(&'static str),

    #[error("invalid pattern for rule {id}: {source}")]
    InvalidPattern {
        id: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Declarative form of a detection rule, as written in the group modules
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    /// Unique name across the whole catalog
    pub id: &'static str,

    /// Regex source; find-all semantics are supplied by the scanner
    pub pattern: &'static str,

    /// Compile with case-insensitive matching
    pub case_insensitive: bool,

    /// Compile with `.` matching newlines (block-structured content)
    pub dot_matches_new_line: bool,

    /// Semantic class of whatever this rule matches
    pub category: Category,

    /// Source-assigned severity
    pub severity: Severity,

    /// Static human-readable explanation shown with each finding
    pub explanation: &'static str,
}

/// A compiled, immutable detection rule
#[derive(Debug, Clone)]
pub struct Rule {
    /// Unique name across the whole catalog
    pub id: &'static str,

    /// Semantic class of whatever this rule matches
    pub category: Category,

    /// Source-assigned severity
    pub severity: Severity,

    /// Static human-readable explanation shown with each finding
    pub explanation: &'static str,

    matcher: Regex,
}

impl Rule {
    /// Compiled matcher. `find_iter` on it owns its own cursor, so
    /// repeated and concurrent scans never observe each other's state.
    pub fn matcher(&self) -> &Regex {
        &self.matcher
    }
}

/// Validated, ordered collection of detection rules
#[derive(Debug, Clone)]
pub struct Catalog {
    rules: Vec<Rule>,
    by_id: HashMap<&'static str, usize>,
}

impl Catalog {
    /// Compile a catalog from rule specs, preserving iteration order.
    ///
    /// Rejects duplicate ids and uncompilable patterns instead of
    /// silently shadowing earlier entries.
    pub fn from_specs<'a, I>(specs: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = &'a RuleSpec>,
    {
        let mut catalog = Self {
            rules: Vec::new(),
            by_id: HashMap::new(),
        };
        for spec in specs {
            catalog.register(spec)?;
        }
        Ok(catalog)
    }

    /// Build the full built-in rule set.
    pub fn standard() -> Result<Self, CatalogError> {
        let groups: [&[RuleSpec]; 7] = [
            identity::RULES,
            contact::RULES,
            medical::RULES,
            financial::RULES,
            credentials::RULES,
            business::RULES,
            misc::RULES,
        ];
        Self::from_specs(groups.into_iter().flatten())
    }

    /// Shared, lazily compiled standard catalog.
    pub fn shared() -> &'static Catalog {
        static SHARED: Lazy<Catalog> = Lazy::new(|| {
            // The built-in specs are static data; compilation is
            // exercised by the catalog tests.
            Catalog::standard().expect("built-in rule catalog must compile")
        });
        &SHARED
    }

    fn register(&mut self, spec: &RuleSpec) -> Result<(), CatalogError> {
        if self.by_id.contains_key(spec.id) {
            return Err(CatalogError::DuplicateRule(spec.id));
        }

        let matcher = RegexBuilder::new(spec.pattern)
            .case_insensitive(spec.case_insensitive)
            .dot_matches_new_line(spec.dot_matches_new_line)
            .build()
            .map_err(|source| CatalogError::InvalidPattern {
                id: spec.id,
                source,
            })?;

        self.by_id.insert(spec.id, self.rules.len());
        self.rules.push(Rule {
            id: spec.id,
            category: spec.category,
            severity: spec.severity,
            explanation: spec.explanation,
            matcher,
        });
        Ok(())
    }

    /// Rules in registration order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Look up a rule by id.
    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.by_id.get(id).map(|&idx| &self.rules[idx])
    }

    /// Number of rules in the catalog.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the catalog holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests;
