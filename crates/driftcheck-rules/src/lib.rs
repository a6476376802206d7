//! Drift rule evaluator.
//!
//! Pure verdict computation over a list of changed-path strings: schema
//! sources changing without a contract change is a violation. The
//! version-control adapter and the exit-code mapping live in other
//! crates; nothing in this crate performs I/O.

use serde::{Deserialize, Serialize};

pub const RULES_SCHEMA: u32 = 1;

const DEFAULT_SCHEMA_PATTERNS: [&str; 2] = ["pbos-shared-schemas", "src/zod"];
const DEFAULT_CONTRACT_PATTERNS: [&str; 2] = ["pbos-api-contracts", "openapi"];

/// Substring patterns classifying a changed path as schema- or
/// contract-related.
///
/// Containment is raw, case-sensitive substring matching over the whole
/// status line, including any leading status-code characters. Patterns
/// are configuration constants, never runtime-mutable state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatternSet {
    pub schema: Vec<String>,
    pub contract: Vec<String>,
}

impl Default for PatternSet {
    fn default() -> Self {
        Self {
            schema: DEFAULT_SCHEMA_PATTERNS
                .iter()
                .map(|pattern| (*pattern).to_string())
                .collect(),
            contract: DEFAULT_CONTRACT_PATTERNS
                .iter()
                .map(|pattern| (*pattern).to_string())
                .collect(),
        }
    }
}

impl PatternSet {
    /// Builds a pattern set from CLI overrides; an empty override list
    /// keeps the corresponding built-in defaults.
    pub fn from_overrides(schema: Vec<String>, contract: Vec<String>) -> Self {
        let defaults = Self::default();
        Self {
            schema: if schema.is_empty() {
                defaults.schema
            } else {
                schema
            },
            contract: if contract.is_empty() {
                defaults.contract
            } else {
                contract
            },
        }
    }
}

/// Evaluator output classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// No changed paths at all.
    Clean,
    /// Changes present, no rule violated.
    Pass,
    /// Schema paths changed without any contract path changing.
    Violation,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Clean => "clean",
            Verdict::Pass => "pass",
            Verdict::Violation => "violation",
        }
    }

    pub fn is_violation(self) -> bool {
        matches!(self, Verdict::Violation)
    }
}

/// Outcome of one evaluation run.
///
/// The matched entry lists are diagnostic only; the verdict depends
/// solely on whether each list is empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DriftReport {
    pub schema: u32,
    pub verdict: Verdict,
    pub scanned: usize,
    pub schema_matches: Vec<String>,
    pub contract_matches: Vec<String>,
}

/// Derives a ChangeSet from a raw status report: split on line breaks,
/// trim trailing whitespace, drop blank lines. Leading status codes are
/// kept verbatim.
pub fn parse_change_set(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn contains_any(entry: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| entry.contains(pattern))
}

/// Applies the drift rule to one ChangeSet.
///
/// Total over its input: empty (or all-blank) input is `Clean`, a
/// schema match without a contract match is `Violation`, everything
/// else is `Pass`. Deterministic, order-independent, and free of side
/// effects.
pub fn evaluate(change_set: &[String], patterns: &PatternSet) -> DriftReport {
    let entries: Vec<&String> = change_set
        .iter()
        .filter(|entry| !entry.trim().is_empty())
        .collect();

    if entries.is_empty() {
        return DriftReport {
            schema: RULES_SCHEMA,
            verdict: Verdict::Clean,
            scanned: 0,
            schema_matches: Vec::new(),
            contract_matches: Vec::new(),
        };
    }

    let schema_matches: Vec<String> = entries
        .iter()
        .filter(|entry| contains_any(entry, &patterns.schema))
        .map(|entry| (*entry).clone())
        .collect();
    let contract_matches: Vec<String> = entries
        .iter()
        .filter(|entry| contains_any(entry, &patterns.contract))
        .map(|entry| (*entry).clone())
        .collect();

    let verdict = if !schema_matches.is_empty() && contract_matches.is_empty() {
        Verdict::Violation
    } else {
        Verdict::Pass
    };

    DriftReport {
        schema: RULES_SCHEMA,
        verdict,
        scanned: entries.len(),
        schema_matches,
        contract_matches,
    }
}
