//! # Domain Invariants
//!
//! Invariants that MUST hold after every committed book store call.
//!
//! - INVARIANT-1: Sequential Version Ids
//! - INVARIANT-2: Supply Conservation
//! - INVARIANT-3: Author Attribution

use crate::domain::balances::CopyLedger;
use crate::domain::entities::BookVersion;
use shared_types::VersionId;
use std::collections::BTreeMap;

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// INVARIANT-1: Sequential Version Ids
///
/// Version `n` exists iff `1 <= n <= next_id - 1`.
#[must_use]
pub fn check_sequential_ids_invariant(
    versions: &BTreeMap<VersionId, BookVersion>,
    next_id: VersionId,
) -> bool {
    versions.len() as u64 == next_id.saturating_sub(1)
        && versions
            .iter()
            .zip(1..)
            .all(|((key, version), expected)| *key == expected && version.id == expected)
}

/// INVARIANT-2: Supply Conservation
///
/// Copies only move between holders; the balances of a version always add
/// up to the quantity minted at publish time.
#[must_use]
pub fn check_supply_invariant(version: &BookVersion, ledger: &CopyLedger) -> bool {
    ledger.circulating(version.id) == version.supply
}

/// INVARIANT-3: Author Attribution
///
/// No version is attributed to the zero address.
#[must_use]
pub fn check_author_invariant(version: &BookVersion) -> bool {
    !version.author.is_zero()
}

/// Check all invariants at once.
#[must_use]
pub fn check_all_invariants(
    versions: &BTreeMap<VersionId, BookVersion>,
    next_id: VersionId,
    ledger: &CopyLedger,
) -> InvariantCheckResult {
    let mut violations = Vec::new();

    if !check_sequential_ids_invariant(versions, next_id) {
        violations.push(InvariantViolation::NonSequentialIds {
            versions: versions.len(),
            next_id,
        });
    }

    for version in versions.values() {
        if !check_supply_invariant(version, ledger) {
            violations.push(InvariantViolation::SupplyMismatch {
                version_id: version.id,
                minted: version.supply,
                circulating: ledger.circulating(version.id),
            });
        }
        if !check_author_invariant(version) {
            violations.push(InvariantViolation::MissingAuthor {
                version_id: version.id,
            });
        }
    }

    if violations.is_empty() {
        InvariantCheckResult::Valid
    } else {
        InvariantCheckResult::Invalid(violations)
    }
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Result of checking all invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Version ids have a gap or do not match the counter.
    NonSequentialIds { versions: usize, next_id: VersionId },
    /// Balances of a version do not add up to its minted supply.
    SupplyMismatch {
        version_id: VersionId,
        minted: u64,
        circulating: u64,
    },
    /// Version attributed to the zero address.
    MissingAuthor { version_id: VersionId },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonSequentialIds { versions, next_id } => {
                write!(f, "non-sequential ids: {versions} versions, next id {next_id}")
            }
            Self::SupplyMismatch {
                version_id,
                minted,
                circulating,
            } => write!(
                f,
                "supply mismatch for version {version_id}: minted {minted}, circulating {circulating}"
            ),
            Self::MissingAuthor { version_id } => {
                write!(f, "version {version_id} has no author")
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
