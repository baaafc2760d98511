use crate::month::YearMonth;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A reference the calculator could not resolve and therefore counted as zero.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// An allocated member whose role has no labor rate; their cost reads as 0.
    UnknownRole { member_id: String, role: String },
    /// A positive allocation for a member missing from the resolved team.
    OrphanedAllocation { member_id: String, month: YearMonth },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownRole { member_id, role } => {
                write!(f, "member {member_id} has role '{role}' with no labor rate")
            }
            Diagnostic::OrphanedAllocation { member_id, month } => {
                write!(f, "allocation for unknown member {member_id} in {month} was skipped")
            }
        }
    }
}

/// Sorted, de-duplicated set of diagnostics from one calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    entries: BTreeSet<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.insert(diagnostic);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn unknown_roles(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| matches!(d, Diagnostic::UnknownRole { .. }))
            .count()
    }

    pub fn orphaned_allocations(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| matches!(d, Diagnostic::OrphanedAllocation { .. }))
            .count()
    }
}
