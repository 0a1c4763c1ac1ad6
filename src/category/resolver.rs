//! Category resolution policies.
//!
//! The overlap heuristic can pick a different category than the caller
//! asked for. It is kept behind [`CategoryPolicy`] so it can be swapped for
//! [`FixedCategory`] without touching the scorer, and every switch surfaces
//! as a `category_switched` reason code.

use std::fmt::Debug;

use serde::Serialize;

use super::CategoryId;
use crate::metric::Metric;

/// Outcome of resolving the requested category against the available body
/// metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResolution {
    pub requested: CategoryId,
    pub resolved: CategoryId,
    /// Body-metric overlap per known category, in table order.
    pub overlaps: Vec<(CategoryId, usize)>,
}

impl CategoryResolution {
    pub fn switched(&self) -> bool {
        self.requested != self.resolved
    }
}

pub trait CategoryPolicy: Debug + Send + Sync {
    fn resolve(&self, requested: CategoryId, available: &[Metric]) -> CategoryResolution;
}

fn overlaps(available: &[Metric]) -> Vec<(CategoryId, usize)> {
    CategoryId::ALL
        .iter()
        .map(|&id| {
            let n = id.profile().metrics().filter(|m| available.contains(m)).count();
            (id, n)
        })
        .collect()
}

/// Switch to the category with the largest overlap when it beats the
/// requested category's overlap by more than `margin` metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapSwitch {
    pub margin: usize,
}

impl CategoryPolicy for OverlapSwitch {
    fn resolve(&self, requested: CategoryId, available: &[Metric]) -> CategoryResolution {
        let overlaps = overlaps(available);
        let own = overlaps
            .iter()
            .find(|(id, _)| *id == requested)
            .map_or(0, |(_, n)| *n);

        // First best wins on equal overlap, so table order is the tie-break.
        let mut best: Option<(CategoryId, usize)> = None;
        for &(id, n) in &overlaps {
            if id != requested && best.is_none_or(|(_, b)| n > b) {
                best = Some((id, n));
            }
        }

        let resolved = match best {
            Some((id, n)) if n > own + self.margin => id,
            _ => requested,
        };
        CategoryResolution {
            requested,
            resolved,
            overlaps,
        }
    }
}

/// Always keep the requested category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedCategory;

impl CategoryPolicy for FixedCategory {
    fn resolve(&self, requested: CategoryId, available: &[Metric]) -> CategoryResolution {
        CategoryResolution {
            requested,
            resolved: requested,
            overlaps: overlaps(available),
        }
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
