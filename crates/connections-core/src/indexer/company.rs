//! Per-company index of experiences ordered by start date.

use std::collections::HashSet;

use crate::indexer::overlap::overlaps_at_least;
use crate::models::{Experience, PersonId};

/// Experiences recorded at one company, sorted ascending by start day.
///
/// The index borrows the records from the people universe; it lives for one
/// resolution call and is never persisted.
#[derive(Debug)]
pub struct CompanyIndex<'a> {
    name: &'a str,
    experiences: Vec<&'a Experience>,
}

impl<'a> CompanyIndex<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            experiences: Vec::new(),
        }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.experiences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experiences.is_empty()
    }

    pub fn experiences(&self) -> &[&'a Experience] {
        &self.experiences
    }

    /// Insert keeping the start-date order. Equal starts keep insertion order.
    pub fn add(&mut self, experience: &'a Experience) {
        let position = self
            .experiences
            .partition_point(|existing| existing.start() <= experience.start());
        self.experiences.insert(position, experience);
    }

    /// Ids of people whose experiences here overlap `target` by `min_days` or more.
    ///
    /// `target` itself is skipped by identity, so another record of the same
    /// owner that overlaps still contributes the owner's id.
    pub fn colleagues_of(&self, target: &Experience, min_days: i64) -> HashSet<PersonId> {
        let mut colleagues = HashSet::new();
        let span = target.span();
        if let Some(duration) = span.duration_days() {
            if duration < min_days {
                return colleagues;
            }
        }

        for other in &self.experiences {
            // Records are sorted by start: past this point the shared window
            // of a bounded target is shorter than min_days.
            if let Some(end) = span.end {
                if end - other.start() < min_days {
                    break;
                }
            }
            if std::ptr::eq(*other, target) {
                continue;
            }
            if overlaps_at_least(span, other.span(), min_days) {
                colleagues.insert(other.person_id());
            }
        }
        colleagues
    }
}
