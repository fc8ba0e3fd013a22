//! Colleague resolution over shared employment.

use std::collections::HashSet;

use tracing::debug;

use crate::errors::{ConnectionsError, ConnectionsResult};
use crate::indexer::pipeline::build_company_indices;
use crate::models::{People, PersonId};
use crate::query::guards::validate_min_overlap_days;

/// Ids of everyone who shared at least `min_days` at one of the target's companies.
///
/// Only the target's companies are indexed. The target's own id is never part
/// of the result, even when two of the target's records at one company overlap.
pub fn find_connected_person_ids(
    people: &People,
    target_id: PersonId,
    min_days: i64,
) -> ConnectionsResult<HashSet<PersonId>> {
    let min_days = validate_min_overlap_days(min_days)?;
    let target = people
        .get(&target_id)
        .ok_or(ConnectionsError::PersonNotFound(target_id))?;

    let companies = target.companies_worked_for();
    let indices = build_company_indices(people, &companies);

    let mut connected = HashSet::new();
    for experience in target.experiences() {
        if let Some(index) = indices.get(experience.company()) {
            connected.extend(index.colleagues_of(experience, min_days));
        }
    }
    connected.remove(&target_id);

    debug!(
        "Person {} has {} colleagues across {} companies (min_days={})",
        target_id,
        connected.len(),
        companies.len(),
        min_days
    );
    Ok(connected)
}
