//! Top-level connection resolution: colleagues and phone pals combined.

use std::collections::{BTreeSet, HashSet};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::{ConnectionsError, ConnectionsResult};
use crate::models::{Contact, People, Person, PersonId};
use crate::query::colleagues::find_connected_person_ids;
use crate::query::guards::{clamp_workers, validate_batch_size, validate_min_overlap_days};
use crate::query::phone_pals::find_phone_pals_ids;

/// Union of colleagues and phone pals for one target.
pub fn find_all_connections(
    people: &People,
    contacts: &[Contact],
    target_id: PersonId,
    min_days: i64,
) -> ConnectionsResult<HashSet<PersonId>> {
    if !people.contains_key(&target_id) {
        return Err(ConnectionsError::PersonNotFound(target_id));
    }
    let mut connections = find_connected_person_ids(people, target_id, min_days)?;
    connections.extend(find_phone_pals_ids(contacts, people, target_id)?);
    Ok(connections)
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Connections of one target split by relation, ordered by id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConnectionReport {
    pub target: PersonId,
    pub colleagues: BTreeSet<PersonId>,
    pub phone_pals: BTreeSet<PersonId>,
    pub all: BTreeSet<PersonId>,
}

impl ConnectionReport {
    /// Resolved people sorted by last name, first name, then id.
    pub fn sorted_people<'a>(&self, people: &'a People) -> Vec<&'a Person> {
        let mut found: Vec<&Person> = self.all.iter().filter_map(|id| people.get(id)).collect();
        found.sort_by(|a, b| {
            a.last
                .cmp(&b.last)
                .then_with(|| a.first.cmp(&b.first))
                .then_with(|| a.id.cmp(&b.id))
        });
        found
    }

    /// One `"<id>: <first> <last>"` line per connection, in display order.
    pub fn display_lines(&self, people: &People) -> Vec<String> {
        self.sorted_people(people)
            .into_iter()
            .map(|person| format!("{}: {}", person.id, person))
            .collect()
    }
}

pub fn connection_report(
    people: &People,
    contacts: &[Contact],
    target_id: PersonId,
    min_days: i64,
) -> ConnectionsResult<ConnectionReport> {
    if !people.contains_key(&target_id) {
        return Err(ConnectionsError::PersonNotFound(target_id));
    }
    let colleagues: BTreeSet<PersonId> = find_connected_person_ids(people, target_id, min_days)?
        .into_iter()
        .collect();
    let phone_pals: BTreeSet<PersonId> = find_phone_pals_ids(contacts, people, target_id)?
        .into_iter()
        .collect();
    let all = colleagues.union(&phone_pals).copied().collect();
    Ok(ConnectionReport {
        target: target_id,
        colleagues,
        phone_pals,
        all,
    })
}

// ---------------------------------------------------------------------------
// Batch resolution
// ---------------------------------------------------------------------------

/// Resolve several targets independently on a Rayon pool.
///
/// Results come back in input order, one per target, so an unknown id does
/// not fail the whole batch.
pub fn find_all_connections_many(
    people: &People,
    contacts: &[Contact],
    targets: &[PersonId],
    min_days: i64,
    workers: usize,
) -> ConnectionsResult<Vec<ConnectionsResult<ConnectionReport>>> {
    validate_batch_size(targets.len())?;
    let min_days = validate_min_overlap_days(min_days)?;
    if targets.is_empty() {
        return Ok(vec![]);
    }

    let resolve = |target: &PersonId| connection_report(people, contacts, *target, min_days);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(clamp_workers(workers))
        .build();

    let results: Vec<ConnectionsResult<ConnectionReport>> = match pool {
        Ok(pool) => pool.install(|| targets.par_iter().map(resolve).collect::<Vec<_>>()),
        Err(e) => {
            warn!("Falling back to sequential resolution: {e}");
            targets.iter().map(resolve).collect()
        }
    };

    debug!("Resolved {} targets", targets.len());
    Ok(results)
}
