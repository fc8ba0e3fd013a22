//! Phone-pal matching over contact lists.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::errors::{ConnectionsError, ConnectionsResult};
use crate::models::{Contact, People, PersonId};

/// Normalized phone number to every person id that owns it.
fn phone_book(people: &People) -> HashMap<&str, Vec<PersonId>> {
    let mut book: HashMap<&str, Vec<PersonId>> = HashMap::with_capacity(people.len());
    for person in people.values() {
        if let Some(phone) = person.phone.as_deref() {
            book.entry(phone).or_default().push(person.id);
        }
    }
    book
}

/// Ids of people linked to the target through contact lists.
///
/// A contact owned by the target contributes every known person whose number
/// it lists. A contact owned by someone else contributes its owner when it
/// lists the target's number. A target without a phone can still find pals
/// through its own contacts.
pub fn find_phone_pals_ids(
    contacts: &[Contact],
    people: &People,
    target_id: PersonId,
) -> ConnectionsResult<HashSet<PersonId>> {
    let target = people
        .get(&target_id)
        .ok_or(ConnectionsError::PersonNotFound(target_id))?;
    let target_phone = target.phone.as_deref();
    let book = phone_book(people);

    let mut pals = HashSet::new();
    for contact in contacts {
        if contact.owner_id == target_id {
            pals.extend(
                contact
                    .phones()
                    .keys()
                    .filter_map(|phone| book.get(phone.as_str()))
                    .flatten()
                    .copied(),
            );
        } else if target_phone.is_some_and(|phone| contact.has_phone(phone)) {
            pals.insert(contact.owner_id);
        }
    }
    pals.remove(&target_id);

    debug!("Person {} has {} phone pals", target_id, pals.len());
    Ok(pals)
}
