//! Immutable in-memory snapshot of people and contacts for one request.

use std::collections::HashSet;
use std::path::Path;

use crate::errors::ConnectionsResult;
use crate::models::{Contact, People, Person, PersonId};
use crate::query::connections::{connection_report, find_all_connections, ConnectionReport};
use crate::store::loader::{load_contacts_file, load_people_file};

#[derive(Debug, Default)]
pub struct Snapshot {
    people: People,
    contacts: Vec<Contact>,
}

impl Snapshot {
    pub fn new(people: People, contacts: Vec<Contact>) -> Self {
        Self { people, contacts }
    }

    /// Load both files; without a contacts file the phone book is empty.
    pub fn load(people_path: &Path, contacts_path: Option<&Path>) -> ConnectionsResult<Self> {
        let people = load_people_file(people_path)?;
        let contacts = match contacts_path {
            Some(path) => load_contacts_file(path)?,
            None => Vec::new(),
        };
        Ok(Self::new(people, contacts))
    }

    pub fn people(&self) -> &People {
        &self.people
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(&id)
    }

    pub fn find_all_connections(
        &self,
        target_id: PersonId,
        min_days: i64,
    ) -> ConnectionsResult<HashSet<PersonId>> {
        find_all_connections(&self.people, &self.contacts, target_id, min_days)
    }

    pub fn connection_report(
        &self,
        target_id: PersonId,
        min_days: i64,
    ) -> ConnectionsResult<ConnectionReport> {
        connection_report(&self.people, &self.contacts, target_id, min_days)
    }
}
