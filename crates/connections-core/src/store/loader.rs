//! JSON ingestion of people and contact records.
//!
//! People files are arrays of `{id, first, last, phone, experience: [...]}`
//! with ISO dates; contact files are arrays of `{id, owner_id,
//! contact_nickname, phone: [{number, type}]}`. Phone numbers are normalized
//! here, so the query layer only ever sees canonical numbers.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::ConnectionsResult;
use crate::models::{parse_iso_date, Contact, People, Person, PersonId, PhoneLabel};
use crate::store::phone::normalize_phone_number;

// ---------------------------------------------------------------------------
// Wire records
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct PersonRecord {
    id: PersonId,
    first: String,
    last: String,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    experience: Vec<ExperienceRecord>,
}

#[derive(Debug, Deserialize)]
struct ExperienceRecord {
    company: String,
    #[serde(default)]
    title: String,
    start: String,
    #[serde(default)]
    end: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContactRecord {
    id: i64,
    owner_id: PersonId,
    #[serde(default)]
    contact_nickname: String,
    #[serde(default)]
    phone: Vec<ContactPhoneRecord>,
}

#[derive(Debug, Deserialize)]
struct ContactPhoneRecord {
    #[serde(default)]
    number: Option<String>,
    #[serde(rename = "type", default)]
    kind: String,
}

// ---------------------------------------------------------------------------
// People
// ---------------------------------------------------------------------------

fn build_people(records: Vec<PersonRecord>) -> ConnectionsResult<People> {
    let mut people = People::with_capacity(records.len());
    let mut experiences = 0usize;

    for record in records {
        let phone = normalize_phone_number(record.phone.as_deref());
        if phone.is_none() && record.phone.as_deref().is_some_and(|p| !p.trim().is_empty()) {
            warn!(
                "Dropping unnormalizable phone {:?} for person {}",
                record.phone, record.id
            );
        }

        let mut person = Person::new(record.id, record.first, record.last, phone);
        for exp in record.experience {
            let start = parse_iso_date(&exp.start)?;
            let end = exp.end.as_deref().map(parse_iso_date).transpose()?;
            if person.add_experience(exp.company, exp.title, start, end)? {
                experiences += 1;
            }
        }

        if let Some(previous) = people.insert(person.id, person) {
            warn!(
                "Duplicate person id {}; keeping the last record ({})",
                previous.id, previous
            );
        }
    }

    info!(
        "Loaded {} people with {} experiences",
        people.len(),
        experiences
    );
    Ok(people)
}

pub fn load_people_json(data: &str) -> ConnectionsResult<People> {
    build_people(serde_json::from_str(data)?)
}

pub fn load_people_file(path: &Path) -> ConnectionsResult<People> {
    let reader = BufReader::new(File::open(path)?);
    build_people(serde_json::from_reader(reader)?)
}

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

fn build_contacts(records: Vec<ContactRecord>) -> Vec<Contact> {
    let mut contacts = Vec::with_capacity(records.len());
    let mut dropped = 0usize;

    for record in records {
        let mut contact = Contact::new(record.id, record.owner_id, record.contact_nickname);
        for phone in record.phone {
            match normalize_phone_number(phone.number.as_deref()) {
                Some(normalized) => {
                    contact.add_phone(normalized, PhoneLabel { kind: phone.kind });
                }
                None => dropped += 1,
            }
        }
        contacts.push(contact);
    }

    if dropped > 0 {
        warn!("Dropped {} unnormalizable contact phone numbers", dropped);
    }
    info!("Loaded {} contacts", contacts.len());
    contacts
}

pub fn load_contacts_json(data: &str) -> ConnectionsResult<Vec<Contact>> {
    Ok(build_contacts(serde_json::from_str(data)?))
}

pub fn load_contacts_file(path: &Path) -> ConnectionsResult<Vec<Contact>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(build_contacts(serde_json::from_reader(reader)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConnectionsError;
    use crate::models::date_to_ordinal;
    use chrono::NaiveDate;
    use std::io::Write;

    const PERSONS: &str = include_str!("../../fixtures/persons.json");
    const CONTACTS: &str = include_str!("../../fixtures/contacts.json");

    #[test]
    fn test_load_people_fixture() {
        let people = load_people_json(PERSONS).unwrap();
        assert_eq!(people.len(), 5);
        let ids: Vec<PersonId> = people.keys().copied().collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);

        let ada = &people[&0];
        assert_eq!(ada.full_name(), "Ada Lovelace");
        assert_eq!(ada.phone.as_deref(), Some("+12123456789"));
        assert_eq!(ada.experiences().len(), 2);
        let first = &ada.experiences()[0];
        assert_eq!(first.company(), "OrangeCart");
        assert_eq!(
            first.start(),
            date_to_ordinal(NaiveDate::from_ymd_opt(2017, 1, 1).unwrap())
        );
        assert!(first.is_ongoing());
    }

    #[test]
    fn test_duplicate_experiences_are_collapsed() {
        let people = load_people_json(PERSONS).unwrap();
        assert_eq!(people[&3].experiences().len(), 1);
    }

    #[test]
    fn test_unnormalizable_person_phone_becomes_none() {
        let people = load_people_json(PERSONS).unwrap();
        assert_eq!(people[&4].phone, None);
        assert_eq!(people[&2].phone.as_deref(), Some("+16465550134"));
    }

    #[test]
    fn test_missing_start_is_rejected() {
        let data = serde_json::json!([{
            "id": 1, "first": "John", "last": "Doe", "phone": null,
            "experience": [{"company": "A", "title": "B", "end": "2023-01-01"}]
        }]);
        let err = load_people_json(&data.to_string()).unwrap_err();
        assert!(matches!(err, ConnectionsError::Json(_)));
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let data = serde_json::json!([{
            "id": 1, "first": "John", "last": "Doe", "phone": null,
            "experience": [{"company": "A", "title": "B", "start": "2023-02-01", "end": "2023-01-01"}]
        }]);
        let err = load_people_json(&data.to_string()).unwrap_err();
        assert!(matches!(err, ConnectionsError::InvalidExperience { .. }));
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let data = serde_json::json!([{
            "id": 1, "first": "John", "last": "Doe",
            "experience": [{"company": "A", "title": "B", "start": "01/02/2023", "end": null}]
        }]);
        let err = load_people_json(&data.to_string()).unwrap_err();
        assert!(matches!(err, ConnectionsError::InvalidDate { .. }));
    }

    #[test]
    fn test_duplicate_person_id_keeps_last() {
        let data = serde_json::json!([
            {"id": 1, "first": "Old", "last": "Record", "experience": []},
            {"id": 1, "first": "New", "last": "Record", "experience": []}
        ]);
        let people = load_people_json(&data.to_string()).unwrap();
        assert_eq!(people.len(), 1);
        assert_eq!(people[&1].first, "New");
    }

    #[test]
    fn test_load_contacts_fixture() {
        let contacts = load_contacts_json(CONTACTS).unwrap();
        assert_eq!(contacts.len(), 4);

        // Both spellings of Bob's number collapse; the first label wins.
        let bob = &contacts[0];
        assert_eq!(bob.owner_id, 3);
        assert_eq!(bob.phones().len(), 1);
        assert_eq!(bob.phones()["+19173454768"].kind, "mobile");

        // The invalid number is dropped at ingestion.
        let cy_and_dee = &contacts[2];
        assert_eq!(cy_and_dee.nickname, "Cy and Dee");
        let numbers: Vec<&str> = cy_and_dee.phones().keys().map(String::as_str).collect();
        assert_eq!(numbers, vec!["+16465550134", "+17182349876"]);
    }

    #[test]
    fn test_load_from_files() {
        let mut people_file = tempfile::NamedTempFile::new().unwrap();
        people_file.write_all(PERSONS.as_bytes()).unwrap();
        let mut contacts_file = tempfile::NamedTempFile::new().unwrap();
        contacts_file.write_all(CONTACTS.as_bytes()).unwrap();

        let people = load_people_file(people_file.path()).unwrap();
        let contacts = load_contacts_file(contacts_file.path()).unwrap();
        assert_eq!(people.len(), 5);
        assert_eq!(contacts.len(), 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_people_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConnectionsError::Io(_)));
    }
}
