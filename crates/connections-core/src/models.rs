//! Shared typed models used across ingestion, indexing, and query layers.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::errors::{ConnectionsError, ConnectionsResult};
use crate::indexer::overlap::Span;

// ---------------------------------------------------------------------------
// Constants and aliases
// ---------------------------------------------------------------------------

/// Minimum number of shared days for two people to count as colleagues.
pub const DEFAULT_MIN_OVERLAP_DAYS: i64 = 90;

/// Identifier of a person, unique within one people universe.
pub type PersonId = i64;

/// Day-granularity ordinal (days since 0001-01-01, as counted by chrono).
pub type DayOrdinal = i64;

/// The people universe keyed by id, in load order.
pub type People = IndexMap<PersonId, Person>;

// ---------------------------------------------------------------------------
// Date helpers
// ---------------------------------------------------------------------------

pub fn date_to_ordinal(date: NaiveDate) -> DayOrdinal {
    i64::from(date.num_days_from_ce())
}

pub fn ordinal_to_date(day: DayOrdinal) -> Option<NaiveDate> {
    i32::try_from(day)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

/// Parse an ISO `YYYY-MM-DD` date into a day ordinal.
pub fn parse_iso_date(value: &str) -> ConnectionsResult<DayOrdinal> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(date_to_ordinal)
        .map_err(|source| ConnectionsError::InvalidDate {
            value: value.to_string(),
            source,
        })
}

fn format_ordinal(day: DayOrdinal) -> String {
    match ordinal_to_date(day) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => format!("day#{day}"),
    }
}

// ---------------------------------------------------------------------------
// Experience
// ---------------------------------------------------------------------------

/// One person's tenure at one company, possibly still ongoing.
///
/// `person_id` is a back-reference to the owning [`Person`]; the record never
/// owns or borrows the person itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Experience {
    person_id: PersonId,
    company: String,
    title: String,
    start: DayOrdinal,
    end: Option<DayOrdinal>,
}

impl Experience {
    /// Build a record, rejecting an end that falls before the start.
    pub fn new(
        person_id: PersonId,
        company: impl Into<String>,
        title: impl Into<String>,
        start: DayOrdinal,
        end: Option<DayOrdinal>,
    ) -> ConnectionsResult<Self> {
        let company = company.into();
        if let Some(end) = end {
            if end < start {
                return Err(ConnectionsError::InvalidExperience {
                    person_id,
                    company,
                    start: format_ordinal(start),
                    end: format_ordinal(end),
                });
            }
        }
        Ok(Self {
            person_id,
            company,
            title: title.into(),
            start,
            end,
        })
    }

    pub fn person_id(&self) -> PersonId {
        self.person_id
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start(&self) -> DayOrdinal {
        self.start
    }

    pub fn end(&self) -> Option<DayOrdinal> {
        self.end
    }

    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Render the record with the owner's name, e.g.
    /// `Ada Lovelace is Engineer @ OrangeCart starting 2017-01-01, End: ongoing`.
    pub fn describe(&self, person: &Person) -> String {
        format!("{person} is {self}")
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = match self.end {
            Some(end) => format_ordinal(end),
            None => "ongoing".to_string(),
        };
        write!(
            f,
            "{} @ {} starting {}, End: {}",
            self.title,
            self.company,
            format_ordinal(self.start),
            end
        )
    }
}

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Serialize)]
pub struct Person {
    pub id: PersonId,
    pub first: String,
    pub last: String,
    /// Normalized phone number, `None` when missing or not normalizable.
    pub phone: Option<String>,
    experiences: Vec<Experience>,
}

impl Person {
    pub fn new(
        id: PersonId,
        first: impl Into<String>,
        last: impl Into<String>,
        phone: Option<String>,
    ) -> Self {
        Self {
            id,
            first: first.into(),
            last: last.into(),
            phone,
            experiences: Vec::new(),
        }
    }

    /// Append an experience owned by this person.
    ///
    /// Returns `Ok(false)` when an identical record is already present, so the
    /// list stays de-duplicated in insertion order.
    pub fn add_experience(
        &mut self,
        company: impl Into<String>,
        title: impl Into<String>,
        start: DayOrdinal,
        end: Option<DayOrdinal>,
    ) -> ConnectionsResult<bool> {
        let experience = Experience::new(self.id, company, title, start, end)?;
        if self.experiences.contains(&experience) {
            return Ok(false);
        }
        self.experiences.push(experience);
        Ok(true)
    }

    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    /// Distinct company names this person worked at, in first-seen order.
    pub fn companies_worked_for(&self) -> IndexSet<&str> {
        self.experiences.iter().map(Experience::company).collect()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

/// Metadata attached to one number in a contact entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneLabel {
    #[serde(rename = "type")]
    pub kind: String,
}

/// One entry of a person's phone book.
#[derive(Clone, Debug, Serialize)]
pub struct Contact {
    pub id: i64,
    pub owner_id: PersonId,
    pub nickname: String,
    phones: IndexMap<String, PhoneLabel>,
}

impl Contact {
    pub fn new(id: i64, owner_id: PersonId, nickname: impl Into<String>) -> Self {
        Self {
            id,
            owner_id,
            nickname: nickname.into(),
            phones: IndexMap::new(),
        }
    }

    /// Register an already-normalized number. The first label for a number wins.
    pub fn add_phone(&mut self, normalized: impl Into<String>, label: PhoneLabel) -> bool {
        let normalized = normalized.into();
        if self.phones.contains_key(&normalized) {
            return false;
        }
        self.phones.insert(normalized, label);
        true
    }

    pub fn phones(&self) -> &IndexMap<String, PhoneLabel> {
        &self.phones
    }

    pub fn has_phone(&self, normalized: &str) -> bool {
        self.phones.contains_key(normalized)
    }
}
