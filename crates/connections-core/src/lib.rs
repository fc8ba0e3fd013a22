//! Connections core library: who is linked to a person through shared
//! employment or shared phone books.
//!
//! People and contacts are loaded once into an immutable snapshot. For a
//! target person the resolver indexes only the companies that person worked
//! at, collects everyone whose tenure overlapped by a minimum number of days,
//! and unions that with the people found through contact lists by normalized
//! phone number. With the `python` feature the crate also builds as the
//! `_connections_core` extension module.

pub mod config;
pub mod errors;
pub mod indexer;
pub mod models;
pub mod query;
pub mod store;

#[cfg(feature = "python")]
mod python;

pub use errors::{ConnectionsError, ConnectionsResult};
pub use models::{Contact, Experience, People, Person, PersonId, DEFAULT_MIN_OVERLAP_DAYS};
pub use query::colleagues::find_connected_person_ids;
pub use query::connections::{find_all_connections, ConnectionReport};
pub use query::phone_pals::find_phone_pals_ids;
pub use store::phone::normalize_phone_number;
pub use store::snapshot::Snapshot;
