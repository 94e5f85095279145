//! # locus-db-memory
//!
//! In-memory [`LocationStore`] backend for the Locus location service.
//!
//! The default backend for local development and tests. Records live in a
//! concurrent map keyed by identifier; the ordered scan sorts by name
//! (then identifier, for a stable order between equal names).
//!
//! [`LocationStore`]: locus_storage::LocationStore

mod store;

pub use store::InMemoryStore;
