//! In-process data store for the school portal front end.
//!
//! Everything the portal UI calls lives on [`Store`]: users and roles,
//! classes and enrollment, lessons with attendance, activities and their
//! submissions. State is held in an in-memory SQLite database and dies with
//! the `Store` value; a fresh instance starts empty ([`Store::open`]) or
//! loaded with the fixture dataset ([`Store::open_seeded`]).

mod db;
mod error;
pub mod model;
mod seed;
mod store;

pub use error::StoreError;
pub use store::Store;
