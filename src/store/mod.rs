mod activities;
mod classes;
mod lessons;
mod users;

use rusqlite::Connection;
use uuid::Uuid;

use crate::db;
use crate::error::StoreError;
use crate::seed;

/// The portal's single source of truth.
///
/// One instance owns all five entity collections. Operations run to
/// completion on the calling thread; a `Store` shared across threads goes
/// behind a `Mutex`.
pub struct Store {
    pub(crate) conn: Connection,
}

impl Store {
    /// An empty store: schema only, no rows.
    pub fn open() -> Result<Store, StoreError> {
        Ok(Store {
            conn: db::open_db()?,
        })
    }

    /// An empty store loaded with the fixture dataset, equivalent to a
    /// fresh start of the portal.
    pub fn open_seeded() -> Result<Store, StoreError> {
        let store = Store::open()?;
        seed::apply(&store.conn)?;
        Ok(store)
    }
}

/// Store-assigned ids are opaque and never client-supplied.
pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}
