//! Repository trait implementations for the SQLite database.

use crate::{Db, types::DateTime};
use sealbid_core::ports::Repository;

mod bid;

impl Repository for Db {
    type Error = sqlx::Error;
    type DateTime = DateTime;
}
