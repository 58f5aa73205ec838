//! Author model, stored in the `users` table

use serde::Serialize;
use sqlx::FromRow;

/// Author record from the users table
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Author {
    /// Auto-assigned author identifier
    pub id: i64,

    /// Display name
    pub name: String,
}
