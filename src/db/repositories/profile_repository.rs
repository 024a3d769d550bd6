use std::convert::TryFrom;

use rusqlite::{named_params, Connection, OptionalExtension, Row};

use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct ProfileRow {
    pub user_id: String,
    pub profile_json: String,
    pub updated_at: String,
}

impl TryFrom<&Row<'_>> for ProfileRow {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: row.get("user_id")?,
            profile_json: row.get("profile_json")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

/// Keyed store for serialized productivity profiles, one row per user.
pub struct ProfileRepository;

impl ProfileRepository {
    pub fn get(conn: &Connection, user_id: &str) -> AppResult<Option<ProfileRow>> {
        let mut stmt = conn.prepare(
            "SELECT user_id, profile_json, updated_at FROM user_profiles WHERE user_id = ?1",
        )?;

        let row = stmt
            .query_row([user_id], |row| ProfileRow::try_from(row))
            .optional()?;

        Ok(row)
    }

    pub fn upsert(conn: &Connection, user_id: &str, profile_json: &str) -> AppResult<()> {
        conn.execute(
            r#"
                INSERT INTO user_profiles (user_id, profile_json)
                VALUES (:user_id, :profile_json)
                ON CONFLICT(user_id) DO UPDATE SET
                    profile_json = excluded.profile_json,
                    updated_at = CURRENT_TIMESTAMP
            "#,
            named_params! {":user_id": user_id, ":profile_json": profile_json},
        )?;

        Ok(())
    }

    pub fn delete(conn: &Connection, user_id: &str) -> AppResult<()> {
        conn.execute("DELETE FROM user_profiles WHERE user_id = ?1", [user_id])?;
        Ok(())
    }
}
