//! Profile persistence: load at session start, save wholesale on explicit
//! request. Everything else in the crate takes the profile by reference.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::repositories::profile_repository::ProfileRepository;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::personality;
use crate::models::productivity::UserProductivityProfile;

pub struct ProfileService {
    db: DbPool,
}

impl ProfileService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Raw lookup; `None` when the user has never saved a profile.
    pub fn load(&self, user_id: &str) -> AppResult<Option<UserProductivityProfile>> {
        let row = self
            .db
            .with_connection(|conn| ProfileRepository::get(conn, user_id))?;

        match row {
            Some(row) => {
                let profile = serde_json::from_str(&row.profile_json).map_err(|err| {
                    warn!(
                        target: "app::profile",
                        %user_id,
                        error = %err,
                        "stored profile is not valid JSON"
                    );
                    err
                })?;
                Ok(Some(profile))
            }
            None => Ok(None),
        }
    }

    /// Profile to use for scoring: the stored one, or the balanced default
    /// for first-time users. An absent profile is not an error.
    pub fn get_or_default(&self, user_id: &str) -> AppResult<UserProductivityProfile> {
        match self.load(user_id)? {
            Some(profile) => Ok(profile),
            None => Ok(personality::default_profile(user_id)),
        }
    }

    /// Persist the whole profile, stamping id and timestamps.
    pub fn save(
        &self,
        user_id: &str,
        profile: &UserProductivityProfile,
    ) -> AppResult<UserProductivityProfile> {
        let now = Utc::now().to_rfc3339();

        let mut stored = profile.clone();
        stored.user_id = user_id.to_string();
        if stored.id.is_none() {
            stored.id = Some(Uuid::new_v4().to_string());
        }
        if stored.created_at.is_none() {
            stored.created_at = Some(now.clone());
        }
        stored.updated_at = Some(now);

        let payload = serde_json::to_string(&stored)?;
        self.db
            .with_connection(|conn| ProfileRepository::upsert(conn, user_id, &payload))?;

        info!(
            target: "app::profile",
            %user_id,
            template = %stored.based_on_template,
            "productivity profile saved"
        );

        Ok(stored)
    }

    /// Drop the stored profile and return the balanced default.
    pub fn reset_to_defaults(&self, user_id: &str) -> AppResult<UserProductivityProfile> {
        self.db
            .with_connection(|conn| ProfileRepository::delete(conn, user_id))?;

        info!(target: "app::profile", %user_id, "productivity profile reset to defaults");
        Ok(personality::default_profile(user_id))
    }
}
