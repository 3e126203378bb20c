use chrono::DateTime;
use chrono::Utc;
use chrono_tz::Tz;
use serde::Deserialize;
use serde::Deserializer;
use serde_aux::field_attributes::deserialize_default_from_null;

use super::FollowerCount;

/// A row of the `leads` table, as returned by the store. Leads are never
/// updated or deleted from here; the admin panel only reads and exports them.
///
/// Nullable text columns collapse to `""`, nullable counts to 0, so the rest
/// of the crate never deals with missing values.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Lead {
    /// Assigned by the store
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub company: String,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub phone: String,
    #[serde(default, deserialize_with = "deserialize_handle")]
    pub instagram: Option<String>,
    #[serde(default)]
    pub instagram_followers: FollowerCount,
    #[serde(default, deserialize_with = "deserialize_handle")]
    pub tiktok: Option<String>,
    #[serde(default)]
    pub tiktok_followers: FollowerCount,
    #[serde(default, deserialize_with = "deserialize_handle")]
    pub youtube: Option<String>,
    #[serde(default)]
    pub youtube_subscribers: FollowerCount,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub project_type: String,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub message: String,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub status: String,
    pub created_at: DateTime<Utc>,
}

fn deserialize_handle<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let handle = Option::<String>::deserialize(deserializer)?;
    Ok(handle.filter(|h| !h.trim().is_empty()))
}

impl Lead {
    /// Largest audience across the three platforms
    pub fn max_followers(&self) -> FollowerCount {
        self.instagram_followers
            .max(self.tiktok_followers)
            .max(self.youtube_subscribers)
    }

    /// Creation date in the studio's time zone, as shown in the panel and the
    /// export (`dd/mm/YYYY`)
    pub fn created_on(
        &self,
        tz: &Tz,
    ) -> String {
        self.created_at.with_timezone(tz).format("%d/%m/%Y").to_string()
    }
}
