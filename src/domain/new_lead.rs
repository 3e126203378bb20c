use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::CompanyName;
use super::ContactName;
use super::EmailAddress;
use super::FollowerCount;
use super::LeadMessage;
use super::PhoneNumber;
use super::ProjectType;

/// Status every lead is created with. Anything else is set out-of-band by
/// the studio.
pub const NEW_LEAD_STATUS: &str = "nuevo";

/// Statuses the panel can filter on, in pipeline order
pub const LEAD_STATUSES: [&str; 3] = [NEW_LEAD_STATUS, "contactado", "cerrado"];

/// A contact form submission that passed validation. Only obtainable through
/// `TryFrom<ContactFormData>` (see `routes::contact`).
#[derive(Debug, Clone)]
pub struct NewLead {
    pub name: ContactName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub company: CompanyName,
    pub project_type: ProjectType,
    pub message: LeadMessage,
    pub instagram: Option<String>,
    pub instagram_followers: FollowerCount,
    pub tiktok: Option<String>,
    pub tiktok_followers: FollowerCount,
    pub youtube: Option<String>,
    pub youtube_subscribers: FollowerCount,
}

/// Shape of an inserted `leads` row
#[derive(Serialize)]
pub struct LeadRecord<'a> {
    company: &'a str,
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    instagram: Option<&'a str>,
    instagram_followers: FollowerCount,
    tiktok: Option<&'a str>,
    tiktok_followers: FollowerCount,
    youtube: Option<&'a str>,
    youtube_subscribers: FollowerCount,
    project_type: ProjectType,
    message: &'a str,
    status: &'static str,
    created_at: DateTime<Utc>,
}

impl NewLead {
    /// `created_at` is assigned here, by the server, never by the visitor
    pub fn to_record(
        &self,
        created_at: DateTime<Utc>,
    ) -> LeadRecord<'_> {
        LeadRecord {
            company: self.company.as_ref(),
            name: self.name.as_ref(),
            email: self.email.as_ref(),
            phone: self.phone.as_ref(),
            instagram: self.instagram.as_deref(),
            instagram_followers: self.instagram_followers,
            tiktok: self.tiktok.as_deref(),
            tiktok_followers: self.tiktok_followers,
            youtube: self.youtube.as_deref(),
            youtube_subscribers: self.youtube_subscribers,
            project_type: self.project_type,
            message: self.message.as_ref(),
            status: NEW_LEAD_STATUS,
            created_at,
        }
    }
}
