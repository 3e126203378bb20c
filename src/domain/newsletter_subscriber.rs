use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::EmailAddress;

/// Status of a fresh newsletter subscription
pub const ACTIVE_SUBSCRIBER_STATUS: &str = "activo";

pub struct NewNewsletterSubscriber {
    pub email: EmailAddress,
}

/// Shape of an inserted `newsletter_subscribers` row
#[derive(Serialize)]
pub struct NewsletterSubscriberRecord<'a> {
    email: &'a str,
    created_at: DateTime<Utc>,
    status: &'static str,
}

impl NewNewsletterSubscriber {
    pub fn to_record(
        &self,
        created_at: DateTime<Utc>,
    ) -> NewsletterSubscriberRecord<'_> {
        NewsletterSubscriberRecord {
            email: self.email.as_ref(),
            created_at,
            status: ACTIVE_SUBSCRIBER_STATUS,
        }
    }
}
