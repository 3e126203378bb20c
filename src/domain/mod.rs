mod company_name;
mod contact_name;
mod email_address;
mod follower_count;
mod lead;
mod lead_message;
mod new_lead;
mod newsletter_subscriber;
mod phone_number;
mod project_type;
mod social_handle;
mod text;
// allow external `use` statements to skip the submodule names
pub use company_name::CompanyName;
pub use contact_name::ContactName;
pub use email_address::EmailAddress;
pub use follower_count::FollowerCount;
pub use lead::Lead;
pub use lead_message::LeadMessage;
pub use new_lead::LeadRecord;
pub use new_lead::NewLead;
pub use new_lead::LEAD_STATUSES;
pub use new_lead::NEW_LEAD_STATUS;
pub use newsletter_subscriber::NewNewsletterSubscriber;
pub use newsletter_subscriber::NewsletterSubscriberRecord;
pub use newsletter_subscriber::ACTIVE_SUBSCRIBER_STATUS;
pub use phone_number::PhoneNumber;
pub use project_type::ProjectType;
pub use social_handle::parse_social_handle;
