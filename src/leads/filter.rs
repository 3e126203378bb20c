use chrono::DateTime;
use chrono::Duration;
use chrono::NaiveTime;
use chrono::SecondsFormat;
use chrono::TimeZone;
use chrono::Utc;
use chrono_tz::Tz;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::FollowerCount;
use crate::domain::Lead;
use crate::domain::LEAD_STATUSES;
use crate::store_client::Predicate;
use crate::store_client::Select;
use crate::store_client::LEADS_TABLE;

/// How far back the panel looks, relative to the time of the query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFilter {
    #[default]
    All,
    /// Since local midnight of the current day
    Today,
    /// The last 7 days
    Week,
    /// The last 30 days
    Month,
}

/// First instant of `now`'s local day. Where the clocks skip midnight, the
/// day starts an hour later.
fn start_of_day(now: DateTime<Tz>) -> DateTime<Tz> {
    let tz = now.timezone();
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(midnight + Duration::hours(1))).earliest())
        .unwrap_or(now)
}

impl DateFilter {
    pub const ALL: [DateFilter; 4] = [Self::All, Self::Today, Self::Week, Self::Month];

    /// Query string value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Todas las fechas",
            Self::Today => "Hoy",
            Self::Week => "Última semana",
            Self::Month => "Último mes",
        }
    }

    pub fn cutoff(
        self,
        now: DateTime<Tz>,
    ) -> Option<DateTime<Tz>> {
        match self {
            Self::All => None,
            Self::Today => Some(start_of_day(now)),
            Self::Week => Some(now - Duration::days(7)),
            Self::Month => Some(now - Duration::days(30)),
        }
    }
}

/// Timestamp compared against `created_at` by the store, with the local
/// offset (`2026-10-16T00:00:00-03:00`)
fn remote_timestamp(at: DateTime<Tz>) -> String { at.to_rfc3339_opts(SecondsFormat::AutoSi, true) }

/// The panel's query string, as the browser sends it. Every field may be
/// missing or blank.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeadFilterParams {
    #[serde(default)]
    pub min_followers: String,
    #[serde(default)]
    pub date: DateFilter,
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub status: String,
    /// The instant the panel was rendered at. Carried by the export link so
    /// the spreadsheet holds the same rows as the table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<DateTime<Utc>>,
}

/// Criteria for the leads shown in the admin panel. All criteria are
/// independent and AND-ed; each has a neutral value that disables it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeadFilter {
    /// 0 disables
    pub min_followers: u64,
    pub date: DateFilter,
    /// Trimmed; empty disables
    pub search: String,
    /// One of `LEAD_STATUSES`; `None` disables
    pub status: Option<String>,
    /// Leads created later are left out, and the date windows are measured
    /// from here instead of from the current time
    pub as_of: Option<DateTime<Utc>>,
}

impl TryFrom<LeadFilterParams> for LeadFilter {
    type Error = String;
    fn try_from(value: LeadFilterParams) -> Result<Self, Self::Error> {
        let min_followers = FollowerCount::parse(&value.min_followers)?.get();
        let status = match value.status.trim() {
            "" | "todos" => None,
            s if LEAD_STATUSES.contains(&s) => Some(s.to_string()),
            s => return Err(format!("{s:?} is not a lead status")),
        };
        Ok(Self {
            min_followers,
            date: value.date,
            search: value.q.trim().to_string(),
            status,
            as_of: value.as_of,
        })
    }
}

impl LeadFilter {
    /// `as_of` if pinned, else `now`, in `now`'s time zone
    fn reference_time(
        &self,
        now: DateTime<Tz>,
    ) -> DateTime<Tz> {
        match self.as_of {
            Some(as_of) => as_of.with_timezone(&now.timezone()),
            None => now,
        }
    }

    /// The part of the filter the store can evaluate. Search stays local,
    /// see `matches`.
    pub fn to_select(
        &self,
        now: DateTime<Tz>,
    ) -> Select {
        let reference = self.reference_time(now);
        let mut select = Select::from(LEADS_TABLE);
        if self.min_followers > 0 {
            let t = self.min_followers;
            select = select.or([
                Predicate::gte("instagram_followers", t),
                Predicate::gte("tiktok_followers", t),
                Predicate::gte("youtube_subscribers", t),
            ]);
        }
        if let Some(cutoff) = self.date.cutoff(reference) {
            select = select.gte("created_at", remote_timestamp(cutoff));
        }
        if self.as_of.is_some() {
            select = select.lte("created_at", remote_timestamp(reference));
        }
        if let Some(status) = &self.status {
            select = select.filter(Predicate::eq("status", status));
        }
        select
    }

    pub(crate) fn passes_followers(
        &self,
        lead: &Lead,
    ) -> bool {
        self.min_followers == 0 || lead.max_followers().get() >= self.min_followers
    }

    pub(crate) fn passes_date(
        &self,
        lead: &Lead,
        now: DateTime<Tz>,
    ) -> bool {
        let reference = self.reference_time(now);
        let after_cutoff = match self.date.cutoff(reference) {
            None => true,
            Some(cutoff) => lead.created_at >= cutoff.with_timezone(&Utc),
        };
        let before_as_of = match self.as_of {
            None => true,
            Some(as_of) => lead.created_at <= as_of,
        };
        after_cutoff && before_as_of
    }

    /// `email` is deliberately not a search field
    pub(crate) fn passes_search(
        &self,
        lead: &Lead,
    ) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        [
            Some(lead.name.as_str()),
            Some(lead.company.as_str()),
            lead.instagram.as_deref(),
            lead.tiktok.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&term))
    }

    pub(crate) fn passes_status(
        &self,
        lead: &Lead,
    ) -> bool {
        match &self.status {
            None => true,
            Some(status) => &lead.status == status,
        }
    }

    pub fn matches(
        &self,
        lead: &Lead,
        now: DateTime<Tz>,
    ) -> bool {
        self.passes_followers(lead)
            && self.passes_date(lead, now)
            && self.passes_search(lead)
            && self.passes_status(lead)
    }

    /// Keep the leads that match, in their original order
    pub fn apply(
        &self,
        leads: Vec<Lead>,
        now: DateTime<Tz>,
    ) -> Vec<Lead> {
        leads
            .into_iter()
            .filter(|lead| self.matches(lead, now))
            .collect()
    }
}
