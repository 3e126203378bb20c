//! Client for the hosted table store (a PostgREST endpoint, as exposed by
//! Supabase). The store owns all persistence; this crate only reads leads and
//! inserts new rows.

use std::fmt::Display;
use std::time::Duration;

use reqwest::Client;
use reqwest::RequestBuilder;
use secrecy::ExposeSecret;
use secrecy::Secret;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const LEADS_TABLE: &str = "leads";
pub const NEWSLETTER_TABLE: &str = "newsletter_subscribers";

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Failed to reach the data store")]
    Unreachable(#[source] reqwest::Error),
    #[error("The data store rejected the request")]
    Rejected(#[source] reqwest::Error),
    #[error("The data store returned rows that could not be decoded")]
    Decode(#[source] reqwest::Error),
}

/// A single column condition.
///
/// As a standalone parameter (`column=op.value`) everything after the
/// operator is the value, so values are sent as-is. Inside `or=(...)` the
/// value is double-quoted when it contains one of PostgREST's reserved
/// characters, see `as_term`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Gte { column: &'static str, value: String },
    Lte { column: &'static str, value: String },
    Eq { column: &'static str, value: String },
}

const RESERVED: [char; 7] = [',', '.', ':', '(', ')', '"', ' '];

/// `"..."` with `"` and `\` escaped, when the value would otherwise break up
/// a logic tree
fn quote_term_value(value: &str) -> String {
    match value.contains(RESERVED) {
        false => value.to_string(),
        true => format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\"")),
    }
}

impl Predicate {
    pub fn gte(
        column: &'static str,
        value: impl Display,
    ) -> Self {
        Self::Gte {
            column,
            value: value.to_string(),
        }
    }

    pub fn lte(
        column: &'static str,
        value: impl Display,
    ) -> Self {
        Self::Lte {
            column,
            value: value.to_string(),
        }
    }

    pub fn eq(
        column: &'static str,
        value: impl Display,
    ) -> Self {
        Self::Eq {
            column,
            value: value.to_string(),
        }
    }

    fn parts(&self) -> (&'static str, &'static str, &str) {
        match self {
            Self::Gte { column, value } => (*column, "gte", value.as_str()),
            Self::Lte { column, value } => (*column, "lte", value.as_str()),
            Self::Eq { column, value } => (*column, "eq", value.as_str()),
        }
    }

    /// `column=op.value`, i.e. a standalone query parameter
    fn as_param(&self) -> (String, String) {
        let (column, op, value) = self.parts();
        (column.to_string(), format!("{op}.{value}"))
    }

    /// `column.op.value`, the form used inside `or=(...)`
    fn as_term(&self) -> String {
        let (column, op, value) = self.parts();
        format!("{column}.{op}.{}", quote_term_value(value))
    }
}

/// A table-scoped `select(*)` with chained predicates. Predicates added with
/// `filter` are AND-ed by the store; `or` adds one parameter that is true if
/// any of its terms is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    table: &'static str,
    params: Vec<(String, String)>,
}

impl Select {
    pub fn from(table: &'static str) -> Self {
        Self {
            table,
            params: vec![("select".to_string(), "*".to_string())],
        }
    }

    pub fn filter(
        mut self,
        predicate: Predicate,
    ) -> Self {
        self.params.push(predicate.as_param());
        self
    }

    pub fn gte(
        self,
        column: &'static str,
        value: impl Display,
    ) -> Self {
        self.filter(Predicate::gte(column, value))
    }

    pub fn lte(
        self,
        column: &'static str,
        value: impl Display,
    ) -> Self {
        self.filter(Predicate::lte(column, value))
    }

    /// No terms, no parameter (an empty `or=()` would be rejected)
    pub fn or(
        mut self,
        terms: impl IntoIterator<Item = Predicate>,
    ) -> Self {
        let terms: Vec<String> = terms.into_iter().map(|p| p.as_term()).collect();
        if !terms.is_empty() {
            self.params
                .push(("or".to_string(), format!("({})", terms.join(","))));
        }
        self
    }

    pub fn table(&self) -> &'static str { self.table }

    pub fn params(&self) -> &[(String, String)] { &self.params }
}

// establishing a HTTP connection is expensive; one `Client` is built at
// startup and shared by every worker through `web::Data`
pub struct StoreClient {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

impl StoreClient {
    pub fn new(
        base_url: String,
        api_key: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
            api_key,
        })
    }

    fn table_url(
        &self,
        table: &str,
    ) -> String {
        format!("{}/rest/v1/{table}", self.base_url.trim_end_matches('/'))
    }

    /// The anon key goes in both headers; the gateway checks `apikey`, the
    /// database role is derived from the bearer token
    fn authorized(
        &self,
        req: RequestBuilder,
    ) -> RequestBuilder {
        req.header("apikey", self.api_key.expose_secret())
            .bearer_auth(self.api_key.expose_secret())
    }

    /// Rows come back in the store's native order
    #[tracing::instrument(name = "Selecting rows from the store", skip_all, fields(table = query.table()))]
    pub async fn select<T: DeserializeOwned>(
        &self,
        query: &Select,
    ) -> Result<Vec<T>, StoreError> {
        let resp = self
            .authorized(self.http_client.get(self.table_url(query.table())))
            .query(query.params())
            .send()
            .await
            .map_err(StoreError::Unreachable)?
            .error_for_status()
            .map_err(StoreError::Rejected)?;
        let rows = resp.json::<Vec<T>>().await.map_err(StoreError::Decode)?;
        tracing::debug!(rows = rows.len(), "select returned");
        Ok(rows)
    }

    /// Insert rows without asking for them back
    #[tracing::instrument(name = "Inserting rows into the store", skip(self, records), fields(rows = records.len()))]
    pub async fn insert<T: Serialize>(
        &self,
        table: &str,
        records: &[T],
    ) -> Result<(), StoreError> {
        self.authorized(self.http_client.post(self.table_url(table)))
            .header("Prefer", "return=minimal")
            .json(records)
            .send()
            .await
            .map_err(StoreError::Unreachable)?
            .error_for_status()
            .map_err(StoreError::Rejected)?;
        Ok(())
    }
}
