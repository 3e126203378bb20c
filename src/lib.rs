//! Heres Studio: the public site of an audiovisual production studio and the
//! internal panel where the studio reviews and exports its leads.
//!
//! Everything is rendered on the server. Leads and newsletter subscribers are
//! kept in a hosted table store, reached over HTTP (see `store_client`).

pub mod authentication;
pub mod configuration;
pub mod content;
pub mod domain;
pub mod leads;
pub mod routes;
pub mod session_state;
pub mod startup;
pub mod store_client;
pub mod telemetry;
pub mod templates;
pub mod utils;
