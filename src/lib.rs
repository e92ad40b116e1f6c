//! Landing page for "Not A Newsletter": validates an email address and
//! forwards valid signups to an Airtable-style records API.
//!
//! The signup widget itself (`controller::SignupForm`) knows nothing about
//! HTTP; `routes` drive it from form posts and keep its state in the session.

pub mod configuration;
pub mod controller;
pub mod domain;
pub mod records_client;
pub mod routes;
pub mod session_state;
pub mod startup;
pub mod telemetry;
pub mod theme;
pub mod utils;
