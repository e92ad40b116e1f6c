use std::fmt::Debug;
use std::time::Duration;

use reqwest::Client;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use secrecy::Secret;
use serde::Serialize;

use crate::domain::SubmissionRecord;
use crate::routes::error_chain_fmt;

/// Client for an Airtable-style records API. One instance is shared by the
/// whole app (see `startup::run`) so that connections are pooled.
pub struct RecordsClient {
    http_client: Client,
    /// `{base_url}/{base_id}/{table_name}`, with both path segments encoded
    url: String,
    api_key: Secret<String>,
}

/// Any failure of the outbound write. The response body, if any, is never
/// inspected.
#[derive(thiserror::Error)]
pub enum TransportError {
    #[error("Could not reach the records API")]
    Network(#[from] reqwest::Error),
    #[error("Records API responded with {0}")]
    Status(StatusCode),
}

impl Debug for TransportError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

// { "records": [ { "fields": { "email": "..." } } ] }
#[derive(Serialize)]
struct CreateRecordsRequest<'a> {
    records: [NewRecord<'a>; 1],
}

#[derive(Serialize)]
struct NewRecord<'a> {
    fields: RecordFields<'a>,
}

#[derive(Serialize)]
struct RecordFields<'a> {
    email: &'a str,
}

impl RecordsClient {
    /// `timeout` of `None` leaves reqwest's default in place (no timeout).
    /// Fails only if the TLS backend cannot be initialised.
    pub fn new(
        base_url: &str,
        base_id: &str,
        table_name: &str,
        api_key: Secret<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let url = format!(
            "{}/{}/{}",
            base_url.trim_end_matches('/'),
            urlencoding::encode(base_id),
            urlencoding::encode(table_name),
        );

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            url,
            api_key,
        })
    }

    pub fn url(&self) -> &str { &self.url }

    /// Write a single record. Any 2xx counts as success.
    #[tracing::instrument(name = "Creating record", skip_all, err(Debug))]
    pub async fn create_record(
        &self,
        record: &SubmissionRecord,
    ) -> Result<(), TransportError> {
        let body = CreateRecordsRequest {
            records: [NewRecord {
                fields: RecordFields {
                    email: record.email.as_ref(),
                },
            }],
        };

        // `json` also sets `Content-Type: application/json`
        let resp = self
            .http_client
            .post(&self.url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        match resp.status() {
            s if s.is_success() => Ok(()),
            s => Err(TransportError::Status(s)),
        }
    }
}
