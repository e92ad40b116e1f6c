use serde::Deserialize;
use serde::Serialize;

use crate::domain::SubmissionRecord;
use crate::domain::SubscriberEmail;
use crate::records_client::RecordsClient;
use crate::records_client::TransportError;

pub const REJECTION_MESSAGE: &str = "Email seems incorrect, please try again.";
pub const SUCCESS_MESSAGE: &str = "Thank you for subscribing.";

/// Longest input kept as widget state. An address can be at most 254
/// characters (RFC 5321), and the state has to fit in a session cookie.
pub const MAX_INPUT_CHARS: usize = 254;

/// The message region of the widget. Exactly one state is active; every
/// submit replaces it, nothing accumulates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Idle,
    Rejected,
    Succeeded,
}

impl Status {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Status::Idle => None,
            Status::Rejected => Some(REJECTION_MESSAGE),
            Status::Succeeded => Some(SUCCESS_MESSAGE),
        }
    }
}

/// What a single submit attempt amounted to.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Input did not pass validation; nothing was sent
    Rejected,
    Succeeded,
    /// The write failed. The widget state is left exactly as it was before
    /// the submit; only the log records it.
    Failed(TransportError),
}

/// A write that has been begun but not yet resolved. Must be handed back to
/// `SignupForm::complete` with the result of the request.
#[must_use]
#[derive(Debug)]
pub struct PendingSubmission {
    record: SubmissionRecord,
}

impl PendingSubmission {
    pub fn record(&self) -> &SubmissionRecord { &self.record }
}

/// State of the signup widget for one page view: the raw input text and the
/// status message.
///
/// Submitting is split into `begin_submit` and `complete` so that an event
/// loop can keep handling input while a write is in flight; `submit` drives
/// both halves for callers that simply await the write. Repeated submits are
/// not de-duplicated.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SignupForm {
    email: String,
    status: Status,
    #[serde(skip)]
    in_flight: usize,
}

impl SignupForm {
    pub fn email(&self) -> &str { &self.email }

    pub fn status(&self) -> Status { self.status }

    /// True while at least one begun submission has not been completed.
    ///
    /// Only meaningful to callers driving `begin_submit`/`complete` from their
    /// own event loop; the count is not persisted, and the HTTP routes always
    /// resolve a submission before rendering.
    pub fn is_submitting(&self) -> bool { self.in_flight > 0 }

    pub fn on_input_change(
        &mut self,
        value: impl Into<String>,
    ) {
        self.email = value.into();
    }

    /// Reject input longer than `MAX_INPUT_CHARS` without sending anything,
    /// keeping only its first `MAX_INPUT_CHARS` characters as the input.
    /// Returns whether the input was rejected.
    pub fn reject_oversized_input(&mut self) -> bool {
        if self.email.chars().count() <= MAX_INPUT_CHARS {
            return false;
        }
        self.email = self.email.chars().take(MAX_INPUT_CHARS).collect();
        self.status = Status::Rejected;
        true
    }

    /// Validate the current input. On failure the status becomes `Rejected`
    /// and `None` is returned; the input is kept as typed.
    pub fn begin_submit(&mut self) -> Option<PendingSubmission> {
        match SubscriberEmail::parse(self.email.clone()) {
            Ok(email) => {
                self.in_flight += 1;
                Some(PendingSubmission {
                    record: email.into(),
                })
            }
            Err(e) => {
                tracing::info!(error.message = %e, "rejected signup input");
                self.status = Status::Rejected;
                None
            }
        }
    }

    /// Apply the result of the write started by `begin_submit`.
    pub fn complete(
        &mut self,
        pending: PendingSubmission,
        result: Result<(), TransportError>,
    ) -> SubmitOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(()) => {
                self.status = Status::Succeeded;
                self.email.clear();
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    subscriber_email = %pending.record.email.as_ref(),
                    "failed to save signup"
                );
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Validate, then issue exactly one write for a valid input.
    #[tracing::instrument(
        name = "Submitting signup",
        skip(self, client),
        fields(subscriber_email = %self.email)
    )]
    pub async fn submit(
        &mut self,
        client: &RecordsClient,
    ) -> SubmitOutcome {
        let Some(pending) = self.begin_submit() else {
            return SubmitOutcome::Rejected;
        };
        let result = client.create_record(pending.record()).await;
        self.complete(pending, result)
    }
}
