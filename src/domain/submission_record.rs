use super::SubscriberEmail;

/// The value handed to the records API for a single signup. It is built at
/// submit time and dropped once the request resolves; nothing is kept or
/// reconciled with the response.
#[derive(Debug, Clone)]
pub struct SubmissionRecord {
    pub email: SubscriberEmail,
}

impl From<SubscriberEmail> for SubmissionRecord {
    fn from(email: SubscriberEmail) -> Self { Self { email } }
}
