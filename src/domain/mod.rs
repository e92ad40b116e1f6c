mod submission_record;
mod subscriber_email;
// allow external `use` statements to skip `subscriber_email` etc
pub use submission_record::SubmissionRecord;
pub use subscriber_email::is_valid_email;
pub use subscriber_email::SubscriberEmail;
pub use subscriber_email::ValidationError;
