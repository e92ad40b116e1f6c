use actix_web::web;
use actix_web::HttpResponse;
use serde::Deserialize;

use crate::controller::SubmitOutcome;
use crate::records_client::RecordsClient;
use crate::session_state::TypedSession;
use crate::utils::error_500;
use crate::utils::redirect;

#[derive(Deserialize)]
pub struct FormData {
    email: String,
}

/// `POST /subscriptions`
///
/// Runs one submit of the signup widget with the posted text as its input,
/// stores the resulting widget state in the session, and redirects back to
/// `/`, where the page is rendered from that state.
///
/// Input longer than `controller::MAX_INPUT_CHARS` is rejected outright, and
/// only its start is echoed back.
///
/// A failed write is not shown to the visitor: the widget comes back exactly
/// as it was, and the failure is only logged (see `SignupForm::complete`).
///
/// # Request example
///
/// ```sh
///     curl -v --data 'email=john@foo.com' http://127.0.0.1:8000/subscriptions
/// ```
#[tracing::instrument(
    name = "Handling signup form",
    skip(form, records_client, session),
    fields(outcome = tracing::field::Empty)
)]
pub async fn subscribe(
    form: web::Form<FormData>,
    records_client: web::Data<RecordsClient>,
    session: TypedSession,
) -> Result<HttpResponse, actix_web::Error> {
    let mut signup = session
        .get_signup_form()
        .map_err(error_500)?
        .unwrap_or_default();

    signup.on_input_change(form.0.email);
    // the state is stored in a cookie, so it must stay small
    let outcome = match signup.reject_oversized_input() {
        true => "rejected",
        false => match signup.submit(&records_client).await {
            SubmitOutcome::Rejected => "rejected",
            SubmitOutcome::Succeeded => "succeeded",
            SubmitOutcome::Failed(_) => "failed",
        },
    };
    tracing::Span::current().record("outcome", outcome);

    session.insert_signup_form(&signup).map_err(error_500)?;
    Ok(redirect("/"))
}
