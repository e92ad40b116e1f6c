use std::future::ready;
use std::future::Ready;

use actix_session::Session;
use actix_session::SessionExt;
use actix_session::SessionGetError;
use actix_session::SessionInsertError;
use actix_web::FromRequest;

use crate::controller::SignupForm;

/// Wrapper around `actix_session::Session`, so that the widget state is read
/// and written as a `SignupForm` instead of through string keys.
///
/// The session lives in a private cookie, so each browser keeps its own
/// widget state across the Post/Redirect/Get cycle.
pub struct TypedSession(Session);

impl TypedSession {
    const SIGNUP_FORM_KEY: &'static str = "signup_form";

    pub fn insert_signup_form(
        &self,
        form: &SignupForm,
    ) -> Result<(), SessionInsertError> {
        self.0.insert(Self::SIGNUP_FORM_KEY, form)
    }

    /// `None` for a fresh page view
    pub fn get_signup_form(&self) -> Result<Option<SignupForm>, SessionGetError> {
        self.0.get(Self::SIGNUP_FORM_KEY)
    }
}

impl FromRequest for TypedSession {
    // reuse the error of `Session`'s own `FromRequest` impl
    type Error = <Session as FromRequest>::Error;

    // no I/O is needed to get hold of the session, so the future is ready
    // immediately
    type Future = Ready<Result<TypedSession, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        _payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        ready(Ok(TypedSession(req.get_session())))
    }
}
