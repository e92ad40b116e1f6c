use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

use crate::controller::SignupForm;
use crate::controller::Status;
use crate::controller::MAX_INPUT_CHARS;
use crate::session_state::TypedSession;
use crate::theme;
use crate::utils::error_500;

/// `GET /`
///
/// Landing page with the signup widget in whatever state this browser left
/// it (see `subscribe`).
pub async fn home(session: TypedSession) -> Result<HttpResponse, actix_web::Error> {
    let form = session
        .get_signup_form()
        .map_err(error_500)?
        .unwrap_or_default();

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(landing_page(&form)))
}

/// Message region for the current status; empty when idle
fn status_html(form: &SignupForm) -> String {
    let Some(msg) = form.status().message() else {
        return String::new();
    };
    let class = match form.status() {
        Status::Rejected => "message rejected",
        _ => "message succeeded",
    };
    format!(r#"<div class="{class}" role="status">{msg}</div>"#)
}

pub fn landing_page(form: &SignupForm) -> String {
    // user input goes into an attribute; everything else is static
    let email = htmlescape::encode_attribute(form.email());
    let message = status_html(form);
    let keyframes = [
        theme::color_cycle_keyframes("accent-color", "color"),
        theme::color_cycle_keyframes("accent-background", "background-color"),
    ]
    .concat();
    let cycle = theme::cycle_seconds();
    let first = theme::PALETTE[0];
    let rejection = theme::REJECTION_COLOR;
    let max_len = MAX_INPUT_CHARS;

    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Not A Newsletter</title>
    <style>
{keyframes}
      body {{ margin: 0; background: #fff; font-family: sans-serif; }}
      main {{ max-width: 56rem; margin: 0 auto; padding: 5rem 1rem; }}
      h1 {{
        font-size: 6rem; line-height: 1; margin: 0 0 1rem; letter-spacing: -0.025em;
        color: {first}; animation: accent-color {cycle}s linear infinite;
      }}
      .columns {{ margin-top: 6rem; display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }}
      .topics p {{ font-size: 1.25rem; font-weight: 500; margin: 0 0 0.25rem; }}
      input {{
        width: 100%; background: transparent; border: 0; border-bottom: 2px solid #000;
        padding: 0.5rem; margin-bottom: 1.5rem;
      }}
      input:focus {{ outline: none; border-color: {first}; }}
      button {{
        padding: 0.75rem 2rem; border: 0; color: #fff; background-color: {first};
        animation: accent-background {cycle}s linear infinite;
      }}
      .message {{ margin-top: 1rem; font-weight: 500; }}
      .message.succeeded {{ color: {first}; animation: accent-color {cycle}s linear infinite; }}
      .message.rejected {{ color: {rejection}; }}
    </style>
  </head>
  <body>
    <main>
      <h1>NOT A<br />NEWSLETTER</h1>
      <div class="columns">
        <div class="topics">
          <p>Data Engineering,</p>
          <p>Machine Learning,</p>
          <p>User Psychology &amp; more</p>
          <p>No spam, ever, only cool stuff</p>
        </div>
        <div>
          <!-- the browser's own navigation is replaced by POST, then a 303 back here -->
          <form action="/subscriptions" method="post">
            <input type="text" name="email" value="{email}" placeholder="Your email address" maxlength="{max_len}" required />
            <button type="submit">Subscribe</button>
          </form>
          {message}
        </div>
      </div>
    </main>
  </body>
</html>
"#
    )
}
