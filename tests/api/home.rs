use crate::helpers::input_value;
use crate::helpers::shown_message;
use crate::helpers::spawn_app;
use crate::helpers::ShownMessage;

#[tokio::test]
async fn fresh_page() {
    let app = spawn_app().await;

    let resp = app
        .api_client
        .get(format!("{}/", app.addr))
        .send()
        .await
        .expect("execute request");
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let html = resp.text().await.unwrap();
    assert!(html.contains("NEWSLETTER"));
    assert!(html.contains(r#"<form action="/subscriptions" method="post">"#));
    assert!(html.contains(r#"placeholder="Your email address""#));
    assert!(html.contains(&input_value("")));
    assert_eq!(shown_message(&html), ShownMessage::None);
}

#[tokio::test]
async fn state_is_per_browser() {
    let app = spawn_app().await;
    app.submit("not-an-email").await;
    assert_eq!(
        shown_message(&app.get_home_html().await),
        ShownMessage::Rejected
    );

    // no cookie, no state
    let html = reqwest::get(format!("{}/", app.addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(shown_message(&html), ShownMessage::None);
    assert!(html.contains(&input_value("")));
}
