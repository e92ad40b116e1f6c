use crate::helpers::spawn_app;

#[tokio::test]
async fn health_check() {
    let app = spawn_app().await;

    let resp = app
        .api_client
        .get(format!("{}/health_check", app.addr))
        .send()
        .await
        .expect("execute request");
    assert!(resp.status().is_success());
    assert_eq!(resp.content_length().unwrap(), 0); // empty body
}
