use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn leptos_error_message_names_its_source() {
    let err = ServerError::Leptos("missing output name".to_owned());
    assert_eq!(err.to_string(), "leptos configuration: missing output name");
}
