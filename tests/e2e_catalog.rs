use mockito::{Matcher, Server};
use pplatest::catalog::{Catalog, ProductPagesClient};

#[tokio::test]
async fn fetched_catalog_answers_latest_version() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/releases")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("product__shortname".into(), "openshift".into()),
            Matcher::UrlEncoded("fields".into(), "shortname,phase_display".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"shortname": "openshift-1.0", "phase_display": "Unsupported"},
                {"shortname": "openshift-4.9", "phase_display": "Maintenance"},
                {"shortname": "openshift-4.10.z", "phase_display": "CI / CD"},
                {"shortname": "openshift-4.11", "phase_display": "Planning / Development / Testing"},
                {"shortname": "openshift-4.11.z", "phase_display": "CI / CD"}
            ]"#,
        )
        .create_async()
        .await;

    let client = ProductPagesClient::new(&server.url());
    let releases = client.fetch_releases("openshift").await.unwrap();

    mock.assert_async().await;
    assert_eq!(releases.len(), 5);
    assert_eq!(releases.latest_version(false), Some("4.11".to_string()));
    assert_eq!(releases.latest_version(true), Some("4.11.z".to_string()));
}
