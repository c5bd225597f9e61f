use std::io;

use super::*;

fn refused_target() -> DbTarget {
    DbTarget {
        user: "root".to_string(),
        password: "secret".to_string(),
        server: "127.0.0.1".to_string(),
        port: 1,
        database: "app".to_string(),
    }
}

#[tokio::test]
async fn database_failure_maps_to_fetch_error() {
    let mut fetcher = DatabaseFetcher::new(SqlProbe::new(refused_target()));
    let err = fetcher.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Probe(ProbeError::Connect(_))), "{err:?}");
    assert!(err.to_string().starts_with("error opening connection"));
    fetcher.release().await;
}

#[tokio::test]
async fn fetcher_routes_database_variant() {
    let mut fetcher = Fetcher::Database(DatabaseFetcher::new(SqlProbe::new(refused_target())));
    let err = fetcher.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Probe(_)), "{err:?}");
    fetcher.release().await;
}

#[test]
fn kube_error_keeps_selector_and_source() {
    let selector = ClusterSelector::new("vault", "app=vault");
    let source = kube::Error::ReadEvents(io::Error::other("connection refused"));

    let err = kube_error(WaitKind::JobComplete, &selector, source);

    let FetchError::Kube {
        kind,
        namespace,
        selector,
        source,
    } = &err
    else {
        panic!("expected a kube error, got {err:?}");
    };
    assert_eq!(*kind, WaitKind::JobComplete);
    assert_eq!(namespace, "vault");
    assert_eq!(selector, "app=vault");
    assert!(matches!(source, kube::Error::ReadEvents(_)));

    let text = err.to_string();
    assert!(text.contains("\"vault\""), "{text}");
    assert!(text.contains("\"app=vault\""), "{text}");
    assert!(text.contains("connection refused"), "{text}");
    assert!(std::error::Error::source(&err).is_some());
}
