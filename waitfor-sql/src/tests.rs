use super::*;

fn target() -> DbTarget {
    DbTarget {
        user: "root".to_string(),
        password: "mysecretpassword".to_string(),
        server: "127.0.0.1".to_string(),
        port: 1,
        database: "mydb".to_string(),
    }
}

#[test]
fn display_omits_password() {
    let target = target();
    assert_eq!(target.to_string(), "root@127.0.0.1:1/mydb");
}

#[test]
fn debug_redacts_password() {
    let text = format!("{:?}", target());
    assert!(text.contains("<redacted>"));
    assert!(!text.contains("mysecretpassword"));

    let probe = SqlProbe::new(target());
    assert!(!format!("{probe:?}").contains("mysecretpassword"));
}

#[test]
fn uses_default_timeout() {
    let probe = SqlProbe::new(target());
    assert_eq!(probe.timeout, DEFAULT_PROBE_TIMEOUT);
    assert_eq!(probe.target(), &target());
}

#[tokio::test]
async fn refused_connection_is_a_connect_error() {
    let probe = SqlProbe::new(target());
    let err = probe.ping().await.unwrap_err();
    assert!(matches!(err, ProbeError::Connect(_)), "{err:?}");
    assert!(err.to_string().starts_with("error opening connection"));
}
