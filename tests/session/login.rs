use crate::common;
use httpmock::Method::{GET, POST};
use std::time::Duration;
use url::Url;
use zwiftpower_rs::{Credentials, LoginFailure, SessionState, ZpClient, ZpError};

#[tokio::test]
async fn login_follows_sso_chain_to_events_page() {
    let server = common::setup_server();
    let site = common::mock_site(&server);
    let mut client = common::client_for(&server);

    client.login().await.unwrap();

    site.root.assert();
    site.sso.assert();
    site.login_page.assert();
    site.submit.assert();
    site.events.assert();
    assert!(client.has_session());
    assert_eq!(client.state(), SessionState::Valid);
    assert_eq!(client.last_login_failure(), None);
}

#[tokio::test]
async fn login_twice_yields_a_usable_session_both_times() {
    let server = common::setup_server();
    let site = common::mock_site(&server);
    let mut client = common::client_for(&server);

    client.login().await.unwrap();
    assert!(client.validate_current().await);

    client.login().await.unwrap();
    assert!(client.validate_current().await);

    assert_eq!(site.sso.hits(), 2);
    assert_eq!(site.submit.hits(), 2);
}

#[tokio::test]
async fn rejected_credentials_clear_a_previously_valid_session() {
    let server = common::setup_server();
    let mut site = common::mock_site(&server);
    let mut client = common::client_for(&server);

    client.login().await.unwrap();
    assert!(client.has_session());

    site.submit.delete();
    let rejected = common::mock_submit_rejected(&server);

    let err = client.login().await.unwrap_err();
    rejected.assert();

    assert!(matches!(err, ZpError::Auth(_)), "unexpected error: {err:?}");
    assert!(!client.has_session());
    assert_eq!(client.state(), SessionState::Invalid);
    assert_eq!(client.last_login_failure(), Some(LoginFailure::Rejected));
}

#[tokio::test]
async fn invalid_credentials_text_is_matched_case_insensitively() {
    let server = common::setup_server();
    let mut site = common::mock_site(&server);

    // Lands on the events page but the body still carries the rejection text.
    site.events.delete();
    let _events = server.mock(|when, then| {
        when.method(GET).path("/events.php");
        then.status(200)
            .body("<p>INVALID USERNAME OR PASSWORD.</p>");
    });

    let mut client = common::client_for(&server);
    let err = client.login().await.unwrap_err();

    match err {
        ZpError::Auth(msg) => assert!(msg.contains("invalid username or password"), "unexpected: {msg}"),
        other => panic!("expected Auth error, got {other:?}"),
    }
    assert!(!client.has_session());
}

#[tokio::test]
async fn missing_login_form_is_a_parse_error_not_a_rejection() {
    let server = common::setup_server();
    let mut site = common::mock_site(&server);
    site.login_page.delete();
    let page = common::mock_login_page(&server, "<html><body><p>Down for maintenance</p></body></html>");

    let mut client = common::client_for(&server);
    let err = client.login().await.unwrap_err();
    page.assert();

    match err {
        ZpError::LoginFormNotFound { url } => {
            assert!(url.ends_with("/auth/realms/zwift/login"), "unexpected url: {url}");
        }
        other => panic!("expected LoginFormNotFound, got {other:?}"),
    }
    assert_eq!(site.submit.hits(), 0, "credentials must not be posted without a form");
    assert!(!client.has_session());
    assert_eq!(client.last_login_failure(), Some(LoginFailure::FormNotFound));
}

#[tokio::test]
async fn unavailable_login_page_is_a_network_failure() {
    let server = common::setup_server();
    let mut site = common::mock_site(&server);
    site.login_page.delete();
    let page = server.mock(|when, then| {
        when.method(GET).path("/auth/realms/zwift/login");
        then.status(503).body("<html>Service Unavailable</html>");
    });

    let mut client = common::client_for(&server);
    let err = client.login().await.unwrap_err();
    page.assert();

    match err {
        ZpError::Status { status, url } => {
            assert_eq!(status, 503);
            assert!(url.ends_with("/auth/realms/zwift/login"), "unexpected url: {url}");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
    assert_eq!(site.submit.hits(), 0);
    assert!(!client.has_session());
    assert_eq!(client.last_login_failure(), Some(LoginFailure::Network));
}

#[tokio::test]
async fn server_error_on_credential_post_is_a_network_failure() {
    let server = common::setup_server();
    let mut site = common::mock_site(&server);
    site.submit.delete();
    let submit = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/realms/zwift/login-actions/authenticate");
        then.status(502).body("Bad Gateway");
    });

    let mut client = common::client_for(&server);
    let err = client.login().await.unwrap_err();
    submit.assert();

    assert!(
        matches!(err, ZpError::Status { status: 502, .. }),
        "unexpected error: {err:?}"
    );
    assert_eq!(client.last_login_failure(), Some(LoginFailure::Network));
    assert_eq!(client.state(), SessionState::Invalid);
}

#[tokio::test]
async fn landing_anywhere_but_events_is_rejected() {
    let server = common::setup_server();
    let mut site = common::mock_site(&server);
    site.submit.delete();
    let submit = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/realms/zwift/login-actions/authenticate");
        then.status(302).header("location", "/index.php");
    });
    let index = server.mock(|when, then| {
        when.method(GET).path("/index.php");
        then.status(200).body("<html>Home</html>");
    });

    let mut client = common::client_for(&server);
    let err = client.login().await.unwrap_err();
    submit.assert();
    index.assert();

    match err {
        ZpError::Auth(msg) => assert!(msg.contains("instead of the events page"), "unexpected: {msg}"),
        other => panic!("expected Auth error, got {other:?}"),
    }
    assert_eq!(site.events.hits(), 0);
}

#[tokio::test]
async fn stuck_on_identity_provider_is_rejected() {
    let server = common::setup_server();
    let mut site = common::mock_site(&server);
    site.submit.delete();
    let _submit = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/realms/zwift/login-actions/authenticate");
        then.status(200).body("<html>Please log in again</html>");
    });

    // Treat the mock server itself as the identity provider host.
    let mut client = common::builder_for(&server)
        .identity_host("127.0.0.1")
        .build()
        .unwrap();
    let err = client.login().await.unwrap_err();

    match err {
        ZpError::Auth(msg) => assert!(msg.contains("identity provider"), "unexpected: {msg}"),
        other => panic!("expected Auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn configured_user_agent_is_sent() {
    let server = common::setup_server();
    let mut site = common::mock_site(&server);
    site.root.delete();
    let ua_root = server.mock(|when, then| {
        when.method(GET).path("/").header("user-agent", "zp-test/1.0");
        then.status(200).body("<html>Welcome</html>");
    });

    let mut client = common::builder_for(&server)
        .user_agent("zp-test/1.0")
        .build()
        .unwrap();
    client.login().await.unwrap();

    ua_root.assert();
    site.submit.assert();
}

#[tokio::test]
async fn unreachable_site_is_reported_as_network_failure() {
    let mut client = ZpClient::builder()
        .base_url(Url::parse("http://127.0.0.1:9/").unwrap())
        .credentials(Credentials::new("rider", "pw"))
        .connect_timeout(Duration::from_secs(1))
        .build()
        .unwrap();

    let err = client.login().await.unwrap_err();
    assert!(matches!(err, ZpError::Http(_)), "unexpected error: {err:?}");
    assert!(!client.has_session());
    assert_eq!(client.last_login_failure(), Some(LoginFailure::Network));
}
