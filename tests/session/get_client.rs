use crate::common;
use zwiftpower_rs::{LoginFailure, SessionState};

#[tokio::test]
async fn first_call_logs_in() {
    let server = common::setup_server();
    let site = common::mock_site(&server);
    let mut client = common::client_for(&server);

    assert!(client.session().await.is_some());

    site.sso.assert();
    site.submit.assert();
    assert_eq!(client.state(), SessionState::Valid);
}

#[tokio::test]
async fn valid_session_is_reused_without_login() {
    let server = common::setup_server();
    let site = common::mock_site(&server);
    let mut client = common::client_for(&server);

    assert!(client.session().await.is_some());
    assert!(client.session().await.is_some());
    assert!(client.session().await.is_some());

    assert_eq!(site.sso.hits(), 1);
    assert_eq!(site.submit.hits(), 1);
}

#[tokio::test]
async fn stale_session_triggers_a_new_login() {
    let server = common::setup_server();
    let mut site = common::mock_site(&server);
    let mut client = common::client_for(&server);
    client.login().await.unwrap();

    site.root.delete();
    let _walled = common::mock_root(&server, "<html>Login Required</html>");

    assert!(client.session().await.is_some());
    assert_eq!(site.sso.hits(), 2);
    assert_eq!(client.state(), SessionState::Valid);
}

#[tokio::test]
async fn failed_login_yields_no_session() {
    let server = common::setup_server();
    let mut site = common::mock_site(&server);
    site.login_page.delete();
    let _page = common::mock_login_page(&server, "<html><body>No form today</body></html>");
    let mut client = common::client_for(&server);

    assert!(client.session().await.is_none());
    assert_eq!(client.last_login_failure(), Some(LoginFailure::FormNotFound));
    assert_eq!(client.state(), SessionState::Invalid);
}
