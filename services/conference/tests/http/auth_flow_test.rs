use axum::http::StatusCode;

use podium_conference::domain::repository::UserRepository;
use podium_domain::role::Role;
use podium_session::cookie::{FLASH_COOKIE, SESSION_COOKIE};
use podium_testing::session::MockSession;

use crate::helpers::test_app;

fn location(response: &axum_test::TestResponse) -> String {
    response.header("location").to_str().unwrap().to_owned()
}

// ── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_answer_health_probes() {
    let app = test_app().await;
    assert_eq!(app.server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(app.server.get("/readyz").await.status_code(), StatusCode::OK);
}

// ── Login / logout ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_set_session_cookie_on_login() {
    let app = test_app().await;
    app.user("alice", Some(Role::Presenter.id()), Some("hunter2"))
        .await;

    let response = app
        .server
        .post("/login")
        .form(&[("name", "alice"), ("password", "hunter2")])
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let session = response.cookie(SESSION_COOKIE);
    let main = app.server.get("/main").add_cookie(session).await;
    assert_eq!(main.status_code(), StatusCode::OK);
    assert!(main.text().contains("Logged in as alice"));
}

#[tokio::test]
async fn should_flash_on_bad_credentials() {
    let app = test_app().await;
    app.user("alice", Some(Role::Presenter.id()), Some("hunter2"))
        .await;

    let response = app
        .server
        .post("/login")
        .form(&[("name", "alice"), ("password", "wrong")])
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    assert!(response.maybe_cookie(SESSION_COOKIE).is_none());

    let page = app
        .server
        .get("/login")
        .add_cookie(response.cookie(FLASH_COOKIE))
        .await;
    assert!(page.text().contains("Invalid username or password."));
}

#[tokio::test]
async fn should_clear_session_on_logout() {
    let app = test_app().await;
    let user = app.presenter("alice").await;

    let response = app
        .server
        .get("/logout")
        .add_cookie(MockSession::new(user.id).cookie())
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert_eq!(response.cookie(SESSION_COOKIE).value(), "");
}

#[tokio::test]
async fn should_redirect_logged_in_user_away_from_login() {
    let app = test_app().await;
    let user = app.presenter("alice").await;

    let response = app
        .server
        .get("/login")
        .add_cookie(MockSession::new(user.id).cookie())
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

// ── Session gate ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_redirect_anonymous_visitor_to_login() {
    let app = test_app().await;
    for path in ["/main", "/presenter/alice", "/admin", "/admin/schedule"] {
        let response = app.server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(location(&response), "/login", "{path}");
    }
}

#[tokio::test]
async fn should_ignore_cookie_signed_with_other_secret() {
    let app = test_app().await;
    let user = app.presenter("alice").await;

    let response = app
        .server
        .get("/main")
        .add_cookie(MockSession::new(user.id).cookie_with_secret("other-secret"))
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn should_end_session_of_deleted_user() {
    let app = test_app().await;
    let user = app.presenter("alice").await;
    app.state.user_repo().delete(user.id).await.unwrap();

    let response = app
        .server
        .get("/main")
        .add_cookie(MockSession::new(user.id).cookie())
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

// ── Register ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_presenter() {
    let app = test_app().await;

    let response = app
        .server
        .post("/register")
        .form(&[("name", "bob"), ("password", "pw")])
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    let user = app
        .state
        .user_repo()
        .find_by_name("bob")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.role(), Some(Role::Presenter));
}

#[tokio::test]
async fn should_flash_duplicate_registration() {
    let app = test_app().await;
    app.presenter("bob").await;

    let response = app
        .server
        .post("/register")
        .form(&[("name", "bob"), ("password", "pw")])
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/register");

    let page = app
        .server
        .get("/register")
        .add_cookie(response.cookie(FLASH_COOKIE))
        .await;
    assert!(page.text().contains("user already exists"));
}

#[tokio::test]
async fn should_flash_empty_password() {
    let app = test_app().await;

    let response = app
        .server
        .post("/register")
        .form(&[("name", "bob"), ("password", "")])
        .await;
    assert_eq!(location(&response), "/register");

    let page = app
        .server
        .get("/register")
        .add_cookie(response.cookie(FLASH_COOKIE))
        .await;
    assert!(page.text().contains("password must not be empty"));
}
