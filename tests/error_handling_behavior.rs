//! Behavior tests for how failures reach the user: backend details,
//! generic fallbacks, transport errors and a damaged session file.

use profitgrid_core::{ApiError, CoreError, HttpError, SessionError};
use profitgrid_tests::{login_body, quote_body, Dashboard, Harness, LoginForm, View};

#[tokio::test]
async fn login_failure_without_detail_uses_generic_message() {
    // Given: A backend that rejects the login with an empty body
    let harness = Harness::new();
    harness.http.push_json(500, "");
    let mut board = harness.dashboard();

    // When: The user logs in
    let result = board.submit_login(&LoginForm::new("ada", "secret1")).await;

    // Then: The generic message is shown and no session is stored
    assert!(matches!(
        result,
        Err(CoreError::Api(ApiError::Status { status: 500, .. }))
    ));
    assert_eq!(board.form_error(), Some("Login failed."));
    assert_eq!(board.view(), View::Login);
    assert!(!harness.session_path().exists());
}

#[tokio::test]
async fn missing_credentials_never_reach_the_backend() {
    let harness = Harness::new();
    let mut board = harness.dashboard();

    let result = board.submit_login(&LoginForm::new("ada", "")).await;

    assert!(matches!(result, Err(CoreError::Validation(_))));
    assert_eq!(board.form_error(), Some("Password is required."));
    assert!(harness.http.requests().is_empty());
}

#[tokio::test]
async fn unreachable_backend_shows_unexpected_error() {
    // Given: The backend cannot be reached
    let harness = Harness::new();
    harness
        .http
        .push_error(HttpError::new("connection refused"));
    let mut board = harness.dashboard();

    // When: The user searches
    board.search("AAPL").await;

    // Then: A generic message is shown instead of transport internals
    assert_eq!(board.analyzer().error(), Some("An unexpected error occurred."));
    assert!(board.analyzer().quote().is_none());
}

#[tokio::test]
async fn garbled_quote_body_is_reported_not_panicked() {
    let harness = Harness::new();
    harness.http.push_json(200, "<html>gateway</html>");
    let mut board = harness.dashboard();

    board.search("AAPL").await;

    assert_eq!(board.analyzer().error(), Some("An unexpected error occurred."));
}

#[tokio::test]
async fn new_search_clears_the_previous_error() {
    // Given: A failed search on screen
    let harness = Harness::new();
    harness
        .http
        .push_json(404, r#"{"detail":"Stock symbol 'ZZZZ' not found"}"#)
        .push_json(200, quote_body("AAPL", 189.84))
        .push_json(404, "")
        .push_json(404, "")
        .push_json(404, "");
    let mut board = harness.dashboard();
    board.search("ZZZZ").await;
    assert!(board.analyzer().error().is_some());

    // When: The next search succeeds
    board.search("AAPL").await;

    // Then: The old error is gone and the empty chart is reported as such
    assert_eq!(board.analyzer().error(), None);
    assert!(board.analyzer().quote().is_some());
    let chart = board.analyzer().chart().expect("chart for a loaded quote");
    assert!(chart.is_empty());
    assert_eq!(
        chart.render_text(),
        "No historical data available for charting."
    );
}

#[tokio::test]
async fn watchlist_requires_a_session() {
    // Given: A logged-out user
    let harness = Harness::new();
    let mut board = harness.dashboard();

    // When: They try to open and change the watchlist
    let opened = board.open_watchlist().await.map(|_| ());
    let added = board.add_to_watchlist("AAPL").await.map(|_| ());

    // Then: Both are refused locally
    assert!(matches!(opened, Err(CoreError::Api(ApiError::NotAuthenticated))));
    assert!(matches!(added, Err(CoreError::Api(ApiError::NotAuthenticated))));
    assert_eq!(board.watchlist_error(), Some("Not authenticated."));
    assert!(harness.http.requests().is_empty());
}

#[tokio::test]
async fn failed_removal_keeps_the_symbol_and_reports_it() {
    // Given: A logged-in user with AMD saved
    let harness = Harness::new();
    harness
        .http
        .push_json(200, login_body("ada", 7))
        .push_json(200, r#"[{"id":5,"symbol":"AMD","user_id":7}]"#)
        .push_json(500, "");
    let mut board = harness.dashboard();
    board
        .submit_login(&LoginForm::new("ada", "secret1"))
        .await
        .expect("login succeeds");
    board.open_watchlist().await.expect("watchlist loads");

    // When: The backend fails the delete
    let result = board.remove_from_watchlist("AMD").await;

    // Then: The row stays and the error names the symbol
    assert!(result.is_err());
    assert_eq!(board.watchlist().len(), 1);
    assert_eq!(board.watchlist_error(), Some("Failed to remove AMD."));
}

#[tokio::test]
async fn expired_token_detail_is_shown_on_the_watchlist() {
    let harness = Harness::new();
    harness
        .http
        .push_json(200, login_body("ada", 7))
        .push_json(401, r#"{"detail":"Could not validate credentials"}"#);
    let mut board = harness.dashboard();
    board
        .submit_login(&LoginForm::new("ada", "secret1"))
        .await
        .expect("login succeeds");

    let result = board.open_watchlist().await;

    assert!(result.is_err());
    assert_eq!(board.watchlist_error(), Some("Could not validate credentials"));
    assert_eq!(board.view(), View::Watchlist);
}

#[test]
fn corrupt_session_file_is_an_error_not_a_logout() {
    // Given: A session file that is not JSON
    let harness = Harness::new();
    let path = harness.session_path();
    std::fs::create_dir_all(path.parent().expect("parent dir")).expect("create dir");
    std::fs::write(&path, "{not json").expect("write session");

    // When: The dashboard starts
    let result = Dashboard::open(harness.api(), harness.store());

    // Then: The damage is reported
    assert!(matches!(result, Err(SessionError::Corrupt(_))));
}
