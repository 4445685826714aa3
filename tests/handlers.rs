//! End-to-end checks that every route still triggers its flaw class.

use base64::{engine::general_purpose::STANDARD, Engine as _};

mod common;

#[tokio::test]
async fn test_users_single_record() {
    let fixture = common::start_fixture(true).await;
    let (status, body) = fixture.get("/users", &[("id", "1")]).await;

    assert_eq!(status, 200);
    assert_eq!(body, "[(1, 'alice', 'alice@example.com')]");
}

#[tokio::test]
async fn test_users_tautology_returns_extra_rows() {
    let fixture = common::start_fixture(true).await;
    let (status, body) = fixture.get("/users", &[("id", "1 OR 1=1")]).await;

    assert_eq!(status, 200);
    assert!(body.contains("'bob'"), "injected OR should widen the match: {body}");
    assert!(body.contains("'carol'"));
}

#[tokio::test]
async fn test_users_sql_error_is_rendered() {
    let fixture = common::start_fixture(true).await;
    let (status, body) = fixture.get("/users", &[]).await;

    assert_eq!(status, 500);
    assert!(body.contains("no such column: None"), "{body}");
}

#[tokio::test]
async fn test_system_reports_exit_status() {
    let fixture = common::start_fixture(true).await;
    let (status, body) = fixture.get("/system", &[("cmd", "echo test")]).await;

    assert_eq!(status, 200);
    assert_eq!(body, "Command executed with status: 0");
}

#[tokio::test]
async fn test_system_chains_commands() {
    let fixture = common::start_fixture(true).await;
    let marker = fixture.dir.path().join("chained");
    let cmd = format!("false; touch {}", marker.display());

    let (_, body) = fixture.get("/system", &[("cmd", &cmd)]).await;

    assert_eq!(body, "Command executed with status: 0");
    assert!(marker.exists());
}

#[tokio::test]
async fn test_pickle_payload_runs_on_decode() {
    let fixture = common::start_fixture(true).await;
    let marker = fixture.dir.path().join("unpickled");
    let payload = serde_json::json!({
        "__reduce__": ["os.system", [format!("touch {}", marker.display())]]
    });
    let data = STANDARD.encode(payload.to_string());

    let (status, body) = fixture.get("/pickle", &[("data", &data)]).await;

    assert_eq!(status, 200);
    assert_eq!(body, "0");
    assert!(marker.exists());

    // A second identical request repeats the side effect.
    std::fs::remove_file(&marker).unwrap();
    fixture.get("/pickle", &[("data", &data)]).await;
    assert!(marker.exists());
}

#[tokio::test]
async fn test_pickle_plain_object() {
    let fixture = common::start_fixture(true).await;
    let data = STANDARD.encode(r#"{"user": "bob", "admin": false}"#);

    let (_, body) = fixture.get("/pickle", &[("data", &data)]).await;
    assert_eq!(body, "{'user': 'bob', 'admin': False}");
}

#[tokio::test]
async fn test_pickle_bad_base64() {
    let fixture = common::start_fixture(true).await;
    let (status, body) = fixture.get("/pickle", &[("data", "***")]).await;

    assert_eq!(status, 500);
    assert!(body.starts_with("invalid base64 payload"), "{body}");
}

#[tokio::test]
async fn test_read_inside_base_dir() {
    let fixture = common::start_fixture(true).await;
    let (status, body) = fixture.get("/read", &[("file", "welcome.txt")]).await;

    assert_eq!(status, 200);
    assert_eq!(body, vuln_fixture::store::files::WELCOME_TEXT);
}

#[tokio::test]
async fn test_read_escapes_base_dir() {
    let fixture = common::start_fixture(true).await;
    std::fs::write(fixture.dir.path().join("outside.txt"), "outside the share").unwrap();

    let (status, body) = fixture.get("/read", &[("file", "../outside.txt")]).await;

    assert_eq!(status, 200);
    assert_eq!(body, "outside the share");
    assert!(!fixture.files_dir().join("outside.txt").exists());
}

#[tokio::test]
async fn test_read_missing_file_renders_error() {
    let fixture = common::start_fixture(true).await;
    let (status, body) = fixture.get("/read", &[("file", "nope.txt")]).await;

    assert_eq!(status, 500);
    assert!(body.contains("No such file"), "{body}");
}

#[tokio::test]
async fn test_page_reflects_script() {
    let fixture = common::start_fixture(true).await;
    let res = fixture
        .client
        .get(fixture.url("/page"))
        .query(&[("name", "<script>alert(1)</script>")])
        .send()
        .await
        .unwrap();

    let content_type = res.headers()["content-type"].to_str().unwrap().to_owned();
    let body = res.text().await.unwrap();

    assert!(content_type.starts_with("text/html"));
    assert!(body.contains("<h1>Hello, <script>alert(1)</script>!</h1>"));
}

#[tokio::test]
async fn test_page_default_name() {
    let fixture = common::start_fixture(true).await;
    let (_, body) = fixture.get("/page", &[]).await;
    assert!(body.contains("<h1>Hello, !</h1>"));
}

#[tokio::test]
async fn test_account_has_no_caller_check() {
    let fixture = common::start_fixture(true).await;
    let expected = "{'name': 'Regular User', 'balance': '$100', 'ssn': '987-65-4321'}";

    let (status, anonymous) = fixture.get("/account/2", &[]).await;
    let other_caller = fixture
        .client
        .get(fixture.url("/account/2"))
        .header("Authorization", "Bearer someone-else")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(status, 200);
    assert_eq!(anonymous, expected);
    assert_eq!(other_caller, expected);
}

#[tokio::test]
async fn test_account_not_found() {
    let fixture = common::start_fixture(true).await;
    let (status, body) = fixture.get("/account/3", &[]).await;

    assert_eq!(status, 200);
    assert_eq!(body, "Account not found");
}

#[tokio::test]
async fn test_divide_discloses_error() {
    let fixture = common::start_fixture(false).await;
    let (status, body) = fixture.get("/divide", &[("a", "1"), ("b", "0")]).await;

    assert_eq!(status, 200);
    assert_eq!(body, "An error occurred: integer division or modulo by zero");
}

#[tokio::test]
async fn test_divide_debug_discloses_internal_type() {
    let fixture = common::start_fixture(true).await;
    let (_, body) = fixture.get("/divide", &[("a", "x")]).await;

    assert!(body.starts_with("An error occurred: invalid literal for int() with base 10: 'x'"));
    assert!(body.contains("DivideError::InvalidLiteral"), "{body}");
}

#[tokio::test]
async fn test_divide_quotient_and_defaults() {
    let fixture = common::start_fixture(true).await;

    let (_, body) = fixture.get("/divide", &[("a", "7"), ("b", "2")]).await;
    assert_eq!(body, "Result: 3");

    let (_, body) = fixture.get("/divide", &[("a", "7")]).await;
    assert!(body.starts_with("An error occurred: integer division or modulo by zero"));
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let fixture = common::start_fixture(true).await;
    let first = fixture.get("/users", &[("id", "2")]).await;
    let second = fixture.get("/users", &[("id", "2")]).await;
    assert_eq!(first, second);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_slow_command_does_not_block_other_routes() {
    let fixture = std::sync::Arc::new(common::start_fixture(true).await);

    let mut sleepers = Vec::new();
    for _ in 0..2 {
        let fixture = fixture.clone();
        sleepers.push(tokio::spawn(async move {
            fixture.get("/system", &[("cmd", "sleep 3")]).await
        }));
    }
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    let started = std::time::Instant::now();
    let (status, body) = fixture.get("/page", &[("name", "x")]).await;
    let waited = started.elapsed();

    assert_eq!(status, 200);
    assert!(body.contains("Hello, x!"));
    assert!(waited < std::time::Duration::from_secs(1), "/page waited {waited:?}");

    for sleeper in sleepers {
        let (_, body) = sleeper.await.unwrap();
        assert_eq!(body, "Command executed with status: 0");
    }
}

#[tokio::test]
async fn test_repeated_params_use_first_value() {
    let fixture = common::start_fixture(false).await;

    let (status, body) = fixture
        .get("/divide", &[("a", "1"), ("a", "2"), ("b", "0")])
        .await;
    assert_eq!(status, 200);
    assert_eq!(body, "An error occurred: integer division or modulo by zero");

    let (status, body) = fixture.get("/page", &[("name", "a"), ("name", "b")]).await;
    assert_eq!(status, 200);
    assert!(body.contains("<h1>Hello, a!</h1>"));

    let (_, body) = fixture.get("/users", &[("id", "1"), ("id", "2")]).await;
    assert_eq!(body, "[(1, 'alice', 'alice@example.com')]");

    let (_, body) = fixture
        .get("/system", &[("cmd", "exit 4"), ("cmd", "true")])
        .await;
    assert_eq!(body, "Command executed with status: 4");

    let (_, body) = fixture
        .get("/read", &[("file", "welcome.txt"), ("file", "nope.txt")])
        .await;
    assert_eq!(body, vuln_fixture::store::files::WELCOME_TEXT);

    let first = STANDARD.encode("1");
    let (_, body) = fixture
        .get("/pickle", &[("data", &first), ("data", "***")])
        .await;
    assert_eq!(body, "1");
}
