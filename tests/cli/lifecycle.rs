//! Tests for the compose invocations behind each lifecycle command.

use crate::support::*;

#[tokio::test(flavor = "multi_thread")]
async fn test_start_runs_up_with_secrets() {
    let t = Test::new();
    let server = wrapped_backend(STANDARD_SECRETS).await;

    let output = t.run(&server.uri(), "start");

    assert_success(&output);
    assert_eq!(t.calls(), vec!["compose up -d"]);
    for (key, value) in STANDARD_SECRETS {
        assert_eq!(t.env_value(1, key).as_deref(), Some(*value), "{}", key);
    }
    assert_stdout_contains(&output, "loaded 3 secrets");
    assert_stdout_contains(&output, "starting services");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_stop_runs_down_without_fetching() {
    let t = Test::new();
    let server = untouched_backend().await;

    let output = t.run(&server.uri(), "stop");

    assert_success(&output);
    assert_eq!(t.calls(), vec!["compose down --remove-orphans"]);
    assert_eq!(t.env_value(1, "API_KEY"), None);
    assert!(!stdout(&output).contains("Fetching secrets"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_restart_recreates() {
    let t = Test::new();
    let server = wrapped_backend(STANDARD_SECRETS).await;

    let output = t.run(&server.uri(), "restart");

    assert_success(&output);
    assert_eq!(t.calls(), vec!["compose up -d --force-recreate"]);
    assert_eq!(t.env_value(1, "API_KEY").as_deref(), Some("sk-test-12345"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_pulls_then_recreates() {
    let t = Test::new();
    let server = wrapped_backend(STANDARD_SECRETS).await;

    let output = t.run(&server.uri(), "update");

    assert_success(&output);
    assert_eq!(
        t.calls(),
        vec!["compose pull", "compose up -d --force-recreate"]
    );
    // Pull runs with the host environment only.
    assert_eq!(t.env_value(1, "API_KEY"), None);
    assert_eq!(t.env_value(2, "API_KEY").as_deref(), Some("sk-test-12345"));

    let out = stdout(&output);
    let pull = out.find("pulling latest images").unwrap();
    let recreate = out.find("recreating services").unwrap();
    assert!(pull < recreate);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_stops_after_failed_pull() {
    let t = Test::new();
    t.fail_pull();
    let server = untouched_backend().await;

    let output = t.run(&server.uri(), "update");

    assert_failure(&output);
    assert_eq!(t.calls(), vec!["compose pull"]);
    assert_stderr_contains(&output, "exited with status 7");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_up_exits_non_zero() {
    let t = Test::new();
    t.fail_up();
    let server = wrapped_backend(STANDARD_SECRETS).await;

    let output = t.run(&server.uri(), "start");

    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(t.calls(), vec!["compose up -d"]);
    assert_stderr_contains(&output, "exited with status 8");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_secret_overrides_host_variable() {
    let t = Test::new();
    let server = wrapped_backend(&[("FOO", "1"), ("BAR", "2")]).await;

    let output = t
        .cmd_with_backend(&server.uri())
        .env("FOO", "old")
        .env("UNRELATED", "kept")
        .arg("start")
        .output()
        .unwrap();

    assert_success(&output);
    assert_eq!(t.env_value(1, "FOO").as_deref(), Some("1"));
    assert_eq!(t.env_value(1, "BAR").as_deref(), Some("2"));
    assert_eq!(t.env_value(1, "UNRELATED").as_deref(), Some("kept"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_connection_variables_reach_compose() {
    let t = Test::new();
    let server = wrapped_backend(&[("FOO", "1")]).await;

    let output = t.run(&server.uri(), "start");

    assert_success(&output);
    assert_eq!(t.env_value(1, "VAULT_PATH").as_deref(), Some(SECRET_PATH));
}
