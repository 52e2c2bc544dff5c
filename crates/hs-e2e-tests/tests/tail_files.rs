//! E2E tests for tailing real files through the agent executor.

mod helpers;

use pretty_assertions::assert_eq;
use serde_json::json;

use helpers::{TestHarness, lines_of};

#[tokio::test]
async fn e2e_window_eviction() {
    let h = TestHarness::new();
    let path = h.write_numbered_log("numbered.log", 100);

    let result = h.get_log_info(json!({"file": path, "lines": 5})).await;

    assert!(result.success, "{result:?}");
    assert_eq!(
        lines_of(&result),
        vec!["line 96", "line 97", "line 98", "line 99", "line 100"]
    );
    let data = result.data.unwrap();
    assert_eq!(data["line_count"], 5);
    assert_eq!(data["source"], "file");
    assert_eq!(data["file"], json!(path));
}

#[tokio::test]
async fn e2e_default_line_count() {
    let h = TestHarness::new();
    let path = h.write_numbered_log("numbered.log", 100);

    let result = h.get_log_info(json!({"file": path})).await;

    let lines = lines_of(&result);
    assert_eq!(lines.len(), 20);
    assert_eq!(lines[0], "line 81");
    assert_eq!(lines[19], "line 100");
}

#[tokio::test]
async fn e2e_short_file_returns_everything() {
    let h = TestHarness::new();
    let path = h.write_numbered_log("short.log", 3);

    let result = h.get_log_info(json!({"file": path, "lines": 50})).await;

    assert_eq!(lines_of(&result), vec!["line 1", "line 2", "line 3"]);
}

#[tokio::test]
async fn e2e_substring_filter_narrows_raw_window() {
    let h = TestHarness::new();
    let path = h.write_numbered_log("numbered.log", 100);

    // Lines 1, 10-19 and 100 contain "line 1"; only "line 100" is among the
    // last 10 raw lines, and older matches are not pulled in.
    let result = h
        .get_log_info(json!({"file": path, "lines": 10, "filter": "line 1"}))
        .await;

    assert_eq!(lines_of(&result), vec!["line 100"]);
    let data = result.data.unwrap();
    assert_eq!(data["line_count"], 1);
    assert_eq!(data["filter"], "line 1");
    assert_eq!(data["regex"], "");
}

#[tokio::test]
async fn e2e_regex_precedence() {
    let h = TestHarness::new();
    let lines: Vec<String> = vec![
        "x marks the spot".into(),
        "worker 17 started".into(),
        "x again".into(),
        "worker 18 started".into(),
    ];
    let path = h.write_log("mixed.log", &lines);

    let result = h
        .get_log_info(json!({"file": path, "filter": "x", "regex": "[0-9]+"}))
        .await;

    assert_eq!(
        lines_of(&result),
        vec!["worker 17 started", "worker 18 started"]
    );
    let data = result.data.unwrap();
    assert_eq!(data["filter"], "x");
    assert_eq!(data["regex"], "[0-9]+");
    assert_eq!(data["applied_filter"], "regex /[0-9]+/");
}

#[tokio::test]
async fn e2e_line_count_never_exceeds_limit() {
    let h = TestHarness::new();
    let path = h.write_numbered_log("numbered.log", 250);

    for limit in [1, 2, 7, 20, 249, 250, 1000] {
        let result = h.get_log_info(json!({"file": path, "lines": limit})).await;
        let data = result.data.unwrap();
        let count = data["line_count"].as_u64().unwrap() as usize;
        assert_eq!(count, data["lines"].as_array().unwrap().len());
        assert_eq!(count, limit.min(250));
    }
}

#[tokio::test]
async fn e2e_repeated_requests_are_byte_identical() {
    let h = TestHarness::new();
    let path = h.write_numbered_log("numbered.log", 40);
    let args = json!({"file": path, "lines": 8, "regex": "[02468]$"});

    let first = serde_json::to_string(&h.get_log_info(args.clone()).await).unwrap();
    let second = serde_json::to_string(&h.get_log_info(args).await).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn e2e_crlf_and_missing_final_newline() {
    let h = TestHarness::new();
    let path = h.dir.path().join("windows.log");
    std::fs::write(&path, "alpha\r\nbeta\r\ngamma").unwrap();

    let result = h
        .get_log_info(json!({"file": path.to_str().unwrap(), "lines": 2}))
        .await;

    assert_eq!(lines_of(&result), vec!["beta", "gamma"]);
}

#[tokio::test]
async fn e2e_existing_file_in_system_log_dir_is_read_directly() {
    let h = TestHarness::new();
    let path = h.system_log_path("app.log");
    std::fs::write(&path, "one\ntwo\n").unwrap();

    let result = h
        .get_log_info(json!({"file": path.to_str().unwrap()}))
        .await;

    assert!(result.success);
    assert_eq!(result.data.unwrap()["source"], "file");
}

#[tokio::test]
async fn e2e_stdio_round_trip() {
    let h = TestHarness::new();
    let path = h.write_numbered_log("numbered.log", 10);
    let input = format!(
        "{}\n{}\n",
        json!({"tool": "get_log_info", "arguments": {"file": path, "lines": "3"}}),
        json!({"tool": "list_tools"}),
    );

    let output = h.serve(&input).await;
    let responses: Vec<serde_json::Value> = output
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(responses.len(), 2);
    assert_eq!(
        responses[0]["data"]["lines"],
        json!(["line 8", "line 9", "line 10"])
    );
    assert_eq!(responses[1]["tools"][0]["name"], "get_log_info");
}
