//! End-to-end CLI tests for review-insight.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn review_insight() -> Command {
    let mut cmd = cargo_bin_cmd!("review-insight");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &Path, endpoint: &str) -> PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(
        &path,
        format!(
            "[classifier]\nendpoint = \"{endpoint}\"\nmodel = \"sst2\"\ntimeout_secs = 5\n"
        ),
    )
    .unwrap();
    path
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        review_insight()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("analyze"))
            .stdout(predicate::str::contains("example"));
    }

    #[test]
    fn shows_version() {
        review_insight()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn example_prints_distinct_corpus_lines() {
        let output = review_insight()
            .args(["example", "--seed", "42"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!((3..=6).contains(&lines.len()));
        let mut unique = lines.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), lines.len());
    }

    #[test]
    fn rejects_invalid_config() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("bad.toml");
        std::fs::write(&config, "[examples]\nmin = 4\nmax = 1\n").unwrap();

        review_insight()
            .arg("--config")
            .arg(&config)
            .arg("example")
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid example range"));
    }
}

// ============================================
// Analyze Mode Tests
// ============================================

mod analyze_mode {
    use super::*;

    #[test]
    fn blank_input_needs_no_model() {
        let dir = TempDir::new().unwrap();
        // Unroutable endpoint: the test fails if the classifier is contacted.
        let config = write_config(dir.path(), "http://127.0.0.1:9/{model}");

        review_insight()
            .arg("--config")
            .arg(&config)
            .args(["analyze", "--export"])
            .arg(dir.path().join("out"))
            .write_stdin("\n\n  \n")
            .assert()
            .success()
            .stdout(predicate::str::contains("No reviews analyzed."));

        assert!(!dir.path().join("out/review_analysis_export.csv").exists());
    }

    #[test]
    fn unreachable_model_fails_cleanly() {
        let dir = TempDir::new().unwrap();
        let config = write_config(dir.path(), "http://127.0.0.1:9/{model}");

        review_insight()
            .arg("--config")
            .arg(&config)
            .arg("analyze")
            .write_stdin("I love this\n")
            .assert()
            .failure()
            .stderr(predicate::str::contains("sentiment model unavailable"));
    }

    #[tokio::test]
    async fn classifies_exports_and_reports() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/sst2"))
            .and(body_json(json!({ "inputs": ["warm up"] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "label": "POSITIVE", "score": 0.6 }
            ])))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/models/sst2"))
            .and(body_json(json!({ "inputs": ["I love this", "This is \"bad\""] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "label": "POSITIVE", "score": 0.99 },
                { "label": "NEGATIVE", "score": 0.85 }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let input = dir.path().join("reviews.txt");
        std::fs::write(&input, "I love this\n\nThis is \"bad\"\n").unwrap();
        let config = write_config(dir.path(), &format!("{}/models/{{model}}", server.uri()));
        let report = dir.path().join("report.html");

        review_insight()
            .arg("--config")
            .arg(&config)
            .arg("analyze")
            .arg(&input)
            .arg("--export")
            .arg(dir.path())
            .arg("--report")
            .arg(&report)
            .assert()
            .success()
            .stdout(predicate::str::contains("Positive Reviews (1)"))
            .stdout(predicate::str::contains("[0.85] This is \"bad\""));

        let csv = std::fs::read_to_string(dir.path().join("review_analysis_export.csv")).unwrap();
        assert_eq!(
            csv,
            "text,label,score\n\"I love this\",POSITIVE,0.99\n\"This is \"\"bad\"\"\",NEGATIVE,0.85\n"
        );

        let html = std::fs::read_to_string(&report).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Negative Reviews"));
    }

    #[tokio::test]
    async fn json_output_is_machine_readable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "label": "NEGATIVE", "score": 0.75 }
            ])))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let config = write_config(dir.path(), &format!("{}/{{model}}", server.uri()));

        let output = review_insight()
            .arg("--config")
            .arg(&config)
            .args(["analyze", "--json"])
            .write_stdin("Broke in a day\n")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["summary"]["negative"], 1);
        assert_eq!(value["results"][0]["text"], "Broke in a day");
        assert_eq!(value["results"][0]["label"], "NEGATIVE");
    }
}
