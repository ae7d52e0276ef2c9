// Acceptance tests: end-to-end scoring of page snapshots and signal
// documents through the pagescore binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const ARTICLE: &str = r#"<!doctype html>
<html lang="en"><head>
<title>Ten lessons from a year of running our own blog</title>
<meta name="description" content="What we learned from publishing weekly for a year: the writing habits, tools and analytics that actually moved our readership numbers.">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta property="article:published_time" content="2024-04-20T10:00:00Z">
<script type="application/ld+json">{"@context":"https://schema.org","@type":"BlogPosting"}</script>
<style>body { font-family: Georgia, serif; }</style>
</head>
<body>
<nav><a href="/">Home</a><a href="/category/writing/">Writing</a><a href="/sitemap.xml">Sitemap</a></nav>
<nav class="breadcrumbs"><a href="/blog/">Blog</a></nav>
<form role="search" action="/search"><input type="search" name="q"></form>
<h1>Ten lessons from a year of running our own blog</h1>
<p>We published one post every week for a year. Our data shows that consistency matters more than length. According to our analytics, readers came back when we kept a schedule.</p>
<h2>Write for one reader</h2>
<p>I interviewed ten readers and surveyed two hundred more. The research was clear: short, focused posts with a single idea were shared the most.</p>
<ul><li>Pick one idea</li><li>Cut the rest</li><li>Link to sources</li></ul>
<h2>Measure what matters</h2>
<p>Have you checked which posts bring readers back? <strong>Subscribe</strong> to learn how we track it. It was a great year!</p>
<img src="/img/chart.png" alt="Readership chart">
<a class="share-btn" href="https://twitter.com/intent/tweet?url=https://example.com/blog/lessons">Share</a>
<a href="https://www.linkedin.com/company/example">LinkedIn</a>
</body></html>"#;

fn pagescore(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pagescore").expect("binary should exist");
    cmd.current_dir(workdir.path())
        .env("HOME", workdir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn workspace_with_article() -> TempDir {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("article.html"), ARTICLE).expect("article should write");
    dir
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("binary should run");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout should be json")
}

const CRITERIA: [&str; 9] = [
    "informativeness",
    "readability",
    "engagement",
    "uniqueness",
    "layout_quality",
    "discoverability",
    "seo_keywords",
    "ad_experience",
    "social_integration",
];

#[test]
fn analyze_scores_every_criterion_as_json() {
    let dir = workspace_with_article();
    let report = json_stdout(pagescore(&dir).args([
        "analyze",
        "article.html",
        "--url",
        "https://example.com/blog/lessons",
        "--date",
        "2024-06-01",
        "-f",
        "json",
    ]));

    assert_eq!(report["url"], "https://example.com/blog/lessons");
    assert_eq!(
        report["source_sha256"].as_str().map(str::len),
        Some(64),
        "fingerprint should be hex sha256"
    );
    let overall = report["overall_score"].as_f64().expect("overall score");
    assert!((0.0..=100.0).contains(&overall));

    for criterion in CRITERIA {
        let score = report["scores"][criterion].as_f64().expect("criterion score");
        assert!((0.0..=100.0).contains(&score), "{criterion} = {score}");
        assert_eq!(report["score_breakdowns"][criterion]["final_score"], score);
    }
    assert_eq!(report["score_breakdowns"]["ad_experience"]["final_score"], 100.0);
    assert_eq!(report["score_breakdowns"]["seo_keywords"]["days_since_published"], 42);

    let recommendations = report["recommendations"].as_array().expect("recommendations");
    for criterion in CRITERIA {
        assert!(
            recommendations.iter().any(|r| r["criterion"] == criterion),
            "no recommendation for {criterion}"
        );
    }
}

#[test]
fn analyze_is_repeatable() {
    let dir = workspace_with_article();
    let args = ["analyze", "article.html", "--date", "2024-06-01", "-f", "json"];
    let first = json_stdout(pagescore(&dir).args(args));
    let second = json_stdout(pagescore(&dir).args(args));
    assert_eq!(first["scores"], second["scores"]);
    assert_eq!(first["recommendations"], second["recommendations"]);
    assert_eq!(first["source_sha256"], second["source_sha256"]);
}

#[test]
fn analyze_renders_markdown_by_default() {
    let dir = workspace_with_article();
    pagescore(&dir)
        .args(["analyze", "article.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Page Quality Report"))
        .stdout(predicate::str::contains("| Criterion | Score | Weight | Contribution |"))
        .stdout(predicate::str::contains("## Recommendations"));
}

#[test]
fn signals_prints_extracted_record() {
    let dir = workspace_with_article();
    let signals = json_stdout(pagescore(&dir).args([
        "signals",
        "article.html",
        "--date",
        "2024-06-01",
    ]));
    assert_eq!(signals["content"]["header_count"], 3);
    assert_eq!(signals["layout"]["has_viewport"], true);
    assert_eq!(signals["discovery"]["has_search"], true);
    assert_eq!(signals["discovery"]["nav_count"], 2);
    assert!(signals["social"]["platforms"]
        .as_array()
        .expect("platforms")
        .contains(&Value::from("linkedin")));
}

#[test]
fn score_reads_external_signals_document() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("signals.json"),
        r#"{"content": {"word_count": 1500, "header_count": 10, "image_count": 6,
            "link_count": 15, "citation_count": 8}}"#,
    )
    .expect("signals should write");

    let report = json_stdout(pagescore(&dir).args(["score", "signals.json", "-f", "json"]));
    assert_eq!(report["scores"]["informativeness"], 63.0);
    assert_eq!(report["scores"]["ad_experience"], 0.0);
    let overall = report["overall_score"].as_f64().expect("overall score");
    assert!((overall - 12.6).abs() < 1e-9);
}

#[test]
fn extreme_counts_degrade_instead_of_aborting() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("signals.json"),
        r#"{"content": {"image_count": 4294967295, "link_count": 1},
            "ads": {"ad_types": {"popups": 4294967295, "display": 1}}}"#,
    )
    .expect("signals should write");

    let report = json_stdout(pagescore(&dir).args(["score", "signals.json", "-f", "json"]));
    assert_eq!(report["scores"]["ad_experience"], 0.0);
    assert_eq!(report["score_breakdowns"]["informativeness"]["media_score"], 20.0);
    let overall = report["overall_score"].as_f64().expect("overall score");
    assert!((0.0..=100.0).contains(&overall));
}

#[test]
fn fail_under_sets_exit_code_one() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("signals.json"), "{}").expect("signals should write");

    pagescore(&dir)
        .args(["score", "signals.json", "--fail-under", "50"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("# Page Quality Report"))
        .stderr(predicate::str::contains("below --fail-under"));
}

#[test]
fn malformed_signals_document_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("signals.json"), "{ not json").expect("signals should write");

    pagescore(&dir)
        .args(["score", "signals.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid signals document"));
}

#[test]
fn configured_weights_change_the_overall_score() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("signals.json"),
        r#"{"content": {"word_count": 1500, "header_count": 10, "image_count": 6,
            "link_count": 15, "citation_count": 8}}"#,
    )
    .expect("signals should write");
    fs::write(
        dir.path().join("pagescore.toml"),
        r#"
[weights]
informativeness = 0.60
readability = 0.05
engagement = 0.05
uniqueness = 0.05
layout_quality = 0.05
discoverability = 0.05
seo_keywords = 0.05
ad_experience = 0.05
social_integration = 0.05
"#,
    )
    .expect("config should write");

    let report = json_stdout(pagescore(&dir).args(["score", "signals.json", "-f", "json"]));
    let overall = report["overall_score"].as_f64().expect("overall score");
    assert!((overall - 37.8).abs() < 1e-9);
}
