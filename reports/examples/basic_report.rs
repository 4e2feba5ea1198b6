//! Basic example: render a report from hand-written results
//!
//! Run with: cargo run --example basic_report

use review_insight::{Highlighter, Polarity, ReviewResult};
use review_report::{ReportOptions, render_report};

fn main() {
    let results = vec![
        ReviewResult::new(
            "Absolutely love it, highly recommend to everyone",
            Polarity::Positive,
            0.9998,
        ),
        ReviewResult::new("Great value for the price", Polarity::Positive, 0.9987),
        ReviewResult::new(
            "Broke after two days, total waste of money",
            Polarity::Negative,
            0.9994,
        ),
        ReviewResult::new("Shipping was slow but it works", Polarity::Positive, 0.7312),
    ];

    let options = ReportOptions {
        title: "Example Review Report".into(),
        ..Default::default()
    };
    let html = render_report(&results, Highlighter::builtin(), &options);

    let output_path = "example_report.html";
    if let Err(err) = std::fs::write(output_path, &html) {
        eprintln!("Failed to write report: {err}");
        std::process::exit(1);
    }
    println!("Report written to: {output_path}");
    let cwd = std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    println!("Open in browser: file://{cwd}/{output_path}");
}
