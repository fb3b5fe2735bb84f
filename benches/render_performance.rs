use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use barkit_lib::markdown::MarkdownRenderer;
use barkit_lib::workspaces::WorkspaceReport;

/// A notification body touching every pipeline step
fn generate_markdown() -> String {
    let mut content = String::with_capacity(20_000);

    for i in 0..100 {
        content.push_str(&format!("## Update {i}\n\n"));
        content.push_str("Some **bold**, some *italic* and a `code span`.\n");
        content.push_str(&format!("* item {i}\n- another item\n1. numbered\n\n"));
        content.push_str("See [the docs](https://example.com/docs) or https://example.com/raw\n\n");
        if i % 10 == 0 {
            content.push_str("```\nlet x = 1;\n```\n\n");
        }
    }

    content
}

/// A report for a four monitor setup with ten workspaces each
fn generate_report() -> String {
    let mut report = String::new();
    for output in ["DP-1", "DP-2", "HDMI-A-1", "eDP-1"] {
        report.push_str(&format!("Output \"{output}\"\n"));
        for ws in 1..=10 {
            let marker = if ws == 3 { "*" } else { " " };
            report.push_str(&format!(" {marker} {ws}\n"));
        }
    }
    report
}

fn bench_markdown(c: &mut Criterion) {
    let content = generate_markdown();
    let renderer = MarkdownRenderer::new();

    c.bench_function("markdown render", |b| b.iter(|| renderer.render(Some(black_box(&content)))));
}

fn bench_workspaces(c: &mut Criterion) {
    let report = generate_report();

    c.bench_function("workspace report parse", |b| {
        b.iter(|| WorkspaceReport::parse(black_box(&report)).resolve("HDMI-A-1"))
    });
}

criterion_group!(benches, bench_markdown, bench_workspaces);
criterion_main!(benches);
