use barkit_lib::markdown::markdown_to_html;
use barkit_lib::workspaces::{ParseResult, WorkspaceReport, parse};
use proptest::prelude::*;

/// Report lines mixing headers, workspace lines, markers and noise
fn report_lines() -> impl Strategy<Value = Vec<String>> {
    let line = prop_oneof![
        "Output \"[A-C]\"",
        "Output \"[A-C]?",
        " *\\* *[0-9]{1,12}",
        " *[0-9]{1,4}",
        "[a-z ]{0,10}",
    ];
    prop::collection::vec(line, 0..20)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn parse_never_panics(report in "(?s).{0,200}", screen in ".{0,12}") {
        let _ = parse(&report, &screen);
    }

    #[test]
    fn parse_structured_reports(lines in report_lines(), screen in "[A-D]") {
        let result = parse(&lines.join("\n"), &screen);
        let header = format!("Output \"{screen}\"");
        if !lines.contains(&header) {
            prop_assert_eq!(result, ParseResult::fallback());
        }
    }

    #[test]
    fn unknown_screen_always_falls_back(lines in prop::collection::vec("\\*?[0-9]{1,3}", 0..8)) {
        let report = format!("Output \"A\"\n{}", lines.join("\n"));
        prop_assert_eq!(parse(&report, "B"), ParseResult::fallback());
    }

    #[test]
    fn resolved_list_matches_report(numbers in prop::collection::vec(0u32..1000, 0..10)) {
        let body: Vec<String> = numbers.iter().map(u32::to_string).collect();
        let report = format!("Output \"A\"\n{}\n", body.join("\n"));
        let result = WorkspaceReport::parse(&report).resolve("A");
        prop_assert_eq!(result.workspace_list, numbers);
        prop_assert_eq!(result.current_workspace, 1);
    }

    #[test]
    fn render_never_emits_raw_input_tags(text in "(?s).{0,200}") {
        let html = markdown_to_html(&text);
        prop_assert!(!html.contains("<script"));
        prop_assert!(!html.contains("<img"));
    }

    #[test]
    fn render_is_empty_only_for_empty_input(text in "(?s).{1,100}") {
        prop_assert!(!markdown_to_html(&text).is_empty());
    }
}
