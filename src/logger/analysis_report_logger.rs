use colored::{ColoredString, Colorize};
use tabled::builder::Builder;
use tabled::settings::{Style, Width};
use crate::config::constants::DEFAULT_TERMINAL_WIDTH;
use crate::enums::issue_severity::IssueSeverity;
use crate::enums::pipeline_platform::PipelinePlatform;
use crate::errors::DevOpsAiResult;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::pipeline_metadata::PipelineMetadata;

/// Renders an `AnalysisResult` for the terminal. Everything the model wrote
/// is untrusted and goes through `sanitize` before it is styled.
pub struct AnalysisReportLogger;

impl AnalysisReportLogger {

    pub fn print_table(result: &AnalysisResult, file_name: &str, platform: PipelinePlatform, show_yaml: bool) {
        println!("{}", Self::render_table(result, file_name, platform, show_yaml, terminal_width()));
    }

    pub fn print_json(result: &AnalysisResult) -> DevOpsAiResult<()> {
        println!("{}", Self::render_json(result)?);
        Ok(())
    }

    pub fn render_json(result: &AnalysisResult) -> DevOpsAiResult<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }

    pub fn render_table(result: &AnalysisResult, file_name: &str, platform: PipelinePlatform, show_yaml: bool, width: usize) -> String {
        let mut sections = Vec::new();

        sections.push(panel(
            "Pipeline Analysis".bold().blue(),
            &format!("{} | Platform: {}", sanitize(file_name).bold(), platform.as_str().blue()),
            width,
        ));

        if let Some(metadata) = &result.metadata {
            sections.push(panel("Metadata".bold(), &metadata_body(metadata), width));
        }

        sections.push(panel("Summary".bold(), &sanitize(&result.summary), width));

        if result.issues.is_empty() {
            sections.push("✓ No issues found!".green().to_string());
        } else {
            sections.push(format!("{}\n{}", "Issues Found".bold(), issues_table(result, width)));
        }

        if show_yaml {
            if let Some(yaml) = result.suggested_yaml() {
                sections.push(panel("Suggested YAML".bold().green(), &sanitize(yaml), width));
            }
        }

        sections.join("\n\n")
    }

    pub fn print_saved_yaml(path: &str) {
        println!("\n{} Suggested YAML saved to: {}", "✓".green(), path.blue());
    }
}

fn panel(title: ColoredString, body: &str, width: usize) -> String {
    let mut builder = Builder::default();
    builder.push_record([title.to_string()]);
    builder.push_record([body.to_string()]);

    let mut table = builder.build();
    table.with(Style::rounded()).with(Width::wrap(width));
    table.to_string()
}

fn metadata_body(metadata: &PipelineMetadata) -> String {
    let mut lines = vec![
        format!("Jobs: {}", metadata.job_count),
        format!("Steps: {}", metadata.step_count),
        format!("Has Tests: {}", yes_no(metadata.has_tests, false)),
        format!("Has Caching: {}", yes_no(metadata.has_caching, false)),
        format!("Security Scanning: {}", yes_no(metadata.has_security_scanning, true)),
        format!("Artifact Publishing: {}", yes_no(metadata.has_artifact_publishing, true)),
    ];

    if !metadata.detected_tools.is_empty() {
        let tools: Vec<String> = metadata.detected_tools.iter().map(|t| sanitize(t)).collect();
        lines.push(format!("Tools: {}", tools.join(", ")));
    }

    lines.join("\n")
}

// Missing security scanning or artifact publishing is a softer signal.
fn yes_no(value: bool, soft: bool) -> ColoredString {
    match (value, soft) {
        (true, _) => "Yes".green(),
        (false, false) => "No".red(),
        (false, true) => "No".yellow(),
    }
}

fn issues_table(result: &AnalysisResult, width: usize) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Severity", "Category", "Message", "Suggestion"]);

    for issue in result.issues_by_severity() {
        builder.push_record([
            severity_label(issue.severity).to_string(),
            sanitize(&issue.category).blue().to_string(),
            sanitize(&issue.message),
            issue.suggestion.as_deref().map_or_else(|| "-".to_string(), sanitize),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded()).with(Width::wrap(width));
    table.to_string()
}

fn severity_label(severity: IssueSeverity) -> ColoredString {
    match severity {
        IssueSeverity::Error => severity.as_str().red(),
        IssueSeverity::Warning => severity.as_str().yellow(),
        IssueSeverity::Info => severity.as_str().bright_black(),
    }
}

/// Drops ANSI escape sequences and control characters, keeping newlines.
/// Tabs become spaces so column widths stay predictable.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\x1b' => match chars.next() {
                // CSI: ESC [ params final-byte
                Some('[') => {
                    for next in chars.by_ref() {
                        if ('@'..='~').contains(&next) {
                            break;
                        }
                    }
                }
                // OSC, DCS, APC, PM: string ended by BEL or ST (ESC \)
                Some(']' | 'P' | '_' | '^') => {
                    while let Some(next) = chars.next() {
                        if next == '\x07' || (next == '\x1b' && chars.next_if_eq(&'\\').is_some()) {
                            break;
                        }
                    }
                }
                _ => {}
            },
            '\n' => out.push('\n'),
            '\t' => out.push_str("    "),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }

    out
}

fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| usize::from(w))
        .filter(|w| *w > 0)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}
