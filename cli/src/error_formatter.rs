use analysis_limits::LimitsError;
use ariadne::{Color, Label, Report, ReportKind, Source};

const SIZE_LITERAL_HELP: &str =
    "expected a number followed by b, k, kb, m, mb, g, gb, t, tb, p or pb";

/// Format a LimitsError for the terminal, using Ariadne for literal errors
pub fn format_error(error: &LimitsError) -> String {
    match error {
        LimitsError::MalformedSizeLiteral { literal } => format_literal_error(error, literal),
        LimitsError::ValueTooLow { message, .. } => format!("Invalid limits: {}", message),
        LimitsError::Document { .. } => format!("Error: {}", error),
    }
}

fn format_literal_error(error: &LimitsError, literal: &str) -> String {
    let source_id = String::from("<literal>");
    let mut output = Vec::new();

    let report = Report::build(ReportKind::Error, &source_id, 0)
        .with_message(error.to_string())
        .with_label(
            Label::new((&source_id, 0..literal.chars().count()))
                .with_message("not a size literal")
                .with_color(Color::Red),
        )
        .with_help(SIZE_LITERAL_HELP);

    match report
        .finish()
        .write((&source_id, Source::from(literal)), &mut output)
    {
        Ok(_) => String::from_utf8_lossy(&output).to_string(),
        Err(_) => format!("Error: {}", error),
    }
}
