use analysis_limits::{AnalysisLimits, LimitsError};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use std::path::PathBuf;

/// Outcome of validating one limits file
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Result<AnalysisLimits, LimitsError>,
}

impl FileReport {
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }
}

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn format_sizes(&self, sizes: &[(String, i64)]) -> String {
        let mut output = String::new();
        for (literal, mib) in sizes {
            output.push_str(&format!("{} = {} MiB\n", literal, mib));
        }
        output
    }

    pub fn format_limits(&self, limits: &AnalysisLimits) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Limit").set_alignment(CellAlignment::Left),
            Cell::new("Configured").set_alignment(CellAlignment::Left),
            Cell::new("Effective").set_alignment(CellAlignment::Right),
        ]));

        table.add_row(Row::from(vec![
            Cell::new(analysis_limits::MODEL_MEMORY_LIMIT),
            Cell::new(configured(limits.model_memory_limit(), " MiB")),
            Cell::new(format!("{} MiB", limits.effective_model_memory_limit()))
                .set_alignment(CellAlignment::Right),
        ]));
        table.add_row(Row::from(vec![
            Cell::new(analysis_limits::CATEGORIZATION_EXAMPLES_LIMIT),
            Cell::new(configured(limits.categorization_examples_limit(), "")),
            Cell::new(limits.effective_categorization_examples_limit())
                .set_alignment(CellAlignment::Right),
        ]));

        format!("{}\n", table)
    }

    pub fn format_validation_report(&self, reports: &[FileReport]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("File").set_alignment(CellAlignment::Left),
            Cell::new("Status").set_alignment(CellAlignment::Left),
            Cell::new("Details").set_alignment(CellAlignment::Left),
        ]));

        for report in reports {
            let (status, details) = match &report.outcome {
                Ok(limits) => ("ok", limits.to_string()),
                Err(err) => ("invalid", err.to_string()),
            };
            table.add_row(Row::from(vec![
                Cell::new(report.path.display()),
                Cell::new(status),
                Cell::new(details),
            ]));
        }

        let invalid = reports.iter().filter(|r| !r.is_valid()).count();
        format!(
            "{}\n{} file(s) checked, {} invalid\n",
            table,
            reports.len(),
            invalid
        )
    }
}

fn configured(value: Option<u64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{}{}", v, unit),
        None => "(default)".to_string(),
    }
}
