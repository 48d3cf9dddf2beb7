/*!
 * Reporting functionality for code-assistant
 *
 * Renders the collection summary table shown before the estimate and
 * assembles the numbered response report printed at the end of a run.
 */

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::collector::CollectorStatistics;
use crate::dispatch::ResponsePart;
use crate::estimate::TokenEstimate;
use crate::utils::format_number;

/// Number of files listed before the table is cut down to the largest ones
const MAX_LISTED_FILES: usize = 15;

/// Information about a collected file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReportInfo {
    /// Path relative to the codebase root
    pub path: String,
    /// Number of lines in the file
    pub lines: usize,
    /// Number of characters in the file
    pub chars: usize,
}

/// Everything the summary table shows
#[derive(Debug, Clone)]
pub struct CollectionReport<'a> {
    /// Collector statistics
    pub statistics: &'a CollectorStatistics,
    /// Token estimate of the joined context
    pub estimate: TokenEstimate,
    /// Number of requests the context will take
    pub chunks: usize,
    /// Maximum chunk length in characters
    pub chunk_size: usize,
}

/// Report generator for collection results
pub struct Reporter;

impl Reporter {
    /// Print the summary to stdout
    pub fn print_summary(report: &CollectionReport<'_>) {
        println!("{}\n", Self::generate_summary(report));
    }

    /// Generate the files table followed by the summary table
    pub fn generate_summary(report: &CollectionReport<'_>) -> String {
        let details = &report.statistics.file_details;
        let files_title = if details.len() > MAX_LISTED_FILES {
            "📋  LARGEST FILES BY CHARACTER COUNT"
        } else {
            "📋  COLLECTED FILES"
        };

        format!(
            "{}\n{}\n\n{}\n{}",
            files_title,
            Self::create_files_table(report),
            "✅  COLLECTION SUMMARY",
            Self::create_summary_table(report)
        )
    }

    fn create_summary_table(report: &CollectionReport<'_>) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: &'static str,

            #[tabled(rename = "Value")]
            value: String,
        }

        let stats = report.statistics;
        let rows = vec![
            SummaryRow {
                key: "📄 Files Collected",
                value: format_number(stats.files_collected),
            },
            SummaryRow {
                key: "⚠️ Files Skipped",
                value: format_number(stats.skipped.len()),
            },
            SummaryRow {
                key: "📝 Total Lines",
                value: format_number(stats.total_lines),
            },
            SummaryRow {
                key: "🔤 Total Characters",
                value: format_number(stats.total_chars),
            },
            SummaryRow {
                key: "📦 Tokens",
                value: format!(
                    "{} ({})",
                    format_number(report.estimate.tokens),
                    report.estimate.model.model_id()
                ),
            },
            SummaryRow {
                key: "✂️ Chunks",
                value: format!(
                    "{} × ≤{} chars",
                    report.chunks,
                    format_number(report.chunk_size)
                ),
            },
            SummaryRow {
                key: "💵 Estimated Cost",
                value: report.estimate.formatted_cost(),
            },
        ];

        Self::style(Table::new(rows))
    }

    fn create_files_table(report: &CollectionReport<'_>) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Chars")]
            chars: String,
        }

        let mut files: Vec<&FileReportInfo> = report.statistics.file_details.iter().collect();
        if files.len() > MAX_LISTED_FILES {
            files.sort_by(|a, b| b.chars.cmp(&a.chars));
            files.truncate(10);
        }

        let rows: Vec<FileRow> = files
            .into_iter()
            .map(|info| FileRow {
                path: info.path.clone(),
                lines: format_number(info.lines),
                chars: format_number(info.chars),
            })
            .collect();

        Self::style(Table::new(rows))
    }

    fn style(mut table: Table) -> String {
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }
}

/// Join response parts into one report numbered from 1
///
/// Each part renders as `"{n}.: {text}\n\n"`; the result is trimmed.
pub fn assemble_responses(parts: &[ResponsePart]) -> String {
    parts
        .iter()
        .enumerate()
        .map(|(i, part)| format!("{}.: {}\n\n", i + 1, part.text))
        .collect::<String>()
        .trim()
        .to_string()
}
