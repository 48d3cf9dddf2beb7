/*!
 * Utility functions for code-assistant
 */

use std::path::Path;

/// Format a dollar amount with two decimals
pub fn format_cost(cost: f64) -> String {
    format!("${:.2}", cost)
}

/// Format a number with human-readable units
pub fn format_number(num: usize) -> String {
    if num >= 1_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1}K", num as f64 / 1_000.0)
    } else {
        num.to_string()
    }
}

/// Suffix of the final path component including the dot, e.g. ".py"
///
/// Dotfiles without a further extension (".bashrc") have no suffix.
pub fn file_suffix(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}
