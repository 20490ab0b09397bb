//! Sync operation reporting and statistics

use super::SyncResult;

/// Sync operation reporter
pub struct SyncReporter;

impl SyncReporter {
    /// Generate a summary report
    #[must_use]
    pub fn generate_summary(result: &SyncResult) -> String {
        let mut output = String::new();

        if result.dry_run {
            output.push_str("\n=== Sync Summary (dry run) ===\n");
        } else {
            output.push_str("\n=== Sync Summary ===\n");
        }
        output.push_str(&format!("Uploaded: {}\n", result.uploaded.len()));
        output.push_str(&format!("Written:  {}\n", result.written.len()));
        output.push_str(&format!("Deleted:  {}\n", result.deleted.len()));

        if !result.errors.is_empty() {
            output.push_str(&format!("\nErrors ({}):\n", result.errors.len()));
            for error in &result.errors {
                output.push_str(&format!("  - {error}\n"));
            }
        }

        output.push_str(&format!(
            "\nTotal operations: {}\n",
            result.total_operations()
        ));

        if result.is_success() {
            output.push_str("Status: ✓ Success\n");
        } else {
            output.push_str("Status: ✗ Completed with errors\n");
        }

        output
    }
}
