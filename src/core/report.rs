use crate::domain::model::{BenchReport, ReportFormat};
use crate::utils::error::Result;

impl BenchReport {
    pub fn to_text(&self) -> String {
        let result = self
            .result
            .map_or_else(|| "none".to_string(), |value| value.to_string());
        format!(
            "{:.6} seconds: kadane/{} over {} integers x {} iterations ({:.2} ns/iteration), result {}",
            self.elapsed_secs,
            self.algorithm,
            self.input_size,
            self.iterations,
            self.ns_per_iteration,
            result
        )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renders the report for stdout; `None` means print nothing.
    pub fn render(&self, format: ReportFormat) -> Result<Option<String>> {
        match format {
            ReportFormat::None => Ok(None),
            ReportFormat::Text => Ok(Some(self.to_text())),
            ReportFormat::Json => self.to_json().map(Some),
        }
    }
}
