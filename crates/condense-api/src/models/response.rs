//! Response model definition

use serde::Serialize;

use condense::SummaryRecord;

/// Summarize response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarizeResponse {
  /// Generated summary
  pub summary: String,
}

impl From<SummaryRecord> for SummarizeResponse {
  fn from(record: SummaryRecord) -> Self {
    Self {
      summary: record.summary,
    }
  }
}
