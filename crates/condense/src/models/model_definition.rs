// crates/condense/src/models/model_definition.rs

//! Summary styles, the summarize input and the persisted summary record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary returned (and stored) when the upstream succeeds without any text.
pub const NO_SUMMARY_PLACEHOLDER: &str = "No summary available.";

/// Summary style, selecting the instruction template sent upstream.
///
/// Resolved from the caller's free-form `summaryType` tag. Unknown tags are
/// not rejected; they fall back to [`SummaryStyle::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SummaryStyle {
  /// 2-3 sentences
  Brief,
  /// Comprehensive, covering all main points
  Detailed,
  /// 5-7 dash-prefixed key points
  Bullets,
  /// Plain "summarize the following"
  #[default]
  General,
}

impl SummaryStyle {
  /// Resolves a style from the caller's tag.
  ///
  /// Matching is exact and case-sensitive:
  /// - `Some("brief")` → `Brief`
  /// - `Some("Brief")` → `General`
  /// - `None` → `General`
  #[must_use]
  pub fn from_tag(tag: Option<&str>) -> Self {
    match tag {
      Some("brief") => Self::Brief,
      Some("detailed") => Self::Detailed,
      Some("bullets") => Self::Bullets,
      _ => Self::General,
    }
  }

  /// Returns the canonical tag (`"general"` for the fallback style).
  #[must_use]
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Brief => "brief",
      Self::Detailed => "detailed",
      Self::Bullets => "bullets",
      Self::General => "general",
    }
  }
}

impl std::fmt::Display for SummaryStyle {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Input of one summarize operation.
///
/// Both fields are optional at this level so that a missing `text` is reported
/// by the pipeline as a validation error rather than a decoding error.
#[derive(Debug, Clone, Default)]
pub struct SummarizeInput {
  /// Text to summarize
  pub text: Option<String>,
  /// Free-form style tag (`brief` | `detailed` | `bullets` | anything)
  pub summary_type: Option<String>,
}

impl SummarizeInput {
  /// Creates an input from text and an optional style tag.
  pub fn new(text: impl Into<String>, summary_type: Option<&str>) -> Self {
    Self {
      text: Some(text.into()),
      summary_type: summary_type.map(str::to_string),
    }
  }
}

/// One persisted summarization transcript.
///
/// Records are append-only: created once per successful request, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
  /// Original input text
  pub text: String,
  /// Style tag exactly as the caller sent it
  pub summary_type: Option<String>,
  /// Generated summary (or [`NO_SUMMARY_PLACEHOLDER`])
  pub summary: String,
  /// Creation time
  pub created_at: DateTime<Utc>,
}

impl SummaryRecord {
  /// Creates a record stamped with the current time.
  pub fn new(
    text: impl Into<String>,
    summary_type: Option<String>,
    summary: impl Into<String>,
  ) -> Self {
    Self {
      text: text.into(),
      summary_type,
      summary: summary.into(),
      created_at: Utc::now(),
    }
  }
}
