//! Instruction templates per summary style.

use crate::models::SummaryStyle;

const BRIEF_INSTRUCTION: &str =
  "Provide a brief summary of the following article in 2-3 sentences:";

const DETAILED_INSTRUCTION: &str = "Provide a detailed summary of the following article, \
   covering all main points and key details:";

const BULLETS_INSTRUCTION: &str = "Summarize the following article in 5-7 key points. \
   Format each point as a line starting with \"- \" (dash followed by a space). \
   Do not use asterisks or other bullet symbols, only use the dash. \
   Keep each point concise and focused on a single key insight from the article:";

const GENERAL_INSTRUCTION: &str = "Summarize the following article:";

/// Returns the instruction line for a style.
#[must_use]
pub fn instruction_for(style: SummaryStyle) -> &'static str {
  match style {
    SummaryStyle::Brief => BRIEF_INSTRUCTION,
    SummaryStyle::Detailed => DETAILED_INSTRUCTION,
    SummaryStyle::Bullets => BULLETS_INSTRUCTION,
    SummaryStyle::General => GENERAL_INSTRUCTION,
  }
}

/// Builds the prompt sent upstream: the instruction, a blank line, then the
/// text verbatim.
#[must_use]
pub fn build_prompt(style: SummaryStyle, text: &str) -> String {
  let instruction = instruction_for(style);
  let mut prompt = String::with_capacity(instruction.len() + 2 + text.len());
  prompt.push_str(instruction);
  prompt.push_str("\n\n");
  prompt.push_str(text);
  prompt
}
