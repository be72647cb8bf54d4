//! Prompt construction
pub mod prompt_builder;

pub use prompt_builder::{build_prompt, instruction_for};
