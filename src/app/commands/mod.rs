pub mod generate;
pub mod prompt_preview;
