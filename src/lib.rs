//! dapgen: generate data-architecture principle documents with NeMo Data Designer.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::{AppContext, commands};
use services::{FilesystemPrincipleStore, HttpDataDesignerClientFactory};

pub use app::commands::generate::GenerateOutcome;
pub use domain::{AppError, PromptPreview, RenderError, Settings};

/// Generate one principle and write it below `settings.output_dir`.
///
/// Fails with a configuration error before any network request when the API key is
/// missing.
pub fn generate(settings: &Settings) -> Result<GenerateOutcome, AppError> {
    let ctx = AppContext::new(
        HttpDataDesignerClientFactory,
        FilesystemPrincipleStore::new(settings.output_dir.clone()),
    );
    commands::generate::execute(&ctx, settings)
}

/// Render the prompts `generate` would send for `settings.topic`.
pub fn prompt_preview(settings: &Settings) -> Result<Vec<PromptPreview>, AppError> {
    commands::prompt_preview::execute(settings)
}
