//! The generate pipeline: configuration, one remote call, rendering, one write.

use std::path::PathBuf;

use chrono::Utc;

use crate::app::AppContext;
use crate::domain::{
    AppError, Settings, build_principle_config, principle_file_name, render_markdown,
};
use crate::ports::{ClientCredentials, DataDesignerClientFactory, PrincipleStore};

/// Exactly one principle is generated per run.
pub const NUM_RECORDS: usize = 1;

/// Result of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// Where the document was written.
    pub path: PathBuf,
    /// The rendered Markdown.
    pub document: String,
}

/// Generate, render and store the principle described by `settings`.
///
/// The API key and the output file name are checked before any client exists. Nothing
/// is written unless rendering succeeds.
pub fn execute<F, S>(
    ctx: &AppContext<F, S>,
    settings: &Settings,
) -> Result<GenerateOutcome, AppError>
where
    F: DataDesignerClientFactory,
    S: PrincipleStore,
{
    let api_key = settings.require_api_key()?;
    let file_name = principle_file_name(&settings.topic)?;

    let config = build_principle_config(&settings.topic, &settings.model_alias);
    tracing::info!(
        topic = %settings.topic,
        model_alias = %settings.model_alias,
        columns = config.len(),
        "Generating principle"
    );

    let client = ctx.clients().create(ClientCredentials {
        base_url: settings.base_url.clone(),
        api_key: api_key.to_string(),
    })?;

    let record = client.preview(&config, NUM_RECORDS)?.into_first().ok_or_else(|| {
        AppError::Generation("No data generated by NeMo Data Designer preview".to_string())
    })?;

    let document = render_markdown(&record, Utc::now())?;
    let path = ctx.store().write_document(&file_name, &document)?;
    tracing::info!(path = %path.display(), "Principle document written");

    Ok(GenerateOutcome { path, document })
}
