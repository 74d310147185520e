use crate::domain::{
    AppError, PromptPreview, Settings, build_principle_config, render_prompt_preview,
};

/// Render the prompts a generation run would send, without contacting the service.
pub fn execute(settings: &Settings) -> Result<Vec<PromptPreview>, AppError> {
    let config = build_principle_config(&settings.topic, &settings.model_alias);
    render_prompt_preview(&config, &settings.topic)
}
