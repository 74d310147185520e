//! Local rendering of prompt templates for preview.

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::AppError;
use crate::domain::column::DataDesignerConfig;
use crate::domain::principle::PRINCIPLE_NAME;

/// A generated column's prompt with the topic filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPreview {
    pub column: String,
    pub prompt: String,
}

/// Render every prompt in `config` the way the service would see it for `topic`.
///
/// Fails if a prompt references anything other than `principle_name`.
pub fn render_prompt_preview(
    config: &DataDesignerConfig,
    topic: &str,
) -> Result<Vec<PromptPreview>, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    let ctx = context! { principle_name => topic };

    config
        .columns()
        .iter()
        .filter_map(|column| column.prompt().map(|prompt| (column.name(), prompt)))
        .map(|(name, prompt)| -> Result<PromptPreview, AppError> {
            let rendered = env.render_str(prompt, &ctx).map_err(|e| {
                AppError::config_error(format!("Failed to render prompt for '{}': {}", name, e))
            })?;
            Ok(PromptPreview { column: name.to_string(), prompt: rendered })
        })
        .collect()
}

/// Text shown by `--prompt-preview`.
pub fn format_prompt_preview(topic: &str, previews: &[PromptPreview]) -> String {
    let mut out = format!("=== Prompt preview: {} = '{}' ===\n", PRINCIPLE_NAME, topic);
    for preview in previews {
        out.push_str(&format!("\n--- {} ---\n{}\n", preview.column, preview.prompt));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::column::ColumnConfig;
    use crate::domain::principle::{TOPIC_PLACEHOLDER, build_principle_config};

    #[test]
    fn substitutes_topic_into_every_prompt() {
        let config = build_principle_config("Data Sharing", "m");
        let previews = render_prompt_preview(&config, "Data Sharing").unwrap();

        let columns: Vec<&str> = previews.iter().map(|p| p.column.as_str()).collect();
        assert_eq!(columns, vec!["statement", "description", "rationale", "implications"]);
        for preview in &previews {
            assert!(preview.prompt.contains("'Data Sharing'"), "{}", preview.column);
            assert!(!preview.prompt.contains(TOPIC_PLACEHOLDER));
        }
    }

    #[test]
    fn unknown_placeholder_is_rejected() {
        let mut config = DataDesignerConfig::new();
        config.add_column(ColumnConfig::llm_text("statement", "m", "About {{ other }}")).unwrap();

        let result = render_prompt_preview(&config, "Data Sharing");
        assert!(matches!(result, Err(AppError::Configuration(msg)) if msg.contains("statement")));
    }

    #[test]
    fn formatted_preview_lists_columns() {
        let previews = vec![PromptPreview { column: "statement".into(), prompt: "Write.".into() }];
        let text = format_prompt_preview("Data Sharing", &previews);
        assert!(text.starts_with("=== Prompt preview: principle_name = 'Data Sharing' ===\n"));
        assert!(text.contains("--- statement ---\nWrite.\n"));
    }
}
