//! Column specifications sent to Data Designer.

use serde::Serialize;

use crate::domain::AppError;

/// One declared field of a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "column_type", rename_all = "kebab-case")]
pub enum ColumnConfig {
    /// Value drawn by a sampler; here always a single-value category.
    Sampler { name: String, sampler_type: SamplerType, params: CategorySamplerParams },
    /// Free text produced by a language model from a prompt template.
    LlmText { name: String, model_alias: String, prompt: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplerType {
    Category,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySamplerParams {
    pub values: Vec<String>,
}

impl ColumnConfig {
    /// Category sampler that always yields `value`.
    pub fn fixed(name: impl Into<String>, value: impl Into<String>) -> Self {
        ColumnConfig::Sampler {
            name: name.into(),
            sampler_type: SamplerType::Category,
            params: CategorySamplerParams { values: vec![value.into()] },
        }
    }

    pub fn llm_text(
        name: impl Into<String>,
        model_alias: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        ColumnConfig::LlmText {
            name: name.into(),
            model_alias: model_alias.into(),
            prompt: prompt.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ColumnConfig::Sampler { name, .. } | ColumnConfig::LlmText { name, .. } => name,
        }
    }

    /// Prompt template for generated columns.
    pub fn prompt(&self) -> Option<&str> {
        match self {
            ColumnConfig::LlmText { prompt, .. } => Some(prompt),
            ColumnConfig::Sampler { .. } => None,
        }
    }

    /// The literal value of a single-value sampler column.
    pub fn fixed_value(&self) -> Option<&str> {
        match self {
            ColumnConfig::Sampler { params, .. } if params.values.len() == 1 => {
                params.values.first().map(String::as_str)
            }
            _ => None,
        }
    }
}

/// Ordered set of columns making up one generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataDesignerConfig {
    columns: Vec<ColumnConfig>,
}

impl DataDesignerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from columns whose names are known to be distinct.
    pub(crate) fn from_unique_columns(columns: Vec<ColumnConfig>) -> Self {
        debug_assert!(
            columns
                .iter()
                .enumerate()
                .all(|(i, c)| columns[..i].iter().all(|prev| prev.name() != c.name())),
            "column names must be unique"
        );
        Self { columns }
    }

    /// Append a column, keeping insertion order. Names must be unique.
    pub fn add_column(&mut self, column: ColumnConfig) -> Result<(), AppError> {
        if self.column(column.name()).is_some() {
            return Err(AppError::config_error(format!(
                "Column '{}' is already defined",
                column.name()
            )));
        }
        self.columns.push(column);
        Ok(())
    }

    pub fn columns(&self) -> &[ColumnConfig] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&ColumnConfig> {
        self.columns.iter().find(|column| column.name() == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(ColumnConfig::name).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
