//! Markdown rendering of a generated principle.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use minijinja::{Environment, UndefinedBehavior};

use crate::domain::RenderError;
use crate::domain::principle::{
    CLASSIFICATION_AREA, DESCRIPTION, IMPLICATIONS, PRINCIPLE_NAME, PRINCIPLE_TYPE, RATIONALE,
    SOURCE, STATEMENT,
};
use crate::domain::record::GeneratedRecord;

pub const SERVICE_NAME: &str = "NeMo Data Designer";

/// Section headers in the order they appear in the document.
pub const SECTION_HEADERS: [&str; 4] =
    ["## Statement", "## Description", "## Rationale", "## Implications"];

const TEMPLATE_NAME: &str = "principle.md.j2";
const TEMPLATE: &str = include_str!("../assets/principle.md.j2");

const METADATA_FIELDS: [&str; 4] = [PRINCIPLE_NAME, CLASSIFICATION_AREA, PRINCIPLE_TYPE, SOURCE];
const SECTION_FIELDS: [&str; 4] = [STATEMENT, DESCRIPTION, RATIONALE, IMPLICATIONS];

/// Render `record` as a principle document stamped with `generated_at`.
///
/// Section bodies are trimmed; their inner formatting is kept verbatim.
pub fn render_markdown(
    record: &GeneratedRecord,
    generated_at: DateTime<Utc>,
) -> Result<String, RenderError> {
    let timestamp = format_timestamp(generated_at);
    let mut context: BTreeMap<&str, &str> = BTreeMap::new();
    for name in METADATA_FIELDS {
        context.insert(name, record.field(name)?);
    }
    for name in SECTION_FIELDS {
        context.insert(name, record.field(name)?.trim());
    }
    context.insert("service_name", SERVICE_NAME);
    context.insert("generated_at", &timestamp);

    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template(TEMPLATE_NAME, TEMPLATE)
        .map_err(|e| RenderError::Template(e.to_string()))?;

    env.get_template(TEMPLATE_NAME)
        .and_then(|template| template.render(&context))
        .map_err(|e| RenderError::Template(e.to_string()))
}

/// UTC timestamp at second precision, without the zone suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S").to_string()
}
