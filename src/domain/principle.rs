//! Column layout for one data-architecture principle.

use crate::domain::column::{ColumnConfig, DataDesignerConfig};

pub const PRINCIPLE_NAME: &str = "principle_name";
pub const CLASSIFICATION_AREA: &str = "classification_area";
pub const PRINCIPLE_TYPE: &str = "principle_type";
pub const SOURCE: &str = "source";
pub const STATEMENT: &str = "statement";
pub const DESCRIPTION: &str = "description";
pub const RATIONALE: &str = "rationale";
pub const IMPLICATIONS: &str = "implications";

/// Every field a principle record must carry, in declaration order.
pub const PRINCIPLE_FIELDS: [&str; 8] = [
    PRINCIPLE_NAME,
    CLASSIFICATION_AREA,
    PRINCIPLE_TYPE,
    SOURCE,
    STATEMENT,
    DESCRIPTION,
    RATIONALE,
    IMPLICATIONS,
];

pub const CLASSIFICATION_AREA_VALUE: &str = "Information Governance";
pub const PRINCIPLE_TYPE_VALUE: &str = "Data Architecture";
pub const SOURCE_VALUE: &str = "Derived";

/// Placeholder the service substitutes with the topic.
pub const TOPIC_PLACEHOLDER: &str = "{{ principle_name }}";

const STATEMENT_PROMPT: &str = "You are an enterprise data architect at a regulated financial \
services group.\n\n\
Write a single, concise principle *statement* (15–30 words) for the data architecture \
principle called '{{ principle_name }}'. Emphasise a loosely coupled data landscape that \
enables governed, secure data sharing across the organisation.";

const DESCRIPTION_PROMPT: &str = "Write a detailed *description* (80–140 words) for the data \
architecture principle '{{ principle_name }}'.\n\n\
Explain that:\n\
- business units are federated but must share data;\n\
- data sharing is enabled through an integrated financial services data architecture;\n\
- the landscape is loosely coupled to minimise technical dependency;\n\
- integration, metadata, and semantic layers support data leverage, aggregation and sharing \
across the group;\n\
- enterprise technologies are used when justified by business cases.\n\n\
Write as a single coherent paragraph, neutral, non-marketing tone.";

const RATIONALE_PROMPT: &str = "Write the *rationale* section (80–140 words) for the data \
architecture principle '{{ principle_name }}'.\n\n\
Cover why data integration and aggregation are needed for regulatory, risk, and growth \
purposes in a federated financial-services group. Mention:\n\
- preserving business-unit autonomy;\n\
- customer-centric view across products and channels;\n\
- avoiding a one-size-fits-all technology mandate while still standardising integration \
practices.\n\
Write as a single paragraph.";

const IMPLICATIONS_PROMPT: &str = "For the data architecture principle '{{ principle_name }}', \
write an 'Implications' section.\n\
Produce 5–8 concise bullet points, each 1–2 sentences, formatted in Markdown as '- ...'.\n\n\
Include points such as:\n\
- architecture priorities aligned with business priorities;\n\
- risk management and governance for data sharing;\n\
- 'one trusted source' and integrated data architecture supporting information management;\n\
- loose coupling, controlled replication, and reduced duplication;\n\
- preserving uniqueness and autonomy of systems while enabling group-wide analytics;\n\
- failure isolation: issues in one subsystem should not break the entire landscape.";

/// Build the request for one principle about `topic`.
///
/// Four fixed category columns come first, followed by the four model-written sections.
/// Prompts are left as templates; only `principle_name` is referenced.
pub fn build_principle_config(topic: &str, model_alias: &str) -> DataDesignerConfig {
    DataDesignerConfig::from_unique_columns(vec![
        ColumnConfig::fixed(PRINCIPLE_NAME, topic),
        ColumnConfig::fixed(CLASSIFICATION_AREA, CLASSIFICATION_AREA_VALUE),
        ColumnConfig::fixed(PRINCIPLE_TYPE, PRINCIPLE_TYPE_VALUE),
        ColumnConfig::fixed(SOURCE, SOURCE_VALUE),
        ColumnConfig::llm_text(STATEMENT, model_alias, STATEMENT_PROMPT),
        ColumnConfig::llm_text(DESCRIPTION, model_alias, DESCRIPTION_PROMPT),
        ColumnConfig::llm_text(RATIONALE, model_alias, RATIONALE_PROMPT),
        ColumnConfig::llm_text(IMPLICATIONS, model_alias, IMPLICATIONS_PROMPT),
    ])
}
