pub mod column;
pub mod document;
pub mod error;
pub mod output_path;
pub mod principle;
pub mod prompt;
pub mod record;
pub mod settings;

pub use column::{CategorySamplerParams, ColumnConfig, DataDesignerConfig, SamplerType};
pub use document::{SECTION_HEADERS, SERVICE_NAME, render_markdown};
pub use error::{AppError, RenderError};
pub use output_path::principle_file_name;
pub use principle::{PRINCIPLE_FIELDS, build_principle_config};
pub use prompt::{PromptPreview, format_prompt_preview, render_prompt_preview};
pub use record::GeneratedRecord;
pub use settings::Settings;
