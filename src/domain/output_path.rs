use crate::domain::AppError;

pub const FILE_SUFFIX: &str = "_principle.md";

/// File name for the document about `topic`: lower-cased, spaces to underscores.
///
/// The name must stay inside the output directory, so topics containing a path
/// separator or NUL are rejected.
pub fn principle_file_name(topic: &str) -> Result<String, AppError> {
    if topic.contains(['/', '\\', '\0']) {
        return Err(AppError::config_error(format!(
            "Invalid topic '{topic}': path separators are not allowed in a principle topic"
        )));
    }
    Ok(format!("{}{}", topic.to_lowercase().replace(' ', "_"), FILE_SUFFIX))
}
