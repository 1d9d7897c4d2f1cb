mod chunk_naming;
mod error_report;
mod file_mover;
mod file_scanner;
mod filename_sanitizer;
mod path_validator;

pub use chunk_naming::{
    DEFAULT_CHUNK_SIZE, DEFAULT_PREFIX, DEFAULT_START_INDEX, DEFAULT_SUFFIX, MAX_CHUNK_SIZE,
    MAX_START_INDEX, MIN_CHUNK_SIZE, chunk_folder_name, is_chunk_folder, pad_width,
};
pub use error_report::{ErrorReport, FailureCategory, ItemFailure, RunOutcome};
pub use file_mover::move_file;
pub use file_scanner::{list_first_level_files, list_first_level_names};
pub use filename_sanitizer::{SanitizeError, rename_to_sanitized, sanitize_filename};
pub use path_validator::validate_directory_exists;
