use crate::error::{ChunkError, Result};
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ChunkError::InvalidInput {
            path: path.to_path_buf(),
            reason: "路徑不存在",
        });
    }
    if !path.is_dir() {
        return Err(ChunkError::InvalidInput {
            path: path.to_path_buf(),
            reason: "路徑不是資料夾",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_existing_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_directory_exists(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        let err = validate_directory_exists(&missing).unwrap_err();
        assert!(matches!(err, ChunkError::InvalidInput { .. }));
    }

    #[test]
    fn test_validate_file_is_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.txt");
        fs::write(&file, "a").unwrap();
        let err = validate_directory_exists(&file).unwrap_err();
        assert!(matches!(
            err,
            ChunkError::InvalidInput {
                reason: "路徑不是資料夾",
                ..
            }
        ));
    }
}
