use std::fs;
use std::io;
use std::path::Path;

/// 移動單一檔案，不覆蓋已存在的目標
///
/// `rename` 失敗時（例如跨檔案系統）改用複製後刪除
pub fn move_file(source: &Path, target: &Path) -> io::Result<()> {
    if target.symlink_metadata().is_ok() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("目標已存在: {}", target.display()),
        ));
    }

    match fs::rename(source, target) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            if !source.is_file() {
                return Err(rename_err);
            }
            copy_and_delete(source, target).map_err(|copy_err| {
                io::Error::new(
                    copy_err.kind(),
                    format!("{copy_err} (原始錯誤: {rename_err})"),
                )
            })
        }
    }
}

fn copy_and_delete(source: &Path, target: &Path) -> io::Result<()> {
    fs::copy(source, target)?;
    if let Err(e) = fs::remove_file(source) {
        // 來源刪除失敗時撤回複本
        let _ = fs::remove_file(target);
        return Err(e);
    }
    Ok(())
}
