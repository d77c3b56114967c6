use crate::utils::error::Result;
use std::path::Path;

/// 計算檔案中的換行字元數
pub async fn count_newlines(path: impl AsRef<Path>) -> Result<usize> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    Ok(bytes.iter().filter(|&&b| b == b'\n').count())
}

/// 列出目錄中副檔名符合 `extension` 的檔名（不含點，大小寫需相符），依名稱排序
pub async fn filtered_ls(dir: impl AsRef<Path>, extension: &str) -> Result<Vec<String>> {
    let extension = extension.trim_start_matches('.');
    let mut entries = tokio::fs::read_dir(dir.as_ref()).await?;
    let mut names = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => tracing::warn!("⚠️ Skipping non UTF-8 file name {:?}", name),
        }
    }

    names.sort();
    Ok(names)
}
