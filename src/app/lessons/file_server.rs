use crate::domain::model::{HttpRequest, HttpResponse};
use crate::domain::ports::Handler;
use crate::utils::error::{KataError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub fn content_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("txt") => "text/plain; charset=utf-8",
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

/// 不論請求內容，一律回傳同一個檔案
#[derive(Debug, Clone)]
pub struct FileServer {
    path: PathBuf,
}

impl FileServer {
    /// 啟動時確認檔案存在
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let metadata = tokio::fs::metadata(&path).await?;
        if !metadata.is_file() {
            return Err(KataError::InvalidConfigValueError {
                field: "file_server.path".to_string(),
                value: path.display().to_string(),
                reason: "Path is not a regular file".to_string(),
            });
        }
        tracing::info!("📄 Serving {} ({} bytes)", path.display(), metadata.len());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Handler for FileServer {
    async fn handle(&self, _request: HttpRequest) -> HttpResponse {
        match tokio::fs::metadata(&self.path).await {
            Ok(metadata) if metadata.is_file() => HttpResponse::file(
                self.path.clone(),
                metadata.len(),
                content_type_for(&self.path),
            ),
            Ok(_) => HttpResponse::status(404),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("⚠️ {} disappeared", self.path.display());
                HttpResponse::status(404)
            }
            Err(e) => {
                tracing::error!("❌ Cannot stat {}: {}", self.path.display(), e);
                HttpResponse::status(500)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ResponseBody;

    #[test]
    fn test_content_type_guess() {
        assert_eq!(content_type_for(Path::new("a.TXT")), "text/plain; charset=utf-8");
        assert_eq!(content_type_for(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type_for(Path::new("data.json")), "application/json");
        assert_eq!(content_type_for(Path::new("blob")), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_missing_file_at_startup() {
        let err = FileServer::new("/definitely/not/here.txt").await.unwrap_err();
        assert!(matches!(err, KataError::IoError(_)));
    }

    #[tokio::test]
    async fn test_directory_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(FileServer::new(dir.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_handle_streams_file_then_404_when_removed() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("lesson.txt");
        tokio::fs::write(&path, "hello file").await.unwrap();

        let server = FileServer::new(&path).await.unwrap();
        let response = server.handle(HttpRequest::default()).await;
        assert_eq!(response.status, 200);
        assert_eq!(
            response.body,
            ResponseBody::File {
                path: path.clone(),
                len: 10
            }
        );

        tokio::fs::remove_file(&path).await.unwrap();
        assert_eq!(server.handle(HttpRequest::default()).await.status, 404);
    }
}
