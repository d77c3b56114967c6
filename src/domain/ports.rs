use crate::domain::model::{HttpRequest, HttpResponse};
use async_trait::async_trait;

/// 每個 HTTP 課程伺服器實作的處理介面；一個連線只處理一個請求
#[async_trait]
pub trait Handler: Send + Sync + 'static {
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}
