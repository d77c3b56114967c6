use crate::domain::model::{HttpRequest, HttpResponse};
use crate::domain::ports::Handler;
use async_trait::async_trait;

/// 只接受 POST，把 body 轉成大寫後回傳
#[derive(Debug, Clone, Default)]
pub struct UppercaseServer;

#[async_trait]
impl Handler for UppercaseServer {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        if request.method != "POST" {
            return HttpResponse::text(405, "Send me a POST\n").with_header("Allow", "POST");
        }

        let body = String::from_utf8_lossy(&request.body);
        tracing::debug!("Uppercasing {} bytes", request.body.len());
        HttpResponse::text(200, body.to_uppercase())
    }
}
