use crate::core::http::{read_request, write_response};
use crate::domain::model::HttpResponse;
use crate::domain::ports::Handler;
use crate::utils::error::{KataError, Result};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub max_body_bytes: usize,
    /// 讀取整個請求（含 body）的時間上限
    pub request_timeout: Duration,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// 接受連線直到 `shutdown` 完成，每個連線交給獨立的 task 處理。
/// 單一連線的錯誤只記錄，不會讓伺服器停止。
pub async fn serve_tcp_until<F, Fut, S>(
    listener: TcpListener,
    shutdown: S,
    on_connection: F,
) -> Result<()>
where
    F: Fn(TcpStream, SocketAddr) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<()>> + Send + 'static,
    S: Future<Output = ()>,
{
    let local_addr = listener.local_addr()?;
    tracing::info!("🚀 Listening on {}", local_addr);

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("🛑 Shutting down listener on {}", local_addr);
                break;
            }
            accepted = listener.accept() => match accepted {
                Ok((stream, peer)) => {
                    tracing::debug!("Accepted connection from {}", peer);
                    let task = on_connection(stream, peer);
                    tokio::spawn(async move {
                        if let Err(e) = task.await {
                            tracing::warn!("⚠️ Connection from {} failed: {}", peer, e);
                        }
                    });
                }
                Err(e) => {
                    tracing::warn!("⚠️ Failed to accept connection: {}", e);
                }
            }
        }
    }

    Ok(())
}

pub struct HttpServer<H: Handler> {
    listener: TcpListener,
    handler: Arc<H>,
    settings: ServerSettings,
}

impl<H: Handler> HttpServer<H> {
    pub fn new(listener: TcpListener, handler: H, settings: ServerSettings) -> Self {
        Self {
            listener,
            handler: Arc::new(handler),
            settings,
        }
    }

    pub async fn bind(addr: SocketAddr, handler: H, settings: ServerSettings) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self::new(listener, handler, settings))
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub async fn run_until<S: Future<Output = ()>>(self, shutdown: S) -> Result<()> {
        let handler = self.handler;
        let settings = self.settings;

        serve_tcp_until(self.listener, shutdown, move |stream, peer| {
            handle_connection(stream, peer, handler.clone(), settings.clone())
        })
        .await
    }
}

async fn handle_connection<H: Handler>(
    mut stream: TcpStream,
    peer: SocketAddr,
    handler: Arc<H>,
    settings: ServerSettings,
) -> Result<()> {
    let (read_half, mut write_half) = stream.split();
    let mut reader = BufReader::new(read_half);

    let read = tokio::time::timeout(
        settings.request_timeout,
        read_request(&mut reader, settings.max_body_bytes),
    )
    .await;

    let response = match read {
        Ok(Ok(request)) => {
            tracing::info!("📥 {} {} from {}", request.method, request.path, peer);
            handler.handle(request).await
        }
        Ok(Err(KataError::BadRequest { message })) => {
            tracing::warn!("⚠️ Bad request from {}: {}", peer, message);
            HttpResponse::status(400)
        }
        Ok(Err(KataError::PayloadTooLarge { limit })) => {
            tracing::warn!("⚠️ Body from {} exceeds {} bytes", peer, limit);
            HttpResponse::status(413)
        }
        Ok(Err(e)) => return Err(e),
        Err(_) => {
            tracing::warn!(
                "⚠️ {} did not send a complete request within {:?}",
                peer,
                settings.request_timeout
            );
            HttpResponse::status(408)
        }
    };

    tracing::debug!("Responding {} to {}", response.status, peer);
    write_response(&mut write_half, &response).await?;
    write_half.shutdown().await?;
    Ok(())
}
