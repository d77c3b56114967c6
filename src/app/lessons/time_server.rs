use crate::core::server::serve_tcp_until;
use crate::utils::error::Result;
use chrono::{Local, NaiveDateTime};
use std::future::Future;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};

pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

/// "YYYY-MM-DD hh:mm"，24 小時制
pub fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format("%Y-%m-%d %H:%M").to_string()
}

/// TCP 時間伺服器：連線後寫出目前時間與換行，然後關閉連線
#[derive(Clone)]
pub struct TimeServer {
    clock: Clock,
}

impl TimeServer {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(|| Local::now().naive_local()))
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }

    pub async fn serve_connection(&self, mut stream: TcpStream) -> Result<()> {
        let line = format!("{}\n", format_timestamp(&(self.clock)()));
        stream.write_all(line.as_bytes()).await?;
        stream.shutdown().await?;
        Ok(())
    }

    pub async fn run_until<S: Future<Output = ()>>(
        self,
        listener: TcpListener,
        shutdown: S,
    ) -> Result<()> {
        serve_tcp_until(listener, shutdown, move |stream, peer| {
            let server = self.clone();
            async move {
                tracing::info!("🕒 Sending time to {}", peer);
                server.serve_connection(stream).await
            }
        })
        .await
    }
}

impl Default for TimeServer {
    fn default() -> Self {
        Self::new()
    }
}
