//! nodeschool learnyounode 課程：小型 TCP/HTTP 伺服器、HTTP 用戶端與檔案系統練習。

pub mod file_server;
pub mod fs_lessons;
pub mod http_client;
pub mod json_api_server;
pub mod time_server;
pub mod uppercase_server;

pub use file_server::FileServer;
pub use http_client::{Collected, HttpClient};
pub use json_api_server::JsonApiServer;
pub use time_server::TimeServer;
pub use uppercase_server::UppercaseServer;
