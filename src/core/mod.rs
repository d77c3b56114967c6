pub mod http;
pub mod server;

pub use crate::domain::model::{HttpRequest, HttpResponse, ResponseBody};
pub use crate::domain::ports::Handler;
pub use crate::utils::error::Result;
pub use server::{serve_tcp_until, HttpServer, ServerSettings};
