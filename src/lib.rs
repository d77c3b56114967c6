pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod katas;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{KataCli, NodeschoolCli};

pub use app::lessons::{FileServer, HttpClient, JsonApiServer, TimeServer, UppercaseServer};
pub use config::LessonConfig;
pub use crate::core::{Handler, HttpServer, ServerSettings};
pub use katas::Kata;
pub use utils::error::{KataError, Result};
