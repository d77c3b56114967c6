#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{KataCli, KataCommand, LessonCommand, NodeschoolCli};
pub use toml_config::LessonConfig;
