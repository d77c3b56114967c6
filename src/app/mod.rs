#[cfg(feature = "cli")]
pub mod kata_runner;
pub mod lessons;
