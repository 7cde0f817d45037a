pub mod config;

pub use config::{AppConfig, DemoConfig, FontConfig, TerminalConfig};
