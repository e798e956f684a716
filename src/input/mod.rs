pub mod hook;
pub mod transcript;

pub use hook::{parse_hook, ContextWindow, SessionInfo, StatusHook, Usage};
