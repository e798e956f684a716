pub mod git;
pub mod tokens;

pub use git::{changes_text, GitInfo, NO_GIT};
pub use tokens::TokenMetrics;
