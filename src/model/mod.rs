pub mod config;
pub mod progress;
pub mod quest;
pub mod questlog;

pub use config::*;
pub use progress::*;
pub use quest::*;
pub use questlog::*;
