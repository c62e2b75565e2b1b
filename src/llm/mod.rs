pub mod assistant;
pub mod client;
pub mod context;
pub mod prompts;
pub mod types;

pub use assistant::*;
pub use client::*;
pub use context::*;
pub use types::*;
