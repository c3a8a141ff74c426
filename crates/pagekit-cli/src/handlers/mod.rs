mod context;

pub mod config;
pub mod events;
pub mod guidance;
pub mod toc;

pub use context::HandlerContext;
