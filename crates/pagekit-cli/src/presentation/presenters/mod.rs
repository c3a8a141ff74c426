pub mod config;
pub mod events;
pub mod guidance;
pub mod toc;

pub use config::present_config;
pub use events::present_events_panel;
pub use guidance::present_guidance;
pub use toc::present_toc;
