pub mod error;
pub mod event;
pub mod heading;
pub mod state;

pub use error::{Error, Result};
pub use event::*;
pub use heading::*;
pub use state::*;
