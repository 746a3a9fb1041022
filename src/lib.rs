pub mod core;
mod logging;
pub mod player;
pub mod prelude;
pub mod session;
pub mod store;
pub mod ui;

pub use crate::core::*;
pub use logging::{init_logging, LOG_ENV};
pub use player::*;
pub use session::*;
pub use store::*;
