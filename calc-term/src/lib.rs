pub mod config;
pub mod keys;
pub mod logging;
pub mod session;
pub mod terminal;

pub use config::{DisplayConfig, TermConfig};
pub use session::{Session, SessionStats};
pub use terminal::TerminalDisplay;
