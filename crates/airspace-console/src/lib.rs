//! Airspace console - reads timestamped report and query events and
//! answers them against an in-memory traffic picture.

pub mod config;
pub mod protocol;
pub mod render;
pub mod session;

pub use config::{Config, OutputFormat};
pub use protocol::{parse_line, Event, ParseError, Request};
pub use session::{AbsenceCause, Response, RunSummary, Session, Step};
