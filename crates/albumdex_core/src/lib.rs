//! Core domain logic for the albumdex collection manager.
//! This crate is the single source of truth for collection invariants.

pub mod collection;
pub mod command;
pub mod logging;
pub mod model;
pub mod service;

pub use collection::sort::{selection_sort, AlbumComparator, SortKey};
pub use collection::{AlbumRepository, Collection, GROWTH_INCREMENT, INITIAL_CAPACITY};
pub use command::parser::{parse_command, AlbumRef, Command, CommandError};
pub use command::session::{Flow, Response, Session, SHUTDOWN_MESSAGE, STARTUP_BANNER};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::album::{Album, ValidationError};
pub use model::artist::Artist;
pub use model::date::{Date, DateParseError, MIN_YEAR};
pub use model::genre::Genre;
pub use model::rating::{RatingLedger, Star};
pub use service::collection_service::CollectionService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
