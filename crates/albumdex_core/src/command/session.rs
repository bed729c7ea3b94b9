//! Command session over one collection.
//!
//! # Responsibility
//! - Execute parsed commands against a [`CollectionService`].
//! - Render every outcome as console lines.
//!
//! # Invariants
//! - Rejected commands never mutate the collection.
//! - Add checks artist birthdate validity before release date validity.
//! - Delete and rate do not check calendar validity.

use crate::collection::{AlbumRepository, Collection};
use crate::command::parser::{parse_command, AlbumRef, Command, CommandError};
use crate::model::album::Album;
use crate::model::artist::Artist;
use crate::model::date::Date;
use crate::model::genre::Genre;
use crate::model::rating::Star;
use crate::service::collection_service::CollectionService;
use log::{info, warn};

pub const STARTUP_BANNER: &str = "Collection Manager is up running.";
pub const SHUTDOWN_MESSAGE: &str = "Collection Manager terminated.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Console output for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub lines: Vec<String>,
    pub flow: Flow,
}

impl Response {
    fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            flow: Flow::Continue,
        }
    }

    fn line(line: impl Into<String>) -> Self {
        Self::lines(vec![line.into()])
    }
}

pub struct Session<R: AlbumRepository = Collection> {
    service: CollectionService<R>,
    reference_date: Option<Date>,
}

impl Session<Collection> {
    /// Creates a session over an empty in-memory collection.
    pub fn new() -> Self {
        Self::with_repository(Collection::new())
    }
}

impl Default for Session<Collection> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: AlbumRepository> Session<R> {
    pub fn with_repository(repo: R) -> Self {
        Self {
            service: CollectionService::new(repo),
            reference_date: None,
        }
    }

    /// Pins "today" for date validity checks instead of the local clock.
    pub fn with_reference_date(mut self, today: Date) -> Self {
        self.reference_date = Some(today);
        self
    }

    pub fn service(&self) -> &CollectionService<R> {
        &self.service
    }

    /// Parses and executes one input line. Blank lines produce no output.
    pub fn handle_line(&mut self, line: &str) -> Response {
        if line.trim().is_empty() {
            return Response::lines(Vec::new());
        }
        match parse_command(line) {
            Ok(command) => self.execute(command),
            Err(err) => reject(&err),
        }
    }

    pub fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::Add {
                album,
                genre,
                released,
            } => self.add(album, genre, released),
            Command::Delete { album } => self.delete(album),
            Command::Rate { album, stars } => self.rate(album, stars),
            Command::PrintByDate => Response::lines(self.service.print_by_date()),
            Command::PrintByGenre => Response::lines(self.service.print_by_genre()),
            Command::PrintByRating => Response::lines(self.service.print_by_rating()),
            Command::Quit => {
                info!("event=session_quit module=command status=ok");
                Response {
                    lines: vec![SHUTDOWN_MESSAGE.to_string()],
                    flow: Flow::Quit,
                }
            }
        }
    }

    fn add(&mut self, album: AlbumRef, genre: Genre, released: Date) -> Response {
        let today = self.today();
        if !album.born.is_valid_on(today) {
            return Response::line(format!("Artist DOB: {} is invalid.", album.born));
        }
        if !released.is_valid_on(today) {
            return Response::line(format!("Date Released: {released} is invalid."));
        }

        let record = match Artist::new(album.artist.as_str(), album.born)
            .and_then(|artist| Album::new(album.title.as_str(), artist, genre, released))
        {
            Ok(record) => record,
            Err(err) => return reject(&CommandError::from(err)),
        };

        if self.service.add(record) {
            Response::line(format!("{} added to the collection.", describe(&album)))
        } else {
            Response::line(format!("{} is already in the collection.", describe(&album)))
        }
    }

    fn delete(&mut self, album: AlbumRef) -> Response {
        let key = match lookup_key(&album) {
            Ok(key) => key,
            Err(err) => return reject(&err),
        };
        if self.service.remove(&key) {
            Response::line(format!("{} removed from the collection.", describe(&album)))
        } else {
            Response::line(not_in_collection(&album))
        }
    }

    fn rate(&mut self, album: AlbumRef, stars: Star) -> Response {
        let key = match lookup_key(&album) {
            Ok(key) => key,
            Err(err) => return reject(&err),
        };
        if !self.service.rate(&key, stars) {
            return Response::line(not_in_collection(&album));
        }
        let released = self
            .service
            .lookup(&key)
            .map(|stored| stored.released().to_string())
            .unwrap_or_default();
        Response::line(format!(
            "You rate {stars} for {}:{released}({})",
            album.title, album.artist
        ))
    }

    fn today(&self) -> Date {
        self.reference_date.unwrap_or_else(Date::today)
    }
}

fn lookup_key(album: &AlbumRef) -> Result<Album, CommandError> {
    let artist = Artist::new(album.artist.as_str(), album.born)?;
    Ok(Album::key(album.title.as_str(), artist)?)
}

fn describe(album: &AlbumRef) -> String {
    format!("{}({}:{})", album.title, album.artist, album.born_text)
}

fn not_in_collection(album: &AlbumRef) -> String {
    format!("{} is not in the collection", describe(album))
}

fn reject(err: &CommandError) -> Response {
    warn!(
        "event=command_rejected module=command status=error error_code={} error={}",
        err.code(),
        err
    );
    Response::line(err.user_message())
}
