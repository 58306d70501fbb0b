//! Where the events file comes from, and loading it.
//!
//! A source is an opaque byte source: it either hands back the file's text
//! or fails. [`load_events`] turns any failure into an empty event list so
//! the calendar still renders.

use std::fmt;
use std::future::Future;
use std::path::PathBuf;

use reqwest::Url;
use tracing::{debug, warn};

use crate::error::{ClubcalError, ClubcalResult};
use crate::event::Event;
use crate::parse::parse_events;

/// Something that can produce the text of an events file.
pub trait EventSource: fmt::Display {
    fn fetch(&self) -> impl Future<Output = ClubcalResult<String>> + Send;
}

/// Events file served over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpSource {
    pub fn new(url: Url) -> Self {
        HttpSource {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl EventSource for HttpSource {
    async fn fetch(&self) -> ClubcalResult<String> {
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClubcalError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

impl fmt::Display for HttpSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Events file on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

impl EventSource for FileSource {
    async fn fetch(&self) -> ClubcalResult<String> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

impl fmt::Display for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// A source picked from a configured location string.
#[derive(Debug, Clone)]
pub enum Source {
    Http(HttpSource),
    File(FileSource),
}

impl Source {
    /// `http://` and `https://` locations are fetched over the network,
    /// anything else is a file path (`~` is expanded).
    pub fn from_location(location: &str) -> ClubcalResult<Self> {
        let location = location.trim();
        if location.is_empty() {
            return Err(ClubcalError::InvalidSource(location.to_string()));
        }

        if location.starts_with("http://") || location.starts_with("https://") {
            let url = Url::parse(location)
                .map_err(|_| ClubcalError::InvalidSource(location.to_string()))?;
            return Ok(Source::Http(HttpSource::new(url)));
        }

        let expanded = shellexpand::tilde(location).into_owned();
        Ok(Source::File(FileSource::new(expanded)))
    }
}

impl EventSource for Source {
    async fn fetch(&self) -> ClubcalResult<String> {
        match self {
            Source::Http(source) => source.fetch().await,
            Source::File(source) => source.fetch().await,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Http(source) => source.fmt(f),
            Source::File(source) => source.fmt(f),
        }
    }
}

/// Fetch and parse the events file.
///
/// Never fails: a source error is logged and yields an empty list.
pub async fn load_events<S: EventSource>(source: &S) -> Vec<Event> {
    match source.fetch().await {
        Ok(text) => {
            let events = parse_events(&text);
            debug!(source = %source, count = events.len(), "Loaded events");
            events
        }
        Err(e) => {
            warn!(source = %source, error = %e, "Could not load events");
            Vec::new()
        }
    }
}
