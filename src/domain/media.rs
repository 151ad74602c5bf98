use std::fmt;
use std::path::{Path, PathBuf};

use tokio::io::AsyncRead;

/// Boxed byte source attached as a multipart file part.
pub type MediaReader = Box<dyn AsyncRead + Send + Sync + Unpin + 'static>;

/// An open byte stream plus the file name announced in the multipart part.
pub struct MediaStream {
    reader: MediaReader,
    file_name: Option<String>,
}

impl MediaStream {
    pub fn new(reader: impl AsyncRead + Send + Sync + Unpin + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn into_parts(self) -> (MediaReader, Option<String>) {
        (self.reader, self.file_name)
    }
}

impl fmt::Debug for MediaStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaStream")
            .field("file_name", &self.file_name)
            .finish_non_exhaustive()
    }
}

/// Media argument as supplied by the caller.
///
/// A [`Media::Location`] is classified when the request is built: `http://` and
/// `https://` values are sent as URLs, anything else is read from disk.
#[derive(Debug)]
pub enum Media {
    Location(String),
    Path(PathBuf),
    Stream(MediaStream),
}

impl From<&str> for Media {
    fn from(value: &str) -> Self {
        Self::Location(value.to_owned())
    }
}

impl From<String> for Media {
    fn from(value: String) -> Self {
        Self::Location(value)
    }
}

impl From<&Path> for Media {
    fn from(value: &Path) -> Self {
        Self::Path(value.to_path_buf())
    }
}

impl From<PathBuf> for Media {
    fn from(value: PathBuf) -> Self {
        Self::Path(value)
    }
}

impl From<MediaStream> for Media {
    fn from(value: MediaStream) -> Self {
        Self::Stream(value)
    }
}

impl From<tokio::fs::File> for Media {
    fn from(value: tokio::fs::File) -> Self {
        Self::Stream(MediaStream::new(value))
    }
}

/// Media after resolution: what a multipart builder actually attaches.
#[derive(Debug)]
pub enum MediaReference {
    None,
    RemoteUrl(String),
    Stream(MediaStream),
}

impl MediaReference {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

pub(crate) fn is_remote_url(value: &str) -> bool {
    let trimmed = value.trim_start();
    let lower = trimmed.get(..8).unwrap_or(trimmed).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
