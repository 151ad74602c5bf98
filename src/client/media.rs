use std::io;
use std::path::Path;

use tracing::debug;

use super::error::ApipediaError;
use crate::domain::{Media, MediaReference, MediaStream, is_remote_url};

/// Classify and prepare a media argument for a multipart request.
///
/// - `None` or an empty location resolves to [`MediaReference::None`],
/// - streams pass through,
/// - `http(s)://` locations are sent as URLs,
/// - anything else must be an existing file, which is opened for reading.
///
/// The existence check and the open are not atomic.
pub async fn resolve_media(media: Option<Media>) -> Result<MediaReference, ApipediaError> {
    match media {
        None => Ok(MediaReference::None),
        Some(Media::Stream(stream)) => Ok(MediaReference::Stream(stream)),
        Some(Media::Location(location)) if location.trim().is_empty() => Ok(MediaReference::None),
        Some(Media::Location(location)) if is_remote_url(&location) => {
            Ok(MediaReference::RemoteUrl(location.trim().to_owned()))
        }
        Some(Media::Location(location)) => open_local(Path::new(&location)).await,
        Some(Media::Path(path)) if path.as_os_str().is_empty() => Ok(MediaReference::None),
        Some(Media::Path(path)) => open_local(&path).await,
    }
}

async fn open_local(path: &Path) -> Result<MediaReference, ApipediaError> {
    if !exists(path).await? {
        return Err(ApipediaError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = tokio::fs::File::open(path)
        .await
        .map_err(|err| ApipediaError::request(format!("{}: {err}", path.display())))?;

    let mut stream = MediaStream::new(file);
    if let Some(name) = path.file_name().and_then(|it| it.to_str()) {
        stream = stream.with_file_name(name);
    }
    debug!(path = %path.display(), "attaching local media file");
    Ok(MediaReference::Stream(stream))
}

async fn exists(path: &Path) -> Result<bool, ApipediaError> {
    match tokio::fs::metadata(path).await {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(ApipediaError::request(format!("{}: {err}", path.display()))),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tokio::io::AsyncReadExt;

    use super::*;

    #[tokio::test]
    async fn absent_and_empty_media_resolve_to_none() {
        assert!(resolve_media(None).await.unwrap().is_none());
        assert!(resolve_media(Some(Media::from(""))).await.unwrap().is_none());
        assert!(resolve_media(Some(Media::from("   "))).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn urls_are_not_touched_on_disk() {
        let resolved = resolve_media(Some(Media::from(
            "https://temp.apipedia.id/example/sample-1.pdf",
        )))
        .await
        .unwrap();
        assert!(matches!(
            resolved,
            MediaReference::RemoteUrl(url) if url == "https://temp.apipedia.id/example/sample-1.pdf"
        ));
    }

    #[tokio::test]
    async fn url_whitespace_is_trimmed() {
        let resolved = resolve_media(Some(Media::from("  https://x.example/a.pdf \n")))
            .await
            .unwrap();
        assert!(matches!(
            resolved,
            MediaReference::RemoteUrl(url) if url == "https://x.example/a.pdf"
        ));
    }

    #[tokio::test]
    async fn missing_file_is_reported_with_path() {
        let err = resolve_media(Some(Media::from("./nonexistent-file.jpg")))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "File does not exist: ./nonexistent-file.jpg");
    }

    #[tokio::test]
    async fn existing_file_is_opened_as_stream() {
        let mut file = tempfile::Builder::new()
            .suffix(".jpg")
            .tempfile()
            .unwrap();
        file.write_all(b"jpeg-bytes").unwrap();
        let path = file.path().to_path_buf();

        let resolved = resolve_media(Some(Media::from(path.clone()))).await.unwrap();
        let MediaReference::Stream(stream) = resolved else {
            panic!("expected a stream for an existing file");
        };
        assert_eq!(
            stream.file_name(),
            path.file_name().and_then(|it| it.to_str())
        );

        let (mut reader, _) = stream.into_parts();
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await.unwrap();
        assert_eq!(bytes, b"jpeg-bytes");
    }

    #[tokio::test]
    async fn string_path_is_treated_as_local_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let location = file.path().to_string_lossy().into_owned();
        let resolved = resolve_media(Some(Media::from(location))).await.unwrap();
        assert!(matches!(resolved, MediaReference::Stream(_)));
    }

    #[tokio::test]
    async fn streams_pass_through() {
        let stream = MediaStream::new(tokio::io::empty()).with_file_name("a.png");
        let resolved = resolve_media(Some(Media::from(stream))).await.unwrap();
        assert!(
            matches!(resolved, MediaReference::Stream(stream) if stream.file_name() == Some("a.png"))
        );
    }
}
