use chrono::Utc;
use rand::Rng;
use storage::object_store::ObjectStore;

use crate::error::{WebError, WebResult};

const DEFAULT_EXTENSION: &str = "jpg";
const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// Folder an uploaded athlete image is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Avatar,
    Cover,
    /// No `type` part was sent
    Unspecified,
}

impl ImageKind {
    pub fn parse(value: Option<&str>) -> WebResult<Self> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::Unspecified),
            Some("avatar") => Ok(Self::Avatar),
            Some("cover") => Ok(Self::Cover),
            Some(other) => Err(WebError::BadRequest(format!(
                "Invalid image type '{other}'; expected 'avatar' or 'cover'"
            ))),
        }
    }

    pub fn folder(self) -> &'static str {
        match self {
            Self::Avatar => "avatar",
            Self::Cover => "cover",
            Self::Unspecified => "image",
        }
    }
}

/// A file part received from the multipart form
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Extension of the original filename, `jpg` when there is none.
pub fn file_extension(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext,
        _ => DEFAULT_EXTENSION,
    }
}

const RANDOM_SUFFIX_LEN: usize = 8;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Short lowercase base-36 token for unique object names
fn random_suffix() -> String {
    let mut rng = rand::rng();
    (0..RANDOM_SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

/// `{folder}/{epoch_millis}-{random_base36}.{ext}`
pub fn storage_path(kind: ImageKind, filename: &str) -> String {
    format!(
        "{}/{}-{}.{}",
        kind.folder(),
        Utc::now().timestamp_millis(),
        random_suffix(),
        file_extension(filename)
    )
}

/// Store the file in the object store and return its public URL.
pub async fn upload_image(
    store: &dyn ObjectStore,
    kind: ImageKind,
    file: UploadedFile,
) -> WebResult<String> {
    let path = storage_path(kind, &file.filename);
    let content_type = file
        .content_type
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

    let stored_path = store.upload(&path, file.bytes, &content_type).await?;
    let url = store.public_url(&stored_path);

    tracing::info!(path = %stored_path, "Uploaded athlete image");

    Ok(url)
}
