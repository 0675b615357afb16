use std::future::Future;
use std::path::Path;

use anyhow::Result;

/// Supplies the decoded text of a user-selected file.
pub trait FileSource: Send + Sync {
    fn read_text(&self, path: &Path) -> impl Future<Output = Result<String>> + Send;
}

/// Reads files from the local filesystem.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileSource;

impl FileSource for FsFileSource {
    fn read_text(&self, path: &Path) -> impl Future<Output = Result<String>> + Send {
        let path = path.to_path_buf();

        async move {
            let bytes = tokio::fs::read(&path).await?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}
