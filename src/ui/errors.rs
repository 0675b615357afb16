use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    //NOTE: The same message is shown when no file was selected at all.
    #[error("You've uploaded more than one file.")]
    FileCount {
        count: usize
    },
    #[error("The file [{}] could not be read.", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>
    }
}
