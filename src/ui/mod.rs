mod errors;
mod file_source;
mod renderer;
mod session;

pub use errors::UploadError;
pub use file_source::{FileSource, FsFileSource};
pub use renderer::{Renderer, TerminalRenderer};
pub use session::UploadSession;
