pub mod dump;
pub mod info;


use std::io;

use flashstr::ImageError;

/// Failure of a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Image(#[from] ImageError),
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}
