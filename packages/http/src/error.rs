use remotefs_vfs::Error as VfsError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl From<Error> for VfsError {
    fn from(error: Error) -> Self {
        VfsError::Transport {
            message: error.to_string(),
        }
    }
}
