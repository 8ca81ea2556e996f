use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Bad command-line input, detected before any parsing.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("no files ending with `.vcf` in directory `{}`", dir.display())]
    NoInput { dir: PathBuf },

    #[error("Format error in `{}`: {source}", path.display())]
    Format {
        path: PathBuf,
        source: vcf2tsv_rfc::error::RfcError,
    },

    #[error("I/O error on `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    CoreError(#[from] vcf2tsv_core::error::CoreError),
}

impl AppError {
    /// Process exit status for this error.
    ///
    /// Pre-flight failures share status 2 with command-line usage errors.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Configuration(_) | Self::NoInput { .. } => 2,
            Self::Format { .. } | Self::Io { .. } | Self::CoreError(_) => 1,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(AppError::Configuration("bad".into()).exit_code(), 2);
        assert_eq!(
            AppError::NoInput {
                dir: PathBuf::from("cards")
            }
            .exit_code(),
            2
        );

        let io = AppError::io("out.tsv")(std::io::Error::other("disk full"));
        assert_eq!(io.exit_code(), 1);
    }

    #[test]
    fn no_input_message_names_directory() {
        let err = AppError::NoInput {
            dir: PathBuf::from("cards"),
        };
        assert_eq!(
            err.to_string(),
            "no files ending with `.vcf` in directory `cards`"
        );
    }
}
