use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Cannot proceed: root directory '{}' is not accessible.",
        .root.display()
    )]
    RootInaccessible {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk the directory tree.")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to read '{}'.", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{}'.", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// None of the candidate encodings could decode the file without errors.
    #[error("Cannot decode '{}' as text. Tried: {}.", .path.display(), .tried.join(", "))]
    Decode { path: PathBuf, tried: Vec<String> },

    #[error("Configuration error: {0}.")]
    ConfigValidation(String),

    #[error("Failed to serialize report.")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with pkgfix's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Messages of `err` followed by every underlying cause, outermost first.
/// A cause already spelled out by the message above it is skipped.
pub fn error_chain(err: &Error) -> Vec<String> {
    let mut messages = vec![err.to_string()];
    let mut cause = std::error::Error::source(err);
    while let Some(current) = cause {
        let message = current.to_string();
        if !messages.last().is_some_and(|last| last.contains(&message)) {
            messages.push(message);
        }
        cause = current.source();
    }
    messages
}

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error and each of its causes to stderr and exits with status
/// code 1
pub fn default_error_handler(err: Error) {
    let mut chain = error_chain(&err).into_iter();
    if let Some(top) = chain.next() {
        eprintln!("{top}");
    }
    for cause in chain {
        eprintln!("  caused by: {cause}");
    }
    std::process::exit(crate::constants::exit_codes::FAILURE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_lists_every_tried_encoding() {
        let err = Error::Decode {
            path: PathBuf::from("docs/logo.md"),
            tried: vec!["UTF-8".to_string(), "GBK".to_string()],
        };
        assert_eq!(err.to_string(), "Cannot decode 'docs/logo.md' as text. Tried: UTF-8, GBK.");
    }

    #[test]
    fn file_errors_keep_the_io_source() {
        let err = Error::FileWrite {
            path: PathBuf::from("A.java"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "denied");
        assert!(err.to_string().starts_with("Failed to write 'A.java'"));
    }

    #[test]
    fn chain_lists_the_io_cause_under_the_message() {
        let err = Error::RootInaccessible {
            root: PathBuf::from("/srv/excel"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(
            error_chain(&err),
            vec![
                "Cannot proceed: root directory '/srv/excel' is not accessible.".to_string(),
                "No such file or directory".to_string(),
            ]
        );
    }

    #[test]
    fn chain_of_sourceless_error_is_its_message() {
        let err = Error::ConfigValidation("extension list is empty".to_string());
        assert_eq!(error_chain(&err), vec!["Configuration error: extension list is empty."]);
    }
}
