//! Error types and filesystem failure classification

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a build. Only the root directory can produce these;
/// everything below the root is absorbed into the tree.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot open directory '{}': {source}", path.display())]
    ReadRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures reading or writing the persisted settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot read settings '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed settings '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot write settings '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Filesystem conditions treated as expected churn during a live walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverableKind {
    PermissionDenied,
    NameTooLong,
    Vanished,
}

impl RecoverableKind {
    pub fn describe(self) -> &'static str {
        match self {
            RecoverableKind::PermissionDenied => "permission denied",
            RecoverableKind::NameTooLong => "name too long",
            RecoverableKind::Vanished => "no longer exists",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    Recoverable(RecoverableKind),
    Unexpected,
}

#[cfg(unix)]
const ENAMETOOLONG: i32 = libc::ENAMETOOLONG;
#[cfg(windows)]
const ENAMETOOLONG: i32 = 206; // ERROR_FILENAME_EXCED_RANGE

/// Sort an I/O error into the recoverable set or the unexpected bucket.
pub fn classify(err: &io::Error) -> FailureClass {
    match err.kind() {
        io::ErrorKind::PermissionDenied => {
            FailureClass::Recoverable(RecoverableKind::PermissionDenied)
        }
        io::ErrorKind::NotFound => FailureClass::Recoverable(RecoverableKind::Vanished),
        #[cfg(any(unix, windows))]
        _ if err.raw_os_error() == Some(ENAMETOOLONG) => {
            FailureClass::Recoverable(RecoverableKind::NameTooLong)
        }
        _ => FailureClass::Unexpected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_permission_denied() {
        let err = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(
            classify(&err),
            FailureClass::Recoverable(RecoverableKind::PermissionDenied)
        );
    }

    #[test]
    fn test_classify_not_found_is_vanished() {
        let err = io::Error::from(io::ErrorKind::NotFound);
        assert_eq!(
            classify(&err),
            FailureClass::Recoverable(RecoverableKind::Vanished)
        );
    }

    #[test]
    #[cfg(any(unix, windows))]
    fn test_classify_name_too_long() {
        let err = io::Error::from_raw_os_error(ENAMETOOLONG);
        assert_eq!(
            classify(&err),
            FailureClass::Recoverable(RecoverableKind::NameTooLong)
        );
    }

    #[test]
    fn test_classify_other_is_unexpected() {
        let err = io::Error::other("disk on fire");
        assert_eq!(classify(&err), FailureClass::Unexpected);
        let err = io::Error::from(io::ErrorKind::InvalidData);
        assert_eq!(classify(&err), FailureClass::Unexpected);
    }

    #[test]
    fn test_build_error_message() {
        let err = BuildError::NotFound(PathBuf::from("missing"));
        assert_eq!(
            err.to_string(),
            "cannot access 'missing': No such file or directory"
        );
    }
}
