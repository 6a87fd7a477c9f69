//! Error handling and exit codes.

use std::io;
use std::process::ExitCode;

use mathutil_core::constants::exit_codes;
use mathutil_core::error::MathError;

/// Map an error to the process exit code.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(err) = err.downcast_ref::<MathError>() {
        return match err {
            MathError::InvalidInput { .. } | MathError::UnexpectedEof(_) => {
                exit_codes::ERROR_INPUT
            }
            MathError::Io(_) => exit_codes::ERROR_IO,
        };
    }
    if err.downcast_ref::<io::Error>().is_some() {
        return exit_codes::ERROR_IO;
    }
    exit_codes::ERROR_GENERIC
}

/// [`exit_code_for`] as an [`ExitCode`].
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    u8::try_from(exit_code_for(err)).map_or(ExitCode::FAILURE, ExitCode::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        let invalid = anyhow::Error::from(MathError::invalid("integer", "x"));
        assert_eq!(exit_code_for(&invalid), 2);

        let eof = anyhow::Error::from(MathError::UnexpectedEof("number"));
        assert_eq!(exit_code_for(&eof), 2);

        let read_failed = anyhow::Error::from(MathError::Io(io::Error::other("stdin closed")));
        assert_eq!(exit_code_for(&read_failed), 3);

        let write_failed = anyhow::Error::from(io::Error::from(io::ErrorKind::BrokenPipe));
        assert_eq!(exit_code_for(&write_failed), 3);

        assert_eq!(exit_code_for(&anyhow::anyhow!("other")), 1);
    }

    #[test]
    fn errors_never_map_to_success() {
        let err = anyhow::Error::from(MathError::UnexpectedEof("integer"));
        assert_ne!(exit_code_for(&err), exit_codes::SUCCESS);
        assert_ne!(exit_code(&err), ExitCode::SUCCESS);
        assert_eq!(exit_code(&err), ExitCode::from(2));
    }
}
