//! Television errors.

use thiserror::Error;

/// Errors raised by the television and its collaborators.
///
/// Setup errors (`UnsupportedSpec`, `UnsupportedRequest`, `UnsupportedFps`)
/// are recoverable
/// and leave the television untouched. Everything else raised while a
/// signal is being processed is fatal: the frame being decoded is no longer
/// meaningful.
#[derive(Debug, Error)]
pub enum TvError {
    #[error("television: unsupported spec ({0})")]
    UnsupportedSpec(String),

    #[error("television: unhandled tv state request ({0})")]
    UnsupportedRequest(String),

    #[error("television: unsupported frame rate ({0})")]
    UnsupportedFps(f32),

    #[error("television: protocol violation: {0}")]
    Protocol(String),

    #[error("television: {collaborator}: {message}")]
    Collaborator {
        collaborator: &'static str,
        message: String,
    },

    #[error("television: {0}")]
    Io(#[from] std::io::Error),
}

impl TvError {
    /// Whether the error must end the emulation session.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::UnsupportedSpec(_) | Self::UnsupportedRequest(_) | Self::UnsupportedFps(_)
        )
    }

    pub(crate) fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_errors_are_recoverable() {
        assert!(!TvError::UnsupportedSpec("SECAM".into()).is_fatal());
        assert!(!TvError::UnsupportedRequest("colour".into()).is_fatal());
        assert!(!TvError::UnsupportedFps(f32::NAN).is_fatal());
        assert!(TvError::protocol("bad HSYNC").is_fatal());
        assert!(
            TvError::Collaborator {
                collaborator: "renderer",
                message: "gone".into()
            }
            .is_fatal()
        );
    }

    #[test]
    fn messages_name_the_television() {
        assert_eq!(
            TvError::UnsupportedSpec("SECAM".into()).to_string(),
            "television: unsupported spec (SECAM)"
        );
        assert_eq!(
            TvError::protocol("HSYNC held for 20 clocks").to_string(),
            "television: protocol violation: HSYNC held for 20 clocks"
        );
    }
}
