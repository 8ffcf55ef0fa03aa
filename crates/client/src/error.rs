//! Client error types.

use thiserror::Error;

use crate::form::FormErrors;

/// Errors surfaced by client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The form failed validation; nothing was sent.
    #[error("{0}")]
    Validation(#[from] FormErrors),

    /// The advisory existence check found the same name and state.
    #[error("institution already exists")]
    Duplicate,
}

impl ClientError {
    /// True if the server reported that the record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status { status: 404, .. })
    }
}

/// Which user action failed, for picking the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Delete,
}

impl Action {
    fn failure_message(self) -> &'static str {
        match self {
            Action::Create => "Erro ao salvar instituição.",
            Action::Update => "Erro ao atualizar instituição.",
            Action::Delete => "Erro ao excluir instituição.",
        }
    }
}

/// Text shown to the user when `action` fails with `err`.
pub fn user_message(action: Action, err: &ClientError) -> String {
    match err {
        ClientError::Validation(errors) => errors.to_string(),
        ClientError::Duplicate => "Uma instituição com este nome e UF já existe!".to_string(),
        ClientError::Http(_) | ClientError::Status { .. } => {
            action.failure_message().to_string()
        }
    }
}

/// Convenience type alias for client results.
pub type Result<T> = std::result::Result<T, ClientError>;
