//! Errors surfaced by the contact controller.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("No existe un contacto con id {0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),
}
