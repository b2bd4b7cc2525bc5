use thiserror::Error;

use crate::client::errors::ClientError;
use crate::search::QueryError;

pub mod search;

#[derive(Debug, Error)]
/// Errors surfaced by service functions to the routes.
pub enum ServiceError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
