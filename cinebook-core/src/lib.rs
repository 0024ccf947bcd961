pub mod booking;
pub mod repository;
pub mod validation;

pub use booking::BookingService;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),
    #[error("User or Movie not found")]
    ReferenceNotFound,
    #[error("{0}")]
    Store(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
