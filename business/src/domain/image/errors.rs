#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image.invalid")]
    InvalidImage,
    #[error("image.too_large")]
    ImageTooLarge,
    #[error("image.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
