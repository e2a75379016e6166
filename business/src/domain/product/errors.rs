use crate::domain::errors::RepositoryError;
use crate::domain::identity::errors::IdentityError;
use crate::domain::image::errors::ImageError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("auth.unauthenticated")]
    Unauthenticated,
    #[error("product.forbidden")]
    Forbidden,
    #[error("product.not_found")]
    NotFound,
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("image.invalid")]
    InvalidImage,
    #[error("image.too_large")]
    ImageTooLarge,
    #[error("product.store_write_failed")]
    StoreWriteFailed,
    /// The image blob was stored but the catalog write that should reference it
    /// failed. The blob stays behind and has to be reconciled out of band.
    #[error("product.store_write_failed")]
    ImageOrphaned { image_url: String },
    #[error("upstream.timeout")]
    UpstreamTimeout,
    #[error("repository.persistence")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ProductError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ProductError::NotFound,
            RepositoryError::Persistence => ProductError::StoreWriteFailed,
            RepositoryError::Timeout => ProductError::UpstreamTimeout,
            other => ProductError::Repository(other),
        }
    }
}

impl From<IdentityError> for ProductError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::Unauthenticated => ProductError::Unauthenticated,
            IdentityError::Timeout => ProductError::UpstreamTimeout,
        }
    }
}

impl From<ImageError> for ProductError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::InvalidImage => ProductError::InvalidImage,
            ImageError::ImageTooLarge => ProductError::ImageTooLarge,
            // Only reachable if the store reports a missing row during a write.
            ImageError::NotFound => ProductError::StoreWriteFailed,
            ImageError::Repository(e) => e.into(),
        }
    }
}
