use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// No clip with the requested id exists in the catalog.
    #[error("Clip not found: {0}")]
    ClipNotFound(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
