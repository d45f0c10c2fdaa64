/// Common error type for dispatch operations.
#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error("coordinate not numeric: {0}")]
    CoordinateParse(String),
    #[error("render failure: {0}")]
    Render(String),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
