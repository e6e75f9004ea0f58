use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("Route path {0:?} is registered more than once")]
    DuplicatePath(String),
    #[error("Route name {0:?} is registered more than once")]
    DuplicateName(String),
    #[error("Route path {0:?} must start with '/'")]
    InvalidPath(String),
}
