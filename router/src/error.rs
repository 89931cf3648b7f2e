use crate::{loader::LoadError, params::ParamsError};
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum RouterError {
    #[error("no route matches {0}")]
    NoMatch(String),
    #[error("navigation to {0} was superseded by a later navigation")]
    Superseded(String),
    #[error(transparent)]
    Loader(#[from] LoadError),
    #[error("could not build view: {0}")]
    Params(#[from] ParamsError),
    #[error("could not create view: {0}")]
    View(String),
    #[error("history update failed: {0}")]
    Navigation(String),
    #[error("could not update outlet: {0}")]
    Outlet(String),
}
