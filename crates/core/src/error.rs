use thiserror::Error;

use crate::model::SettingsError;
use crate::vocabulary::LoadError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
