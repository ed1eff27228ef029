use thiserror::Error;

use crate::cloze::ClozeError;
use crate::model::{EntryError, SettingsError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Entry(#[from] EntryError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Cloze(#[from] ClozeError),
}
