//! Resultado de agregar o leer una marca de tiempo.

use chrono::{Local, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Ruta acompañada del instante embebido en su nombre.
///
/// Producido por [`add`](crate::add), con la ruta ya marcada, y por
/// [`read`](crate::read), con la ruta original sin la marca.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct StampedFile {
    path: PathBuf,
    timestamp: NaiveDateTime,
}

impl StampedFile {
    pub fn new(path: impl Into<PathBuf>, timestamp: NaiveDateTime) -> Self {
        Self {
            path: path.into(),
            timestamp,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Tiempo transcurrido desde la marca según el reloj local actual.
    ///
    /// Se recalcula en cada llamada; es negativo si la marca está en el futuro.
    pub fn age(&self) -> TimeDelta {
        self.age_at(Local::now().naive_local())
    }

    /// Tiempo transcurrido desde la marca hasta `now`.
    pub fn age_at(&self, now: NaiveDateTime) -> TimeDelta {
        now - self.timestamp
    }

    pub fn into_parts(self) -> (PathBuf, NaiveDateTime) {
        (self.path, self.timestamp)
    }
}

impl From<StampedFile> for (PathBuf, NaiveDateTime) {
    fn from(stamped: StampedFile) -> Self {
        stamped.into_parts()
    }
}
