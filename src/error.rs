//! Tipos de error para agregar y leer marcas de tiempo.

use std::path::PathBuf;
use thiserror::Error;

use crate::constants::SEPARATOR;

pub type Result<T> = std::result::Result<T, StampError>;

/// Errores producidos por [`add`](crate::add) y [`read`](crate::read).
#[derive(Debug, Error)]
pub enum StampError {
    /// La ruta no tiene un nombre base utilizable.
    #[error("La ruta `{}` no tiene un nombre base utilizable: {reason}", path.display())]
    InvalidPath {
        /// Ruta recibida.
        path: PathBuf,
        /// Motivo del rechazo.
        reason: PathIssue,
    },

    /// El nombre base no termina en una marca de tiempo válida.
    #[error("Marca de tiempo inválida en `{stem}`")]
    TimestampParse {
        /// Nombre base completo que se intentó interpretar.
        stem: String,
        /// Causa concreta.
        #[source]
        reason: TimestampIssue,
    },
}

impl StampError {
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }

    pub fn is_timestamp_parse(&self) -> bool {
        matches!(self, Self::TimestampParse { .. })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum PathIssue {
    #[error("el nombre base está vacío o solo contiene espacios")]
    BlankStem,
    #[error("el nombre base no es UTF-8 válido")]
    NonUtf8Stem,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TimestampIssue {
    #[error("el nombre base es demasiado corto para contener una marca de tiempo")]
    TooShort,

    #[error(
        "se esperaba {sep:?} antes de la marca de tiempo, se encontró {found:?}",
        sep = SEPARATOR
    )]
    MissingSeparator { found: char },

    #[error("no se pudo interpretar la marca de tiempo {raw:?}")]
    Unparsable {
        raw: String,
        #[source]
        source: Option<chrono::ParseError>,
    },
}
