//! Marcas de tiempo embebidas en el nombre base de archivos.
//!
//! `add` agrega `_YYYY-MM-DD_HH-MM-SS` al nombre base de una ruta y `read`
//! recupera la ruta original junto con el instante interpretado. Ninguna de las
//! dos operaciones toca el sistema de archivos.

pub mod constants;
mod error;
mod stamped;
mod timestamps;

pub use error::{PathIssue, Result, StampError, TimestampIssue};
pub use stamped::StampedFile;
pub use timestamps::{add, add_now, read};
