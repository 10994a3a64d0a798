//! Operaciones para agregar y leer marcas de tiempo en nombres de archivo.

mod stem;

use chrono::{Local, NaiveDateTime};
use std::path::Path;
use tracing::debug;

use crate::constants::{FORMAT, SEPARATOR};
use crate::error::{Result, StampError, TimestampIssue};
use crate::stamped::StampedFile;
use stem::{parse_timestamp, split_stem, validate_stem, with_stem};

/// Agrega `timestamp` al nombre base de `path`.
///
/// Sin marca explícita se usa la hora local actual. El resultado conserva el
/// instante recibido tal cual, incluidas las fracciones de segundo que el
/// nombre no puede representar.
///
/// ```
/// use chrono::NaiveDate;
/// use std::path::Path;
///
/// let moment = NaiveDate::from_ymd_opt(2025, 6, 20)
///     .and_then(|date| date.and_hms_opt(14, 5, 59))
///     .unwrap();
/// let stamped = filestamp::add("/a/b/file.txt", Some(moment)).unwrap();
/// assert_eq!(stamped.path(), Path::new("/a/b/file_2025-06-20_14-05-59.txt"));
/// ```
pub fn add(path: impl AsRef<Path>, timestamp: Option<NaiveDateTime>) -> Result<StampedFile> {
    let path = path.as_ref();
    let stem = validate_stem(path)?;
    let timestamp = timestamp.unwrap_or_else(|| Local::now().naive_local());

    let stamped = with_stem(
        path,
        &format!("{stem}{SEPARATOR}{}", timestamp.format(FORMAT)),
    );

    debug!(path = %stamped.display(), %timestamp, "marca de tiempo agregada");
    Ok(StampedFile::new(stamped, timestamp))
}

/// Agrega la hora local actual al nombre base de `path`.
pub fn add_now(path: impl AsRef<Path>) -> Result<StampedFile> {
    add(path, None)
}

/// Recupera la ruta original y el instante de una ruta producida por [`add`].
pub fn read(path: impl AsRef<Path>) -> Result<StampedFile> {
    let path = path.as_ref();
    let stem = validate_stem(path)?;

    let (original, timestamp) = split_and_parse(stem).map_err(|reason| {
        debug!(path = %path.display(), %reason, "marca de tiempo rechazada");
        StampError::TimestampParse {
            stem: stem.to_string(),
            reason,
        }
    })?;

    let original = with_stem(path, original);
    debug!(path = %original.display(), %timestamp, "marca de tiempo leída");
    Ok(StampedFile::new(original, timestamp))
}

fn split_and_parse(stem: &str) -> std::result::Result<(&str, NaiveDateTime), TimestampIssue> {
    let (original, raw) = split_stem(stem)?;
    Ok((original, parse_timestamp(raw)?))
}
