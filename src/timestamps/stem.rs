//! Validación, división y reconstrucción del nombre base de una ruta.

use chrono::{NaiveDateTime, Timelike};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::constants::{FORMAT, MIN_SUFFIX_LENGTH, SEPARATOR, TIMESTAMP_LAYOUT};
use crate::error::{PathIssue, StampError, TimestampIssue};

/// Devuelve el nombre base de `path` si es utilizable.
pub fn validate_stem(path: &Path) -> Result<&str, StampError> {
    let invalid = |reason| StampError::InvalidPath {
        path: path.to_path_buf(),
        reason,
    };

    let stem = path
        .file_stem()
        .ok_or_else(|| invalid(PathIssue::BlankStem))?
        .to_str()
        .ok_or_else(|| invalid(PathIssue::NonUtf8Stem))?;

    if stem.trim().is_empty() {
        return Err(invalid(PathIssue::BlankStem));
    }

    Ok(stem)
}

/// Separa `stem` en `(nombre_original, marca_sin_interpretar)`.
///
/// El separador debe estar exactamente a [`MIN_SUFFIX_LENGTH`] caracteres del
/// final y precedido de al menos un carácter.
pub fn split_stem(stem: &str) -> Result<(&str, &str), TimestampIssue> {
    let (index, found) = stem
        .char_indices()
        .rev()
        .nth(MIN_SUFFIX_LENGTH - 1)
        .filter(|&(index, _)| index > 0)
        .ok_or(TimestampIssue::TooShort)?;

    if found != SEPARATOR {
        return Err(TimestampIssue::MissingSeparator { found });
    }

    Ok((&stem[..index], &stem[index + SEPARATOR.len_utf8()..]))
}

/// Interpreta `raw` con el formato fijo, sin tolerar signos, espacios ni campos sin relleno.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, TimestampIssue> {
    let unparsable = |source| TimestampIssue::Unparsable {
        raw: raw.to_string(),
        source,
    };

    if !matches_layout(raw) {
        return Err(unparsable(None));
    }

    let timestamp =
        NaiveDateTime::parse_from_str(raw, FORMAT).map_err(|error| unparsable(Some(error)))?;

    // chrono admite el segundo 60 como salto de segundo.
    if timestamp.nanosecond() >= 1_000_000_000 {
        return Err(unparsable(None));
    }

    Ok(timestamp)
}

pub fn matches_layout(raw: &str) -> bool {
    raw.len() == TIMESTAMP_LAYOUT.len()
        && raw
            .bytes()
            .zip(TIMESTAMP_LAYOUT.bytes())
            .all(|(byte, expected)| {
                if expected.is_ascii_alphabetic() {
                    byte.is_ascii_digit()
                } else {
                    byte == expected
                }
            })
}

/// Reemplaza el nombre base conservando directorio y extensión.
pub fn with_stem(path: &Path, stem: &str) -> PathBuf {
    let mut name = OsString::from(stem);
    if let Some(extension) = path.extension() {
        name.push(".");
        name.push(extension);
    }
    path.with_file_name(name)
}
