//! Gramática fija de las marcas de tiempo en nombres de archivo.

/// Carácter que une el nombre base original con la marca de tiempo.
pub const SEPARATOR: char = '_';

/// Formato `strftime` usado para escribir y leer la marca.
pub const FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Forma textual de una marca formateada. Las letras son posiciones de dígitos;
/// cualquier otro carácter debe aparecer literalmente.
pub const TIMESTAMP_LAYOUT: &str = "YYYY-MM-DD_HH-MM-SS";

/// Longitud exacta de una marca formateada con [`FORMAT`].
pub const TIMESTAMP_LENGTH: usize = TIMESTAMP_LAYOUT.len();

/// Caracteres finales mínimos para contener separador y marca.
pub const MIN_SUFFIX_LENGTH: usize = TIMESTAMP_LENGTH + SEPARATOR.len_utf8();
