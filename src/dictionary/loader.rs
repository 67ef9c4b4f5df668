//! Cargador de diccionarios desde archivos

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use super::entry::Entry;
use super::index::DictionaryIndex;
use crate::error::{DictionaryError, Result};

/// Resultado de una carga
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Líneas convertidas en entradas
    pub loaded: usize,
    /// Líneas descartadas por formato incompleto
    pub skipped: usize,
}

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Interpreta una línea `palabra|categoría|definición`
    ///
    /// Solo los dos primeros `|` separan campos: la definición es el resto
    /// de la línea y no puede estar vacía. La palabra y la categoría sí.
    pub fn parse_line(line: &str) -> Option<Entry> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let mut parts = line.splitn(3, '|');

        let word = parts.next()?;
        let category = parts.next()?;
        let definition = parts.next().filter(|d| !d.is_empty())?;

        Some(Entry::new(word, category, definition))
    }

    /// Carga todas las entradas de un lector en cada uno de los índices
    pub fn load_into<R: BufRead>(
        reader: R,
        indexes: &mut [&mut dyn DictionaryIndex],
    ) -> Result<LoadStats> {
        let mut stats = LoadStats::default();

        for (line_num, line_result) in reader.lines().enumerate() {
            let line = line_result.map_err(|source| DictionaryError::Read {
                line: line_num + 1,
                source,
            })?;

            match Self::parse_line(&line) {
                Some(entry) => {
                    for index in indexes.iter_mut() {
                        index.insert(entry.clone());
                    }
                    stats.loaded += 1;
                }
                None => {
                    debug!(line = line_num + 1, "línea ignorada: {:?}", line);
                    stats.skipped += 1;
                }
            }
        }

        Ok(stats)
    }

    /// Carga un diccionario desde un archivo
    pub fn load_file<P: AsRef<Path>>(
        path: P,
        indexes: &mut [&mut dyn DictionaryIndex],
    ) -> Result<LoadStats> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let stats = Self::load_into(BufReader::new(file), indexes)?;
        info!(
            path = %path.display(),
            loaded = stats.loaded,
            skipped = stats.skipped,
            "diccionario cargado"
        );
        Ok(stats)
    }
}
