//! Tipos de error del diccionario

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errores de carga y configuración.
///
/// Una búsqueda sin resultado no es un error: se representa con `None`.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("no se pudo abrir el diccionario '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error leyendo la línea {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("argumentos inválidos: {0}")]
    Args(#[from] clap::Error),
}

pub type Result<T> = std::result::Result<T, DictionaryError>;
