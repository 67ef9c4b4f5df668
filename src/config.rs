//! Configuración y argumentos CLI

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;

/// Palabras del diccionario usadas por defecto en la comparación de rendimiento
pub const DEFAULT_TEST_WORDS: [&str; 10] = [
    "Awfully",
    "Chirographer",
    "Luminate",
    "Hexastich",
    "Preoccupy",
    "Stanzaic",
    "Whot",
    "Restorationism",
    "Inkhornism",
    "Copper-nickel",
];

#[derive(Parser, Debug, Clone)]
#[command(name = "dictree")]
#[command(about = "Búsqueda en diccionario con árbol binario y trie")]
#[command(version)]
pub struct Config {
    /// Archivo de diccionario (formato: palabra|categoría|definición)
    #[arg(short, long, default_value = "dictionary.txt", env = "DICTREE_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Palabra para la comparación de rendimiento (repetible; reemplaza las de defecto)
    #[arg(short = 't', long = "test-word")]
    pub test_words: Vec<String>,

    /// Busca una palabra y termina sin abrir el menú
    #[arg(short, long)]
    pub search: Option<String>,

    /// Activa los logs de depuración
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from("dictionary.txt"),
            test_words: Vec::new(),
            search: None,
            verbose: false,
        }
    }
}

impl Config {
    pub fn from_args(args: Vec<String>) -> Result<Self> {
        Ok(Self::try_parse_from(args)?)
    }

    /// Palabras de la comparación de rendimiento
    pub fn performance_cases(&self) -> Vec<String> {
        if self.test_words.is_empty() {
            DEFAULT_TEST_WORDS.iter().map(|w| w.to_string()).collect()
        } else {
            self.test_words.clone()
        }
    }
}
