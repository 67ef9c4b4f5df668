//! Dictree - Diccionario en memoria con dos índices de búsqueda
//!
//! Carga entradas `palabra|categoría|definición` y permite consultarlas con
//! un árbol binario de búsqueda (sensible a mayúsculas) o con un trie
//! (insensible a mayúsculas ASCII).

pub mod config;
pub mod dictionary;
pub mod error;
pub mod menu;
pub mod report;

pub use config::Config;
pub use dictionary::{DictionaryIndex, DictionaryLoader, Entry, OrderedTree, PrefixTrie};
pub use error::{DictionaryError, Result};
