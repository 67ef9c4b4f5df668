//! Módulo de diccionario
//!
//! Proporciona la entrada del diccionario y dos índices en memoria
//! intercambiables: un árbol binario de búsqueda y un trie.

pub mod entry;
pub mod index;
pub mod loader;
pub mod tree;
pub mod trie;

pub use entry::Entry;
pub use index::{DictionaryIndex, DISPLAY_LIMIT};
pub use loader::{DictionaryLoader, LoadStats};
pub use tree::OrderedTree;
pub use trie::PrefixTrie;
