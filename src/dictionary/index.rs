//! Contrato común de los índices del diccionario

use std::io::{self, Write};
use std::time::Instant;

use super::entry::Entry;

/// Número máximo de elementos que muestran los volcados de estructura
pub const DISPLAY_LIMIT: usize = 10;

/// Trait que comparten el árbol binario y el trie
///
/// Permite que la capa de informes compare ambas estructuras a través de
/// `&dyn DictionaryIndex` sin conocer su tipo concreto.
pub trait DictionaryIndex {
    /// Nombre legible de la estructura (ej: "Binary Tree")
    fn name(&self) -> &str;

    /// Inserta una entrada. Nunca falla.
    fn insert(&mut self, entry: Entry);

    /// Busca por clave exacta según la política de la estructura
    fn search(&self, key: &str) -> Option<&Entry>;

    /// Igual que `search`, midiendo el tiempo con un reloj monotónico.
    ///
    /// Una lectura de 0 ns es válida.
    fn search_with_timing(&self, key: &str) -> (Option<&Entry>, u128) {
        let start = Instant::now();
        let result = self.search(key);
        let elapsed = start.elapsed().as_nanos();
        (result, elapsed)
    }

    /// Memoria aproximada en bytes; 0 si la estructura está vacía
    fn memory_usage(&self) -> usize;

    /// Contador de nodos que mantiene la estructura
    fn node_count(&self) -> usize;

    /// Escribe el volcado de la estructura (como máximo `DISPLAY_LIMIT` elementos)
    fn write_structure(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Muestra la estructura por salida estándar
    fn display_structure(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_structure(&mut lock)
    }
}
