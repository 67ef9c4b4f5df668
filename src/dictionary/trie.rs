//! Estructura Trie para búsqueda de palabras insensible a mayúsculas

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::mem;

use tracing::trace;

use super::entry::Entry;
use super::index::{DictionaryIndex, DISPLAY_LIMIT};

/// Coste estimado de contabilidad interna por cada hijo del mapa
const CHILD_BOOKKEEPING: usize = 16;

/// Nodo del Trie
///
/// `entry` está presente si y solo si `is_word` es verdadero.
#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    entry: Option<Box<Entry>>,
    is_word: bool,
}

/// Trie indexado por la clave en minúsculas (solo ASCII)
#[derive(Debug, Default)]
pub struct PrefixTrie {
    root: TrieNode,
    node_count: usize,
}

fn fold(key: &str) -> impl Iterator<Item = char> + '_ {
    key.chars().map(|c| c.to_ascii_lowercase())
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
            node_count: 0,
        }
    }

    /// Inserta una entrada; si la clave ya existe se sobrescribe
    ///
    /// Solo la creación de nodos hijos incrementa el contador.
    pub fn insert(&mut self, entry: Entry) {
        let mut node = &mut self.root;
        let mut created = 0;

        for ch in fold(entry.key()) {
            node = node.children.entry(ch).or_insert_with(|| {
                created += 1;
                TrieNode::default()
            });
        }
        self.node_count += created;

        if node.is_word {
            trace!(key = entry.key(), "entrada sobrescrita");
        }
        node.is_word = true;
        node.entry = Some(Box::new(entry));
    }

    fn find_node(&self, key: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in fold(key) {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    /// Obtiene la entrada de una palabra completa
    ///
    /// Un prefijo que no termina una palabra devuelve `None`.
    pub fn search(&self, key: &str) -> Option<&Entry> {
        let node = self.find_node(key)?;
        if node.is_word {
            node.entry.as_deref()
        } else {
            None
        }
    }

    /// Obtiene las entradas cuyas claves empiezan con un prefijo
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<&Entry> {
        let mut words = Vec::new();
        if let Some(node) = self.find_node(prefix) {
            Self::collect_entries(node, usize::MAX, &mut words);
        }
        words
    }

    /// Primeras `limit` palabras en un recorrido en profundidad
    pub fn first_words(&self, limit: usize) -> Vec<&Entry> {
        let mut words = Vec::with_capacity(limit.min(self.node_count));
        Self::collect_entries(&self.root, limit, &mut words);
        words
    }

    fn collect_entries<'a>(node: &'a TrieNode, limit: usize, words: &mut Vec<&'a Entry>) {
        if words.len() >= limit {
            return;
        }

        if node.is_word {
            if let Some(entry) = node.entry.as_deref() {
                words.push(entry);
            }
        }

        for child in node.children.values() {
            if words.len() >= limit {
                break;
            }
            Self::collect_entries(child, limit, words);
        }
    }

    /// Suma nodos, entradas del mapa de hijos y entradas almacenadas
    pub fn memory_usage(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        Self::memory_size(&self.root)
    }

    fn memory_size(node: &TrieNode) -> usize {
        let mut size = mem::size_of::<TrieNode>();

        size += node.children.len()
            * (mem::size_of::<char>() + mem::size_of::<usize>() + CHILD_BOOKKEEPING);

        if let Some(ref entry) = node.entry {
            size += mem::size_of::<Entry>() + entry.heap_capacity();
        }

        size + node.children.values().map(Self::memory_size).sum::<usize>()
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Verifica si el Trie está vacío
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty() && !self.root.is_word
    }

    /// Escribe las primeras palabras, una por línea
    pub fn write_all_words(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "Trie is empty!");
        }

        for entry in self.first_words(DISPLAY_LIMIT) {
            writeln!(out, "{}", entry.key())?;
        }
        Ok(())
    }

    pub fn display_all_words(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_all_words(&mut lock)
    }

    /// Escribe el árbol de caracteres; no desciende bajo un nodo terminal
    pub fn write_structure(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "Trie is empty!");
        }

        writeln!(out, "Trie Structure (showing first {} words):", DISPLAY_LIMIT)?;
        writeln!(out)?;
        writeln!(out, "root")?;

        let mut count = 0;
        Self::write_node(out, &self.root, "", &mut count)
    }

    fn write_node(
        out: &mut dyn Write,
        node: &TrieNode,
        prefix: &str,
        count: &mut usize,
    ) -> io::Result<()> {
        if *count >= DISPLAY_LIMIT {
            return Ok(());
        }

        if node.is_word {
            if let Some(ref entry) = node.entry {
                writeln!(out, "{}+-- [{}]", prefix, entry.key())?;
                *count += 1;
                return Ok(());
            }
        }

        let last = node.children.len();
        for (i, (ch, child)) in node.children.iter().enumerate() {
            if *count >= DISPLAY_LIMIT {
                break;
            }

            let is_last = i + 1 == last;
            writeln!(out, "{}{}'{}'", prefix, if is_last { "+-- " } else { "|-- " }, ch)?;

            let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "|   " });
            Self::write_node(out, child, &child_prefix, count)?;
        }
        Ok(())
    }
}

impl DictionaryIndex for PrefixTrie {
    fn name(&self) -> &str {
        "Trie"
    }

    fn insert(&mut self, entry: Entry) {
        PrefixTrie::insert(self, entry);
    }

    fn search(&self, key: &str) -> Option<&Entry> {
        PrefixTrie::search(self, key)
    }

    fn memory_usage(&self) -> usize {
        PrefixTrie::memory_usage(self)
    }

    fn node_count(&self) -> usize {
        self.node_count
    }

    fn write_structure(&self, out: &mut dyn Write) -> io::Result<()> {
        PrefixTrie::write_structure(self, out)
    }
}
