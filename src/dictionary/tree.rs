//! Árbol binario de búsqueda (sin balancear) ordenado por clave

use std::cmp::Ordering;
use std::io::{self, Write};
use std::mem;

use tracing::trace;

use super::entry::Entry;
use super::index::{DictionaryIndex, DISPLAY_LIMIT};

/// Nodo del árbol
#[derive(Debug)]
struct TreeNode {
    entry: Entry,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn new(entry: Entry) -> Self {
        Self {
            entry,
            left: None,
            right: None,
        }
    }
}

/// Árbol binario de búsqueda sensible a mayúsculas
///
/// No se rebalancea: con entradas ordenadas degenera en una lista, por lo
/// que inserción, búsqueda, memoria y destrucción recorren el árbol de
/// forma iterativa.
#[derive(Debug, Default)]
pub struct OrderedTree {
    root: Option<Box<TreeNode>>,
    node_count: usize,
}

impl OrderedTree {
    pub fn new() -> Self {
        Self {
            root: None,
            node_count: 0,
        }
    }

    /// Inserta una entrada. Si la clave ya existe se conserva la primera.
    ///
    /// El contador de nodos se incrementa siempre, también con duplicados.
    pub fn insert(&mut self, entry: Entry) {
        self.node_count += 1;

        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match entry.cmp(&node.entry) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!(key = entry.key(), "clave duplicada descartada");
                    return;
                }
            };
        }
        *slot = Some(Box::new(TreeNode::new(entry)));
    }

    /// Busca una clave exacta (sensible a mayúsculas)
    pub fn search(&self, key: &str) -> Option<&Entry> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.entry.key()) {
                Ordering::Equal => return Some(&node.entry),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Suma el tamaño de cada nodo más la capacidad de sus cadenas
    pub fn memory_usage(&self) -> usize {
        let mut total = 0;
        let mut pending: Vec<&TreeNode> = self.root.as_deref().into_iter().collect();

        while let Some(node) = pending.pop() {
            total += mem::size_of::<TreeNode>() + node.entry.heap_capacity();
            pending.extend(node.left.as_deref());
            pending.extend(node.right.as_deref());
        }

        total
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Recorre las entradas en orden ascendente de clave
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }

    /// Escribe los primeros nodos en preorden con ramas L/R
    pub fn write_structure(&self, out: &mut dyn Write) -> io::Result<()> {
        let Some(root) = self.root.as_deref() else {
            return writeln!(out, "Tree is empty!");
        };

        writeln!(
            out,
            "Binary Search Tree Structure (showing first {} words):",
            DISPLAY_LIMIT
        )?;
        writeln!(out)?;

        let mut count = 0;
        Self::write_node(out, root, "", false, &mut count)
    }

    fn write_node(
        out: &mut dyn Write,
        node: &TreeNode,
        prefix: &str,
        is_left: bool,
        count: &mut usize,
    ) -> io::Result<()> {
        if *count >= DISPLAY_LIMIT {
            return Ok(());
        }

        let branch = if is_left { "|--L: " } else { "+--R: " };
        writeln!(out, "{}{}{}", prefix, branch, node.entry.key())?;
        *count += 1;

        let child_prefix = format!("{}{}", prefix, if is_left { "|   " } else { "    " });
        if let Some(left) = node.left.as_deref() {
            Self::write_node(out, left, &child_prefix, true, count)?;
        }
        if let Some(right) = node.right.as_deref() {
            Self::write_node(out, right, &child_prefix, false, count)?;
        }
        Ok(())
    }
}

impl Drop for OrderedTree {
    fn drop(&mut self) {
        // Un árbol degenerado desbordaría la pila con la destrucción recursiva de Box
        let mut pending: Vec<Box<TreeNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl DictionaryIndex for OrderedTree {
    fn name(&self) -> &str {
        "Binary Tree"
    }

    fn insert(&mut self, entry: Entry) {
        OrderedTree::insert(self, entry);
    }

    fn search(&self, key: &str) -> Option<&Entry> {
        OrderedTree::search(self, key)
    }

    fn memory_usage(&self) -> usize {
        OrderedTree::memory_usage(self)
    }

    fn node_count(&self) -> usize {
        self.node_count
    }

    fn write_structure(&self, out: &mut dyn Write) -> io::Result<()> {
        OrderedTree::write_structure(self, out)
    }
}

/// Iterador en orden sobre las entradas del árbol
pub struct Iter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut node: Option<&'a TreeNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.entry)
    }
}

impl<'a> IntoIterator for &'a OrderedTree {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
