//! Entrada del diccionario: palabra, categoría gramatical y definición

use std::cmp::Ordering;
use std::fmt;

/// Registro del diccionario
///
/// La igualdad y el orden se definen solo sobre la clave (comparación
/// byte a byte, sensible a mayúsculas). La categoría y la definición no
/// intervienen.
#[derive(Debug, Clone, Default)]
pub struct Entry {
    key: String,
    category: String,
    description: String,
}

impl Entry {
    pub fn new(
        key: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            category: category.into(),
            description: description.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Capacidad reservada (no longitud) de los tres campos de texto
    pub fn heap_capacity(&self) -> usize {
        self.key.capacity() + self.category.capacity() + self.description.capacity()
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Word: {}", self.key)?;
        writeln!(f, "Part of Speech: {}", self.category)?;
        writeln!(f, "Definition: {}", self.description)?;
        write!(f, "-----------------------------------")
    }
}
