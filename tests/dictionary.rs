//! Tests de integración: carga desde archivo y consultas sobre ambos índices.
//!
//! Ejecutar solo estos tests:  cargo test --test dictionary

use std::io::Write;

use dictree::dictionary::{DictionaryIndex, DictionaryLoader, OrderedTree, PrefixTrie};
use dictree::{report, DictionaryError, Entry};
use tempfile::NamedTempFile;

fn dictionary_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("no se pudo crear el archivo temporal");
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}

fn load(lines: &[&str]) -> (OrderedTree, PrefixTrie) {
    let file = dictionary_file(lines);
    let mut tree = OrderedTree::new();
    let mut trie = PrefixTrie::new();
    {
        let mut indexes: [&mut dyn DictionaryIndex; 2] = [&mut tree, &mut trie];
        DictionaryLoader::load_file(file.path(), &mut indexes).unwrap();
    }
    (tree, trie)
}

#[test]
fn test_sample_dictionary_lookups() {
    let (tree, trie) = load(&["apple|n.|a fruit", "ant|n.|an insect", "banana|n.|a fruit"]);

    assert_eq!(tree.search("ant").map(Entry::description), Some("an insect"));
    assert!(tree.search("Ant").is_none(), "el árbol distingue mayúsculas");
    assert_eq!(trie.search("ANT").map(Entry::description), Some("an insect"));

    assert_eq!(tree.node_count(), 3);
    assert_eq!(trie.node_count(), 13);
}

#[test]
fn test_duplicates_follow_each_policy() {
    let (tree, trie) = load(&["Kiwi|n.|primera", "Kiwi|n.|segunda", "kiwi|n.|tercera"]);

    // Árbol: gana la primera; el contador cuenta cada inserción
    assert_eq!(tree.search("Kiwi").map(Entry::description), Some("primera"));
    assert_eq!(tree.search("kiwi").map(Entry::description), Some("tercera"));
    assert_eq!(tree.node_count(), 3);

    // Trie: gana la última; no se crean nodos nuevos
    assert_eq!(trie.search("KIWI").map(Entry::description), Some("tercera"));
    assert_eq!(trie.node_count(), 4);
}

#[test]
fn test_malformed_lines_are_skipped() {
    let file = dictionary_file(&["sin separadores", "Or|conj.|this | that", "a|b", "", "x||y"]);
    let mut tree = OrderedTree::new();
    let mut indexes: [&mut dyn DictionaryIndex; 1] = [&mut tree];

    let stats = DictionaryLoader::load_file(file.path(), &mut indexes).unwrap();
    assert_eq!(stats.loaded, 2);
    assert_eq!(stats.skipped, 3);
    assert_eq!(tree.search("Or").map(Entry::description), Some("this | that"));
    assert_eq!(tree.search("x").map(Entry::category), Some(""));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dictionary.txt");
    let mut trie = PrefixTrie::new();
    let mut indexes: [&mut dyn DictionaryIndex; 1] = [&mut trie];

    match DictionaryLoader::load_file(&path, &mut indexes) {
        Err(DictionaryError::Open { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("se esperaba DictionaryError::Open, se obtuvo {:?}", other),
    }
}

#[test]
fn test_indexes_are_interchangeable() {
    let (tree, trie) = load(&["apple|n.|a fruit", "banana|n.|a fruit"]);
    let indexes: [&dyn DictionaryIndex; 2] = [&tree, &trie];

    for index in indexes {
        assert!(index.search("apple").is_some(), "{}", index.name());
        assert!(index.search("cherry").is_none(), "{}", index.name());
        assert!(index.memory_usage() > 0, "{}", index.name());

        let (found, _nanos) = index.search_with_timing("banana");
        assert_eq!(found.map(Entry::key), Some("banana"));

        let mut dump = Vec::new();
        index.write_structure(&mut dump).unwrap();
        assert!(String::from_utf8(dump).unwrap().contains("banana"));
    }
}

#[test]
fn test_empty_indexes_report_empty() {
    let (tree, trie) = load(&[]);

    for index in [&tree as &dyn DictionaryIndex, &trie] {
        assert_eq!(index.memory_usage(), 0);
        assert_eq!(index.node_count(), 0);

        let mut dump = Vec::new();
        index.write_structure(&mut dump).unwrap();
        assert!(String::from_utf8(dump).unwrap().ends_with("is empty!\n"));
    }
}

#[test]
fn test_memory_report_over_loaded_file() {
    let (tree, trie) = load(&["apple|n.|a fruit", "ant|n.|an insect", "banana|n.|a fruit"]);
    let mut out = Vec::new();
    report::display_memory_usage(&mut out, &tree, &trie).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains(&format!("{} bytes", tree.memory_usage())));
    assert!(output.contains(&format!("{} bytes", trie.memory_usage())));
}
