//! Informes por consola: búsqueda, rendimiento y memoria
//!
//! Solo depende de `DictionaryIndex`, de modo que compara cualquier par de
//! índices.

use std::io::{self, Write};

use crate::dictionary::{DictionaryIndex, Entry};

const RULE: &str = "========================================";

pub fn print_menu(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "     DICTIONARY SEARCH PROGRAM")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "1. Search for a word")?;
    writeln!(out, "2. Display Binary Tree structure")?;
    writeln!(out, "3. Display Trie structure")?;
    writeln!(out, "4. Compare performance: Binary Tree vs Trie")?;
    writeln!(out, "5. Display memory usage")?;
    writeln!(out, "6. Display first words in Trie")?;
    writeln!(out, "7. Search words by prefix (Trie)")?;
    writeln!(out, "0. Exit")?;
    writeln!(out, "{}", RULE)?;
    write!(out, "Enter your choice: ")?;
    out.flush()
}

fn write_lookup(
    out: &mut dyn Write,
    index: &dyn DictionaryIndex,
    found: Option<&Entry>,
    nanos: u128,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {} SEARCH RESULT ---", index.name().to_uppercase())?;
    match found {
        Some(entry) => {
            writeln!(out, "{}", entry)?;
            writeln!(out, "Search time: {} nanoseconds", nanos)
        }
        None => writeln!(out, "Word not found in dictionary!"),
    }
}

/// Busca una palabra en ambos índices y compara los tiempos
pub fn search_word(
    out: &mut dyn Write,
    a: &dyn DictionaryIndex,
    b: &dyn DictionaryIndex,
    word: &str,
) -> io::Result<()> {
    let (found_a, time_a) = a.search_with_timing(word);
    write_lookup(out, a, found_a, time_a)?;

    let (found_b, time_b) = b.search_with_timing(word);
    write_lookup(out, b, found_b, time_b)?;

    if found_a.is_some() || found_b.is_some() {
        writeln!(out)?;
        writeln!(out, "--- COMPARISON ---")?;
        writeln!(out, "{}: {} ns", a.name(), time_a)?;
        writeln!(out, "{}: {} ns", b.name(), time_b)?;
        if time_a < time_b {
            writeln!(out, "{} is faster by {} ns", a.name(), time_b - time_a)?;
        } else {
            writeln!(out, "{} is faster by {} ns", b.name(), time_a - time_b)?;
        }
    }
    Ok(())
}

/// Porcentaje de ventaja de `fast` sobre `slow`; 0 si `slow` es 0
fn advantage(fast: u128, slow: u128) -> f64 {
    if slow == 0 {
        0.0
    } else {
        (slow - fast) as f64 / slow as f64 * 100.0
    }
}

/// Ejecuta una batería de búsquedas y resume los tiempos de cada índice
pub fn compare_performance(
    out: &mut dyn Write,
    a: &dyn DictionaryIndex,
    b: &dyn DictionaryIndex,
    cases: &[String],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "  PERFORMANCE COMPARISON: {} vs {}", a.name(), b.name())?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
    writeln!(out, "Performing {} searches...", cases.len())?;
    writeln!(out)?;

    writeln!(
        out,
        "{:<20}{:<15}{:<15}{:<15}",
        "Word",
        format!("{} (ns)", a.name()),
        format!("{} (ns)", b.name()),
        "Winner"
    )?;
    writeln!(out, "{}", "-".repeat(65))?;

    let (mut total_a, mut total_b) = (0u128, 0u128);
    let (mut found_a, mut found_b) = (0usize, 0usize);

    for case in cases {
        let (result_a, time_a) = a.search_with_timing(case);
        let (result_b, time_b) = b.search_with_timing(case);

        total_a += time_a;
        total_b += time_b;
        found_a += usize::from(result_a.is_some());
        found_b += usize::from(result_b.is_some());

        let winner = if time_a < time_b {
            format!("{} +{} ns", a.name(), time_b - time_a)
        } else {
            format!("{} +{} ns", b.name(), time_a - time_b)
        };
        writeln!(out, "{:<20}{:<15}{:<15}{}", case, time_a, time_b, winner)?;
    }

    writeln!(out, "{}", "-".repeat(65))?;
    writeln!(out)?;
    writeln!(out, "--- SUMMARY ---")?;
    writeln!(out, "Total time ({}): {} ns", a.name(), total_a)?;
    writeln!(out, "Total time ({}): {} ns", b.name(), total_b)?;

    let runs = cases.len().max(1) as u128;
    writeln!(out, "Average ({}): {} ns", a.name(), total_a / runs)?;
    writeln!(out, "Average ({}): {} ns", b.name(), total_b / runs)?;
    writeln!(out, "Found ({}): {}/{}", a.name(), found_a, cases.len())?;
    writeln!(out, "Found ({}): {}/{}", b.name(), found_b, cases.len())?;

    writeln!(out)?;
    if total_a < total_b {
        writeln!(
            out,
            "=> {} is faster than {} by {:.2}%",
            a.name(),
            b.name(),
            advantage(total_a, total_b)
        )
    } else {
        writeln!(
            out,
            "=> {} is faster than {} by {:.2}%",
            b.name(),
            a.name(),
            advantage(total_b, total_a)
        )
    }
}

/// Muestra nodos y memoria de cada índice con su comparación
pub fn display_memory_usage(
    out: &mut dyn Write,
    a: &dyn DictionaryIndex,
    b: &dyn DictionaryIndex,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "         MEMORY USAGE")?;
    writeln!(out, "{}", RULE)?;

    let memory_a = a.memory_usage();
    let memory_b = b.memory_usage();

    for (i, (index, memory)) in [(a, memory_a), (b, memory_b)].into_iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}:", index.name())?;
        writeln!(out, "  - Number of nodes: {}", index.node_count())?;
        writeln!(
            out,
            "  - Memory used: {} bytes (~{:.2} KB)",
            memory,
            memory as f64 / 1024.0
        )?;
    }

    writeln!(out)?;
    writeln!(out, "--- COMPARISON ---")?;
    let (smaller, larger, low, high) = if memory_a < memory_b {
        (a, b, memory_a, memory_b)
    } else {
        (b, a, memory_b, memory_a)
    };
    writeln!(
        out,
        "{} uses less memory than {} by {} bytes ({:.2}%)",
        smaller.name(),
        larger.name(),
        high - low,
        advantage(low as u128, high as u128)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{OrderedTree, PrefixTrie};

    fn sample() -> (OrderedTree, PrefixTrie) {
        let mut tree = OrderedTree::new();
        let mut trie = PrefixTrie::new();
        for (key, category, description) in [
            ("apple", "n.", "a fruit"),
            ("ant", "n.", "an insect"),
            ("banana", "n.", "a fruit"),
        ] {
            let entry = Entry::new(key, category, description);
            tree.insert(entry.clone());
            trie.insert(entry);
        }
        (tree, trie)
    }

    fn capture(f: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_search_word_found_in_trie_only() {
        let (tree, trie) = sample();
        let output = capture(|out| search_word(out, &tree, &trie, "ANT"));

        assert!(output.contains("--- BINARY TREE SEARCH RESULT ---\nWord not found in dictionary!"));
        assert!(output.contains("--- TRIE SEARCH RESULT ---\nWord: ant"));
        assert!(output.contains("--- COMPARISON ---"));
    }

    #[test]
    fn test_search_word_missing_everywhere() {
        let (tree, trie) = sample();
        let output = capture(|out| search_word(out, &tree, &trie, "cherry"));

        assert_eq!(output.matches("Word not found in dictionary!").count(), 2);
        assert!(!output.contains("COMPARISON"));
    }

    #[test]
    fn test_compare_performance_counts_hits() {
        let (tree, trie) = sample();
        let cases: Vec<String> = ["apple", "Ant", "kiwi"].iter().map(|s| s.to_string()).collect();
        let output = capture(|out| compare_performance(out, &tree, &trie, &cases));

        assert!(output.contains("Performing 3 searches..."));
        assert!(output.contains("Found (Binary Tree): 1/3"));
        assert!(output.contains("Found (Trie): 2/3"));
        assert!(output.contains("=> "));
    }

    #[test]
    fn test_compare_performance_without_cases() {
        let (tree, trie) = sample();
        let output = capture(|out| compare_performance(out, &tree, &trie, &[]));

        assert!(output.contains("Average (Binary Tree): 0 ns"));
        assert!(output.contains("Found (Trie): 0/0"));
    }

    #[test]
    fn test_memory_usage_report() {
        let (tree, trie) = sample();
        let output = capture(|out| display_memory_usage(out, &tree, &trie));

        assert!(output.contains("Binary Tree:\n  - Number of nodes: 3"));
        assert!(output.contains("Trie:\n  - Number of nodes: 13"));
        assert!(output.contains(&format!("{} bytes", tree.memory_usage())));
        assert!(output.contains("uses less memory than"));
    }

    #[test]
    fn test_memory_usage_report_empty() {
        let tree = OrderedTree::new();
        let trie = PrefixTrie::new();
        let output = capture(|out| display_memory_usage(out, &tree, &trie));

        assert!(output.contains("Memory used: 0 bytes (~0.00 KB)"));
        assert!(output.contains("by 0 bytes (0.00%)"));
    }

    #[test]
    fn test_menu_lists_exit() {
        let output = capture(print_menu);
        assert!(output.contains("0. Exit"));
        assert!(output.ends_with("Enter your choice: "));
    }
}
