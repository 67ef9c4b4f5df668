//! Bucle interactivo del menú

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::dictionary::{OrderedTree, PrefixTrie};
use crate::report;

/// Opción elegida en el menú
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Search,
    TreeStructure,
    TrieStructure,
    ComparePerformance,
    MemoryUsage,
    TrieWords,
    PrefixSearch,
    Exit,
}

impl Choice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Choice::Search),
            "2" => Some(Choice::TreeStructure),
            "3" => Some(Choice::TrieStructure),
            "4" => Some(Choice::ComparePerformance),
            "5" => Some(Choice::MemoryUsage),
            "6" => Some(Choice::TrieWords),
            "7" => Some(Choice::PrefixSearch),
            "0" => Some(Choice::Exit),
            _ => None,
        }
    }
}

fn prompt<R: BufRead>(input: &mut R, out: &mut dyn Write, text: &str) -> io::Result<Option<String>> {
    writeln!(out)?;
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Ejecuta el menú hasta elegir salir o agotar la entrada
pub fn run<R: BufRead>(
    mut input: R,
    out: &mut dyn Write,
    tree: &OrderedTree,
    trie: &PrefixTrie,
    cases: &[String],
) -> io::Result<()> {
    loop {
        report::print_menu(out)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let Some(choice) = Choice::parse(&line) else {
            debug!(input = line.trim(), "opción desconocida");
            writeln!(out)?;
            writeln!(out, "Invalid choice!")?;
            continue;
        };

        match choice {
            Choice::Search => {
                let Some(word) = prompt(&mut input, out, "Enter word to search: ")? else {
                    break;
                };
                report::search_word(out, tree, trie, &word)?;
            }
            Choice::TreeStructure => {
                writeln!(out)?;
                writeln!(out, "--- BINARY TREE STRUCTURE ---")?;
                tree.write_structure(out)?;
            }
            Choice::TrieStructure => {
                writeln!(out)?;
                writeln!(out, "--- TRIE STRUCTURE ---")?;
                trie.write_structure(out)?;
            }
            Choice::ComparePerformance => report::compare_performance(out, tree, trie, cases)?,
            Choice::MemoryUsage => report::display_memory_usage(out, tree, trie)?,
            Choice::TrieWords => {
                writeln!(out)?;
                writeln!(out, "--- TRIE WORDS ---")?;
                trie.write_all_words(out)?;
            }
            Choice::PrefixSearch => {
                let Some(prefix) = prompt(&mut input, out, "Enter prefix: ")? else {
                    break;
                };
                let words = trie.words_with_prefix(&prefix);
                writeln!(out)?;
                writeln!(out, "--- WORDS STARTING WITH '{}' ({}) ---", prefix, words.len())?;
                for entry in words {
                    writeln!(out, "{}", entry.key())?;
                }
            }
            Choice::Exit => {
                writeln!(out)?;
                writeln!(out, "Thank you for using the program!")?;
                break;
            }
        }
    }

    Ok(())
}
