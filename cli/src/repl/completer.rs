use rustyline::completion::Pair;
use unitscript::UnitRegistry;
use unitscript::lexer::token::Keyword;

use super::COMMANDS;

pub fn complete_line(registry: &UnitRegistry, line: &str, pos: usize) -> (usize, Vec<Pair>) {
    let safe_pos = pos.min(line.len());
    let prefix = line.get(..safe_pos).unwrap_or(line);

    if prefix.starts_with('.') && !prefix.contains(char::is_whitespace) {
        let commands: Vec<&str> = COMMANDS
            .iter()
            .copied()
            .filter(|c| c.starts_with(prefix))
            .collect();
        return (0, pairs(&commands));
    }

    let start = word_start(prefix);
    let needle = &prefix[start..];
    if needle.is_empty() {
        return (start, Vec::new());
    }

    let mut words: Vec<&str> = Keyword::ALL
        .iter()
        .map(|kw| kw.as_str())
        .chain(registry.symbols())
        .chain(registry.aliases().map(|(alias, _)| alias))
        .filter(|word| word.starts_with(needle) && !word.contains(' '))
        .collect();
    words.sort_unstable();
    words.dedup();

    (start, pairs(&words))
}

fn pairs(values: &[&str]) -> Vec<Pair> {
    values
        .iter()
        .map(|v| Pair {
            display: (*v).to_string(),
            replacement: (*v).to_string(),
        })
        .collect()
}

fn word_start(prefix: &str) -> usize {
    prefix
        .char_indices()
        .rev()
        .find(|(_, ch)| !is_symbol_char(*ch))
        .map_or(0, |(idx, ch)| idx + ch.len_utf8())
}

/// Unit symbols may hold `µ`, `°` or `Ω` as well as ASCII word characters.
fn is_symbol_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || (!ch.is_ascii() && !ch.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_unit_symbols() {
        let registry = UnitRegistry::create_default();
        let (start, pairs) = complete_line(&registry, "1 kP", 4);
        assert_eq!(start, 2);
        assert!(pairs.iter().any(|p| p.replacement == "kPa"));
    }

    #[test]
    fn completes_aliases() {
        let registry = UnitRegistry::create_default();
        let (_, pairs) = complete_line(&registry, "3 fahr", 6);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].replacement, "fahrenheit");
    }

    #[test]
    fn completes_commands() {
        let registry = UnitRegistry::create_default();
        let (start, pairs) = complete_line(&registry, ".ro", 3);
        assert_eq!(start, 0);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].replacement, ".rollback");
    }
}
