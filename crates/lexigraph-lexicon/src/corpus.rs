//! Loading the word corpus and the alphabet.
//!
//! Both files hold one whitespace-delimited token per entry. Tokens are read
//! as plain strings; there is no header or schema version.

use std::path::Path;

use tracing::info;

use crate::error::LexiconError;

/// Number of symbols a playable alphabet must have.
pub const ALPHABET_SIZE: usize = 26;

/// The full word list and alphabet for a game.
///
/// The corpus is a constant for the whole run. Agents never mutate it; each
/// gets its own copy of the feasible subset instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    /// Every word in the corpus, in file order.
    words: Vec<String>,
    /// Alphabet symbols, in file order.
    alphabet: Vec<char>,
}

impl Lexicon {
    /// Build a lexicon from in-memory lists.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Empty`] if either list is empty.
    pub fn from_parts(words: Vec<String>, alphabet: Vec<char>) -> Result<Self, LexiconError> {
        if words.is_empty() {
            return Err(LexiconError::Empty { what: "corpus" });
        }
        if alphabet.is_empty() {
            return Err(LexiconError::Empty { what: "alphabet" });
        }
        Ok(Self { words, alphabet })
    }

    /// Load the corpus and alphabet from disk.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Io`] if a file cannot be read, or a parse
    /// error from [`parse_alphabet`] / [`Lexicon::from_parts`].
    pub fn load(corpus_path: &Path, alphabet_path: &Path) -> Result<Self, LexiconError> {
        let corpus_text = read(corpus_path)?;
        let alphabet_text = read(alphabet_path)?;
        let words = parse_words(&corpus_text);
        let alphabet = parse_alphabet(&alphabet_text)?;
        info!(
            corpus = %corpus_path.display(),
            words = words.len(),
            alphabet = alphabet.len(),
            "Lexicon loaded"
        );
        Self::from_parts(words, alphabet)
    }

    /// The full corpus.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The alphabet symbols.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}

fn read(path: &Path) -> Result<String, LexiconError> {
    std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Split a word list into tokens.
pub fn parse_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// Split an alphabet file into single-character symbols.
///
/// # Errors
///
/// Returns [`LexiconError::InvalidSymbol`] for any token that is not exactly
/// one character long.
pub fn parse_alphabet(text: &str) -> Result<Vec<char>, LexiconError> {
    text.split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(symbol), None) => Ok(symbol),
                _ => Err(LexiconError::InvalidSymbol {
                    token: token.to_owned(),
                }),
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_splits_on_any_whitespace() {
        let words = parse_words("apple\nzebra  crane\r\n\tbloom\n");
        assert_eq!(words, vec!["apple", "zebra", "crane", "bloom"]);
    }

    #[test]
    fn parse_alphabet_accepts_single_symbols() {
        let alphabet = parse_alphabet("a\nb\nc\n").unwrap();
        assert_eq!(alphabet, vec!['a', 'b', 'c']);
    }

    #[test]
    fn parse_alphabet_rejects_multi_char_tokens() {
        let err = parse_alphabet("a\nbc\n").unwrap_err();
        assert!(matches!(err, LexiconError::InvalidSymbol { token } if token == "bc"));
    }

    #[test]
    fn from_parts_rejects_empty_lists() {
        assert!(matches!(
            Lexicon::from_parts(Vec::new(), vec!['a']),
            Err(LexiconError::Empty { what: "corpus" })
        ));
        assert!(matches!(
            Lexicon::from_parts(vec!["apple".to_owned()], Vec::new()),
            Err(LexiconError::Empty { what: "alphabet" })
        ));
    }

    #[test]
    fn load_reads_both_files() {
        let dir = std::env::temp_dir().join(format!("lexigraph-lexicon-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let corpus = dir.join("words.txt");
        let alphabet = dir.join("alphabet.txt");
        std::fs::write(&corpus, "apple\nzebra\n").unwrap();
        std::fs::write(&alphabet, "a b c d e f g h i j k l m n o p q r s t u v w x y z").unwrap();

        let lexicon = Lexicon::load(&corpus, &alphabet).unwrap();
        assert_eq!(lexicon.words(), ["apple", "zebra"]);
        assert_eq!(lexicon.alphabet().len(), ALPHABET_SIZE);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_missing_file() {
        let missing = Path::new("/nonexistent/lexigraph/words.txt");
        let err = Lexicon::load(missing, missing).unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
    }
}
