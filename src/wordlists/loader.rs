//! Word list loading utilities
//!
//! Loads a custom lexicon from a file, one word per line.

use super::Lexicon;
use std::fs;
use std::io;
use std::path::Path;

/// Load a lexicon from a file
///
/// Blank lines, `#` comments and entries that aren't plain ASCII words are
/// skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use traffic_light::wordlists::loader::load_from_file;
///
/// let lexicon = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Lexicon> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Parse word-per-line text into a lexicon
#[must_use]
pub fn parse_word_list(content: &str) -> Lexicon {
    Lexicon::from_words(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('#')),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_comments_and_blanks() {
        let lexicon = parse_word_list("# animals\ncat\n\n  dog\nhorse\n# done\n");
        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.words_of_length(3), &["CAT", "DOG"]);
        assert_eq!(lexicon.words_of_length(5), &["HORSE"]);
    }

    #[test]
    fn parse_skips_invalid_entries() {
        let lexicon = parse_word_list("crane\nsl8te\ntwo words\n");
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn load_missing_file_is_error() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_embedded_source_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt");
        let lexicon = load_from_file(path).unwrap();
        assert_eq!(lexicon.len(), Lexicon::embedded().len());
    }
}
