use std::fs::File;
use std::io::{BufReader,BufRead,Read};
use simple_error::SimpleError;

use crate::types::*;

///Read a word list from a file, one word per line. Surrounding whitespace is
///trimmed and empty lines are skipped, the order of the file is preserved.
pub fn read_wordlist(filename: &str) -> Result<Vec<String>, std::io::Error> {
    let f = File::open(filename)?;
    read_words(f)
}

///Read a word list from any stream, see `read_wordlist()`
pub fn read_words(inputstream: impl Read) -> Result<Vec<String>, std::io::Error> {
    let mut words = Vec::new();
    let f_buffer = BufReader::new(inputstream);
    for line in f_buffer.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_owned());
        }
    }
    Ok(words)
}

///Tests whether a word consists solely of characters of the alphabet
pub fn is_valid_word(word: &str) -> bool {
    word.bytes().all(|c| ALPHABET.contains(&c))
}

///Checks that all words in the list consist solely of characters of the alphabet,
///reports the first offending word (and its line) otherwise
pub fn validate_wordlist<W: AsRef<str>>(words: &[W]) -> Result<(), SimpleError> {
    for (i, word) in words.iter().enumerate() {
        let word = word.as_ref();
        if !is_valid_word(word) {
            return Err(SimpleError::new(format!("Word {} ({:?}) contains characters outside of the alphabet a-z", i + 1, word)));
        }
    }
    Ok(())
}

///Parses a maximum distance as passed by the user
pub fn parse_distance(value: &str) -> Result<u8, SimpleError> {
    value.trim().parse::<u8>().map_err(|_| SimpleError::new(format!("Distance should be an integer between 0 and 255, got {:?}", value)))
}
