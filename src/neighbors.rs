use crate::types::*;

///Generates all strings exactly one edit away from the given word.
///
///For a word of length L consisting only of characters from the alphabet, this produces exactly
///`neighbor_count(L)` strings: (L+1)*26 insertions, L*25 substitutions and L deletions. For words
///with characters outside the alphabet, substitutions at such positions yield 26 strings rather
///than 25.
///
///Order: insertions (last position first), then substitutions (last position first), then
///deletions (last position first). Within a position, alphabet order. Nothing is deduplicated.
pub fn neighbors(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let length = chars.len();
    let mut edits: Vec<String> = Vec::with_capacity(neighbor_count(length));

    //insertions
    for i in (0..=length).rev() {
        for symbol in ALPHABET.iter() {
            let mut edited = String::with_capacity(word.len() + 1);
            edited.extend(&chars[..i]);
            edited.push(*symbol as char);
            edited.extend(&chars[i..]);
            edits.push(edited);
        }
    }

    //substitutions
    for i in (0..length).rev() {
        for symbol in ALPHABET.iter() {
            let symbol = *symbol as char;
            if symbol != chars[i] {
                let mut edited = String::with_capacity(word.len());
                edited.extend(&chars[..i]);
                edited.push(symbol);
                edited.extend(&chars[i+1..]);
                edits.push(edited);
            }
        }
    }

    //deletions
    for i in (0..length).rev() {
        let mut edited = String::with_capacity(word.len());
        edited.extend(&chars[..i]);
        edited.extend(&chars[i+1..]);
        edits.push(edited);
    }

    edits
}
