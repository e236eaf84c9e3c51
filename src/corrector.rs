use std::cmp::max;
use std::collections::HashSet;
use rayon::prelude::*;

use crate::types::*;
use crate::index::*;
use crate::distance::*;
use crate::neighbors::*;

///Finds the best correction for words against a fixed dictionary.
///
///Two search strategies are available: an index-assisted search that enumerates all edits of the
///input word and looks them up, and a linear scan over the dictionary that computes edit
///distances. The cost of the former grows with `neighbor_count^distance`, the latter is linear in
///the size of the dictionary, `correct()` picks whichever is estimated to be cheaper for every
///distance it tries.
pub struct Corrector<'a> {
    ///The dictionary, in rank order
    dictionary: Vec<&'a str>,

    ///Maps dictionary words to their rank
    index: Index<'a>,

    pub params: CorrectionParameters,
}

impl<'a> Corrector<'a> {
    ///Builds the index for the dictionary. Only the first occurrence of a word is indexed, so the
    ///rank of a duplicated word is that of its first occurrence. Building does no lookups, the
    ///index starts with zero comparisons.
    pub fn new<W: AsRef<str>>(dictionary: &'a [W], params: CorrectionParameters) -> Corrector<'a> {
        if params.debug {
            eprintln!("Building index for {} dictionary words...", dictionary.len());
        }
        let dictionary: Vec<&'a str> = dictionary.iter().map(|word| word.as_ref()).collect();
        let mut index = Index::new(max(1, dictionary.len()));
        let mut seen: HashSet<&'a str> = HashSet::with_capacity(dictionary.len());
        for (rank, &word) in dictionary.iter().enumerate() {
            if seen.insert(word) {
                index.insert(word, rank);
            } else if params.debug {
                eprintln!(" -- Skipping duplicate dictionary word: {}", word);
            }
        }
        if params.debug {
            eprintln!(" - Indexed {} words in {} buckets", index.len(), index.size());
        }
        Corrector {
            dictionary,
            index,
            params,
        }
    }

    pub fn dictionary(&self) -> &[&'a str] {
        &self.dictionary
    }

    pub fn index(&self) -> &Index<'a> {
        &self.index
    }

    ///Tests whether the word is in the dictionary (equivalent to an indexed search at distance 0)
    pub fn check(&mut self, word: &str) -> bool {
        self.search_indexed(word, 0).is_some()
    }

    ///Find the best correction for a word, searching up to the configured maximum distance.
    ///A word that is in the dictionary is its own correction.
    ///
    ///Distances are tried in increasing order. At each distance the estimated cost of an
    ///indexed search (the product of the neighbor counts so far) is compared with the size of
    ///the dictionary; once the dictionary is smaller, or the estimate no longer fits in a
    ///`usize`, a single linear scan at the current distance settles the result.
    pub fn correct(&mut self, word: &str) -> Option<&'a str> {
        let multiplier = neighbor_count(word.chars().count());
        let mut cost: Option<usize> = Some(1);
        for distance in 0..=self.params.max_distance {
            match cost {
                Some(cost) if self.dictionary.len() >= cost => {
                    if let Some((correction, rank)) = self.search_indexed(word, distance) {
                        if self.params.debug {
                            eprintln!("   (indexed search found {} (rank {}) for {} at distance {})", correction, rank, word, distance);
                        }
                        return Some(correction);
                    }
                },
                _ => {
                    if self.params.debug {
                        eprintln!("   (switching to linear scan for {} at distance {}, estimated cost {:?} exceeds dictionary size {})", word, distance, cost, self.dictionary.len());
                    }
                    return self.search_scan(word, distance);
                }
            }
            cost = cost.and_then(|cost| cost.checked_mul(multiplier));
        }
        None
    }

    ///Recursively searches the index for a dictionary word that can be reached from `word` in
    ///`distance` edits. When multiple words are reachable, the one with the lowest rank wins.
    ///Returns the word and its rank.
    pub fn search_indexed(&mut self, word: &str, distance: u8) -> Option<(&'a str, Rank)> {
        if distance == 0 {
            return self.index.get(word);
        }
        let mut best: Option<(&'a str, Rank)> = None;
        for edit in neighbors(word) {
            if let Some((candidate, rank)) = self.search_indexed(&edit, distance - 1) {
                match best {
                    Some((_, best_rank)) if best_rank <= rank => {},
                    _ => best = Some((candidate, rank)),
                }
            }
        }
        best
    }

    ///Scans the dictionary in order. The first word within `distance` is returned immediately.
    ///If there is none, the closest word seen within the maximum distance is returned (the
    ///earliest one amongst equals), if any.
    pub fn search_scan(&self, word: &str, distance: u8) -> Option<&'a str> {
        let ceiling = max(distance, self.params.max_distance) as Distance;
        let mut best: Option<&'a str> = None;
        let mut best_distance: Distance = ceiling + 1;
        for &candidate in self.dictionary.iter() {
            //the edit distance can never be smaller than the difference in length
            if length_difference(candidate, word) < best_distance {
                let candidate_distance = edit_distance(candidate, word);
                if candidate_distance <= distance as Distance {
                    return Some(candidate);
                } else if candidate_distance < best_distance {
                    best_distance = candidate_distance;
                    best = Some(candidate);
                }
            }
        }
        best
    }
}

///Find the best correction for a single word against a dictionary, up to the given maximum
///distance. This builds a new index on every call, use a `Corrector` for multiple words.
pub fn correct<'a, W: AsRef<str>>(word: &str, dictionary: &'a [W], max_distance: u8) -> Option<&'a str> {
    let params = CorrectionParameters::default().with_max_distance(max_distance);
    let mut corrector = Corrector::new(dictionary, params);
    corrector.correct(word)
}

///Corrects all words, results are in the same order as the input.
///
///Without `single_thread`, the words are split into one chunk per thread of the rayon pool; every
///chunk gets its own corrector (and thus its own index) and is corrected sequentially.
pub fn correct_batch<'a, W, Q>(dictionary: &'a [W], words: &[Q], params: &CorrectionParameters) -> Vec<Option<&'a str>>
where
    W: AsRef<str> + Sync,
    Q: AsRef<str> + Sync,
{
    if params.single_thread || words.is_empty() {
        let mut corrector = Corrector::new(dictionary, params.clone());
        words.iter().map(|word| corrector.correct(word.as_ref())).collect()
    } else {
        let chunk_size = batch_chunk_size(words.len(), rayon::current_num_threads());
        if params.debug {
            eprintln!("(correcting {} words in chunks of {}, one index per chunk)", words.len(), chunk_size);
        }
        let chunks: Vec<Vec<Option<&'a str>>> = words.par_chunks(chunk_size)
            .map(|chunk| {
                let mut corrector = Corrector::new(dictionary, params.clone());
                chunk.iter().map(|word| corrector.correct(word.as_ref())).collect()
            })
            .collect();
        chunks.into_iter().flatten().collect()
    }
}

///Size of the chunks a batch of `total` words is split into so there is at most one chunk (and
///one index build) per thread
pub fn batch_chunk_size(total: usize, threads: usize) -> usize {
    let threads = max(1, threads);
    max(1, (total + threads - 1) / threads)
}
