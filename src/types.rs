///Position of a word in the dictionary, the authoritative tie-break between equally good corrections
pub type Rank = usize;

///Number of single-character edits (insertions, deletions, substitutions)
pub type Distance = usize;

///The fixed alphabet, in the order in which edits are generated
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

pub const ALPHABET_SIZE: usize = ALPHABET.len();

///Distance ceiling used when no other maximum is configured
pub const MAX_DISTANCE: u8 = 3;

///Number of strings exactly one edit away from a word of the given length (in characters):
///(length+1)*26 insertions, length*25 substitutions and length deletions
pub const fn neighbor_count(length: usize) -> usize {
    (2 * length + 1) * ALPHABET_SIZE
}

#[derive(Clone,Debug,PartialEq)]
pub struct CorrectionParameters {
    /// Maximum edit distance at which corrections are still accepted (the search ceiling)
    pub max_distance: u8,

    /// Use only a single-thread for batch correction instead of leveraging multiple cores. Each
    /// worker thread builds its own index when this is disabled.
    pub single_thread: bool,

    /// Output verbose diagnostics to standard error
    pub debug: bool,
}

impl Default for CorrectionParameters {
    fn default() -> Self {
        Self {
            max_distance: MAX_DISTANCE,
            single_thread: true,
            debug: false,
        }
    }
}

impl CorrectionParameters {
    pub fn with_max_distance(mut self, distance: u8) -> Self {
        self.max_distance = distance;
        self
    }
    pub fn with_single_thread(mut self) -> Self {
        self.single_thread = true;
        self
    }
    pub fn with_multithreading(mut self) -> Self {
        self.single_thread = false;
        self
    }
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
