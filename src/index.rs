use std::collections::VecDeque;
use std::cmp::max;

use crate::types::*;

///Seed of the xor hash
const XOR_SEED: u32 = 73802;

///An entry in one of the chains of the index. The key is borrowed from the word list the index
///was built from, the index never owns it.
#[derive(Debug,Clone)]
struct Entry<'a> {
    key: &'a str,
    rank: Rank,
}

///A hash table with a fixed number of buckets, mapping words to their rank in the dictionary.
///
///Each bucket holds a chain of entries. Every successful lookup moves the matched entry to the
///front of its chain (a self-adjusting list), so frequently queried words are found first. No
///entry is ever dropped by this.
///
///Lookups take `&mut self` because of this reordering; the index is not meant to be shared
///between threads.
#[derive(Debug,Clone)]
pub struct Index<'a> {
    buckets: Vec<VecDeque<Entry<'a>>>,

    ///number of entries over all buckets
    len: usize,

    ///cumulative number of key comparisons done by lookups
    comparisons: usize,
}

impl<'a> Index<'a> {
    ///Create a new empty index with the specified number of buckets
    ///
    ///Panics if size is zero
    pub fn new(size: usize) -> Index<'a> {
        assert!(size > 0, "index size must be at least 1");
        Index {
            buckets: vec![VecDeque::new(); size],
            len: 0,
            comparisons: 0,
        }
    }

    ///Build an index on a list of words, the rank of each word is its position in the list.
    ///The number of buckets equals the number of words (at least one).
    ///
    ///The list must not contain duplicates (see `insert()`)
    pub fn build<W: AsRef<str>>(words: &'a [W]) -> Index<'a> {
        let mut index = Index::new(max(1, words.len()));
        for (rank, word) in words.iter().enumerate() {
            index.insert(word.as_ref(), rank);
        }
        index
    }

    ///Insert a new key at the front of its bucket.
    ///
    ///This does not check whether the key is already present! A duplicate key shadows the
    ///earlier entry for as long as it stays in front of it.
    pub fn insert(&mut self, key: &'a str, rank: Rank) {
        let bucket = self.bucket_of(key);
        self.buckets[bucket].push_front(Entry { key, rank });
        self.len += 1;
    }

    ///Find a key; if it exists it is moved to the front of its bucket and its rank is returned
    pub fn lookup(&mut self, key: &str) -> Option<Rank> {
        self.get(key).map(|(_, rank)| rank)
    }

    ///Find a key; if it exists it is moved to the front of its bucket and the stored key (with
    ///the lifetime of the word list) is returned
    pub fn key_of(&mut self, key: &str) -> Option<&'a str> {
        self.lookup(key)?;
        let bucket = self.bucket_of(key);
        self.buckets[bucket].front().map(|entry| entry.key)
    }

    ///Find a key and return both the stored key and its rank, promoting the entry
    pub fn get(&mut self, key: &str) -> Option<(&'a str, Rank)> {
        let bucket = self.bucket_of(key);
        let chain = &mut self.buckets[bucket];
        let mut found = None;
        for (i, entry) in chain.iter().enumerate() {
            self.comparisons += 1;
            if entry.key == key {
                found = Some(i);
                break;
            }
        }
        let i = found?;
        if i > 0 {
            let entry = chain.remove(i).expect("entry at found position");
            chain.push_front(entry);
        }
        chain.front().map(|entry| (entry.key, entry.rank))
    }

    ///Tests if the key is in the index (this promotes it like any other lookup)
    pub fn contains(&mut self, key: &str) -> bool {
        self.get(key).is_some()
    }

    ///The bucket a key maps to
    pub fn bucket_of(&self, key: &str) -> usize {
        xor_hash(key, self.buckets.len())
    }

    ///Iterate over the keys of a bucket, in chain order
    pub fn chain(&self, bucket: usize) -> impl Iterator<Item = &'a str> + '_ {
        self.buckets.get(bucket).into_iter().flat_map(|chain| chain.iter().map(|entry| entry.key))
    }

    ///Number of buckets
    pub fn size(&self) -> usize {
        self.buckets.len()
    }

    ///Number of entries
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    ///Cumulative number of key comparisons made by all lookups so far
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }
}

///The xor hash (Zobel & Ramakrishnan, 1997), reduced to a bucket in 0..size
pub fn xor_hash(key: &str, size: usize) -> usize {
    let mut h: u32 = XOR_SEED;
    for c in key.bytes() {
        h ^= (h << 5).wrapping_add(c as u32).wrapping_add(h >> 2);
    }
    h as usize % size
}
