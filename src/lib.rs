//! Spelling correction against a fixed dictionary.
//!
//! Given a word, determine whether it is in the dictionary and, if not, find the best dictionary
//! word within a bounded number of single-character edits (insertions, deletions,
//! substitutions). Amongst equally good corrections the word that occurs first in the dictionary
//! wins.
//!
//! Words are expected to consist of the lowercase letters `a`-`z` only.

extern crate rayon;
extern crate serde;
extern crate simple_error;

pub mod types;
pub mod index;
pub mod distance;
pub mod neighbors;
pub mod corrector;
pub mod vocab;
pub mod output;

pub use crate::types::*;
pub use crate::index::*;
pub use crate::distance::*;
pub use crate::neighbors::*;
pub use crate::corrector::*;
pub use crate::vocab::*;
pub use crate::output::*;
