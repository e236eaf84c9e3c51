use std::fmt;
use serde::Serialize;

use crate::types::*;
use crate::distance::*;

///The outcome of checking or correcting a single word
#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct Correction<'a> {
    ///The word as it appeared in the input
    pub input: &'a str,

    ///The dictionary word selected for it (the word itself if it is known), if any
    pub correction: Option<&'a str>,

    ///The edit distance between input and correction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Distance>,
}

impl<'a> Correction<'a> {
    pub fn new(input: &'a str, correction: Option<&'a str>) -> Self {
        Self {
            input,
            correction,
            distance: correction.map(|correction| edit_distance(input, correction)),
        }
    }

    ///Is the input itself a dictionary word?
    pub fn is_known(&self) -> bool {
        self.distance == Some(0)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

///Plain text output: the correction if there is one, otherwise the input followed by a question mark
impl fmt::Display for Correction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.correction {
            Some(correction) => write!(f, "{}", correction),
            None => write!(f, "{}?", self.input),
        }
    }
}
