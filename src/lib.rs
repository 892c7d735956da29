//! This library is a Rust implementation of the [Metaphone 3](https://en.wikipedia.org/wiki/Metaphone#Metaphone_3)
//! phonetic algorithm.
//!
//! Metaphone 3 turns a word into one or two short phonetic keys so that words
//! that *sound* alike in American English share a key even when they are spelled
//! differently :
//!
//! ```rust
//! use metaphone3::Metaphone3;
//!
//! let encoder = Metaphone3::default();
//!
//! let result = encoder.metaphone3("Smith");
//! assert_eq!(result.primary(), "SM0");
//! assert_eq!(result.secondary(), "XMT");
//!
//! // "Schmidt" has no alternate pronunciation.
//! let result = encoder.metaphone3("Schmidt");
//! assert_eq!(result.primary(), "XMT");
//! assert_eq!(result.secondary(), "");
//! ```
//!
//! The encoder can optionally keep non-initial vowels in the keys and keep the
//! voiced/unvoiced consonant distinction :
//!
//! ```rust
//! use metaphone3::Metaphone3;
//!
//! let encoder = Metaphone3::default().with_encode_vowels(true);
//! assert_eq!(encoder.metaphone3("supernode").primary(), "SAPARNAT");
//!
//! let encoder = Metaphone3::default().with_encode_exact(true);
//! assert_eq!(encoder.metaphone3("dumb").primary(), "DM");
//! ```
#[macro_use]
extern crate lazy_static;

use std::fmt;
use std::fmt::Formatter;

pub use crate::fixture::{parse_fixture, FixtureRecord};
pub use crate::metaphone3::{Metaphone3, Metaphone3Result, TraceEvent};

mod fixture;
mod helper;
mod lexicon;
mod metaphone3;

/// Errors
#[derive(Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum PhoneticError {
    /// This variant is raised when a word/keys fixture file
    /// can't be parsed.
    ParseFixtureError(String),
}

impl fmt::Display for PhoneticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseFixtureError(error) => write!(f, "Error parsing fixture file : {}", error),
        }
    }
}

/// This trait represents a phonetic algorithm.
pub trait Encoder {
    /// This method convert a string into its code.
    ///
    /// # Parameter
    ///
    /// * `s` : string to encode.
    ///
    /// # Return
    ///
    /// String encoded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use metaphone3::{Encoder, Metaphone3};
    ///
    /// let encoder = Metaphone3::default();
    ///
    /// assert_eq!(encoder.encode("Thompson"), "TMPSN");
    /// ```
    fn encode(&self, s: &str) -> String;

    /// This method check that two strings have the same code.
    ///
    /// # Parameters
    ///
    /// * `first` : first string.
    /// * `second` : second string.
    ///
    /// # Return
    ///
    /// Return `true` if both strings have the same code, false otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use metaphone3::{Encoder, Metaphone3};
    ///
    /// let encoder = Metaphone3::default();
    /// assert!(!encoder.is_encoded_equals("Peter", "Stevenson"));
    /// assert!(encoder.is_encoded_equals("Smith", "Smyth"));
    /// ```
    fn is_encoded_equals(&self, first: &str, second: &str) -> bool {
        let f = self.encode(first);
        let s = self.encode(second);

        f == s
    }
}
