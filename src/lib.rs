//! Client for the dictionaryapi.dev word lookup service.
//!
//! [`lookup`] fetches the entries for a word in a given language, and
//! [`extract_word_token`] pulls the leading word out of arbitrary text.

pub mod dictionary;
mod lang;
mod token;

pub use dictionary::types::{Definition, Entry, LookupResult, Meaning, PhoneticVariant};
pub use dictionary::{
    DiagnosticSink, DictionaryClient, LookupError, LookupFailure, PathEncoding, SilentSink,
    TracingSink, lookup,
};
pub use lang::{LANG_EN, LANG_ES, Language, UnknownLanguage};
pub use token::extract_word_token;
