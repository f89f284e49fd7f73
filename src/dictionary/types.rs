use serde::{Deserialize, Serialize};

/// Outcome of a single lookup.
///
/// `entries` is `Some` exactly when the service answered with a 2xx status.
/// `queried_word` is the caller's word as passed, untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LookupResult {
    pub status_code: u16,
    pub entries: Option<Vec<Entry>>,
    pub queried_word: String,
}

impl LookupResult {
    pub fn is_success(&self) -> bool {
        self.entries.is_some()
    }

    pub fn into_entries(self) -> Option<Vec<Entry>> {
        self.entries
    }
}

/// One dictionary record for a word, as returned by `GET /{lang}/{word}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Entry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(rename = "phonetics", default)]
    pub phonetic_variants: Vec<PhoneticVariant>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    #[serde(rename = "audio", default)]
    pub audio_url: Option<String>,
}

impl Entry {
    /// Every synonym in the entry, meaning-level first.
    pub fn all_synonyms(&self) -> impl Iterator<Item = &str> {
        self.meanings.iter().flat_map(|meaning| {
            meaning
                .synonyms
                .iter()
                .chain(meaning.definitions.iter().flat_map(|d| d.synonyms.iter()))
                .map(String::as_str)
        })
    }

    /// Every antonym in the entry, meaning-level first.
    pub fn all_antonyms(&self) -> impl Iterator<Item = &str> {
        self.meanings.iter().flat_map(|meaning| {
            meaning
                .antonyms
                .iter()
                .chain(meaning.definitions.iter().flat_map(|d| d.antonyms.iter()))
                .map(String::as_str)
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PhoneticVariant {
    #[serde(default)]
    pub text: String,
    #[serde(rename = "audio", default)]
    pub audio_url: String,
}

/// Definitions grouped under one part of speech.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    #[serde(default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Definition {
    #[serde(rename = "definition")]
    pub text: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cat_body() -> serde_json::Value {
        json!([{
            "word": "cat",
            "phonetic": "/kæt/",
            "phonetics": [
                {"text": "/kæt/", "audio": "https://example.com/cat-us.mp3", "license": {"name": "BY-SA 3.0"}},
                {"audio": ""}
            ],
            "meanings": [{
                "partOfSpeech": "noun",
                "definitions": [{
                    "definition": "A small domesticated carnivorous mammal.",
                    "example": "The cat sat on the mat.",
                    "synonyms": ["moggy"],
                    "antonyms": []
                }],
                "synonyms": ["feline"],
                "antonyms": ["dog"]
            }],
            "sourceUrls": ["https://en.wiktionary.org/wiki/cat"]
        }])
    }

    #[test]
    fn parses_service_shape() {
        let entries: Vec<Entry> = serde_json::from_value(cat_body()).unwrap();
        assert_eq!(entries.len(), 1);

        let cat = &entries[0];
        assert_eq!(cat.word, "cat");
        assert_eq!(cat.phonetic.as_deref(), Some("/kæt/"));
        assert_eq!(cat.origin, None);
        assert_eq!(cat.audio_url, None);
        assert_eq!(cat.phonetic_variants[0].audio_url, "https://example.com/cat-us.mp3");

        let meaning = &cat.meanings[0];
        assert_eq!(meaning.part_of_speech.as_deref(), Some("noun"));
        assert_eq!(meaning.definitions[0].text, "A small domesticated carnivorous mammal.");
        assert_eq!(meaning.definitions[0].example, "The cat sat on the mat.");
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let entries: Vec<Entry> = serde_json::from_value(json!([{
            "word": "hola",
            "phonetics": [{"audio": ""}],
            "meanings": [{"definitions": [{"definition": "saludo"}]}]
        }]))
        .unwrap();

        let hola = &entries[0];
        assert_eq!(hola.phonetic_variants[0], PhoneticVariant::default());
        assert_eq!(hola.meanings[0].part_of_speech, None);
        assert_eq!(hola.meanings[0].definitions[0].example, "");
        assert!(hola.meanings[0].definitions[0].synonyms.is_empty());
    }

    #[test]
    fn entry_without_word_is_rejected() {
        let result = serde_json::from_value::<Vec<Entry>>(json!([{"meanings": []}]));
        assert!(result.is_err());
    }

    #[test]
    fn object_instead_of_array_is_rejected() {
        let result = serde_json::from_value::<Vec<Entry>>(json!({
            "title": "No Definitions Found"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn audio_field_maps_to_audio_url() {
        let entries: Vec<Entry> = serde_json::from_value(json!([{
            "word": "perro",
            "audio": "https://example.com/perro.mp3"
        }]))
        .unwrap();
        assert_eq!(
            entries[0].audio_url.as_deref(),
            Some("https://example.com/perro.mp3")
        );
    }

    #[test]
    fn collects_synonyms_and_antonyms_across_levels() {
        let entries: Vec<Entry> = serde_json::from_value(cat_body()).unwrap();
        let synonyms: Vec<&str> = entries[0].all_synonyms().collect();
        let antonyms: Vec<&str> = entries[0].all_antonyms().collect();
        assert_eq!(synonyms, ["feline", "moggy"]);
        assert_eq!(antonyms, ["dog"]);
    }

    #[test]
    fn lookup_result_success_follows_entries() {
        let miss = LookupResult {
            status_code: 404,
            entries: None,
            queried_word: "xyzzyplugh".into(),
        };
        assert!(!miss.is_success());
        assert_eq!(miss.into_entries(), None);
    }
}
