use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters percent-encoded in a path segment when escaping is on.
/// Unlike a file path, a lone word must not introduce extra segments, so `/` is encoded too.
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'@')
    .add(b'[')
    .add(b']')
    .add(b';')
    .add(b'=')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// How the word and language code are placed into the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathEncoding {
    /// Inserted as given. A `/`, `?` or `#` in the word changes the request target.
    #[default]
    Raw,
    /// Each segment is percent-encoded.
    Escaped,
}

impl PathEncoding {
    fn segment(self, s: &str) -> String {
        match self {
            PathEncoding::Raw => s.to_string(),
            PathEncoding::Escaped => encode_segment(s),
        }
    }
}

pub(super) fn encode_segment(s: &str) -> String {
    utf8_percent_encode(s, SEGMENT_ENCODE_SET).to_string()
}

pub(super) fn entry_url(base_url: &str, language: &str, word: &str, encoding: PathEncoding) -> String {
    format!(
        "{base_url}/{}/{}",
        encoding.segment(language),
        encoding.segment(word)
    )
}

/// Normalize a configured base URL: surrounding whitespace and trailing `/` are dropped.
pub(super) fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub(super) fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
