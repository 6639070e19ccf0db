use once_cell::sync::Lazy;
use regex::Regex;

static BENGALI_ASSAMESE_SCRIPT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{0980}-\x{09FF}]").expect("valid script regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Assamese,
    English,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Assamese => "assamese",
            Language::English => "english",
        }
    }
}

/// Any character from the Bengali-Assamese block marks the text as Assamese.
pub fn detect_language(text: &str) -> Language {
    if BENGALI_ASSAMESE_SCRIPT_RE.is_match(text) {
        Language::Assamese
    } else {
        Language::English
    }
}
