//! Dictionary-checked lemmatization
//!
//! [`LexiconLemmatizer`] reduces a word to its base form for one
//! [`WordClass`] at a time:
//!
//! 1. A word that is already a known base form (in any class) is returned
//!    unchanged.
//! 2. Irregular forms are resolved through the per-class exception table.
//! 3. Regular inflections are detached with per-class suffix rules; a
//!    candidate is accepted only if the lexicon knows it as a base form of
//!    that class.
//!
//! Every changed word maps to a known base form, and known base forms are
//! never changed, so re-lemmatizing a lemmatized word is a no-op.

use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};

use super::lexicon_en;
use crate::errors::{KeywordError, Result};
use crate::types::WordClass;

/// Reduces a word to its lemma for a given grammatical role.
///
/// Implementations must be stateless with respect to calls: the same word
/// and class always produce the same lemma. Unknown words are returned
/// unchanged.
pub trait Lemmatizer {
    fn lemmatize<'a>(&self, word: &'a str, class: WordClass) -> Cow<'a, str>;
}

impl<L: Lemmatizer + ?Sized> Lemmatizer for &L {
    fn lemmatize<'a>(&self, word: &'a str, class: WordClass) -> Cow<'a, str> {
        (**self).lemmatize(word, class)
    }
}

impl<L: Lemmatizer + ?Sized> Lemmatizer for Box<L> {
    fn lemmatize<'a>(&self, word: &'a str, class: WordClass) -> Cow<'a, str> {
        (**self).lemmatize(word, class)
    }
}

/// Lemmatizer that returns every word unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    #[inline]
    fn lemmatize<'a>(&self, word: &'a str, _class: WordClass) -> Cow<'a, str> {
        Cow::Borrowed(word)
    }
}

// ─── Suffix rules ───────────────────────────────────────────────────────────

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

const ADVERB_RULES: &[(&str, &str)] = &[];

fn rules_for(class: WordClass) -> &'static [(&'static str, &'static str)] {
    match class {
        WordClass::Verb => VERB_RULES,
        WordClass::Noun => NOUN_RULES,
        WordClass::Adverb => ADVERB_RULES,
        WordClass::Adjective => ADJECTIVE_RULES,
    }
}

// ─── Lexicon ────────────────────────────────────────────────────────────────

/// Known base forms and irregular inflections, per word class.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    bases: [FxHashSet<String>; 4],
    exceptions: [FxHashMap<String, String>; 4],
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English lexicon
    pub fn english() -> Self {
        let mut lexicon = Self::new();
        let tables = [
            (WordClass::Verb, lexicon_en::VERBS, lexicon_en::VERB_EXCEPTIONS),
            (WordClass::Noun, lexicon_en::NOUNS, lexicon_en::NOUN_EXCEPTIONS),
            (WordClass::Adverb, lexicon_en::ADVERBS, lexicon_en::ADVERB_EXCEPTIONS),
            (
                WordClass::Adjective,
                lexicon_en::ADJECTIVES,
                lexicon_en::ADJECTIVE_EXCEPTIONS,
            ),
        ];
        for (class, bases, exceptions) in tables {
            for base in bases {
                lexicon.insert_base(class, base);
            }
            for (inflected, base) in exceptions {
                lexicon.insert_exception(class, inflected, base);
            }
        }
        lexicon
    }

    /// Load a lexicon from a tab-separated file.
    ///
    /// Each row is `class<TAB>base` or `class<TAB>inflected<TAB>base`.
    /// Lines starting with `#` are ignored.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    /// Load a lexicon from any reader (see [`Lexicon::from_path`]).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut lexicon = Self::new();
        for record in rdr.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let fields: Vec<&str> = record.iter().map(str::trim).collect();

            let class = fields
                .first()
                .and_then(|code| WordClass::from_code(code))
                .ok_or_else(|| KeywordError::InvalidLexicon {
                    line,
                    reason: format!("unknown word class '{}'", fields.first().unwrap_or(&"")),
                })?;

            match fields[1..] {
                [base] if !base.is_empty() => lexicon.insert_base(class, base),
                [inflected, base] if !inflected.is_empty() && !base.is_empty() => {
                    lexicon.insert_exception(class, inflected, base)
                }
                _ => {
                    return Err(KeywordError::InvalidLexicon {
                        line,
                        reason: format!("expected 2 or 3 fields, got {}", fields.len()),
                    })
                }
            }
        }
        Ok(lexicon)
    }

    /// Register a base form
    pub fn insert_base(&mut self, class: WordClass, base: &str) {
        self.bases[class.index()].insert(base.to_lowercase());
    }

    /// Register an irregular inflection. The base form is registered too.
    pub fn insert_exception(&mut self, class: WordClass, inflected: &str, base: &str) {
        let base = base.to_lowercase();
        self.bases[class.index()].insert(base.clone());
        self.exceptions[class.index()].insert(inflected.to_lowercase(), base);
    }

    /// Merge another lexicon into this one; its exceptions win on conflict
    pub fn extend(&mut self, other: Lexicon) {
        for (mine, theirs) in self.bases.iter_mut().zip(other.bases) {
            mine.extend(theirs);
        }
        for (mine, theirs) in self.exceptions.iter_mut().zip(other.exceptions) {
            mine.extend(theirs);
        }
    }

    /// Check if `word` is a base form of `class` (expects lowercase)
    pub fn contains_base(&self, class: WordClass, word: &str) -> bool {
        self.bases[class.index()].contains(word)
    }

    /// Check if `word` is a base form of any class (expects lowercase)
    pub fn is_known_base(&self, word: &str) -> bool {
        self.bases.iter().any(|set| set.contains(word))
    }

    /// Look up an irregular inflection (expects lowercase)
    pub fn exception(&self, class: WordClass, word: &str) -> Option<&str> {
        self.exceptions[class.index()].get(word).map(String::as_str)
    }

    /// Total number of base forms across all classes
    pub fn len(&self) -> usize {
        self.bases.iter().map(FxHashSet::len).sum()
    }

    /// Check if the lexicon has no base forms
    pub fn is_empty(&self) -> bool {
        self.bases.iter().all(FxHashSet::is_empty)
    }
}

// ─── LexiconLemmatizer ──────────────────────────────────────────────────────

/// Rule- and dictionary-based lemmatizer backed by a [`Lexicon`]
#[derive(Debug, Clone)]
pub struct LexiconLemmatizer {
    lexicon: Lexicon,
}

impl Default for LexiconLemmatizer {
    fn default() -> Self {
        Self::english()
    }
}

impl LexiconLemmatizer {
    /// Create a lemmatizer over a custom lexicon
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Create a lemmatizer over the built-in English lexicon
    pub fn english() -> Self {
        Self::new(Lexicon::english())
    }

    /// Get the underlying lexicon
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Try suffix detachment; returns a known base of `class` or `None`
    fn detach(&self, lower: &str, class: WordClass) -> Option<String> {
        for &(suffix, replacement) in rules_for(class) {
            let Some(stem) = lower.strip_suffix(suffix) else {
                continue;
            };
            if stem.is_empty() {
                continue;
            }

            let candidate = format!("{stem}{replacement}");
            if self.lexicon.contains_base(class, &candidate) {
                return Some(candidate);
            }

            // running -> run, stopped -> stop, bigger -> big
            if replacement.is_empty() {
                if let Some(undoubled) = undouble(stem) {
                    if self.lexicon.contains_base(class, undoubled) {
                        return Some(undoubled.to_string());
                    }
                }
            }
        }
        None
    }
}

/// Strip a trailing doubled consonant (`runn` -> `run`)
fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let prev = chars.next()?;
    if last == prev && last.is_alphabetic() && !"aeiou".contains(last) {
        Some(&stem[..stem.len() - last.len_utf8()])
    } else {
        None
    }
}

impl Lemmatizer for LexiconLemmatizer {
    fn lemmatize<'a>(&self, word: &'a str, class: WordClass) -> Cow<'a, str> {
        if word.is_empty() {
            return Cow::Borrowed(word);
        }

        let lower = word.to_lowercase();
        if self.lexicon.is_known_base(&lower) {
            return Cow::Borrowed(word);
        }

        if let Some(base) = self.lexicon.exception(class, &lower) {
            return Cow::Owned(base.to_string());
        }

        match self.detach(&lower, class) {
            Some(base) => Cow::Owned(base),
            None => Cow::Borrowed(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str, class: WordClass) -> String {
        LexiconLemmatizer::english().lemmatize(word, class).into_owned()
    }

    #[test]
    fn test_regular_noun_plurals() {
        assert_eq!(lemma("cats", WordClass::Noun), "cat");
        assert_eq!(lemma("boxes", WordClass::Noun), "box");
        assert_eq!(lemma("glasses", WordClass::Noun), "glass");
        assert_eq!(lemma("studies", WordClass::Noun), "study");
        assert_eq!(lemma("knives", WordClass::Noun), "knife");
    }

    #[test]
    fn test_verb_inflections() {
        assert_eq!(lemma("runs", WordClass::Verb), "run");
        assert_eq!(lemma("running", WordClass::Verb), "run");
        assert_eq!(lemma("stopped", WordClass::Verb), "stop");
        assert_eq!(lemma("used", WordClass::Verb), "use");
        assert_eq!(lemma("studies", WordClass::Verb), "study");
    }

    #[test]
    fn test_irregular_forms() {
        assert_eq!(lemma("ran", WordClass::Verb), "run");
        assert_eq!(lemma("was", WordClass::Verb), "be");
        assert_eq!(lemma("children", WordClass::Noun), "child");
        assert_eq!(lemma("better", WordClass::Adjective), "good");
        assert_eq!(lemma("faster", WordClass::Adverb), "fast");
    }

    #[test]
    fn test_adjective_comparatives() {
        assert_eq!(lemma("faster", WordClass::Adjective), "fast");
        assert_eq!(lemma("bigger", WordClass::Adjective), "big");
        assert_eq!(lemma("nicest", WordClass::Adjective), "nice");
    }

    #[test]
    fn test_wrong_class_is_unchanged() {
        // "cats" is not a verb form of anything in the lexicon
        assert_eq!(lemma("cats", WordClass::Verb), "cats");
        assert_eq!(lemma("running", WordClass::Noun), "running");
    }

    #[test]
    fn test_unknown_words_pass_through() {
        assert_eq!(lemma("zyzzyvas", WordClass::Noun), "zyzzyvas");
        assert_eq!(lemma("Xylophonic", WordClass::Adjective), "Xylophonic");
        assert_eq!(lemma("", WordClass::Verb), "");
    }

    #[test]
    fn test_known_base_is_never_changed() {
        // "building" is a noun base even though it looks like a verb form
        assert_eq!(lemma("building", WordClass::Verb), "building");
        assert_eq!(lemma("learning", WordClass::Verb), "learning");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lemma("Cats", WordClass::Noun), "cat");
        assert_eq!(lemma("RAN", WordClass::Verb), "run");
    }

    #[test]
    fn test_unchanged_words_are_borrowed() {
        let lemmatizer = LexiconLemmatizer::english();
        assert!(matches!(
            lemmatizer.lemmatize("graph", WordClass::Verb),
            Cow::Borrowed("graph")
        ));
    }

    #[test]
    fn test_lexicon_from_reader() {
        let data = "# custom entries\nn\twug\nn\twugim\twug\nv\tblick\n";
        let lexicon = Lexicon::from_reader(data.as_bytes()).unwrap();

        assert!(lexicon.contains_base(WordClass::Noun, "wug"));
        assert!(lexicon.contains_base(WordClass::Verb, "blick"));
        assert_eq!(lexicon.exception(WordClass::Noun, "wugim"), Some("wug"));
        assert_eq!(lexicon.len(), 2);

        let lemmatizer = LexiconLemmatizer::new(lexicon);
        assert_eq!(lemmatizer.lemmatize("wugs", WordClass::Noun), "wug");
        assert_eq!(lemmatizer.lemmatize("blicked", WordClass::Verb), "blick");
    }

    #[test]
    fn test_lexicon_rejects_unknown_class() {
        let err = Lexicon::from_reader("q\tword\n".as_bytes()).unwrap_err();
        assert!(matches!(err, KeywordError::InvalidLexicon { line: 1, .. }));
    }

    #[test]
    fn test_lexicon_rejects_wrong_arity() {
        let err = Lexicon::from_reader("n\n".as_bytes()).unwrap_err();
        assert!(matches!(err, KeywordError::InvalidLexicon { .. }));
    }

    #[test]
    fn test_lexicon_extend() {
        let mut lexicon = Lexicon::english();
        let before = lexicon.len();

        let mut custom = Lexicon::new();
        custom.insert_base(WordClass::Noun, "tokenizer");
        lexicon.extend(custom);

        assert_eq!(lexicon.len(), before + 1);
        assert!(lexicon.contains_base(WordClass::Noun, "tokenizer"));
        assert!(lexicon.contains_base(WordClass::Noun, "cat"));
    }

    #[test]
    fn test_identity_lemmatizer() {
        assert_eq!(IdentityLemmatizer.lemmatize("running", WordClass::Verb), "running");
    }
}
