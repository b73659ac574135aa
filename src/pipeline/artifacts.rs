//! Typed artifacts flowing between pipeline stages.
//!
//! The preprocessor turns a [`Corpus`] into [`LemmatizedText`], the ranker
//! produces [`RankedTerms`], and the selector cuts those down to the final
//! [`KeywordList`].

use serde::Serialize;

use crate::selection::Selection;
use crate::types::ScoredTerm;

/// Ordered non-null text cells from one table column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Corpus {
    pub cells: Vec<String>,
}

impl Corpus {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// All cells joined by single spaces.
    pub fn text(&self) -> String {
        self.cells.join(" ")
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Corpus {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Lemmatized token sequence produced by the preprocessor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LemmatizedText {
    pub tokens: Vec<String>,
}

impl LemmatizedText {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Tokens joined by single spaces, as handed to the ranker.
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Scored candidate terms as returned by the ranker, after re-normalization.
///
/// Terms are not guaranteed unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankedTerms {
    pub terms: Vec<ScoredTerm>,
}

impl RankedTerms {
    pub fn new(terms: Vec<ScoredTerm>) -> Self {
        Self { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Final output: retained keywords in ranker order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeywordList {
    pub keywords: Vec<String>,
    /// Score cut-off that produced this list
    pub threshold: Option<f64>,
    /// Number of ranked terms the cut-off was applied to
    pub candidates: usize,
}

impl KeywordList {
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl From<Selection> for KeywordList {
    fn from(selection: Selection) -> Self {
        Self {
            keywords: selection.terms.into_iter().map(|t| t.term).collect(),
            threshold: selection.threshold,
            candidates: selection.candidates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_text_joins_with_spaces() {
        let corpus: Corpus = ["cats run fast", "dogs run faster"].into_iter().collect();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.text(), "cats run fast dogs run faster");
    }

    #[test]
    fn test_empty_corpus_text() {
        let corpus = Corpus::default();
        assert!(corpus.is_empty());
        assert_eq!(corpus.text(), "");
    }

    #[test]
    fn test_keyword_list_from_selection() {
        let selection = Selection {
            terms: vec![ScoredTerm::new("alpha", 10.0), ScoredTerm::new("beta", 8.0)],
            threshold: Some(6.5),
            candidates: 4,
        };

        let list = KeywordList::from(selection);

        assert_eq!(list.keywords, vec!["alpha", "beta"]);
        assert_eq!(list.threshold, Some(6.5));
        assert_eq!(list.candidates, 4);
    }
}
