//! Comprehensive rules corpus.
//!
//! The corpus is loaded once at startup from the preprocessed rules
//! document and shared read-only across requests. Rules keep their document
//! order; glossary entries keep insertion order and are indexed by lowercase
//! term.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::ranker::{rank_passages, RankedPassage};
use crate::core::{Result, TolariaError};

/// A numbered comprehensive rule, e.g. `405.1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    pub number: String,
    pub text: String,
    /// Section name derived from the first digit of `number`.
    #[serde(default)]
    pub section: String,
}

impl RuleEntry {
    /// Create a rule, deriving its section from the number.
    pub fn new(number: impl Into<String>, text: impl Into<String>) -> Self {
        let number = number.into();
        let section = section_for_number(&number).to_string();
        Self {
            number,
            text: text.into(),
            section,
        }
    }
}

/// A glossary definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub term: String,
    pub definition: String,
}

impl GlossaryEntry {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// Section name for a rule number, keyed by its first digit.
#[must_use]
pub fn section_for_number(number: &str) -> &'static str {
    match number.chars().next() {
        Some('1') => "Game Concepts",
        Some('2') => "Parts of a Card",
        Some('3') => "Card Types",
        Some('4') => "Zones",
        Some('5') => "Turn Structure",
        Some('6') => "Spells, Abilities, and Effects",
        Some('7') => "Additional Rules",
        Some('8') => "Multiplayer Rules",
        Some('9') => "Casual Variants",
        _ => "Unknown",
    }
}

/// On-disk layout of the preprocessed rules document.
/// Other top-level keys (such as a number index) are ignored.
#[derive(Deserialize)]
struct CorpusDocument {
    rules: Vec<RuleEntry>,
    #[serde(default)]
    glossary: serde_json::Map<String, serde_json::Value>,
}

/// Read-only rule and glossary store.
#[derive(Clone, Debug)]
pub struct RuleCorpus {
    rules: Vec<RuleEntry>,
    rule_index: FxHashMap<String, usize>,
    glossary: Vec<GlossaryEntry>,
    glossary_index: FxHashMap<String, usize>,
}

impl RuleCorpus {
    /// Build a corpus from entries.
    ///
    /// Fails with `MissingCorpus` when both collections are empty: an engine
    /// without rules must not serve requests.
    pub fn new(rules: Vec<RuleEntry>, glossary: Vec<GlossaryEntry>) -> Result<Self> {
        if rules.is_empty() && glossary.is_empty() {
            return Err(TolariaError::MissingCorpus(
                "corpus has no rules and no glossary entries".to_string(),
            ));
        }

        let mut corpus = Self {
            rules: Vec::with_capacity(rules.len()),
            rule_index: FxHashMap::default(),
            glossary: Vec::with_capacity(glossary.len()),
            glossary_index: FxHashMap::default(),
        };

        for mut rule in rules {
            if rule.section.is_empty() {
                rule.section = section_for_number(&rule.number).to_string();
            }
            // Later duplicates win the index; the list keeps every rule.
            corpus.rule_index.insert(rule.number.clone(), corpus.rules.len());
            corpus.rules.push(rule);
        }

        for entry in glossary {
            let key = entry.term.to_lowercase();
            match corpus.glossary_index.get(&key) {
                Some(&idx) => corpus.glossary[idx] = entry,
                None => {
                    corpus.glossary_index.insert(key, corpus.glossary.len());
                    corpus.glossary.push(entry);
                }
            }
        }

        Ok(corpus)
    }

    /// Parse the preprocessed rules JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: CorpusDocument = serde_json::from_str(json)?;

        let glossary = document
            .glossary
            .into_iter()
            .map(|(key, value)| {
                serde_json::from_value::<GlossaryEntry>(value).map_err(|err| {
                    TolariaError::InvalidCorpus(format!("glossary entry '{key}': {err}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(document.rules, glossary)
    }

    /// Load the preprocessed rules document from disk.
    ///
    /// A missing file is `MissingCorpus`, which callers treat as fatal.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TolariaError::MissingCorpus(path.display().to_string()));
        }

        let json = std::fs::read_to_string(path)?;
        let corpus = Self::from_json_str(&json)?;

        tracing::info!(
            path = %path.display(),
            rules = corpus.rules.len(),
            glossary = corpus.glossary.len(),
            "loaded rule corpus"
        );
        Ok(corpus)
    }

    /// All rules in document order.
    #[must_use]
    pub fn rules(&self) -> &[RuleEntry] {
        &self.rules
    }

    /// All glossary entries in insertion order.
    #[must_use]
    pub fn glossary(&self) -> &[GlossaryEntry] {
        &self.glossary
    }

    /// Get a rule by its exact number.
    #[must_use]
    pub fn rule(&self, number: &str) -> Option<&RuleEntry> {
        self.rule_index.get(number).map(|&idx| &self.rules[idx])
    }

    /// Get a glossary entry by term, ignoring case.
    #[must_use]
    pub fn glossary_entry(&self, term: &str) -> Option<&GlossaryEntry> {
        self.glossary_index
            .get(&term.to_lowercase())
            .map(|&idx| &self.glossary[idx])
    }

    /// Rules whose text contains `query`, ignoring case, in document order.
    pub fn search_rules(&self, query: &str, limit: usize) -> Vec<&RuleEntry> {
        let query = query.to_lowercase();
        self.rules
            .iter()
            .filter(|rule| rule.text.to_lowercase().contains(&query))
            .take(limit)
            .collect()
    }

    /// Rules about the stack: section 405, or any rule mentioning it.
    pub fn stack_rules(&self) -> Vec<&RuleEntry> {
        self.rules
            .iter()
            .filter(|rule| rule.number.starts_with("405") || rule.text.to_lowercase().contains("stack"))
            .collect()
    }

    /// Top `limit` passages for a query. See [`rank_passages`].
    pub fn search_relevant(&self, query: &str, limit: usize) -> Vec<RankedPassage> {
        rank_passages(query, &self.rules, &self.glossary, limit)
    }
}
