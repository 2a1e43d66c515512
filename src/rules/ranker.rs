//! Keyword relevance ranking.
//!
//! Scores rules and glossary entries against a free-text query using
//! additive signals. All comparisons are case-insensitive; words are
//! whitespace-separated tokens compared as distinct sets.
//!
//! | Signal                                            | Rule | Glossary |
//! |---------------------------------------------------|------|----------|
//! | query is a substring of the text / definition      | 100  | 80       |
//! | each distinct shared word                          | 10   | 8        |
//! | query has a digit and contains the rule number     | 50   | -        |
//! | query contains the term, or the term the query     | -    | 150      |
//!
//! Entries scoring zero are dropped. Ties keep input order: rules first in
//! list order, then glossary entries in insertion order.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::corpus::{GlossaryEntry, RuleEntry};

const RULE_PHRASE: u32 = 100;
const RULE_WORD: u32 = 10;
const RULE_NUMBER: u32 = 50;
const TERM_MATCH: u32 = 150;
const DEFINITION_PHRASE: u32 = 80;
const GLOSSARY_WORD: u32 = 8;

/// Where a ranked passage came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PassageMetadata {
    Rule { rule_number: String, section: String },
    Glossary { term: String },
}

/// A scored passage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPassage {
    /// Display text, e.g. `"Rule 405.1: ..."` or `"Glossary - Stack: ..."`.
    pub content: String,
    pub metadata: PassageMetadata,
    pub score: u32,
}

impl RankedPassage {
    /// Rule number, for rule passages.
    #[must_use]
    pub fn rule_number(&self) -> Option<&str> {
        match &self.metadata {
            PassageMetadata::Rule { rule_number, .. } => Some(rule_number),
            PassageMetadata::Glossary { .. } => None,
        }
    }
}

/// Distinct lowercase words of an already-lowercased string.
fn words(text: &str) -> FxHashSet<&str> {
    text.split_whitespace().collect()
}

fn shared_words(query_words: &FxHashSet<&str>, text_lower: &str) -> u32 {
    let text_words = words(text_lower);
    query_words.intersection(&text_words).count() as u32
}

/// Score a rule against a query.
///
/// `query_lower` and `query_words` are derived from `query`; the rule
/// number is matched against the query verbatim.
fn score_rule(rule: &RuleEntry, query: &str, query_lower: &str, query_words: &FxHashSet<&str>) -> u32 {
    let text_lower = rule.text.to_lowercase();
    let mut score = 0;

    if text_lower.contains(query_lower) {
        score += RULE_PHRASE;
    }

    score += RULE_WORD * shared_words(query_words, &text_lower);

    if !rule.number.is_empty()
        && query.chars().any(|c| c.is_ascii_digit())
        && query.contains(rule.number.as_str())
    {
        score += RULE_NUMBER;
    }

    score
}

fn score_glossary(entry: &GlossaryEntry, query_lower: &str, query_words: &FxHashSet<&str>) -> u32 {
    let term_lower = entry.term.to_lowercase();
    let definition_lower = entry.definition.to_lowercase();
    let mut score = 0;

    if !term_lower.is_empty()
        && (query_lower.contains(term_lower.as_str()) || term_lower.contains(query_lower))
    {
        score += TERM_MATCH;
    }

    if definition_lower.contains(query_lower) {
        score += DEFINITION_PHRASE;
    }

    score += GLOSSARY_WORD * shared_words(query_words, &definition_lower);

    score
}

/// Rank rules and glossary entries against `query`, returning at most
/// `limit` passages by descending score.
///
/// A blank query matches nothing.
///
/// ## Example
///
/// ```
/// use tolaria::rules::{rank_passages, GlossaryEntry, RuleEntry};
///
/// let rules = vec![RuleEntry::new("702.9a", "Flying is an evasion ability.")];
/// let glossary = vec![GlossaryEntry::new("Flying", "A keyword ability that restricts blocking.")];
///
/// let ranked = rank_passages("flying", &rules, &glossary, 5);
/// assert_eq!(ranked[0].content, "Glossary - Flying: A keyword ability that restricts blocking.");
/// assert_eq!(ranked[0].score, 150);
/// ```
pub fn rank_passages(
    query: &str,
    rules: &[RuleEntry],
    glossary: &[GlossaryEntry],
    limit: usize,
) -> Vec<RankedPassage> {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() || limit == 0 {
        return Vec::new();
    }
    let query_words = words(&query_lower);

    let rule_hits = rules.iter().filter_map(|rule| {
        let score = score_rule(rule, query, &query_lower, &query_words);
        (score > 0).then(|| RankedPassage {
            content: format!("Rule {}: {}", rule.number, rule.text),
            metadata: PassageMetadata::Rule {
                rule_number: rule.number.clone(),
                section: rule.section.clone(),
            },
            score,
        })
    });

    let glossary_hits = glossary.iter().filter_map(|entry| {
        let score = score_glossary(entry, &query_lower, &query_words);
        (score > 0).then(|| RankedPassage {
            content: format!("Glossary - {}: {}", entry.term, entry.definition),
            metadata: PassageMetadata::Glossary {
                term: entry.term.clone(),
            },
            score,
        })
    });

    let mut ranked: Vec<RankedPassage> = rule_hits.chain(glossary_hits).collect();
    // Stable: equal scores keep input order.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_phrase_and_words() {
        let rules = vec![RuleEntry::new("405.1", "The stack resolves one object at a time.")];
        let ranked = rank_passages("stack resolves", &rules, &[], 5);

        assert_eq!(ranked.len(), 1);
        // Phrase (100) + "stack" and "resolves" (2 x 10).
        assert_eq!(ranked[0].score, 120);
        assert_eq!(ranked[0].rule_number(), Some("405.1"));
        assert_eq!(ranked[0].content, "Rule 405.1: The stack resolves one object at a time.");
    }

    #[test]
    fn test_rule_number_bonus_requires_digit_and_verbatim_number() {
        let rules = vec![RuleEntry::new("405.1", "Unrelated text.")];

        let ranked = rank_passages("what does 405.1 say", &rules, &[], 5);
        assert_eq!(ranked[0].score, 50);

        assert!(rank_passages("what does rule four say", &rules, &[], 5).is_empty());
    }

    #[test]
    fn test_glossary_scoring() {
        let glossary = vec![GlossaryEntry::new("Counter", "To cancel a spell so it doesn't resolve.")];

        // Term signal only; the definition shares no words with the query.
        let ranked = rank_passages("how does counter work", &[], &glossary, 5);
        assert_eq!(ranked[0].score, 150);

        // Phrase in definition (80) + "cancel" and "a" (2 x 8).
        let ranked = rank_passages("cancel a", &[], &glossary, 5);
        assert_eq!(ranked[0].score, 96);
        assert_eq!(
            ranked[0].metadata,
            PassageMetadata::Glossary { term: "Counter".into() }
        );
    }

    #[test]
    fn test_term_contains_query() {
        let glossary = vec![GlossaryEntry::new("First Strike", "Combat damage is dealt early.")];
        let ranked = rank_passages("strike", &[], &glossary, 5);
        assert_eq!(ranked[0].score, 150);
    }

    #[test]
    fn test_zero_scores_excluded() {
        let rules = vec![RuleEntry::new("100.1", "Magic is a game.")];
        let glossary = vec![GlossaryEntry::new("Mana", "Resource.")];
        assert!(rank_passages("trample", &rules, &glossary, 10).is_empty());
    }

    #[test]
    fn test_blank_query_and_zero_limit() {
        let rules = vec![RuleEntry::new("100.1", "Magic is a game.")];
        assert!(rank_passages("   ", &rules, &[], 10).is_empty());
        assert!(rank_passages("magic", &rules, &[], 0).is_empty());
    }

    #[test]
    fn test_rules_before_glossary_on_tie() {
        let rules = vec![RuleEntry::new("100.1", "a b c d")];
        let glossary = vec![GlossaryEntry::new("zz", "e d c b a")];

        // Rule: 4 shared words x 10. Glossary: 5 shared words x 8.
        let ranked = rank_passages("a b c d e", &rules, &glossary, 5);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].score, 40);
        assert_eq!(ranked[1].score, 40);
        assert_eq!(ranked[0].rule_number(), Some("100.1"));
    }

    #[test]
    fn test_passage_metadata_serialization() {
        let meta = PassageMetadata::Rule {
            rule_number: "405.1".into(),
            section: "Zones".into(),
        };
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["type"], "rule");
        assert_eq!(json["rule_number"], "405.1");
    }
}
