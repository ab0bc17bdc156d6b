//! # Rule Cascades
//!
//! Ordered `(pattern, outcome)` tables evaluated first-match-wins. Extractors
//! declare their priority order as data so it can be inspected and tested
//! independently of the matching code.

use regex::Regex;
use tracing::trace;

/// One entry of a cascade
#[derive(Debug, Clone)]
pub struct Rule<T> {
    /// Stable name used in logs and tests
    pub name: &'static str,
    pub pattern: Regex,
    pub outcome: T,
}

impl<T> Rule<T> {
    /// Compile a rule. Patterns are static literals, so a bad one is a programming error.
    pub fn new(name: &'static str, pattern: &str, outcome: T) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("Invalid pattern for rule '{}': {}", name, e));
        Self {
            name,
            pattern,
            outcome,
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Rules tried in declaration order
#[derive(Debug, Clone)]
pub struct RuleSet<T> {
    rules: Vec<Rule<T>>,
}

impl<T> RuleSet<T> {
    pub fn new(rules: Vec<Rule<T>>) -> Self {
        Self { rules }
    }

    /// First rule whose pattern occurs anywhere in `text`
    pub fn first_match(&self, text: &str) -> Option<&Rule<T>> {
        let found = self.rules.iter().find(|rule| rule.is_match(text));
        if let Some(rule) = found {
            trace!(rule = rule.name, "Rule matched");
        }
        found
    }

    /// Rules in priority order
    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    /// Rule names in priority order
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Wrap a list of alternatives as one case-insensitive, word-bounded group.
///
/// # Examples
/// ```
/// use transformer_code::rules::word_group;
///
/// assert_eq!(word_group(&["cu", r"copper\s*wire"]), r"(?i)\b(?:cu|copper\s*wire)\b");
/// ```
pub fn word_group(alternatives: &[&str]) -> String {
    format!(r"(?i)\b(?:{})\b", alternatives.join("|"))
}

/// Like [`word_group`], but the match may run straight into a designation
/// number, as in "IEC60076" or "EN 600761".
///
/// # Examples
/// ```
/// use regex::Regex;
/// use transformer_code::rules::designation_group;
///
/// let iec = Regex::new(&designation_group(&["iec"])).unwrap();
/// assert!(iec.is_match("IEC60076-11"));
/// assert!(iec.is_match("per IEC"));
/// assert!(!iec.is_match("IECEx"));
/// ```
pub fn designation_group(alternatives: &[&str]) -> String {
    format!(r"(?i)\b(?:{})(?:\b|\d)", alternatives.join("|"))
}

/// Case-insensitive, word-bounded match of a literal phrase
pub fn word_literal(phrase: &str) -> String {
    format!(r"(?i)\b{}\b", regex::escape(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RuleSet<&'static str> {
        RuleSet::new(vec![
            Rule::new("first", r"(?i)\bon\s*load\b", "on"),
            Rule::new("second", r"(?i)\boff\s*load\b", "off"),
            Rule::new("catch_all", r"load", "any"),
        ])
    }

    #[test]
    fn test_first_match_wins() {
        let rules = sample();
        let rule = rules.first_match("off load and on load").unwrap();
        assert_eq!(rule.outcome, "on");
    }

    #[test]
    fn test_later_rule_used_when_earlier_misses() {
        let rules = sample();
        assert_eq!(rules.first_match("OFF LOAD").unwrap().name, "second");
        assert_eq!(rules.first_match("overloaded").unwrap().name, "catch_all");
    }

    #[test]
    fn test_no_match() {
        assert!(sample().first_match("nothing here").is_none());
    }

    #[test]
    fn test_names_keep_order() {
        assert_eq!(sample().names(), vec!["first", "second", "catch_all"]);
        assert_eq!(sample().len(), 3);
    }

    #[test]
    fn test_word_literal_escapes() {
        let pattern = Regex::new(&word_literal("zone-2")).unwrap();
        assert!(pattern.is_match("Rated for Zone-2 areas"));
        assert!(!pattern.is_match("zonex2"));
    }

    #[test]
    fn test_designation_group_accepts_glued_numbers() {
        let pattern = Regex::new(&designation_group(&["iec", r"en\s*\d{4}"])).unwrap();
        assert!(pattern.is_match("IEC60076-11"));
        assert!(pattern.is_match("EN 60076"));
        assert!(pattern.is_match("iec"));
        // A following letter still ends the keyword
        assert!(!pattern.is_match("IECEx certified"));
    }

    #[test]
    #[should_panic(expected = "Invalid pattern")]
    fn test_invalid_pattern_panics() {
        let _ = Rule::new("broken", "[unclosed", ());
    }
}
