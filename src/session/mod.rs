// Evaluation history for interactive use

use crate::interpreter::{checked_evaluate, evaluate, lispify, EvalError};
use crate::parser::ast::Expr;
use crate::parser::lexer::tokenize;
use crate::parser::parse::parse;
use crate::parser::token::Token;
use crate::parser::FrontendError;
use rustc_hash::FxHashMap;

/// Everything produced by one successful run of the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub tokens: Vec<Token>,
    pub expr: Expr,
    pub prefix: String,
    /// Wrapping result; see [`evaluate`]
    pub value: u64,
    /// Set when the exact result does not fit in `u64`
    pub overflow: Option<EvalError>,
}

impl Evaluation {
    /// Tokenize, parse, render and evaluate `source`.
    pub fn run(source: &str) -> Result<Self, FrontendError> {
        let tokens = tokenize(source)?;
        let expr = parse(&tokens)?;
        let prefix = lispify(&expr);
        let value = evaluate(&expr);
        let overflow = checked_evaluate(&expr).err();

        Ok(Evaluation {
            tokens,
            expr,
            prefix,
            value,
            overflow,
        })
    }
}

/// A submitted input and its outcome
#[derive(Debug, Clone)]
pub struct Entry {
    pub source: String,
    pub outcome: Result<Evaluation, FrontendError>,
    /// How many times this exact input has been submitted
    pub submissions: usize,
}

/// Bounded history of submissions, newest last.
///
/// Resubmitting an input that is still in the history reuses its cached
/// outcome and moves it to the newest slot instead of adding a duplicate.
#[derive(Debug)]
pub struct Session {
    entries: Vec<Entry>,
    index: FxHashMap<String, usize>,
    capacity: usize,
}

impl Session {
    pub fn new(capacity: usize) -> Self {
        Session {
            entries: Vec::new(),
            index: FxHashMap::default(),
            capacity: capacity.max(1),
        }
    }

    /// Evaluate `source` (or fetch it from the cache) and record it as the
    /// newest entry.
    pub fn submit(&mut self, source: &str) -> &Entry {
        let (key, entry) = match self.index.remove_entry(source) {
            Some((key, position)) => {
                let mut entry = self.entries.remove(position);
                entry.submissions += 1;
                self.renumber_from(position);
                (key, entry)
            }
            None => (
                source.to_string(),
                Entry {
                    source: source.to_string(),
                    outcome: Evaluation::run(source),
                    submissions: 1,
                },
            ),
        };

        self.index.insert(key, self.entries.len());
        self.entries.push(entry);

        if self.entries.len() > self.capacity {
            let overflow = self.entries.len() - self.capacity;
            for evicted in self.entries.drain(..overflow) {
                self.index.remove(&evicted.source);
            }
            self.renumber_from(0);
        }

        &self.entries[self.entries.len() - 1]
    }

    /// Point the index at the current positions of `entries[start..]`.
    fn renumber_from(&mut self, start: usize) {
        for (position, entry) in self.entries.iter().enumerate().skip(start) {
            if let Some(slot) = self.index.get_mut(entry.source.as_str()) {
                *slot = position;
            }
        }
    }

    /// Get an entry by index (0 = oldest)
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_records_outcome() {
        let mut session = Session::new(8);
        let entry = session.submit("1+2*3");

        let evaluation = entry.outcome.as_ref().unwrap();
        assert_eq!(evaluation.prefix, "(+ 1 (* 2 3))");
        assert_eq!(evaluation.value, 7);
        assert_eq!(evaluation.overflow, None);
        assert_eq!(evaluation.tokens.last(), Some(&Token::Eof));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_errors_are_recorded() {
        let mut session = Session::new(8);
        let entry = session.submit("(1+2");
        assert!(matches!(entry.outcome, Err(FrontendError::Parse(_))));
    }

    #[test]
    fn test_resubmit_moves_to_newest() {
        let mut session = Session::new(8);
        session.submit("1");
        session.submit("2");
        session.submit("3");

        let entry = session.submit("1");
        assert_eq!(entry.submissions, 2);
        assert_eq!(session.len(), 3);

        let order: Vec<&str> = session
            .entries()
            .iter()
            .map(|e| e.source.as_str())
            .collect();
        assert_eq!(order, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut session = Session::new(2);
        session.submit("1");
        session.submit("2");
        session.submit("3");

        assert_eq!(session.len(), 2);
        assert_eq!(session.get(0).map(|e| e.source.as_str()), Some("2"));
        assert_eq!(session.latest().map(|e| e.source.as_str()), Some("3"));

        // "1" was evicted, so it is evaluated afresh
        assert_eq!(session.submit("1").submissions, 1);
    }

    /// Every entry is indexed at its current position and nothing else is.
    fn assert_index_consistent(session: &Session) {
        assert_eq!(session.index.len(), session.entries.len());
        for (position, entry) in session.entries.iter().enumerate() {
            assert_eq!(session.index.get(&entry.source), Some(&position));
        }
    }

    #[test]
    fn test_index_tracks_positions() {
        let mut session = Session::new(4);
        for source in ["1", "2", "3", "4"] {
            session.submit(source);
        }
        assert_index_consistent(&session);

        // move from the middle
        session.submit("2");
        assert_index_consistent(&session);

        // evict "1" and "3"
        session.submit("5");
        session.submit("6");
        assert_index_consistent(&session);

        let order: Vec<&str> = session
            .entries()
            .iter()
            .map(|e| e.source.as_str())
            .collect();
        assert_eq!(order, vec!["4", "2", "5", "6"]);

        // resubmitting the newest entry leaves the order alone
        assert_eq!(session.submit("6").submissions, 2);
        assert_index_consistent(&session);
        assert_eq!(session.latest().map(|e| e.source.as_str()), Some("6"));
    }

    #[test]
    fn test_capacity_one() {
        let mut session = Session::new(1);
        session.submit("1");
        session.submit("1");
        session.submit("2");
        assert_eq!(session.len(), 1);
        assert_index_consistent(&session);
    }

    #[test]
    fn test_overflow_flagged() {
        let mut session = Session::new(4);
        let entry = session.submit("18446744073709551615 + 1");
        let evaluation = entry.outcome.as_ref().unwrap();
        assert_eq!(evaluation.value, 0);
        assert!(evaluation.overflow.is_some());
    }
}
