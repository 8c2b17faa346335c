//! Recently committed abbreviations

use std::collections::VecDeque;

const DEFAULT_CAPACITY: usize = 10;

/// Most-recent-first list of committed abbreviations, without duplicates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Move `abbreviation` to the front, dropping the oldest entry when full
    pub fn record(&mut self, abbreviation: &str) {
        let abbreviation = abbreviation.trim();
        if abbreviation.is_empty() || self.capacity == 0 {
            return;
        }
        self.entries.retain(|e| e != abbreviation);
        self.entries.push_front(abbreviation.to_string());
        self.entries.truncate(self.capacity);
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
