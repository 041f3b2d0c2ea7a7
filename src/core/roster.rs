//! The roster: an ordered list of display names.
//! Replaced wholesale from a raw text block; never edited in place.

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn from_names(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn replace(&mut self, names: Vec<String>) {
        self.names = names;
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Parse a raw text block into names: one per line, surrounding
    /// whitespace trimmed, empty lines dropped. Duplicates are kept as
    /// entered; the list is the administrator's to curate.
    pub fn parse(raw: &str) -> Vec<String> {
        raw.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    }
}
