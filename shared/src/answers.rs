use std::ops::Index;
use std::rc::Rc;

/// Student answers typed in manual mode.
///
/// The buffer is shared between clones and copied on the first write, so a
/// snapshot handed to a view or a pending request never sees later edits.
/// The list always holds at least one entry.
#[derive(Clone, Debug, PartialEq)]
pub struct AnswerList {
    entries: Rc<Vec<String>>,
}

impl Default for AnswerList {
    fn default() -> Self {
        Self {
            entries: Rc::new(vec![String::new()]),
        }
    }
}

impl AnswerList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Appends one empty answer at the end.
    pub fn push_empty(&mut self) {
        Rc::make_mut(&mut self.entries).push(String::new());
    }

    /// Replaces the answer at `index`. Returns `false` if out of range.
    pub fn set(&mut self, index: usize, value: String) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        Rc::make_mut(&mut self.entries)[index] = value;
        true
    }

    /// Removes the answer at `index` unless it is the only one left.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.entries.len() || self.entries.len() == 1 {
            return false;
        }
        Rc::make_mut(&mut self.entries).remove(index);
        true
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.as_ref().clone()
    }
}

impl Index<usize> for AnswerList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.entries[index]
    }
}

impl<S: Into<String>> FromIterator<S> for AnswerList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let entries: Vec<String> = iter.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            return Self::default();
        }
        Self {
            entries: Rc::new(entries),
        }
    }
}
