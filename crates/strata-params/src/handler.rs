//! The [`ParameterHandler`] tree and its parameter-file reader.
//!
//! # File format
//!
//! ```text
//! # comments run to end of line
//! subsection Material model
//!   set Model name = simpler with crust
//!   subsection Simpler with crust model
//!     set Jump height = 50000
//!   end
//! end
//! ```
//!
//! Every `set` must name an entry declared beforehand in that subsection,
//! and every `subsection` must already exist in the tree.

use std::collections::HashSet;

use indexmap::IndexMap;
use strata_core::ParameterError;

use crate::pattern::Pattern;

#[derive(Clone, Debug)]
struct Entry {
    value: String,
    default: String,
    pattern: Pattern,
    documentation: String,
}

#[derive(Clone, Debug, Default)]
struct Section {
    entries: IndexMap<String, Entry>,
    subsections: IndexMap<String, Section>,
}

/// Read-only view of one declared entry, yielded by
/// [`ParameterHandler::entries`].
#[derive(Clone, Debug, PartialEq)]
pub struct EntryInfo<'a> {
    /// Full `Section/Subsection/Entry` path.
    pub path: String,
    /// Current value (the default unless set).
    pub value: &'a str,
    /// Declared default.
    pub default: &'a str,
    /// Declared pattern.
    pub pattern: &'a Pattern,
    /// Declared documentation.
    pub documentation: &'a str,
}

/// A tree of subsections holding declared, pattern-checked entries.
///
/// Navigation is stateful: [`enter_subsection`](Self::enter_subsection)
/// and [`leave_subsection`](Self::leave_subsection) move a cursor, and
/// declarations and lookups act on the section under the cursor.
#[derive(Clone, Debug, Default)]
pub struct ParameterHandler {
    root: Section,
    cursor: Vec<String>,
}

impl ParameterHandler {
    /// An empty tree with the cursor at the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move into subsection `name`.
    ///
    /// Only the cursor moves. The section itself is added to the tree when
    /// the first entry is declared in it, so reading through an undeclared
    /// section leaves the tree unchanged.
    pub fn enter_subsection(&mut self, name: &str) {
        self.cursor.push(name.to_string());
    }

    /// Move back to the parent section.
    ///
    /// # Errors
    ///
    /// [`ParameterError::UnbalancedSection`] if the cursor is at the root.
    pub fn leave_subsection(&mut self) -> Result<(), ParameterError> {
        self.cursor
            .pop()
            .map(|_| ())
            .ok_or(ParameterError::UnbalancedSection)
    }

    /// Declare an entry in the current section.
    ///
    /// The entry's value starts out as `default`.
    ///
    /// # Errors
    ///
    /// - [`ParameterError::DuplicateEntry`] if `name` is already declared here.
    /// - [`ParameterError::PatternMismatch`] if `default` does not match `pattern`.
    pub fn declare_entry(
        &mut self,
        name: &str,
        default: &str,
        pattern: Pattern,
        documentation: &str,
    ) -> Result<(), ParameterError> {
        let path = self.path_of(name);
        if !pattern.matches(default.trim()) {
            return Err(ParameterError::PatternMismatch {
                path,
                value: default.to_string(),
                pattern: pattern.to_string(),
            });
        }
        let section = Self::walk_mut(&mut self.root, &self.cursor);
        if section.entries.contains_key(name) {
            return Err(ParameterError::DuplicateEntry { path });
        }
        section.entries.insert(
            name.to_string(),
            Entry {
                value: default.trim().to_string(),
                default: default.trim().to_string(),
                pattern,
                documentation: documentation.to_string(),
            },
        );
        Ok(())
    }

    /// Assign a value to a declared entry in the current section.
    ///
    /// # Errors
    ///
    /// - [`ParameterError::UndeclaredEntry`] if `name` was never declared here.
    /// - [`ParameterError::PatternMismatch`] if `value` does not match the pattern.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), ParameterError> {
        let path = self.path_of(name);
        let value = value.trim();
        let entry = Self::walk_existing_mut(&mut self.root, &self.cursor)
            .and_then(|s| s.entries.get_mut(name))
            .ok_or_else(|| ParameterError::UndeclaredEntry { path: path.clone() })?;
        if !entry.pattern.matches(value) {
            return Err(ParameterError::PatternMismatch {
                path,
                value: value.to_string(),
                pattern: entry.pattern.to_string(),
            });
        }
        log::debug!("strata-params: set {path} = {value}");
        entry.value = value.to_string();
        Ok(())
    }

    /// The current value of an entry in the current section.
    ///
    /// # Errors
    ///
    /// [`ParameterError::UndeclaredEntry`] if the entry (or the section
    /// under the cursor) does not exist.
    pub fn get(&self, name: &str) -> Result<&str, ParameterError> {
        Self::walk(&self.root, &self.cursor)
            .and_then(|s| s.entries.get(name))
            .map(|e| e.value.as_str())
            .ok_or_else(|| ParameterError::UndeclaredEntry {
                path: self.path_of(name),
            })
    }

    /// The current value of an entry, parsed as `f64`.
    ///
    /// # Errors
    ///
    /// - [`ParameterError::UndeclaredEntry`] if the entry does not exist.
    /// - [`ParameterError::PatternMismatch`] if the value is not a number.
    pub fn get_double(&self, name: &str) -> Result<f64, ParameterError> {
        let raw = self.get(name)?;
        raw.parse::<f64>()
            .map_err(|_| ParameterError::PatternMismatch {
                path: self.path_of(name),
                value: raw.to_string(),
                pattern: "[Double]".to_string(),
            })
    }

    /// Full path of the section under the cursor, `/`-separated.
    pub fn current_path(&self) -> String {
        self.cursor.join("/")
    }

    /// Every declared entry, depth-first in declaration order.
    pub fn entries(&self) -> Vec<EntryInfo<'_>> {
        let mut out = Vec::new();
        Self::collect(&self.root, &mut Vec::new(), &mut out);
        out
    }

    /// Read a parameter file, assigning values into the tree.
    ///
    /// Parsing always starts at the root; the cursor is restored
    /// afterwards, whether or not parsing succeeds. A file is applied
    /// whole or not at all: on error every value keeps what it held
    /// before the call.
    ///
    /// # Errors
    ///
    /// - [`ParameterError::Syntax`] for unrecognised lines.
    /// - [`ParameterError::UnknownSection`] for an undeclared `subsection`.
    /// - [`ParameterError::UnbalancedSection`] for a stray `end` or a
    ///   missing one at end of input.
    /// - Any error from [`set`](Self::set).
    pub fn parse_input(&mut self, input: &str) -> Result<(), ParameterError> {
        let saved_cursor = std::mem::take(&mut self.cursor);
        let saved_root = self.root.clone();
        let result = self.parse_lines(input);
        if result.is_err() {
            self.root = saved_root;
        }
        self.cursor = saved_cursor;
        result
    }

    fn parse_lines(&mut self, input: &str) -> Result<(), ParameterError> {
        let mut assigned: HashSet<String> = HashSet::new();

        for (idx, raw) in input.lines().enumerate() {
            let line_no = idx + 1;
            let line = match raw.find('#') {
                Some(pos) => &raw[..pos],
                None => raw,
            }
            .trim();
            if line.is_empty() {
                continue;
            }

            if let Some(name) = keyword_arg(line, "subsection") {
                if name.is_empty() {
                    return Err(ParameterError::Syntax {
                        line: line_no,
                        reason: "subsection without a name".to_string(),
                    });
                }
                let exists = Self::walk(&self.root, &self.cursor)
                    .is_some_and(|s| s.subsections.contains_key(name));
                if !exists {
                    let mut path = self.cursor.clone();
                    path.push(name.to_string());
                    return Err(ParameterError::UnknownSection {
                        path: path.join("/"),
                    });
                }
                self.cursor.push(name.to_string());
            } else if line == "end" {
                self.leave_subsection()?;
            } else if let Some(assignment) = keyword_arg(line, "set") {
                let (name, value) =
                    assignment
                        .split_once('=')
                        .ok_or_else(|| ParameterError::Syntax {
                            line: line_no,
                            reason: format!("expected 'set <name> = <value>', got '{line}'"),
                        })?;
                let name = name.trim();
                self.set(name, value)?;
                if !assigned.insert(self.path_of(name)) {
                    log::warn!(
                        "strata-params: line {line_no}: '{}' assigned more than once, last value wins",
                        self.path_of(name)
                    );
                }
            } else {
                return Err(ParameterError::Syntax {
                    line: line_no,
                    reason: format!("unrecognised line '{line}'"),
                });
            }
        }

        if self.cursor.is_empty() {
            Ok(())
        } else {
            Err(ParameterError::UnbalancedSection)
        }
    }

    fn path_of(&self, name: &str) -> String {
        if self.cursor.is_empty() {
            name.to_string()
        } else {
            format!("{}/{name}", self.cursor.join("/"))
        }
    }

    fn walk<'s>(root: &'s Section, cursor: &[String]) -> Option<&'s Section> {
        cursor
            .iter()
            .try_fold(root, |section, name| section.subsections.get(name))
    }

    fn walk_existing_mut<'s>(root: &'s mut Section, cursor: &[String]) -> Option<&'s mut Section> {
        cursor
            .iter()
            .try_fold(root, |section, name| section.subsections.get_mut(name))
    }

    // Creates any missing section along the cursor; declaration only.
    fn walk_mut<'s>(root: &'s mut Section, cursor: &[String]) -> &'s mut Section {
        cursor.iter().fold(root, |section, name| {
            section.subsections.entry(name.clone()).or_default()
        })
    }

    fn collect<'s>(section: &'s Section, prefix: &mut Vec<String>, out: &mut Vec<EntryInfo<'s>>) {
        for (name, entry) in &section.entries {
            prefix.push(name.clone());
            out.push(EntryInfo {
                path: prefix.join("/"),
                value: &entry.value,
                default: &entry.default,
                pattern: &entry.pattern,
                documentation: &entry.documentation,
            });
            prefix.pop();
        }
        for (name, sub) in &section.subsections {
            prefix.push(name.clone());
            Self::collect(sub, prefix, out);
            prefix.pop();
        }
    }
}

/// `"subsection Foo Bar"` with keyword `"subsection"` yields `Some("Foo Bar")`.
fn keyword_arg<'l>(line: &'l str, keyword: &str) -> Option<&'l str> {
    let rest = line.strip_prefix(keyword)?;
    if rest.is_empty() {
        return Some(rest);
    }
    rest.starts_with(char::is_whitespace).then(|| rest.trim())
}
