//! Chemical formula parsing.
//!
//! [`parse`] turns a formula such as `Al2(SO4)3` into an [`ElementCount`].
//! Parsing is lenient: characters that are neither part of an element
//! symbol, a count nor a group bracket are skipped.

use serde::Serialize;

use crate::error::ChembalError;

/// Element symbols and how many atoms of each a formula contains.
///
/// Entries keep the order in which their element was first seen, so the
/// first element of `H2SO4` is `H`. A count is never zero.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ElementCount {
    entries: Vec<(String, u32)>,
}

impl ElementCount {
    /// Creates an empty count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` atoms of `symbol`.
    /// Adding zero atoms leaves the count untouched.
    ///
    /// Returns `None`, leaving the entry unchanged, if the total would not
    /// fit in `u32`.
    #[must_use]
    pub fn add(&mut self, symbol: &str, count: u32) -> Option<()> {
        if count == 0 {
            return Some(());
        }
        match self.entries.iter_mut().find(|(s, _)| s == symbol) {
            Some((_, q)) => *q = q.checked_add(count)?,
            None => self.entries.push((symbol.to_string(), count)),
        }
        Some(())
    }

    /// Adds every entry of `other`, each multiplied by `multiplier`.
    ///
    /// Returns `None` as soon as a count would not fit in `u32`.
    #[must_use]
    pub fn merge(&mut self, other: &ElementCount, multiplier: u32) -> Option<()> {
        for (symbol, count) in other.iter() {
            self.add(symbol, count.checked_mul(multiplier)?)?;
        }
        Some(())
    }

    /// Number of atoms of `symbol`, 0 if absent.
    pub fn get(&self, symbol: &str) -> u32 {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map_or(0, |(_, q)| *q)
    }

    /// Returns `true` if `symbol` occurs at least once.
    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.iter().any(|(s, _)| s == symbol)
    }

    /// Iterates over `(symbol, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(s, q)| (s.as_str(), *q))
    }

    /// Element symbols in first-seen order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(s, _)| s.as_str())
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of atoms.
    pub fn atom_count(&self) -> u64 {
        self.entries.iter().map(|(_, q)| u64::from(*q)).sum()
    }
}

/// Parses a formula into its element counts.
///
/// Uppercase letters start element symbols and lowercase letters extend
/// them. Digits right after a symbol or a closing bracket are its count.
/// `(...)` and `[...]` groups nest and take a trailing multiplier.
///
/// # Errors
/// [`ChembalError::MalformedFormula`] if a group is never closed or a count
/// does not fit in 32 bits.
///
/// # Example
/// ```
/// use chembal::formula::parse;
///
/// let counts = parse("Al2(SO4)3").unwrap();
/// assert_eq!(counts.get("Al"), 2);
/// assert_eq!(counts.get("S"), 3);
/// assert_eq!(counts.get("O"), 12);
/// ```
pub fn parse(formula: &str) -> Result<ElementCount, ChembalError> {
    let mut cursor = Cursor {
        formula,
        chars: formula.chars().collect(),
        pos: 0,
    };
    cursor.group(None)
}

struct Cursor<'a> {
    formula: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Parses until `closer` (or the end of input when `None`) and returns
    /// the counts of that group, without its multiplier applied.
    fn group(&mut self, closer: Option<char>) -> Result<ElementCount, ChembalError> {
        let mut counts = ElementCount::new();

        while let Some(c) = self.peek() {
            match c {
                'A'..='Z' => {
                    let symbol = self.symbol();
                    let count = self.count()?.unwrap_or(1);
                    counts
                        .add(&symbol, count)
                        .ok_or_else(|| self.overflow(&symbol))?;
                }
                '(' | '[' => {
                    self.pos += 1;
                    let inner = self.group(Some(if c == '(' { ')' } else { ']' }))?;
                    let multiplier = self.count()?.unwrap_or(1);
                    counts
                        .merge(&inner, multiplier)
                        .ok_or_else(|| self.overflow("a group"))?;
                }
                _ if Some(c) == closer => {
                    self.pos += 1;
                    return Ok(counts);
                }
                _ => self.pos += 1,
            }
        }

        match closer {
            Some(closer) => Err(ChembalError::malformed_formula(
                self.formula,
                format!("missing '{closer}' to close group"),
            )),
            None => Ok(counts),
        }
    }

    fn overflow(&self, what: &str) -> ChembalError {
        ChembalError::malformed_formula(self.formula, format!("count of {what} overflows"))
    }

    fn symbol(&mut self) -> String {
        let start = self.pos;
        self.pos += 1;
        while self.peek().is_some_and(|c| c.is_ascii_lowercase()) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    fn count(&mut self) -> Result<Option<u32>, ChembalError> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        if start == self.pos {
            return Ok(None);
        }
        let digits: String = self.chars[start..self.pos].iter().collect();
        digits
            .parse::<u32>()
            .map(Some)
            .map_err(|_| ChembalError::malformed_formula(self.formula, format!("count {digits} is too large")))
    }
}
