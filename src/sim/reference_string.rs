//! Reference string - the page access workload of a run.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::common::{ConfigError, Error, PageId, Result};

/// An immutable, ordered sequence of page references.
///
/// Parsed from comma-separated text such as `"7, 0, 1, 2"`. Whitespace around
/// each token is ignored, and input that is empty or only whitespace yields an
/// empty sequence. Every other token must be an integer.
///
/// # Example
/// ```
/// use pagesim::{PageId, ReferenceString};
///
/// let refs: ReferenceString = "1, 2, 1".parse().unwrap();
/// assert_eq!(refs.len(), 3);
/// assert_eq!(refs.next_occurrence(PageId::new(1), 1), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceString {
    pages: Vec<PageId>,
}

impl ReferenceString {
    /// Create a reference string from page ids.
    pub fn new(pages: Vec<PageId>) -> Self {
        Self { pages }
    }

    /// Number of references.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// The reference at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<PageId> {
        self.pages.get(index).copied()
    }

    pub fn as_slice(&self) -> &[PageId] {
        &self.pages
    }

    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages.iter().copied()
    }

    /// Index of the first reference to `page_id` at or after `from`.
    ///
    /// Returns `None` when the page is never referenced again.
    pub fn next_occurrence(&self, page_id: PageId, from: usize) -> Option<usize> {
        self.pages
            .get(from..)?
            .iter()
            .position(|&p| p == page_id)
            .map(|offset| from + offset)
    }
}

impl FromStr for ReferenceString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }

        let pages = s
            .split(',')
            .enumerate()
            .map(|(position, token)| {
                token.parse::<PageId>().map_err(|_| {
                    Error::from(ConfigError::MalformedReference {
                        position,
                        token: token.trim().to_string(),
                    })
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { pages })
    }
}

impl From<Vec<PageId>> for ReferenceString {
    fn from(pages: Vec<PageId>) -> Self {
        Self::new(pages)
    }
}

impl From<&[i64]> for ReferenceString {
    fn from(pages: &[i64]) -> Self {
        Self::new(pages.iter().copied().map(PageId).collect())
    }
}

impl<const N: usize> From<[i64; N]> for ReferenceString {
    fn from(pages: [i64; N]) -> Self {
        Self::from(&pages[..])
    }
}

impl Index<usize> for ReferenceString {
    type Output = PageId;

    fn index(&self, index: usize) -> &PageId {
        &self.pages[index]
    }
}

impl fmt::Display for ReferenceString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", page)?;
        }
        Ok(())
    }
}
