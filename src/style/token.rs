//! Style token primitives.
//!
//! A [`StyleToken`] is one utility name such as `bg-primary` or `px-4`.
//! Tokens whose leading segment is a declared utility family (the part
//! before the first `-`) are mutually exclusive within that family: a
//! sequence holds at most one `bg-*` token, one `px-*` token, and so on.
//! Tokens outside the family set (`bold`, `dim`, custom names) pass
//! through untouched.
//!
//! [`TokenSequence`] is the ordered container the merge and resolve
//! layers build on. Insertion order is what the page author wrote;
//! conflict resolution swaps a token in place instead of reordering.

use std::fmt;

// ============================================================================
// Utility Families
// ============================================================================

/// Utility families subject to last-wins conflict resolution.
///
/// A token belongs to a family only when its prefix (up to the first `-`)
/// is listed here. `border` is a family, so `border-plain` and
/// `border-rounded` conflict; `bold` has no `-` and no family, so it
/// coexists with everything.
pub const FAMILIES: &[&str] = &["bg", "fg", "px", "py", "w", "h", "border", "align"];

// ============================================================================
// StyleToken
// ============================================================================

/// A single style utility token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleToken(String);

impl StyleToken {
    /// Create a token from its utility name.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The full token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The utility family this token belongs to, if any.
    ///
    /// Returns `None` for tokens without a `-` and for tokens whose
    /// prefix is not a declared family (`hover-x` stays unfamilied).
    pub fn family(&self) -> Option<&str> {
        let (head, _) = self.0.split_once('-')?;
        FAMILIES.contains(&head).then_some(head)
    }

    /// The value part after the family prefix (`"4"` for `px-4`).
    pub fn value(&self) -> Option<&str> {
        self.family()?;
        self.0.split_once('-').map(|(_, tail)| tail)
    }

    /// True for tokens with no text at all. Empty tokens are dropped on
    /// insertion so callers can pass through optional fragments freely.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for StyleToken {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for StyleToken {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// TokenSequence
// ============================================================================

/// An ordered token sequence with per-family conflict resolution.
///
/// Pushing a token whose family is already present replaces the earlier
/// token at its original position, so the sequence order always reflects
/// first mention, while the content reflects last mention. Unfamilied
/// tokens always append, repeats included; only families deduplicate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenSequence(Vec<StyleToken>);

impl TokenSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Push a token, resolving family conflicts in place.
    pub fn push(&mut self, token: StyleToken) {
        if token.is_empty() {
            return;
        }
        if let Some(family) = token.family() {
            if let Some(pos) = self.0.iter().position(|t| t.family() == Some(family)) {
                self.0[pos] = token;
                return;
            }
        }
        self.0.push(token);
    }

    /// Push every name in a static utility list.
    pub fn extend_raw(&mut self, tokens: &[&str]) {
        for raw in tokens {
            self.push(StyleToken::new(*raw));
        }
    }

    /// All tokens in merged order.
    pub fn tokens(&self) -> &[StyleToken] {
        &self.0
    }

    /// Iterate over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, StyleToken> {
        self.0.iter()
    }

    /// True if the exact token text is present.
    pub fn contains(&self, raw: &str) -> bool {
        self.0.iter().any(|t| t.as_str() == raw)
    }

    /// The value of the token occupying `family`, if one is present.
    ///
    /// This is the lookup the paint layer uses (`family_value("px")`
    /// yields `Some("4")` when the sequence holds `px-4`).
    pub fn family_value(&self, family: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|t| t.family() == Some(family))
            .and_then(|t| t.value())
    }

    /// Number of tokens held.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no tokens are held.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token.as_str())?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a StyleToken;
    type IntoIter = std::slice::Iter<'a, StyleToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
