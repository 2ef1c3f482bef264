//! Class list merging.
//!
//! Components and pages describe their styling as a list of
//! [`ClassInput`] entries: plain tokens, tokens gated on a runtime
//! condition, and absent slots that stand in for optional fragments.
//! [`merge`] folds such a list into a [`TokenSequence`], applying the
//! family conflict rules as it goes.
//!
//! The three input forms exist so call sites never build strings
//! conditionally. A focus ring is `when(focused, "border-focus")`, not
//! string concatenation.

use super::token::{StyleToken, TokenSequence};

/// One entry in a class list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassInput {
    /// A token that always participates.
    Token(StyleToken),
    /// A token that participates only when `active` is true.
    When { active: bool, token: StyleToken },
    /// A slot contributing nothing. Produced by [`maybe`] for `None`.
    Absent,
}

/// A token that always participates in the merge.
pub fn token(raw: impl Into<StyleToken>) -> ClassInput {
    ClassInput::Token(raw.into())
}

/// A token gated on a runtime condition.
pub fn when(active: bool, raw: impl Into<StyleToken>) -> ClassInput {
    ClassInput::When {
        active,
        token: raw.into(),
    }
}

/// An optional token; `None` merges as nothing.
pub fn maybe(raw: Option<&str>) -> ClassInput {
    match raw {
        Some(raw) => ClassInput::Token(StyleToken::new(raw)),
        None => ClassInput::Absent,
    }
}

impl From<&str> for ClassInput {
    fn from(raw: &str) -> Self {
        token(raw)
    }
}

impl From<StyleToken> for ClassInput {
    fn from(token: StyleToken) -> Self {
        ClassInput::Token(token)
    }
}

/// Merge a class list into a token sequence.
///
/// Inputs apply in the order written. Within a utility family the last
/// active token wins while keeping the first token's position; inactive
/// and absent entries contribute nothing, including to ordering.
pub fn merge<I>(inputs: I) -> TokenSequence
where
    I: IntoIterator<Item = ClassInput>,
{
    let mut seq = TokenSequence::new();
    merge_into(&mut seq, inputs);
    seq
}

/// Merge a class list onto an existing sequence.
///
/// Used by the variant resolver to layer caller overrides onto the
/// tokens a component declared.
pub fn merge_into<I>(seq: &mut TokenSequence, inputs: I)
where
    I: IntoIterator<Item = ClassInput>,
{
    for input in inputs {
        match input {
            ClassInput::Token(token) => seq.push(token),
            ClassInput::When {
                active: true,
                token,
            } => seq.push(token),
            ClassInput::When { active: false, .. } => {}
            ClassInput::Absent => {}
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
