//! Variant resolution for styled components.
//!
//! Each styled component declares a [`VariantSpec`]: its base tokens,
//! the variant and size axes it supports, and the default key for each
//! axis. [`VariantSpec::resolve`] turns a `(variant, size, overrides)`
//! request into the final [`TokenSequence`].
//!
//! Resolution is strict about keys. An omitted axis falls back to the
//! declared default; a key that was never declared is a configuration
//! bug and comes back as [`ConfigError`] listing the valid keys, so a
//! typo like `secndary` fails loudly instead of silently rendering the
//! default look.

use crate::error::ConfigError;

use super::merge::{merge_into, ClassInput};
use super::token::TokenSequence;

/// A named key and the utility tokens it contributes.
pub type AxisEntry = (&'static str, &'static [&'static str]);

/// Static styling table for one component.
#[derive(Debug, Clone, Copy)]
pub struct VariantSpec {
    /// Component name used in error reports.
    pub component: &'static str,
    /// Tokens applied to every rendering of the component.
    pub base: &'static [&'static str],
    /// Visual treatment axis.
    pub variants: &'static [AxisEntry],
    /// Dimension axis.
    pub sizes: &'static [AxisEntry],
    /// Key applied when no variant is requested.
    pub default_variant: &'static str,
    /// Key applied when no size is requested.
    pub default_size: &'static str,
}

impl VariantSpec {
    /// A spec for components with a fixed class and no axes.
    pub const fn fixed(component: &'static str, base: &'static [&'static str]) -> Self {
        Self {
            component,
            base,
            variants: &[],
            sizes: &[],
            default_variant: "",
            default_size: "",
        }
    }

    /// Resolve a styling request into merged tokens.
    ///
    /// Merge order is base, then variant tokens, then size tokens, then
    /// caller overrides, so later layers win family conflicts. Calling
    /// this twice with the same arguments yields an equal sequence.
    pub fn resolve<I>(
        &self,
        variant: Option<&str>,
        size: Option<&str>,
        overrides: I,
    ) -> Result<TokenSequence, ConfigError>
    where
        I: IntoIterator<Item = ClassInput>,
    {
        let variant_tokens = self.axis_tokens(self.variants, variant, self.default_variant, true)?;
        let size_tokens = self.axis_tokens(self.sizes, size, self.default_size, false)?;

        let mut seq = TokenSequence::new();
        seq.extend_raw(self.base);
        seq.extend_raw(variant_tokens);
        seq.extend_raw(size_tokens);
        merge_into(&mut seq, overrides);
        Ok(seq)
    }

    /// Look up one axis, falling back to the default for omitted keys.
    ///
    /// A missing default means the axis is unused (fixed components) and
    /// contributes nothing. An explicit unknown key is always an error.
    fn axis_tokens(
        &self,
        table: &'static [AxisEntry],
        requested: Option<&str>,
        default_key: &'static str,
        is_variant_axis: bool,
    ) -> Result<&'static [&'static str], ConfigError> {
        match requested {
            Some(key) => {
                table
                    .iter()
                    .find(|(name, _)| *name == key)
                    .map(|(_, tokens)| *tokens)
                    .ok_or_else(|| {
                        let declared = Self::declared_keys(table);
                        if is_variant_axis {
                            ConfigError::UnknownVariant {
                                component: self.component,
                                requested: key.to_string(),
                                declared,
                            }
                        } else {
                            ConfigError::UnknownSize {
                                component: self.component,
                                requested: key.to_string(),
                                declared,
                            }
                        }
                    })
            }
            None => Ok(table
                .iter()
                .find(|(name, _)| *name == default_key)
                .map(|(_, tokens)| *tokens)
                .unwrap_or(&[])),
        }
    }

    /// Declared variant keys, for introspection and tests.
    pub fn variant_keys(&self) -> Vec<&'static str> {
        self.variants.iter().map(|(name, _)| *name).collect()
    }

    /// Declared size keys, for introspection and tests.
    pub fn size_keys(&self) -> Vec<&'static str> {
        self.sizes.iter().map(|(name, _)| *name).collect()
    }

    fn declared_keys(table: &[AxisEntry]) -> String {
        if table.is_empty() {
            return "(none)".to_string();
        }
        table
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ============================================================================
// Tests
// ============================================================================
