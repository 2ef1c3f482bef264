//! Error types for folio.
//!
//! Two kinds of failure matter to the component layer and are surfaced
//! immediately rather than masked:
//!
//! - [`ConfigError`] - a caller passed a variant or size key a component
//!   never declared. This is a programming mistake in the page, so it is
//!   reported with the declared key set and aborts the render.
//! - [`EnvironmentError`] - the overlay layer is missing while a dialog is
//!   open. Dialogs refuse to fall back to in-place rendering because that
//!   would break the stacking and focus guarantees.
//!
//! Everything else (profile loading, terminal IO) wraps into [`FolioError`]
//! so `main` can report one error chain through color-eyre.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FolioError>;

/// A component was asked for a variant or size key it never declared.
///
/// Omitting an axis is fine (the declared default applies); naming a key
/// that does not exist is not, and is never silently replaced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The requested variant key is not in the component's declared set.
    #[error("unknown variant `{requested}` for {component} (declared: {declared})")]
    UnknownVariant {
        component: &'static str,
        requested: String,
        declared: String,
    },

    /// The requested size key is not in the component's declared set.
    #[error("unknown size `{requested}` for {component} (declared: {declared})")]
    UnknownSize {
        component: &'static str,
        requested: String,
        declared: String,
    },
}

impl ConfigError {
    /// Short code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::UnknownVariant { .. } => "E_STYLE_VARIANT",
            ConfigError::UnknownSize { .. } => "E_STYLE_SIZE",
        }
    }
}

/// The host environment cannot satisfy a component's rendering contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvironmentError {
    /// A dialog attempted detached rendering but the render context was
    /// built without an overlay layer.
    #[error("overlay layer unavailable; a dialog cannot render detached")]
    OverlayUnavailable,
}

/// Profile content could not be loaded from an explicitly requested path.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The file could not be read.
    #[error("failed to read profile {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid profile JSON.
    #[error("failed to parse profile {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Unified error type for the application.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

impl FolioError {
    /// Short code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FolioError::Config(e) => e.error_code(),
            FolioError::Environment(_) => "E_UI_OVERLAY",
            FolioError::Profile(ProfileError::Read { .. }) => "E_PROFILE_READ",
            FolioError::Profile(ProfileError::Parse { .. }) => "E_PROFILE_PARSE",
            FolioError::Io(_) => "E_IO",
        }
    }

    /// A message suitable for showing outside the alternate screen.
    pub fn user_message(&self) -> String {
        match self {
            FolioError::Config(e) => format!(
                "A page component was configured with an unknown style key.\n{}",
                e
            ),
            FolioError::Environment(_) => {
                "The page is misconfigured: dialogs need an overlay layer to render."
                    .to_string()
            }
            FolioError::Profile(e) => format!("Could not load the profile file.\n{}", e),
            FolioError::Io(e) => format!("Terminal error: {}", e),
        }
    }
}
