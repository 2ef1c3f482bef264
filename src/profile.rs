//! Profile data: who the page is about.
//!
//! The rendered content all comes from a [`Profile`]. The built-in
//! default is used when no profile file exists; a JSON file at the
//! default config location (or a path given on the command line) can
//! replace any subset of the fields.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};

/// Everything the page renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Display name, shown in the header and footer.
    pub name: String,
    /// Greeting line of the about section.
    pub headline: String,
    /// About section body text.
    pub about: String,
    /// Contact address shown in the email dialog.
    pub email: String,
    pub github: String,
    pub linkedin: String,
    /// Form endpoint the contact form posts to.
    pub contact_endpoint: String,
    pub projects: Vec<Project>,
}

/// One entry in the projects grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub link: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            headline: "Hi, I'm John 👋".to_string(),
            about: "I'm a full-stack developer specializing in building exceptional \
                    digital experiences. Currently, I'm focused on building responsive \
                    web applications with React, TypeScript, and Node.js."
                .to_string(),
            email: "john@doe.dev".to_string(),
            github: "https://github.com/johndoe".to_string(),
            linkedin: "https://linkedin.com/in/johndoe".to_string(),
            contact_endpoint: "https://formspree.io/f/xyz".to_string(),
            projects: vec![
                Project {
                    title: "Project One".to_string(),
                    description: "A React app for visualizing climate data.".to_string(),
                    link: "https://github.com/johndoe/project-one".to_string(),
                },
                Project {
                    title: "Project Two".to_string(),
                    description: "A mobile-first budgeting app built with Next.js.".to_string(),
                    link: "https://github.com/johndoe/project-two".to_string(),
                },
                Project {
                    title: "Project Three".to_string(),
                    description: "An AI-powered note-taking Chrome extension.".to_string(),
                    link: "https://github.com/johndoe/project-three".to_string(),
                },
            ],
        }
    }
}

impl Profile {
    /// Load a profile from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let profile = serde_json::from_str(&json).map_err(|source| ProfileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(profile)
    }

    /// Load from an explicit path, or fall back to the default profile.
    ///
    /// An explicit path must load; a missing file at the default
    /// location (or the one FOLIO_PROFILE names) just means the
    /// built-in profile is used.
    pub fn load_or_default(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(&path);
        }
        match env_profile_path().or_else(default_profile_path) {
            Some(path) if path.exists() => {
                tracing::info!("Loading profile from {:?}", path);
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// Environment variable that overrides the default profile location.
pub const PROFILE_ENV: &str = "FOLIO_PROFILE";

fn env_profile_path() -> Option<PathBuf> {
    std::env::var_os(PROFILE_ENV).map(PathBuf::from)
}

/// Default location of the profile file.
pub fn default_profile_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("profile.json"))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_profile_is_complete() {
        let profile = Profile::default();
        assert_eq!(profile.name, "John Doe");
        assert_eq!(profile.email, "john@doe.dev");
        assert_eq!(profile.projects.len(), 3);
        assert!(profile.contact_endpoint.starts_with("https://"));
    }

    #[test]
    fn test_load_full_profile() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "name": "Jane Roe",
                "headline": "Hello",
                "about": "Terminal enthusiast.",
                "email": "jane@roe.dev",
                "github": "https://github.com/janeroe",
                "linkedin": "https://linkedin.com/in/janeroe",
                "contact_endpoint": "https://formspree.io/f/abc",
                "projects": [
                    {{"title": "One", "description": "First.", "link": "https://example.com"}}
                ]
            }}"#
        )
        .unwrap();

        let profile = Profile::load(file.path()).unwrap();
        assert_eq!(profile.name, "Jane Roe");
        assert_eq!(profile.projects.len(), 1);
        assert_eq!(profile.projects[0].title, "One");
    }

    #[test]
    fn test_partial_profile_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "Jane Roe"}}"#).unwrap();

        let profile = Profile::load(file.path()).unwrap();
        assert_eq!(profile.name, "Jane Roe");
        // Untouched fields come from the default profile
        assert_eq!(profile.email, "john@doe.dev");
        assert_eq!(profile.projects.len(), 3);
    }

    #[test]
    fn test_load_missing_file_is_a_read_error() {
        let err = Profile::load(Path::new("/nonexistent/profile.json")).unwrap_err();
        assert_eq!(err.error_code(), "E_PROFILE_READ");
    }

    #[test]
    fn test_load_invalid_json_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = Profile::load(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "E_PROFILE_PARSE");
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let err = Profile::load_or_default(Some(PathBuf::from("/nonexistent/profile.json")));
        assert!(err.is_err());
    }
}
