//! Error taxonomy for installation discovery.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating and validating a GAP installation.
///
/// Both variants are fatal to the caller and carry a remediation hint;
/// retrying cannot fix a missing installation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No `gap` executable on `PATH` and no explicit root configured.
    #[error(
        "GAP not found. Either add the directory containing the `gap` \
         executable to PATH, or set the GAP_ROOT environment variable \
         (remember to `export` it in Unix shells) to the GAP installation root."
    )]
    EngineNotFound,

    /// A candidate root was found but lacks a required sub-resource.
    #[error("{what} not found. Expected it in {}", expected_at.display())]
    MissingResource {
        /// What was missing, e.g. the library-init marker.
        what: String,
        /// The path where the resource was expected.
        expected_at: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_both_remediations() {
        let message = ConfigError::EngineNotFound.to_string();
        assert!(message.contains("PATH"));
        assert!(message.contains("GAP_ROOT"));
    }

    #[test]
    fn missing_resource_message_names_the_expected_path() {
        let err = ConfigError::MissingResource {
            what: "GAP `init.g` file".into(),
            expected_at: PathBuf::from("/opt/gap/lib"),
        };
        let message = err.to_string();
        assert!(message.contains("GAP `init.g` file"));
        assert!(message.contains("/opt/gap/lib"));
    }
}
