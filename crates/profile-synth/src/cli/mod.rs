//! CLI support for generating profile batches.
//!
//! The binary resolves its settings and delegates to these functions so they
//! can be exercised in tests without spawning a subprocess.

mod error;

use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::field::FieldSelection;
use crate::generator::{ProfileRequest, ProfileVariant, generate_profiles};
use crate::registry::SeedRegistry;

pub use error::CliError;

/// Seed used when none is configured.
pub const DEFAULT_SEED_NAME: &str = "mossy-owl";

/// Fully resolved CLI options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Path to the seed registry JSON file.
    pub registry_path: PathBuf,
    /// Seed to generate from.
    pub seed_name: String,
    /// Profile count override.
    pub count: Option<usize>,
    /// Variant name, such as `full-consistent`.
    pub variant: Option<String>,
    /// Field names; each entry may itself be comma separated.
    pub fields: Option<Vec<String>>,
    /// Requested sex code.
    pub sex: Option<String>,
}

impl Options {
    /// Creates options for `registry_path` with every other value defaulted.
    #[must_use]
    pub fn new(registry_path: impl Into<PathBuf>) -> Self {
        Self {
            registry_path: registry_path.into(),
            seed_name: DEFAULT_SEED_NAME.to_owned(),
            count: None,
            variant: None,
            fields: None,
            sex: None,
        }
    }

    /// Converts the textual options into a generation request.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Variant`] when the variant name is unknown.
    ///
    /// # Example
    ///
    /// ```
    /// use profile_synth::{ProfileField, ProfileVariant};
    /// use profile_synth::cli::Options;
    ///
    /// let mut options = Options::new("seeds.json");
    /// options.variant = Some("full".to_owned());
    /// options.fields = Some(vec!["name, zip".to_owned(), "state".to_owned()]);
    ///
    /// let request = options.request().expect("valid options");
    /// assert_eq!(request.variant, ProfileVariant::Full);
    /// assert!(request.fields.includes(ProfileField::State));
    /// assert!(!request.fields.includes(ProfileField::City));
    /// ```
    pub fn request(&self) -> Result<ProfileRequest, CliError> {
        let variant = match self.variant.as_deref() {
            Some(name) => name.parse::<ProfileVariant>()?,
            None => ProfileVariant::default(),
        };
        let fields = self
            .fields
            .as_ref()
            .map_or_else(FieldSelection::all, |names| {
                FieldSelection::from_csv(&names.join(","))
            });

        Ok(ProfileRequest {
            variant,
            fields,
            sex: self.sex.clone(),
            count: self.count,
        })
    }
}

/// Generates the configured batch and writes one JSON object per line.
///
/// Returns the number of profiles written.
///
/// # Errors
///
/// Returns [`CliError`] when the seed name is blank, the variant is unknown,
/// the registry cannot be loaded or the seed is missing, or output fails.
pub fn run<W: Write>(options: &Options, mut out: W) -> Result<usize, CliError> {
    let seed_name = options.seed_name.trim();
    if seed_name.is_empty() {
        return Err(CliError::EmptySeedName);
    }

    let request = options.request()?;
    let registry = SeedRegistry::from_file(&options.registry_path)?;
    let seed_def = registry.find_seed(seed_name)?;
    let profiles = generate_profiles(&registry, seed_def, &request);

    for profile in &profiles {
        let line = serde_json::to_string(profile).map_err(|err| CliError::Serialise {
            message: err.to_string(),
        })?;
        writeln!(out, "{line}").map_err(|err| CliError::Write {
            message: err.to_string(),
        })?;
    }

    info!(
        seed = seed_name,
        variant = %request.variant,
        written = profiles.len(),
        "profiles generated"
    );
    Ok(profiles.len())
}
