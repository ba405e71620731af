//! Profile generation settings loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Deserializer};

use profile_synth::cli::{DEFAULT_SEED_NAME, Options};

fn default_registry_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("seeds.json")
}

/// A field list as supplied by a source: one string or a sequence.
///
/// The environment provider turns `a,b` into a sequence but leaves `a` as a
/// plain string.
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldList {
    One(String),
    Many(Vec<String>),
}

fn deserialize_field_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let list = Option::<FieldList>::deserialize(deserializer)?;
    Ok(list.map(|parsed| match parsed {
        FieldList::One(name) => vec![name],
        FieldList::Many(names) => names,
    }))
}

/// Configuration values controlling a generation run.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PROFILE_SYNTH")]
pub struct ProfileSynthSettings {
    /// Seed name to load from the registry.
    #[ortho_config(default = DEFAULT_SEED_NAME.to_owned())]
    pub seed_name: String,
    /// Optional override for the number of profiles generated.
    #[ortho_config(file_key = "profile_count")]
    pub count: Option<usize>,
    /// Optional registry path override.
    pub registry_path: Option<PathBuf>,
    /// Builder variant, such as `full-consistent`.
    pub variant: Option<String>,
    /// Field names to keep, as a list or comma-separated values.
    #[serde(default, deserialize_with = "deserialize_field_list")]
    pub fields: Option<Vec<String>>,
    /// Sex code applied to every profile.
    pub sex: Option<String>,
}

impl ProfileSynthSettings {
    /// Return the configured registry path, falling back to the default.
    #[must_use]
    pub fn registry_path(&self) -> PathBuf {
        self.registry_path
            .clone()
            .unwrap_or_else(default_registry_path)
    }

    /// Resolve the settings into CLI options.
    #[must_use]
    pub fn into_options(self) -> Options {
        Options {
            registry_path: self.registry_path(),
            seed_name: self.seed_name,
            count: self.count,
            variant: self.variant,
            fields: self.fields,
            sex: self.sex,
        }
    }
}
