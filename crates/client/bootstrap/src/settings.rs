//! Persisted user settings.
//!
//! Settings live in a JSON envelope `{"Version": N, "Payload": {...}}`.
//! Older files are migrated in place: the original is kept next to it as
//! `<file>.v<old>` and the file is rewritten at [`Settings::VERSION`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};
use tracing::{debug, info};

/// Which crafting job the tracker assumes when planning crafts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, IntoStaticStr, Serialize, Deserialize,
)]
pub enum JobChoice {
    /// The job in [`Settings::selected_craft_job`].
    #[default]
    Specified,
    Current,
    LowestLevel,
    HighestLevel,
}

/// User preferences shown in the settings window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Settings {
    /// Open the window on login while deliveries remain.
    pub auto_show_if_incomplete: bool,
    #[serde(rename = "ShowDebugUI")]
    pub show_debug_ui: bool,
    #[serde(rename = "CraftJobType")]
    pub craft_job_choice: JobChoice,
    pub selected_craft_job: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_show_if_incomplete: true,
            show_debug_ui: false,
            craft_job_choice: JobChoice::Specified,
            selected_craft_job: 8,
        }
    }
}

type Migration = fn(Map<String, Value>) -> Result<Map<String, Value>>;

/// Payload upgrades, applied in order starting at the file's version.
const MIGRATIONS: &[(u32, Migration)] = &[(0, migrate_v0)];

/// Version 0 stored the job choice as its variant index.
fn migrate_v0(mut payload: Map<String, Value>) -> Result<Map<String, Value>> {
    if let Some(Value::Number(index)) = payload.get("CraftJobType") {
        let choice = index
            .as_u64()
            .and_then(|i| JobChoice::iter().nth(i as usize))
            .with_context(|| format!("unknown craft job choice {}", index))?;
        let name: &'static str = choice.into();
        payload.insert("CraftJobType".into(), Value::String(name.into()));
    }
    Ok(payload)
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Envelope<'a> {
    version: u32,
    payload: &'a Settings,
}

impl Settings {
    /// Current file format version.
    pub const VERSION: u32 = 1;

    /// Reads settings from `path`, migrating older files in place.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Fails on unreadable or malformed files, on versions newer than
    /// [`Settings::VERSION`], and when a migrated file cannot be written.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        let root: Value = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))?;

        let version = match root.get("Version") {
            None => 0,
            Some(value) => value
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .context("settings Version is not a number")?,
        };
        if version > Self::VERSION {
            bail!(
                "Settings file version {} is newer than supported {}",
                version,
                Self::VERSION
            );
        }

        let payload = match root.get("Payload") {
            Some(Value::Object(payload)) => payload.clone(),
            Some(_) => bail!("settings Payload is not an object"),
            None => bail!("settings file has no Payload"),
        };

        if version < Self::VERSION {
            return Self::upgrade(path, payload, version);
        }

        serde_json::from_value(Value::Object(payload))
            .with_context(|| format!("Failed to decode settings: {}", path.display()))
    }

    fn upgrade(path: &Path, payload: Map<String, Value>, version: u32) -> Result<Self> {
        let migrated = migrate(payload, version)?;
        let settings: Self = serde_json::from_value(Value::Object(migrated))
            .context("Failed to decode migrated settings")?;

        back_up(path, version)?;
        settings.save(path)?;
        info!(from = version, to = Self::VERSION, path = %path.display(), "migrated settings");
        Ok(settings)
    }

    /// Writes settings to `path` at the current version.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let envelope = Envelope {
            version: Self::VERSION,
            payload: self,
        };
        let text = serde_json::to_string_pretty(&envelope)?;
        fs::write(path, text)
            .with_context(|| format!("Failed to write settings: {}", path.display()))
    }
}

fn migrate(mut payload: Map<String, Value>, version: u32) -> Result<Map<String, Value>> {
    for (from, migration) in MIGRATIONS.iter().filter(|(from, _)| *from >= version) {
        payload = migration(payload).with_context(|| format!("settings migration from v{}", from))?;
    }
    Ok(payload)
}

fn backup_path(path: &Path, version: u32) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".v{}", version));
    PathBuf::from(name)
}

/// Moves the original aside unless a backup of that version already exists.
fn back_up(path: &Path, version: u32) -> Result<()> {
    let backup = backup_path(path, version);
    if backup.exists() {
        return Ok(());
    }
    fs::rename(path, &backup)
        .with_context(|| format!("Failed to back up settings to {}", backup.display()))
}
