//! Configuration file loading and evaluation.
//!
//! The file is TOML with an `[IR]` section holding the device and key
//! bindings and an optional `[MPD]` section for the server connection:
//!
//! ```toml
//! [IR]
//! INPUTDEVICE = 0                     # or "/dev/input/event0"
//! KEY_VOLUMEUP = "volume_up,dn_hold"
//! KEY_PLAYPAUSE = "play_pause,down"
//! KEY_NEXTSONG = "next_track"         # trigger defaults to "up"
//!
//! [MPD]
//! host = "localhost"
//! port = 6600
//! timeout = "5s"
//! ```

use crate::keynames::{get_key_name, resolve_key_code};
use crate::mapping::{KeyEventMapping, MappingBuilder, MappingError};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/raspi-ir-mpdc.toml";
pub const INPUTDEVICE_PATH: &str = "/dev/input/event";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("section [IR] missing")]
    MissingIrSection,
    #[error("no INPUTDEVICE defined in section [IR]")]
    MissingInputDevice,
    #[error("'{key}': multiple input device definition is not allowed")]
    DuplicateInputDevice { key: String },
    #[error("'{key} = {value}' does not identify an input device")]
    InvalidInputDevice { key: String, value: String },
    #[error("invalid key '{key}' in section [IR]")]
    UnknownKey { key: String },
    #[error("'{key}' is not a known key or button name")]
    UnknownKeyName { key: String },
    #[error("'{key}' must be a string of the form \"<action>[,<keystate>]\"")]
    InvalidValue { key: String },
    #[error("'{key}': {source}")]
    Entry {
        key: String,
        #[source]
        source: MappingError,
    },
}

impl ConfigError {
    /// Process exit code: 2 when the file itself is unusable, 3 for an invalid IR setup.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConfigError::Read { .. } | ConfigError::Parse(_) => 2,
            _ => 3,
        }
    }
}

/// Source of raw input events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputDevice {
    Path(PathBuf),
    /// Raw events piped on stdin.
    Stdin,
}

impl InputDevice {
    fn from_config(key: &str, value: &toml::Value) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidInputDevice {
            key: key.to_string(),
            value: value.to_string(),
        };
        match value {
            toml::Value::Integer(n) => u32::try_from(*n)
                .map(Self::numbered)
                .map_err(|_| invalid()),
            toml::Value::String(s) => {
                let s = s.trim();
                if s.to_ascii_lowercase().starts_with("/dev/input/") {
                    Ok(InputDevice::Path(PathBuf::from(s)))
                } else {
                    s.parse::<u32>().map(Self::numbered).map_err(|_| invalid())
                }
            }
            _ => Err(invalid()),
        }
    }

    fn numbered(n: u32) -> Self {
        InputDevice::Path(PathBuf::from(format!("{INPUTDEVICE_PATH}{n}")))
    }

    /// Device given on the command line; `-` selects stdin.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputDevice::Stdin
        } else {
            InputDevice::Path(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for InputDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputDevice::Path(path) => write!(f, "{}", path.display()),
            InputDevice::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// Evaluated `[IR]` section.
#[derive(Debug, Clone)]
pub struct IrConfig {
    pub device: InputDevice,
    pub mapping: KeyEventMapping,
}

impl IrConfig {
    /// Evaluates the section entries in file order. The first invalid entry
    /// aborts evaluation; no mapping is produced in that case.
    pub fn from_table(table: &toml::Table) -> Result<Self, ConfigError> {
        let mut device: Option<InputDevice> = None;
        let mut builder = MappingBuilder::new();

        for (key, value) in table {
            let upper_key = key.to_ascii_uppercase();

            if upper_key == "INPUTDEVICE" {
                info!(%key, %value, "Input device configuration");
                if device.is_some() {
                    return Err(ConfigError::DuplicateInputDevice { key: key.clone() });
                }
                device = Some(InputDevice::from_config(key, value)?);
                continue;
            }

            if upper_key.starts_with("KEY_") || upper_key.starts_with("BTN_") {
                info!(%key, %value, "Key/button configuration");
                let text = value
                    .as_str()
                    .ok_or_else(|| ConfigError::InvalidValue { key: key.clone() })?
                    .to_ascii_lowercase();
                let scancode = resolve_key_code(&upper_key)
                    .ok_or_else(|| ConfigError::UnknownKeyName { key: key.clone() })?;
                let (action, condition) = match text.split_once(',') {
                    Some((action, condition)) => (action.trim(), Some(condition.trim())),
                    None => (text.trim(), None),
                };
                builder
                    .register(scancode, action, condition)
                    .map_err(|source| ConfigError::Entry {
                        key: key.clone(),
                        source,
                    })?;
                continue;
            }

            return Err(ConfigError::UnknownKey { key: key.clone() });
        }

        let device = device.ok_or(ConfigError::MissingInputDevice)?;
        let mapping = builder.build();
        for binding in mapping.bindings() {
            info!(
                key = get_key_name(binding.scancode),
                scancode = binding.scancode,
                action = %binding.action,
                trigger = %binding.condition,
                "Key binding registered"
            );
        }
        Ok(IrConfig { device, mapping })
    }
}

/// `[MPD]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MpdConfig {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
    #[serde(deserialize_with = "deserialize_timeout")]
    pub timeout: Duration,
    /// Volume change per key event, in percent.
    pub volume_step: u8,
    /// Seek distance in seconds.
    pub seek_step: u32,
}

impl Default for MpdConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6600,
            password: None,
            timeout: Duration::from_secs(5),
            volume_step: 1,
            seek_step: 10,
        }
    }
}

fn deserialize_timeout<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    let text = String::deserialize(deserializer)?;
    let timeout = humantime::parse_duration(&text).map_err(serde::de::Error::custom)?;
    if timeout.is_zero() {
        return Err(serde::de::Error::custom("timeout must be greater than zero"));
    }
    Ok(timeout)
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(rename = "IR", alias = "ir")]
    ir: Option<toml::Table>,
    #[serde(rename = "MPD", alias = "mpd", default)]
    mpd: MpdConfig,
}

/// Fully evaluated configuration file.
#[derive(Debug, Clone)]
pub struct Config {
    pub ir: IrConfig,
    pub mpd: MpdConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        let table = raw.ir.ok_or(ConfigError::MissingIrSection)?;
        info!("Init IR configuration.");
        let ir = IrConfig::from_table(&table)?;
        Ok(Config { ir, mpd: raw.mpd })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::keystate::KeyState;

    fn ir(body: &str) -> Result<IrConfig, ConfigError> {
        Config::from_toml_str(&format!("[IR]\n{body}")).map(|c| c.ir)
    }

    #[test]
    fn evaluates_bindings_and_numbered_device() {
        let cfg = ir(r#"
            INPUTDEVICE = 0
            KEY_VOLUMEUP = "volume_up,dn_hold"
            key_playpause = "Play_Pause , DOWN"
            BTN_0 = "next_track"
        "#)
        .unwrap();

        assert_eq!(cfg.device, InputDevice::Path(PathBuf::from("/dev/input/event0")));
        assert_eq!(cfg.mapping.len(), 3);
        let volume = cfg.mapping.lookup(115).unwrap();
        assert_eq!((volume.action, volume.condition), (Action::VolumeUp, KeyState::DownOrHold));
        let play = cfg.mapping.lookup(164).unwrap();
        assert_eq!((play.action, play.condition), (Action::PlayPause, KeyState::Down));
        let next = cfg.mapping.lookup(256).unwrap();
        assert_eq!((next.action, next.condition), (Action::NextTrack, KeyState::Up));
    }

    #[test]
    fn accepts_device_paths_and_numeric_strings() {
        let by_path = ir(r#"INPUTDEVICE = "/dev/input/by-path/platform-ir-receiver-event""#).unwrap();
        assert_eq!(
            by_path.device,
            InputDevice::Path(PathBuf::from("/dev/input/by-path/platform-ir-receiver-event"))
        );
        let by_number = ir(r#"InputDevice = "3""#).unwrap();
        assert_eq!(by_number.device, InputDevice::Path(PathBuf::from("/dev/input/event3")));
    }

    #[test]
    fn rejects_invalid_devices() {
        for value in [r#""/tmp/events""#, "-1", r#""three""#, "true"] {
            let err = ir(&format!("INPUTDEVICE = {value}")).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidInputDevice { .. }),
                "{value}: {err}"
            );
        }
    }

    #[test]
    fn rejects_second_input_device() {
        let err = ir("INPUTDEVICE = 0\ninputdevice = 1").unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateInputDevice { key } if key == "inputdevice"));
        assert_eq!(ConfigError::MissingInputDevice.exit_code(), 3);
    }

    #[test]
    fn requires_input_device() {
        let err = ir(r#"KEY_STOP = "stop""#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingInputDevice));
    }

    #[test]
    fn rejects_unknown_config_keys() {
        let err = ir("INPUTDEVICE = 0\nVOLUME_STEP = \"2\"").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey { key } if key == "VOLUME_STEP"));
    }

    #[test]
    fn rejects_unknown_key_names() {
        let err = ir("INPUTDEVICE = 0\nKEY_FROBNICATE = \"play\"").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKeyName { .. }));
    }

    #[test]
    fn accepts_remote_control_key_names() {
        let cfg = ir(concat!(
            "INPUTDEVICE = 0\n",
            "KEY_ZOOM = \"stop,down\"\n",
            "KEY_PROGRAM = \"toggle_random,down\"\n",
            "KEY_LAST = \"prev_track,down\"\n",
            "KEY_EXIT = \"pause,down\"\n",
            "KEY_SHUFFLE = \"toggle_random\"\n",
        ))
        .unwrap();
        assert_eq!(cfg.mapping.len(), 5);
        assert_eq!(cfg.mapping.lookup(0x174).unwrap().action, Action::Stop);
    }

    #[test]
    fn aliased_key_names_collide() {
        let err = ir("INPUTDEVICE = 0\nKEY_FULL_SCREEN = \"stop\"\nKEY_ZOOM = \"play\"").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Entry { source: MappingError::DuplicateScancode(0x174), .. }
        ));
    }

    #[test]
    fn entry_errors_name_the_offending_key() {
        let err = ir("INPUTDEVICE = 0\nKEY_PLAY = \"dance\"").unwrap_err();
        assert_eq!(err.to_string(), "'KEY_PLAY': unknown action 'dance'");

        let err = ir("INPUTDEVICE = 0\nKEY_PLAY = \"play,often\"").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Entry { source: MappingError::InvalidKeyState(_), .. }
        ));

        let err = ir("INPUTDEVICE = 0\nKEY_PLAY = \"play,\"").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Entry { source: MappingError::InvalidKeyState(_), .. }
        ));
    }

    #[test]
    fn same_key_in_different_case_is_a_duplicate_scancode() {
        let err = ir("INPUTDEVICE = 0\nKEY_STOP = \"stop\"\nkey_stop = \"pause,down\"").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Entry { source: MappingError::DuplicateScancode(128), ref key } if key == "key_stop"
        ));
    }

    #[test]
    fn binding_values_must_be_strings() {
        let err = ir("INPUTDEVICE = 0\nKEY_STOP = 1").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn missing_ir_section() {
        let err = Config::from_toml_str("[MPD]\nport = 6601\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingIrSection));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn mpd_section_defaults_and_overrides() {
        let cfg = Config::from_toml_str("[IR]\nINPUTDEVICE = 0\n").unwrap();
        assert_eq!(cfg.mpd, MpdConfig::default());

        let cfg = Config::from_toml_str(
            "[ir]\nINPUTDEVICE = 0\n[mpd]\nhost = \"music.local\"\ntimeout = \"1500ms\"\nvolume_step = 5\n",
        )
        .unwrap();
        assert_eq!(cfg.mpd.host, "music.local");
        assert_eq!(cfg.mpd.port, 6600);
        assert_eq!(cfg.mpd.timeout, Duration::from_millis(1500));
        assert_eq!(cfg.mpd.volume_step, 5);
    }

    #[test]
    fn invalid_mpd_values_are_parse_errors() {
        for mpd in ["timeout = \"0s\"", "timeout = \"soon\"", "hots = \"typo\""] {
            let err = Config::from_toml_str(&format!("[IR]\nINPUTDEVICE = 0\n[MPD]\n{mpd}\n")).unwrap_err();
            assert!(matches!(err, ConfigError::Parse(_)), "{mpd}: {err}");
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Config::load(Path::new("/nonexistent/raspi-ir-mpdc.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
