//! Controller options with TOML preset support.
//!
//! Follow smoothing, zoom rate and the fallback camera are consolidated
//! here. Options serialize to/from TOML so hosts can ship tuned presets.

mod camera;
mod follow;

use std::path::Path;

pub use camera::{CameraOptions, ProjectionKind};
pub use follow::FollowOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GroupCamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[follow]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Follow smoothing and zoom rate.
    pub follow: FollowOptions,
    /// Fallback camera parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// Values outside their valid range are rejected with
    /// [`GroupCamError::InvalidOption`].
    pub fn from_toml(content: &str) -> Result<Self, GroupCamError> {
        let options: Self = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Check every section for out-of-range values.
    pub fn validate(&self) -> Result<(), GroupCamError> {
        self.follow.validate()?;
        self.camera.validate()
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GroupCamError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GroupCamError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

/// `value` must be finite and strictly positive.
fn require_positive(
    field: &'static str,
    value: f32,
) -> Result<(), GroupCamError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GroupCamError::InvalidOption { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[follow]
speed = 2.5
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.follow.speed, 2.5);
        // Everything else should be default
        assert_eq!(opts.follow.zoom_constant, 1.0);
        assert_eq!(opts.follow.max_follow_speed, None);
        assert_eq!(opts.camera.projection, ProjectionKind::Perspective);
    }

    #[test]
    fn orthographic_projection_parses() {
        let toml_str = r#"
[camera]
projection = "orthographic"
orthographic_size = 12.0

[follow]
max_follow_speed = 30.0
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        let camera = opts.camera.build_camera();
        assert!(camera.is_orthographic());
        assert_eq!(opts.follow.max_follow_speed, Some(30.0));
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let err =
            Options::from_toml("[follow]\nspeed = \"fast\"\n").unwrap_err();
        assert!(matches!(err, GroupCamError::OptionsParse(_)));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = Options::from_toml("[follow]\nspeed = -2.0\n").unwrap_err();
        assert!(matches!(
            err,
            GroupCamError::InvalidOption {
                field: "follow.speed",
                ..
            }
        ));

        let err = Options::from_toml("[follow]\nspeed = 0.0\n").unwrap_err();
        assert!(matches!(err, GroupCamError::InvalidOption { .. }));

        let err =
            Options::from_toml("[camera]\nznear = 5.0\nzfar = 1.0\n")
                .unwrap_err();
        assert!(matches!(
            err,
            GroupCamError::InvalidOption {
                field: "camera.zfar",
                ..
            }
        ));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("groupcam-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.follow.speed = 9.0;
        opts.save(&dir.join("fast.toml")).unwrap();
        Options::default().save(&dir.join("calm.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["calm", "fast"]);
        let loaded = Options::load(&dir.join("fast.toml")).unwrap();
        assert_eq!(loaded, opts);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Options::load(Path::new("/definitely/not/here.toml"))
            .unwrap_err();
        assert!(matches!(err, GroupCamError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("follow"));
        assert!(props.contains_key("camera"));

        let follow = &props["follow"]["properties"];
        assert!(follow.get("speed").is_some());
        assert!(follow.get("zoom_constant").is_some());
        assert!(follow.get("max_follow_speed").is_none());

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("znear").is_none());
    }
}
