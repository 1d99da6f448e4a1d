use crate::error::{Error, Result};
use crate::tracker::TrackerParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the demo writes its artefacts.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// One `<stem>.json` report per input lands here.
    pub dir: PathBuf,
    /// Also write the cleaned skin mask as `<stem>_mask.png`.
    pub write_masks: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("out"),
            write_masks: false,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    pub inputs: Vec<PathBuf>,
    #[serde(default)]
    pub tracker: TrackerParams,
    #[serde(default)]
    pub output: OutputConfig,
}

impl RuntimeConfig {
    /// Output paths for one input: the JSON report and the mask image.
    pub fn output_paths(&self, input: &Path) -> (PathBuf, PathBuf) {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "frame".to_string());
        (
            self.output.dir.join(format!("{stem}.json")),
            self.output.dir.join(format!("{stem}_mask.png")),
        )
    }
}

/// Read and parse a JSON runtime config. Tracker parameters are not validated
/// here; see [`TrackerParams::validate`].
pub fn load_config(path: &Path) -> Result<RuntimeConfig> {
    let contents =
        fs::read_to_string(path).map_err(|e| Error::io("Failed to read config", path, e))?;
    serde_json::from_str(&contents).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let file = write_temp(r#"{ "inputs": ["a.png", "frames/b.jpg"] }"#);
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.inputs.len(), 2);
        assert_eq!(config.tracker, TrackerParams::default());
        assert_eq!(config.output.dir, PathBuf::from("out"));
        assert!(!config.output.write_masks);

        let (json, mask) = config.output_paths(&config.inputs[1]);
        assert_eq!(json, PathBuf::from("out/b.json"));
        assert_eq!(mask, PathBuf::from("out/b_mask.png"));
    }

    #[test]
    fn nested_overrides_are_applied() {
        let file = write_temp(
            r#"{
                "inputs": ["x.png"],
                "tracker": {
                    "segmentation": { "min_contour_area": 400.0 },
                    "mirror": true
                },
                "output": { "dir": "reports", "write_masks": true }
            }"#,
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.tracker.segmentation.min_contour_area, 400.0);
        assert_eq!(config.tracker.segmentation.kernel_size, 5);
        assert!(config.tracker.mirror);
        assert!(config.output.write_masks);
        assert_eq!(config.output.dir, PathBuf::from("reports"));
    }

    #[test]
    fn missing_inputs_is_a_parse_error() {
        let file = write_temp(r#"{ "output": { "dir": "x" } }"#);
        assert!(matches!(load_config(file.path()), Err(Error::Json { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
