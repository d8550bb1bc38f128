use crate::args;
use crate::transform::MethodEnum;
use serde::{Serialize, Deserialize};

/// Transform target struct.
/// Contains the transform method and the paths it reads from and writes to.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransformTarget {
    /// Input path for the points file.
    #[serde(alias = "input", alias = "in", alias = "i")]
    pub input_path: String,

    /// Optional input path for a vector field attached to the points.
    #[serde(default, alias = "vectors", alias = "vec")]
    pub vector_path: Option<String>,

    /// Output path for the transformed rows (stdout if not set).
    #[serde(default, alias = "output", alias = "out", alias = "o")]
    pub output_path: Option<String>,

    /// Transform method, tagged by `name`.
    pub method: MethodEnum,
}
impl TransformTarget {
    /// Construct a transform target from a config file.
    pub fn from_cfg_file(cfg_file: &str) -> args::ProcResult<Self> {
        let transform_target: TransformTarget = crate::io::read_cfg_file(cfg_file)?;

        if transform_target.input_path.is_empty() {
            args::err_str("Transform input path is empty")?;
        }
        if transform_target.output_path.as_deref() == Some(cfg_file) {
            args::err_str("Transform output path would overwrite the config file")?;
        }

        Ok(transform_target)
    }

    /// Full example target for a method, with placeholder paths.
    pub fn example(method: MethodEnum) -> Self {
        TransformTarget{
            input_path: "PATH/TO/POINTS/FILE".to_string(),
            vector_path: Some("OPTIONAL/PATH/TO/VECTOR/FILE".to_string()),
            output_path: Some("OPTIONAL/PATH/TO/OUTPUT/FILE".to_string()),
            method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Format;
    use strum::IntoEnumIterator;

    #[test]
    fn examples_parse_back_in_every_format() {
        for method in MethodEnum::iter() {
            let example = TransformTarget::example(method.clone());

            let yaml = crate::io::cfg_to_string(&example, &Format::Yaml).unwrap();
            let from_yaml: TransformTarget = serde_yaml::from_str(&yaml).unwrap();
            assert_eq!(from_yaml.method.arg_name(), method.arg_name());

            let json = crate::io::cfg_to_string(&example, &Format::Json).unwrap();
            let from_json: TransformTarget = serde_json::from_str(&json).unwrap();
            assert_eq!(from_json.method.arg_name(), method.arg_name());

            let toml_str = crate::io::cfg_to_string(&example, &Format::Toml).unwrap();
            let from_toml: TransformTarget = toml::from_str(&toml_str).unwrap();
            assert_eq!(from_toml.input_path, example.input_path);
            assert_eq!(from_toml.method.arg_name(), method.arg_name());
        }
    }

    #[test]
    fn short_aliases_are_accepted() {
        let target: TransformTarget = serde_json::from_str(
            r#"{"in": "points.txt", "out": "rotated.txt", "method": {"name": "to_cartesian"}}"#
        ).unwrap();
        assert_eq!(target.input_path, "points.txt");
        assert_eq!(target.output_path.as_deref(), Some("rotated.txt"));
        assert!(target.vector_path.is_none());
    }
}
