use std::io::Write;
use itertools::Itertools;
use ndarray::Array2;

use crate::args;

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    Parse{line: usize, detail: String},
    StringOnly(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Serialization/Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Serialization/Deserialization Error:\n{}", error),
            IoErrorType::TomlSer(error) => write!(f, "- TOML Serialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::Parse{line, detail} => write!(f, "- Parse Error on line {}: {}", line, detail),
            IoErrorType::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Custom verbose IO error struct.
#[derive(Debug)]
pub struct IoError {
    /// Filepath facing an error.
    pub file: Option<String>,
    /// Error cause.
    pub cause: IoErrorType,
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n{}", file, self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Open a file with verbose errors.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::open(path)
        .map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)})
}

/// Create a file with verbose errors.
pub fn create(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::create(path)
        .map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)})
}

/// Read from string with verbose errors
pub fn read_to_string(path: &str) -> IoResult<String> {
    std::fs::read_to_string(path)
        .map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)})
}

/// Write string to file with verbose errors.
pub fn write_to_file(path: &str, buffer: &str) -> IoResult<()> {
    let mut f = create(path)?;
    f.write_all(buffer.as_bytes())
        .map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)})
}

/// Read in cfg files from the supported filetypes.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    match path.split('.').last(){
        Some("json") => {
            serde_json::from_reader(open(path)?)
                .map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::SerdeJson(error)})
        },
        Some("toml") => {
            toml::from_str(&read_to_string(path)?)
                .map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::TomlDe(error)})
        },
        Some("yaml") | Some("yml") => {
            serde_yaml::from_reader(open(path)?)
                .map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::SerdeYaml(error)})
        },
        _ => {
            let supported_filetypes = vec!["json", "toml", "yaml", "yml"];
            let error_string = format!("Unsupported filetype for config file: {}\nSupported filetypes: {:?}", path, supported_filetypes);
            Err(IoError{file: Some(path.to_string()), cause: IoErrorType::StringOnly(error_string)})
        },
    }
}

/// Render a cfg struct in one of the supported formats.
pub fn cfg_to_string<T>(cfg: &T, format: &args::Format) -> IoResult<String>
where T: serde::Serialize
{
    match format {
        args::Format::Yaml => serde_yaml::to_string(cfg)
            .map_err(|error| IoError{file: None, cause: IoErrorType::SerdeYaml(error)}),
        args::Format::Json => serde_json::to_string_pretty(cfg)
            .map_err(|error| IoError{file: None, cause: IoErrorType::SerdeJson(error)}),
        args::Format::Toml => toml::to_string_pretty(cfg)
            .map_err(|error| IoError{file: None, cause: IoErrorType::TomlSer(error)}),
    }
}

/// Read a text file of points (or vectors), one row per line.
/// Values are separated by whitespace and/or commas. Blank lines and `#` comments are skipped.
/// Every row must have the same number of values.
pub fn read_points(path: &str) -> IoResult<Array2<f64>> {
    let buffer = read_to_string(path)?;
    parse_points(&buffer).map_err(|cause| IoError{file: Some(path.to_string()), cause})
}

/// Write rows of values as text, to a file or to stdout if no path is given.
pub fn write_points(path: Option<&str>, values: &Array2<f64>, precision: usize) -> IoResult<()> {
    let mut buffer = values.outer_iter()
        .map(|row| row.iter().map(|v| format_value(*v, precision)).join(" "))
        .join("\n");
    buffer.push('\n');

    match path {
        Some(path) => write_to_file(path, &buffer),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(buffer.as_bytes())
                .map_err(|error| IoError{file: None, cause: IoErrorType::File(error)})
        },
    }
}

fn parse_points(buffer: &str) -> std::result::Result<Array2<f64>, IoErrorType> {
    let mut values = Vec::<f64>::new();
    let mut n_cols = None;
    let mut n_rows = 0;

    for (line_idx, line) in buffer.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let row = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<f64>().map_err(|error| IoErrorType::Parse{
                line: line_idx + 1,
                detail: format!("{:?}: {}", s, error),
            }))
            .collect::<std::result::Result<Vec<f64>, IoErrorType>>()?;

        match n_cols {
            None => n_cols = Some(row.len()),
            Some(n) if n != row.len() => {
                return Err(IoErrorType::Parse{
                    line: line_idx + 1,
                    detail: format!("expected {} values, found {}", n, row.len()),
                });
            },
            Some(_) => {},
        }
        values.extend(row);
        n_rows += 1;
    }

    let n_cols = match n_cols {
        Some(n_cols) => n_cols,
        None => return Err(IoErrorType::StringOnly("No rows found".to_string())),
    };
    Array2::from_shape_vec((n_rows, n_cols), values)
        .map_err(|error| IoErrorType::StringOnly(error.to_string()))
}

/// Fixed-precision value, without a sign on values that round to zero.
fn format_value(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*}", precision, value);
    match formatted.strip_prefix('-') {
        Some(unsigned) if unsigned.chars().all(|c| c == '0' || c == '.') => unsigned.to_string(),
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn parses_mixed_separators_and_comments() {
        let buffer = "# r theta z\n1, 0, 0\n\n2 0.5\t-1  # trailing\n";
        assert_eq!(parse_points(buffer).unwrap(), array![[1.0, 0.0, 0.0], [2.0, 0.5, -1.0]]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let error = parse_points("1 2 3\n4 5\n").unwrap_err();
        assert!(matches!(error, IoErrorType::Parse{line: 2, ..}));
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let error = parse_points("1 2 x\n").unwrap_err();
        assert!(matches!(error, IoErrorType::Parse{line: 1, ..}));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(parse_points("# nothing\n\n"), Err(IoErrorType::StringOnly(_))));
    }

    #[test]
    fn negative_zero_loses_its_sign() {
        assert_eq!(format_value(-1e-17, 6), "0.000000");
        assert_eq!(format_value(-0.5, 2), "-0.50");
        assert_eq!(format_value(6.123233995736766e-17, 3), "0.000");
    }
}
