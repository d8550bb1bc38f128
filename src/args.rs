mod proc_errors;

use clap::{
    ArgAction,
    Args,
    Parser,
    Subcommand,
    ValueEnum,
};

pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Coordinate conversion and rotation tool for 3D point sets
#[derive(Debug, Parser)]
#[command(name = "reframe", version)]
pub struct ReframeCli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Subcommands of the reframe binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a transform described by a config file
    #[command(name = "run")]
    Run(RunArgs),

    /// Print an example config file for a transform method
    #[command(name = "example")]
    Example(ExampleArgs),
}

/// Arguments for the run command. Paths given here override the config file.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Path to the transform config file (.json, .toml, .yaml/.yml)
    #[arg(short, long = "cfg")]
    pub cfg_file: String,

    /// Path to the points file
    #[arg(short, long = "input")]
    pub input_path: Option<String>,

    /// Path to a vector field file, one vector per point or packed in a single column
    #[arg(long = "vectors")]
    pub vector_path: Option<String>,

    /// Path to the output file (rows are printed to stdout if no output is set)
    #[arg(short, long = "output")]
    pub output_path: Option<String>,

    /// Decimal places written for each value
    #[arg(short, long, default_value_t = 6)]
    pub precision: usize,
}

/// Arguments for the example command.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    /// Method to print an example config for (lists the available methods if omitted)
    pub method: Option<String>,

    /// Config file format
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub format: Format,
}

/// Supported config file formats.
#[derive(Debug, Clone, ValueEnum)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}

/// Parse the command line arguments for the reframe binary.
pub fn parse_cli_args() -> ReframeCli {
    ReframeCli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        ReframeCli::command().debug_assert();
    }

    #[test]
    fn run_overrides_parse() {
        let cli = ReframeCli::try_parse_from([
            "reframe", "run", "-c", "cfg.yaml", "-i", "in.txt", "--vectors", "vec.txt", "-o", "out.txt", "-p", "3", "-vv",
        ]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Run(run_args) => {
                assert_eq!(run_args.cfg_file, "cfg.yaml");
                assert_eq!(run_args.input_path.as_deref(), Some("in.txt"));
                assert_eq!(run_args.vector_path.as_deref(), Some("vec.txt"));
                assert_eq!(run_args.output_path.as_deref(), Some("out.txt"));
                assert_eq!(run_args.precision, 3);
            },
            _ => panic!("expected the run command"),
        }
    }

    #[test]
    fn example_defaults_to_yaml() {
        let cli = ReframeCli::try_parse_from(["reframe", "example"]).unwrap();
        match cli.command {
            Command::Example(example_args) => {
                assert!(example_args.method.is_none());
                assert!(matches!(example_args.format, Format::Yaml));
            },
            _ => panic!("expected the example command"),
        }
    }
}
