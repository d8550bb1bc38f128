pub mod geo_3d;
pub mod deprecation;
pub mod transform;
pub mod args;
pub mod io;
pub mod logging;
mod crate_errors;

pub use crate_errors::{
    ReframeError,
    ReframeResult,
    err_str,
};

/// Target struct.
/// This struct contains the transform to run and how to write its output.
pub struct Target {
    pub transform_target: transform::TransformTarget,
    pub precision: usize,
}

/// Display an example config file for a transform method,
/// or list the available methods if none is given.
/// Returns a `ReframeResult` with `()` or an `Err`.
pub fn example_config(example_args: args::ExampleArgs) -> ReframeResult<()> {
    let method_name = match example_args.method {
        Some(method_name) => method_name,
        None => {
            println!("Available methods:");
            for name in transform::MethodEnum::arg_names() {
                println!("    {}", name);
            }
            return Ok(());
        },
    };

    let method = transform::MethodEnum::from_name(&method_name)?;
    let example = transform::TransformTarget::example(method);
    println!("{}", io::cfg_to_string(&example, &example_args.format)?);
    Ok(())
}

/// [Stage 1.]
/// Build the transform target from the run arguments.
/// Loads the config file, then applies the paths given on the command line over it.
/// Returns a `ReframeResult` with the `Target` or an `Err`.
pub fn build_target(run_args: args::RunArgs) -> ReframeResult<Target> {
    log::info!("Loading transform config file: {}...", run_args.cfg_file);
    let mut transform_target = transform::TransformTarget::from_cfg_file(&run_args.cfg_file)?;

    if let Some(input_path) = run_args.input_path {
        log::debug!("Input path overridden: {}", input_path);
        transform_target.input_path = input_path;
    }
    if let Some(vector_path) = run_args.vector_path {
        log::debug!("Vector path overridden: {}", vector_path);
        transform_target.vector_path = Some(vector_path);
    }
    if let Some(output_path) = run_args.output_path {
        if output_path == run_args.cfg_file {
            args::err_str("Output path would overwrite the config file")?;
        }
        log::debug!("Output path overridden: {}", output_path);
        transform_target.output_path = Some(output_path);
    }

    Ok(Target{
        transform_target,
        precision: run_args.precision,
    })
}

/// [Stage 2.]
/// Run the transform on the target and save (or print) the result.
/// Returns a `ReframeResult` with `()` or an `Err`.
pub fn run_process(target: Target) -> ReframeResult<()> {
    let transform_target = &target.transform_target;

    let output = transform::do_transform(transform_target)?;
    transform::save_output(&output, transform_target.output_path.as_deref(), target.precision)?;

    Ok(())
}
