use reframe::args::{
    self,
    Command,
};

fn main() {
    let cli = args::parse_cli_args();
    reframe::logging::init(reframe::logging::level_from_flags(cli.verbose, cli.quiet));

    let run_args = match cli.command {
        Command::Example(example_args) => {
            if let Err(err) = reframe::example_config(example_args) {
                eprintln!("CLI ERROR!");
                eprintln!("{}", err);
                std::process::exit(1);
            }
            return;
        },
        Command::Run(run_args) => run_args,
    };

    // 1. Load the config and apply the command line overrides
    let target = match reframe::build_target(run_args) {
        Ok(target) => target,
        Err(err) => {
            eprintln!("CLI ERROR!");
            eprintln!("{}", err);
            std::process::exit(1);
        },
    };

    // 2. Run the transform and write the output
    if let Err(err) = reframe::run_process(target) {
        eprintln!("PROCESS ERROR!");
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
