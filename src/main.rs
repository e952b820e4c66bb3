use cidr_calc::cli::{error_message, run, Args};
use cidr_calc::config::Config;
use cidr_calc::logging::init_logging;
use cidr_calc::output::write_lines;
use clap::Parser;
use std::error::Error;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    if let Err(e) = try_main(&args) {
        log::debug!("main() failed: {:?}", e);
        eprintln!("{}", error_message(e.as_ref()));
        std::process::exit(1);
    }
}

fn try_main(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = args.config(Config::from_env()?);
    init_logging(config.verbose)?;
    log::debug!("#Start main() {:?} {:?}", args, config);

    let lines = run(args, &config)?;
    write_lines(&mut std::io::stdout().lock(), &lines)?;
    Ok(())
}
