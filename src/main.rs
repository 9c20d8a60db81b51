use som_trainer::cli::{Cli, CliParsed};
use som_trainer::map::som::{seeded_rng, Som};
use som_trainer::proc;
use std::error::Error;
use structopt::StructOpt;

fn main() {
    let args = Cli::from_args();
    let parsed = CliParsed::from_cli(args);

    if let Err(err) = run(&parsed) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run(parsed: &CliParsed) -> Result<(), Box<dyn Error>> {
    if parsed.verbose {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    }

    let data = proc::read_matrix(&parsed.file)?;
    let (_, n) = data.dims();

    let mut rng = seeded_rng(parsed.seed);
    let mut som = Som::new(parsed.x, parsed.y, n, parsed.init, &mut rng)?;

    som.train(&data, parsed.max_iter, parsed.verbose)?;

    let labels = som.assign(&data);
    proc::write_labels(&labels, &parsed.output)?;

    if parsed.verbose {
        println!("final weights:");
        proc::print_weight_planes(&som);
    }

    Ok(())
}
