use std::{error::Error, fs::File, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;

use troika::{
    io,
    solver::{self, Limits, Method},
};

#[derive(Parser)]
#[command(version, about = "Decide satisfiability of a CNF formula")]
struct Cli {
    /// DIMACS CNF input file
    input: PathBuf,

    /// Decision procedure to run
    #[arg(short, long, value_enum, default_value_t = Method::Dpll)]
    solver: Method,

    /// Print the formula before solving
    #[arg(short, long)]
    print: bool,

    /// Give up once the working clause set exceeds this many clauses
    #[arg(long)]
    max_clauses: Option<usize>,

    /// Give up once the search recurses deeper than this
    #[arg(long)]
    max_depth: Option<usize>,
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let mut input = File::open(&cli.input)?;
    let problem = io::read_problem(&mut input)?;

    let mut output = std::io::stdout();
    if cli.print {
        io::write_problem(&mut output, &problem)?;
    }

    let limits = Limits {
        max_clauses: cli.max_clauses,
        max_depth: cli.max_depth,
    };

    let start = Instant::now();
    let solution = solver::solve(&problem, cli.solver, &limits)?;
    let elapsed = start.elapsed();

    io::write_solution(&mut output, &solution)?;
    println!("c time: {:.4}s", elapsed.as_secs_f64());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
