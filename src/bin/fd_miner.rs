extern crate fastfds;

use fastfds::*;

use quicli::prelude::*;
use structopt::StructOpt;

use std::path::PathBuf;

/// Discover exact functional dependencies in a CSV-encoded relation.
#[derive(Debug, StructOpt)]
struct Cli {
    /// Path to a CSV file describing the relation; reads from STDIN if omitted
    input_path: Option<PathBuf>,

    /// Field delimiter
    #[structopt(short = "d", long = "delimiter", default_value = ",")]
    delimiter: char,

    /// Treat the first row as data instead of as a header row
    #[structopt(long = "no-headers")]
    no_headers: bool,

    /// Cell value treated as null/missing (never agrees with anything, including itself)
    #[structopt(long = "null-marker")]
    null_marker: Option<String>,

    /// Only print FDs with this column (by name) as the right-hand side
    #[structopt(long = "rhs")]
    rhs: Option<String>,

    /// Print results as a JSON array of rendered FD strings, sorted lexicographically
    #[structopt(short = "j", long = "json")]
    json: bool,

    /// Print summary statistics (count, min/max/mean LHS arity) instead of the FD list
    #[structopt(short = "s", long = "describe")]
    describe: bool,

    #[structopt(flatten)]
    verbosity: Verbosity,
}

fn main() -> CliResult {
    let args = Cli::from_args();
    args.verbosity.setup_env_logger("fd_miner")?;

    let mut options = CsvIngestOptions::new()
        .delimiter(args.delimiter as u8)
        .has_headers(!args.no_headers);
    if let Some(marker) = &args.null_marker {
        options = options.null_marker(marker.clone());
    }

    let relation = match &args.input_path {
        Some(path) => {
            eprintln!("Reading relation from {}...", path.display());
            options.from_path(path)?
        }
        None => {
            eprintln!("Reading relation from STDIN...");
            let mut input = Vec::new();
            std::io::Read::read_to_end(&mut std::io::stdin(), &mut input)?;
            options.from_reader(&input[..])?
        }
    };

    let discovery = FdDiscovery::new(relation)?;
    let fds = discovery.discover();
    let schema = discovery.relation().schema();

    let fds = if let Some(rhs_name) = &args.rhs {
        let rhs_index = schema
            .columns()
            .iter()
            .find(|column| &column.name == rhs_name)
            .unwrap_or_else(|| panic!("no column named {}", rhs_name))
            .index;
        FdSet::new(
            fds.into_vec()
                .into_iter()
                .filter(|fd| fd.rhs == rhs_index)
                .collect(),
        )
    } else {
        fds
    };

    if args.describe {
        let (count, (min, max, mean)) = fds.describe();
        println!(
            "{} FDs found (LHS arity min={}, max={}, mean={:.2})",
            count, min, max, mean
        );
    } else if args.json {
        println!("{}", serde_json::to_string(&fds.to_sorted_strings(schema))?);
    } else {
        for line in fds.to_sorted_strings(schema) {
            println!("{}", line);
        }
    }

    Ok(())
}
