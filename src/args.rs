use clap::{value_parser, Arg, ArgAction, Command};

pub fn parse_args() -> clap::ArgMatches {
    Command::new("gridlock")
        .version("0.1.0")
        .about("Unlocks a row+column toggle puzzle grid via GF(2) elimination")
        .arg(
            Arg::new("rows")
                .help("Number of grid rows")
                .required(true)
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("cols")
                .help("Number of grid columns")
                .required(true)
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for the initial scramble (random if omitted)")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Suppress grid and status output")
                .action(ArgAction::SetTrue),
        )
        .get_matches()
}
