mod config;
mod dump;
mod element_kind;

use crate::config::{DEFAULT_COLUMNS, DEFAULT_ELEMENT_TYPE, MAX_DUMP_SIZE};
use crate::dump::{dump, DumpOptions};
use crate::element_kind::ElementKind;
use clap::{App, Arg, ArgMatches};
use log::{info, LevelFilter};
use std::fs;
use std::io::{self, Write};

fn main() {
    let default_columns = DEFAULT_COLUMNS.to_string();
    let matches = App::new("Typed View Dump")
        .version("1.0")
        .about("Prints a file as a sequence of fixed size values")
        .arg(
            Arg::with_name("type")
                .short("t")
                .long("type")
                .value_name("TYPE")
                .help("The element type to read the file as")
                .possible_values(&ElementKind::NAMES)
                .default_value(DEFAULT_ELEMENT_TYPE.name())
                .takes_value(true)
        )
        .arg(
            Arg::with_name("offset")
                .short("o")
                .long("offset")
                .value_name("BYTES")
                .help("The byte offset to start reading at")
                .default_value("0")
                .takes_value(true)
        )
        .arg(
            Arg::with_name("count")
                .short("n")
                .long("count")
                .value_name("COUNT")
                .help("The maximum number of values to print")
                .takes_value(true)
        )
        .arg(
            Arg::with_name("columns")
                .short("c")
                .long("columns")
                .value_name("COLUMNS")
                .help("Values per line")
                .default_value(&default_columns)
                .takes_value(true)
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Sets the level of verbosity (''=warn, 'v'=info, 'vv'=debug, 'vvv'=trace)")
                .takes_value(false)
        )
        .arg(
            Arg::with_name("file")
                .value_name("FILE")
                .help("The file to dump")
                .required(true)
                .index(1)
        )
        .get_matches();

    dump_main(matches);
}

fn dump_main(matches: ArgMatches) {
    let log_level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::builder().filter_level(log_level).init();

    let kind: ElementKind = matches.value_of("type").unwrap()
        .parse().expect("invalid type");
    let offset: usize = matches.value_of("offset").unwrap()
        .parse().expect("invalid offset");
    let count: Option<usize> = matches.value_of("count")
        .map(|c| c.parse().expect("invalid count"));
    let columns: usize = matches.value_of("columns").unwrap()
        .parse().expect("invalid columns");
    assert!(columns > 0, "columns must be at least 1");

    let path = matches.value_of("file").unwrap();
    let file_size = fs::metadata(path).expect("failed to stat file").len();
    assert!(file_size <= MAX_DUMP_SIZE, "file is larger than {} bytes", MAX_DUMP_SIZE);
    let buf = fs::read(path).expect("failed to read file");
    info!("loaded {} ({} bytes)", path, buf.len());

    let options = DumpOptions {
        kind,
        offset,
        count,
        columns,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let printed = dump(&mut out, &buf, &options).expect("failed to write output");
    out.flush().expect("failed to write output");
    info!("printed {} values", printed);
}
