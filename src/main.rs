// vim: set ai et ts=4 sts=4 sw=4:
use std::fs;
use std::io;
use std::process;
use clap::{App, Arg, ArgMatches};
use log::LevelFilter;
use yaml_rust::{YamlLoader, Yaml};

use piclogic::{Puzzle, Solver, SolverOptions, Error};
use piclogic::hint::{apply_recognized_text, resized};
use piclogic::util::is_a_tty;

const MAX_DIMENSION: usize = 30;

// note: column hints are listed top to bottom
const SAMPLE: &str = "
rows:
    - 5
    - 1 4
    - 1 1 1
    - 1 1 1 1
    - 1 1 1 1
    - 1 1 3 1
    - 1 1 1
    - 1 1 1
    - 3 4 1
    - 3 3
cols:
    - 8
    - 1 1
    - 1 1 5
    - 1 1
    - 1 2 2
    - 2 1 1
    - 5 1
    - 1 2
    - 1 1
    - 8
";

pub struct Args {
    pub input: Option<String>,
    pub size: Option<(usize, usize)>,
    pub rows_text: Option<String>,
    pub cols_text: Option<String>,
    pub subdivision: usize,
    pub emit_color: bool,
    pub blank_lines_empty: bool,
    pub verbosity: u64,
}

fn parse_size(s: &str) -> Result<(usize, usize), Error> {
    let invalid = || Error::Input(format!("size must look like ROWSxCOLS with both between 1 and {}, got '{}'", MAX_DIMENSION, s));
    let mut parts = s.split(|c: char| c == 'x' || c == 'X');
    let rows = parts.next().and_then(|p| p.trim().parse::<usize>().ok()).ok_or_else(invalid)?;
    let cols = parts.next().and_then(|p| p.trim().parse::<usize>().ok()).ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }
    if !(1..=MAX_DIMENSION).contains(&rows) || !(1..=MAX_DIMENSION).contains(&cols) {
        return Err(invalid());
    }
    Ok((rows, cols))
}

impl Args {
    fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        let subdivision = match matches.value_of("subdivision") {
            Some(s) => s.parse::<usize>()
                        .map_err(|_| Error::Input(format!("invalid subdivision size '{}'", s)))?,
            None    => 5,
        };
        Ok(Args {
            input:             matches.value_of("INPUT").map(String::from),
            size:              matches.value_of("size").map(parse_size).transpose()?,
            rows_text:         matches.value_of("rows-text").map(String::from),
            cols_text:         matches.value_of("cols-text").map(String::from),
            subdivision:       subdivision,
            emit_color:        !matches.is_present("no-color") && is_a_tty(io::stdout()),
            blank_lines_empty: matches.is_present("blank-lines-empty"),
            verbosity:         matches.occurrences_of("verbose"),
        })
    }
}

fn setup_logging(verbosity: u64) -> Result<(), log::SetLoggerError> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}: {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
}

fn load_hints(args: &Args) -> Result<(Vec<String>, Vec<String>), Error> {
    let (mut row_hints, mut col_hints) = match (&args.input, args.size) {
        (Some(path), _) => {
            let docs: Vec<Yaml> = YamlLoader::load_from_str(&fs::read_to_string(path)?)?;
            let doc = docs.first().ok_or_else(|| Error::Input(format!("{}: empty puzzle document", path)))?;
            Puzzle::hint_strings_from_yaml(doc)?
        }
        (None, Some((rows, cols))) => (vec![String::new(); rows], vec![String::new(); cols]),
        (None, None) => {
            log::info!("no puzzle given, solving the built-in sample");
            let docs: Vec<Yaml> = YamlLoader::load_from_str(SAMPLE)?;
            Puzzle::hint_strings_from_yaml(&docs[0])?
        }
    };
    if let Some((rows, cols)) = args.size {
        row_hints = resized(&row_hints, rows);
        col_hints = resized(&col_hints, cols);
    }
    if row_hints.is_empty() || col_hints.is_empty() {
        return Err(Error::Input("puzzle needs at least one row and one column".to_string()));
    }
    if row_hints.len() > MAX_DIMENSION || col_hints.len() > MAX_DIMENSION {
        return Err(Error::Input(format!("puzzle is {}x{}, at most {}x{} is supported",
                                        row_hints.len(), col_hints.len(), MAX_DIMENSION, MAX_DIMENSION)));
    }

    if let Some(path) = &args.rows_text {
        let applied = apply_recognized_text(&mut row_hints, &fs::read_to_string(path)?);
        log::info!("{}: read {} row hints", path, applied);
    }
    if let Some(path) = &args.cols_text {
        let applied = apply_recognized_text(&mut col_hints, &fs::read_to_string(path)?);
        log::info!("{}: read {} column hints", path, applied);
    }
    Ok((row_hints, col_hints))
}

fn run(args: &Args) -> Result<(), Error> {
    let (row_hints, col_hints) = load_hints(args)?;
    let puzzle = Puzzle::from_hint_strings(&row_hints, &col_hints);

    let options = SolverOptions {
        blank_lines_empty: args.blank_lines_empty,
        ..Default::default()
    };
    let mut solver = Solver::with_options(puzzle, options);
    let report = solver.solve()?;

    let subdivision = match args.subdivision {
        0 => None,
        n => Some(n),
    };
    println!("{}", solver.puzzle.render(subdivision, args.emit_color));
    if report.solved {
        println!("Solved in {} iterations.", report.iterations);
    } else {
        println!("{} of {} cells could not be deduced by line logic ({} iterations).",
                 solver.puzzle.grid.unknown_count(),
                 solver.puzzle.width() * solver.puzzle.height(),
                 report.iterations);
    }
    Ok(())
}

fn main() {
    let matches = App::new("piclogic")
        .about("Solves nonogram puzzles with row/column line logic")
        .arg(Arg::with_name("INPUT")
                 .help("YAML puzzle file with 'rows' and 'cols' hint lists")
                 .index(1))
        .arg(Arg::with_name("size")
                 .long("size")
                 .takes_value(true)
                 .value_name("ROWSxCOLS")
                 .help("Grid dimensions (1 to 30 each); hint lists are truncated or padded to fit"))
        .arg(Arg::with_name("rows-text")
                 .long("rows-text")
                 .takes_value(true)
                 .value_name("FILE")
                 .help("Recognized text with one row hint per line"))
        .arg(Arg::with_name("cols-text")
                 .long("cols-text")
                 .takes_value(true)
                 .value_name("FILE")
                 .help("Recognized text with one column hint per line"))
        .arg(Arg::with_name("subdivision")
                 .long("subdivision")
                 .takes_value(true)
                 .value_name("N")
                 .help("Draw separator lines every N cells (0 disables, default 5)"))
        .arg(Arg::with_name("no-color")
                 .long("no-color")
                 .help("Disable colored output"))
        .arg(Arg::with_name("blank-lines-empty")
                 .long("blank-lines-empty")
                 .help("Treat lines without hints as entirely empty"))
        .arg(Arg::with_name("verbose")
                 .short("v")
                 .multiple(true)
                 .help("Increase log verbosity (repeatable)"))
        .get_matches();

    let args = match Args::from_matches(&matches) {
        Ok(x) => x,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    if let Err(e) = setup_logging(args.verbosity) {
        eprintln!("failed to set up logging: {}", e);
    }
    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
