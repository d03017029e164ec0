// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{
    collections::HashSet,
    env, fmt,
    io::{self, BufRead, Write},
    process,
};

use clap::{App, Arg, ArgMatches};
use log::{debug, info};
use once_cell::sync::Lazy;
use rand::{distributions::Uniform, rngs::StdRng, Rng, SeedableRng};
use regex::Regex;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use seabattle::{Axis, Coordinate, Deck, Field, FieldSetup, Ship};

/// Ship lengths placed randomly when no ships are given.
const DEFAULT_FLEET: &str = "5,4,3,3,2";

/// Random placement gives up on a ship after this many rejected positions.
const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Largest supported side of the placement area.
const MAX_SIZE: i32 = 100;

/// Matcher for `<row>,<col>:<row>,<col>` ship specs.
static SHIP_SPEC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)\s*
        (?P<r1>-?[0-9]+)\s*,\s*(?P<c1>-?[0-9]+)\s*
        :\s*
        (?P<r2>-?[0-9]+)\s*,\s*(?P<c2>-?[0-9]+)\s*$",
    )
    .unwrap()
});

/// Matcher for shots, with or without a leading command word.
static FIRE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?:(?:fire|shoot|f)\s+)?
        (?:(?:at|on)\s+)?
        (?P<row>-?[0-9]+)(?:\s*,\s*|\s+)(?P<column>-?[0-9]+)$",
    )
    .unwrap()
});

fn main() -> io::Result<()> {
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Sink a hidden fleet from the command line.")
        .arg(
            Arg::with_name("ship")
                .short("s")
                .long("ship")
                .value_name("START:END")
                .help("place a ship between two cells, e.g. 0,0:0,2 (repeatable)")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .arg(
            Arg::with_name("random")
                .short("r")
                .long("random")
                .value_name("LENGTHS")
                .help("comma-separated lengths of ships to place randomly")
                .takes_value(true)
                .conflicts_with("ship"),
        )
        .arg(
            Arg::with_name("size")
                .long("size")
                .value_name("N")
                .help("side of the square area used for random placement and display")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for random placement")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("increase log verbosity"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let options = Options::from_matches(&matches).unwrap_or_else(|msg| fail(&msg));
    let mut field = match &options.fleet {
        Fleet::Placed(ships) => Field::new(ships.iter().copied()).unwrap_or_else(|err| {
            fail(&err.to_string())
        }),
        Fleet::Random(lengths) => {
            let mut rng = match options.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            random_field(&mut rng, lengths, options.size).unwrap_or_else(|msg| fail(&msg))
        }
    };
    info!("field ready with {} ships", field.len());

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    play(&mut field, options.size, &mut input)
}

/// Print an error and exit with a usage error status.
fn fail(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(2)
}

/// Install the terminal logger. The base level comes from `BATTLESHIP_LOG`, each `-v`
/// raises it by one step.
fn init_logging(verbosity: u64) {
    let base = env::var("BATTLESHIP_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    let _ = TermLogger::init(
        raise_level(base, verbosity),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn raise_level(level: LevelFilter, steps: u64) -> LevelFilter {
    (0..steps).fold(level, |level, _| match level {
        LevelFilter::Off => LevelFilter::Error,
        LevelFilter::Error => LevelFilter::Warn,
        LevelFilter::Warn => LevelFilter::Info,
        LevelFilter::Info => LevelFilter::Debug,
        LevelFilter::Debug | LevelFilter::Trace => LevelFilter::Trace,
    })
}

/// Where the ships come from.
#[derive(Debug, PartialEq)]
enum Fleet {
    /// Ships given explicitly by their ends.
    Placed(Vec<(Coordinate, Coordinate)>),
    /// Lengths of ships to place at random.
    Random(Vec<i32>),
}

/// Options collected from the command line.
#[derive(Debug)]
struct Options {
    fleet: Fleet,
    size: i32,
    seed: Option<u64>,
}

impl Options {
    fn from_matches(matches: &ArgMatches) -> Result<Self, String> {
        let size = parse_size(matches.value_of("size").unwrap_or("10"))?;
        let fleet = match matches.values_of("ship") {
            Some(specs) => Fleet::Placed(specs.map(parse_ship).collect::<Result<_, _>>()?),
            None => Fleet::Random(parse_lengths(
                matches.value_of("random").unwrap_or(DEFAULT_FLEET),
                size,
            )?),
        };
        let seed = match matches.value_of("seed") {
            Some(seed) => Some(
                seed.parse()
                    .map_err(|_| format!("invalid seed: {}", seed))?,
            ),
            None => None,
        };
        Ok(Self { fleet, size, seed })
    }
}

fn parse_size(size: &str) -> Result<i32, String> {
    match size.trim().parse() {
        Ok(size) if size >= 1 && size <= MAX_SIZE => Ok(size),
        Ok(size) => Err(format!("size must be in range [1,{}], got {}", MAX_SIZE, size)),
        Err(_) => Err(format!("invalid size: {}", size)),
    }
}

/// Parse a `<row>,<col>:<row>,<col>` ship spec into its ends.
fn parse_ship(spec: &str) -> Result<(Coordinate, Coordinate), String> {
    let captures = SHIP_SPEC
        .captures(spec)
        .ok_or_else(|| format!("invalid ship \"{}\", expected <row>,<col>:<row>,<col>", spec))?;
    let num = |name: &str| {
        let text = &captures[name];
        text.parse::<i32>()
            .map_err(|_| format!("coordinate out of range: {}", text))
    };
    Ok((
        Coordinate::new(num("r1")?, num("c1")?),
        Coordinate::new(num("r2")?, num("c2")?),
    ))
}

/// Parse a comma-separated list of ship lengths, each of which must fit in the area.
fn parse_lengths(lengths: &str, size: i32) -> Result<Vec<i32>, String> {
    lengths
        .split(',')
        .map(|len| match len.trim().parse() {
            Ok(len) if len >= 1 && len <= size => Ok(len),
            Ok(len) => Err(format!("ship length must be in range [1,{}], got {}", size, len)),
            Err(_) => Err(format!("invalid ship length: {}", len.trim())),
        })
        .collect()
}

/// Place ships of the given lengths at random inside the `size`x`size` area starting at
/// (0, 0), never letting two ships share a cell.
fn random_field(rng: &mut impl Rng, lengths: &[i32], size: i32) -> Result<Field, String> {
    let starts = Uniform::new(Coordinate::new(0, 0), Coordinate::new(size, size));
    let mut taken = HashSet::new();
    let mut setup = FieldSetup::new();
    for &len in lengths {
        let (start, end, ship) = (0..MAX_PLACEMENT_ATTEMPTS)
            .find_map(|_| {
                let start = rng.sample(&starts);
                let end = match rng.gen::<Axis>() {
                    Axis::Row => Coordinate::new(start.row, start.column + len - 1),
                    Axis::Column => Coordinate::new(start.row + len - 1, start.column),
                };
                if end.row >= size || end.column >= size {
                    return None;
                }
                let ship = Ship::new(start, end).ok()?;
                if ship.decks().any(|deck| taken.contains(&deck.coord())) {
                    None
                } else {
                    Some((start, end, ship))
                }
            })
            .ok_or_else(|| format!("no room left for a ship of length {}", len))?;
        debug!("random ship of length {} from {} to {}", len, start, end);
        taken.extend(ship.decks().map(Deck::coord));
        setup.add_ship(start, end).map_err(|err| err.to_string())?;
    }
    Ok(setup.finish())
}

/// Commands available while playing.
#[derive(Debug, PartialEq)]
enum Command {
    Fire(Coordinate),
    Show,
    Help,
    Quit,
}

fn parse_command(input: &str) -> Result<Command, String> {
    match input {
        "?" | "help" | "h" => Ok(Command::Help),
        "show" | "board" | "s" => Ok(Command::Show),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => {
            let captures = FIRE.captures(other).ok_or_else(|| {
                format!("Invalid command \"{}\". Use '?' for help", other)
            })?;
            let num = |name: &str| {
                let text = &captures[name];
                text.parse::<i32>()
                    .map_err(|_| format!("coordinate out of range: {}", text))
            };
            Ok(Command::Fire(Coordinate::new(num("row")?, num("column")?)))
        }
    }
}

/// Run the prompt loop until every ship is sunk or the player quits.
fn play(field: &mut Field, size: i32, input: &mut InputReader<impl BufRead>) -> io::Result<()> {
    let mut shots = HashSet::new();
    let mut count = 0usize;
    println!("{} ships are hidden. Type help or ? for commands.", field.len());
    loop {
        let cmd = input.read_input_lower(">", |input| match parse_command(input) {
            Ok(cmd) => Some(cmd),
            Err(msg) => {
                println!("{}", msg);
                None
            }
        })?;
        match cmd {
            Command::Fire(coord) => {
                count += 1;
                shots.insert(coord);
                println!("{}", field.fire(coord));
                if field.all_sunk() {
                    println!();
                    show_field(field, &shots, size);
                    println!("All ships sunk after {} shots.", count);
                    return Ok(());
                }
            }
            Command::Show => show_field(field, &shots, size),
            Command::Help => {
                println!(
                    "Available Commands:
    fire <row>,<col>    fire at the given cell. \"fire\" may be left out.
    show                show the cells fired at so far.
    help                show this message.
    quit                give up and exit."
                );
            }
            Command::Quit => return Ok(()),
        }
    }
}

/// Print the cells fired at so far.
fn show_field(field: &Field, shots: &HashSet<Coordinate>, size: i32) {
    enum ShotCell {
        Unknown,
        Miss,
        Hit,
        Sunk,
    }
    impl fmt::Display for ShotCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.pad(match self {
                ShotCell::Unknown => "~~",
                ShotCell::Miss => "x",
                ShotCell::Hit => "*",
                ShotCell::Sunk => "#",
            })
        }
    }
    show_board(
        size,
        (0..size).map(move |row| {
            (0..size).map(move |column| {
                let coord = Coordinate::new(row, column);
                match field.ship_at(coord) {
                    _ if !shots.contains(&coord) => ShotCell::Unknown,
                    None => ShotCell::Miss,
                    Some(ship) if ship.sunk() => ShotCell::Sunk,
                    Some(_) => ShotCell::Hit,
                }
            })
        }),
    )
}

/// Show the board by printing the grid. Takes an iterator over the rows of iterators over
/// the items
fn show_board(size: i32, rows: impl Iterator<Item = impl Iterator<Item = impl fmt::Display>>) {
    print!("    ");
    for i in 0..size {
        print!("{:^4}", i);
    }
    println!();
    for (i, row) in rows.enumerate() {
        print!("{:>3} ", i);
        for cell in row {
            print!("{:^4}", cell);
        }
        println!();
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            process::exit(0);
        }
        Ok(())
    }
}
