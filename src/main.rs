use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use console::{Key, Term};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use trailfill_solver::solve::{self, Limits, DEFAULT_MAX_STATES};
use trailfill_solver::wire::{self, SolveRequest};
use trailfill_solver::{outcome, Direction, Grid};

/// Finds the shortest sequence of slides that fills every empty cell of a
/// board.
///
/// Boards are written one row per line: `.` empty, `#` wall, `S` start.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board files. `-` reads standard input.
    #[arg(required = true, value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Read `{"board": [[...]]}` requests and print JSON responses.
    #[arg(long)]
    json: bool,

    /// Maximum number of states expanded per board.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_STATES, conflicts_with = "unbounded")]
    max_states: usize,

    /// Do not cap the number of expanded states.
    #[arg(long)]
    unbounded: bool,

    /// Give up on a board after this many seconds.
    #[arg(long, value_name = "SECS")]
    timeout: Option<f64>,

    /// Play the board interactively.
    #[arg(long, conflicts_with = "json")]
    play: bool,
}

impl Args {
    fn limits(&self) -> Result<Limits> {
        let timeout = self
            .timeout
            .map(Duration::try_from_secs_f64)
            .transpose()
            .context("Invalid timeout")?;
        Ok(Limits {
            max_states: (!self.unbounded).then_some(self.max_states),
            timeout,
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let limits = args.limits()?;

    if args.play {
        ensure!(args.paths.len() == 1, "--play takes exactly one board");
        let grid = read_input(&args.paths[0])?
            .parse::<Grid>()
            .context("Failed to parse the board")?;
        return play(&grid, &limits);
    }

    let pb = if args.paths.len() == 1 {
        let pb = ProgressBar::new_spinner();
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    } else {
        let pb = ProgressBar::new(args.paths.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} boards [{elapsed}]")
                .context("Invalid progress template")?,
        );
        pb
    };

    let reports = args
        .paths
        .par_iter()
        .map(|path| {
            let mut slides = 0u64;
            let report = solve_path(path, args.json, &limits, || {
                slides += 1;
                if args.paths.len() == 1 && slides % (1 << 14) == 0 {
                    pb.set_message(format!("{slides} slides"));
                }
            });
            pb.inc(1);
            log::info!("{}: done after {slides} slides", path.display());
            report
        })
        .collect::<Vec<_>>();
    pb.finish_and_clear();

    let mut failed_cnt = 0;
    for (path, report) in args.paths.iter().zip(reports) {
        match report {
            Ok(line) if args.json => println!("{line}"),
            Ok(line) => println!("{}: {line}", path.display()),
            Err(err) => {
                eprintln!("{}: {err:?}", path.display());
                failed_cnt += 1;
            }
        }
    }
    ensure!(
        failed_cnt == 0,
        "{failed_cnt}/{} boards failed",
        args.paths.len()
    );
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn solve_path(path: &Path, json: bool, limits: &Limits, on_step: impl FnMut()) -> Result<String> {
    let input = read_input(path)?;

    if json {
        let request = serde_json::from_str::<SolveRequest>(&input)
            .context("Failed to parse the request")?;
        let response = wire::respond(&request, limits);
        return serde_json::to_string(&response).context("Failed to encode the response");
    }

    let grid = input
        .parse::<Grid>()
        .context("Failed to parse the board")?;
    let outcome = outcome::solve(&grid, limits, on_step)?;
    Ok(outcome.to_string())
}

enum Action {
    Exit,
    Go(Direction),
    Undo,
    Reset,
    Hint,
}

impl TryFrom<Key> for Action {
    type Error = ();

    fn try_from(key: Key) -> Result<Self, Self::Error> {
        Ok(match key {
            Key::ArrowLeft | Key::Char('a') => Self::Go(Direction::Left),
            Key::ArrowRight | Key::Char('d') => Self::Go(Direction::Right),
            Key::ArrowUp | Key::Char('w') => Self::Go(Direction::Up),
            Key::ArrowDown | Key::Char('s') => Self::Go(Direction::Down),
            Key::Escape | Key::Char('q') => Self::Exit,
            Key::Char('z') => Self::Undo,
            Key::Char('r') => Self::Reset,
            Key::Char('h') => Self::Hint,
            _ => return Err(()),
        })
    }
}

fn play(grid: &Grid, limits: &Limits) -> Result<()> {
    let init_state = grid.initial_state().context("The board has no start")?;

    let mut state = init_state.clone();
    let mut history = Vec::new();

    let term = Term::stderr();
    loop {
        eprintln!("{}", grid.trail(&state));
        if grid.is_complete(&state) {
            eprintln!("Every cell is filled.");
        }

        let action = loop {
            if let Ok(action) = Action::try_from(term.read_key()?) {
                break action;
            }
        };

        match action {
            Action::Exit => break,
            Action::Go(dir) => {
                let mut new_state = state.clone();
                match grid.go(&mut new_state, dir) {
                    Ok(()) => {
                        history.push(state);
                        state = new_state;
                    }
                    Err(err) => log::debug!("{err}"),
                }
            }
            Action::Undo => {
                if let Some(last_state) = history.pop() {
                    state = last_state;
                }
            }
            Action::Reset => {
                history.push(state);
                state = init_state.clone();
            }
            Action::Hint => match solve::bfs_from(grid, state.clone(), limits, || {}) {
                Ok(steps) => match steps.first() {
                    Some(dir) => eprintln!("Hint: {dir} ({} moves left)", steps.len()),
                    None => eprintln!("Hint: nothing left to fill"),
                },
                Err(err) => eprintln!("Hint: {err}"),
            },
        }
    }

    Ok(())
}
