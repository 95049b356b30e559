use std::path::Path;

use anyhow::{bail, Result};
use trailfill_solver::Direction;

pub const SEPARATOR: &str = "================\n";
pub const TEST_DIR: &str = "tests";
pub const EXTENTION: &str = "map";

#[allow(unused)]
pub fn parse_direction(ch: char) -> Result<Direction> {
    Ok(match ch {
        'U' | '↑' => Direction::Up,
        'D' | '↓' => Direction::Down,
        'L' | '←' => Direction::Left,
        'R' | '→' => Direction::Right,
        _ => bail!("Invalid action: {ch:?}"),
    })
}

/// Runs `check` on every `.map` fixture under `tests/<subdir>`, comparing its
/// output with the whole fixture file. Exits with a failure status if any
/// fixture differs or errors.
pub fn run_tests(subdir: &str, mut check: impl FnMut(&str) -> Result<String>) {
    let mut fixtures = std::fs::read_dir(Path::new(TEST_DIR).join(subdir))
        .unwrap()
        .map(|ent| ent.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == EXTENTION))
        .collect::<Vec<_>>();
    fixtures.sort();
    assert!(!fixtures.is_empty(), "no fixtures under {subdir}");

    let mut failed_cnt = 0;
    for path in &fixtures {
        let name = path.file_stem().unwrap().to_string_lossy();
        let expected = std::fs::read_to_string(path).unwrap();
        let verdict = match check(&expected) {
            Ok(got) if got == expected => continue,
            Ok(got) => format!("expected:\n{expected}got:\n{got}"),
            Err(err) => format!("{err:?}"),
        };
        eprintln!("{name}: \x1B[31mFAILED\x1B[0m\n{verdict}");
        failed_cnt += 1;
    }

    eprintln!(
        "{}/{} {subdir} fixtures passed",
        fixtures.len() - failed_cnt,
        fixtures.len()
    );
    if failed_cnt != 0 {
        std::process::exit(1);
    }
}
