//! Dino Dash terminal driver
//!
//! Plays one episode in the terminal. Each player turn reads an action code
//! from stdin (empty line = stand), the environment side is sampled from the
//! difficulty scheduler, and the grid is printed after every completed tick.
//! `--demo` swaps stdin for a small reactive autopilot.

use std::error::Error;
use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

use dino_dash::HighScores;
use dino_dash::render::render;
use dino_dash::sim::{GameState, PlayerAction};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut demo = false;
    let mut seed = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--demo" => demo = true,
            other => match other.parse::<u64>() {
                Ok(value) => seed = Some(value),
                Err(_) => {
                    eprintln!("usage: dino-dash [--demo] [seed]");
                    std::process::exit(2);
                }
            },
        }
    }

    let mut state = match seed {
        Some(seed) => GameState::new(seed),
        None => GameState::new_random(),
    };
    log::info!("starting episode with seed {}", state.seed);

    let stdin = io::stdin();
    while !state.terminal {
        let code = if demo {
            autopilot(&state)
        } else {
            read_player_action(&stdin)?
        };
        state.apply_action(code)?;
        if !state.terminal {
            let env_code = state.choose_random_env_action()?;
            state.apply_action(env_code)?;
        }
        print!("{}", render(&state));
        println!("score: {}", state.score);
        thread::sleep(Duration::from_millis(state.speed_ms));
    }

    println!("game over - final score {}", state.score);
    let mut scores = HighScores::load();
    if let Some(rank) = scores.add(state.score, state.seed) {
        println!("new high score, rank {rank}");
        scores.save();
    } else if let Some(best) = scores.best() {
        println!("best so far: {best}");
    }
    Ok(())
}

/// One action code from stdin; an empty line stands still.
fn read_player_action(stdin: &io::Stdin) -> Result<i32, Box<dyn Error>> {
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(PlayerAction::Stand.code())
    } else {
        Ok(trimmed.parse()?)
    }
}

/// Reactive demo policy: jump short cacti as they close in, duck under low
/// birds, otherwise stand. Ignores everything behind the nearest obstacle.
fn autopilot(state: &GameState) -> i32 {
    if state.jump_phase.is_some() {
        return PlayerAction::Stand.code();
    }
    let Some(head) = state.obstacles.first() else {
        return PlayerAction::Stand.code();
    };
    let action = match head.y {
        0 if head.distance == 2 => PlayerAction::Jump,
        1 if head.distance <= 3 => PlayerAction::Crouch,
        _ => PlayerAction::Stand,
    };
    action.code()
}
