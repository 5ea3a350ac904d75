// This file is part of the chessai library.
// Copyright (C) 2017-2026 Niklas Fiekas <niklas.fiekas@backscattering.de>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Plays moves typed on standard input and prints the board after each.
//!
//! Input lines are moves like `e2-e4` or `e7-e8=N`, or one of the commands
//! `undo`, `moves` and `quit`.

use std::{
    error::Error,
    io::{self, BufRead as _, Write as _},
    process::ExitCode,
};

use chessai::{Board, Color, Role};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "chessai", version, about = "Play chess moves on a text board")]
struct Cli {
    /// Start with black to move.
    #[arg(long)]
    black: bool,

    /// Moves to play before reading input, like `e2-e4 e7-e5`.
    #[arg(long, num_args = 1.., value_name = "MOVE")]
    moves: Vec<String>,

    /// Do not print the board after each move.
    #[arg(long, short)]
    quiet: bool,
}

enum Command {
    Play(String, Option<Role>),
    Undo,
    Moves,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    Ok(match line {
        "undo" => Command::Undo,
        "moves" => Command::Moves,
        "quit" | "exit" => Command::Quit,
        _ => match line.split_once('=') {
            Some((m, promotion)) => {
                let role = promotion
                    .trim()
                    .chars()
                    .next()
                    .and_then(Role::from_char)
                    .ok_or_else(|| format!("invalid promotion in {line:?}"))?;
                Command::Play(m.to_owned(), Some(role))
            }
            None => Command::Play(line.to_owned(), None),
        },
    })
}

fn play(board: &mut Board, m: &str, promotion: Option<Role>) -> Result<(), Box<dyn Error>> {
    let m = board.parse_move(m)?;
    board.make_move(m, promotion)?;
    if !board.legal_moves().is_empty() {
        if board.in_check(board.turn()) {
            println!("{} is in check", board.turn().full_name());
        }
    } else if board.checkmate() {
        println!("Checkmate, {} wins", (!board.turn()).full_name());
    } else {
        println!("Stalemate");
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut board = if cli.black {
        Board::from_layout(&chessai::DEFAULT_LAYOUT, Color::Black)?
    } else {
        Board::new()
    };

    for m in &cli.moves {
        match parse_command(m)? {
            Command::Play(m, promotion) => play(&mut board, &m, promotion)?,
            _ => return Err(format!("not a move: {m:?}").into()),
        }
    }
    info!("starting with {} to move", board.turn());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if !cli.quiet {
        print!("{board}");
    }
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let result = match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Undo) => match board.undo() {
                Some(m) => {
                    println!("Took back {m}");
                    Ok(())
                }
                None => Err("nothing to undo".into()),
            },
            Ok(Command::Moves) => {
                let moves: Vec<String> = board.legal_moves().iter().map(|m| m.to_string()).collect();
                println!("{}", moves.join(" "));
                continue;
            }
            Ok(Command::Play(m, promotion)) => play(&mut board, &m, promotion),
            Err(err) => Err(err.into()),
        };
        match result {
            Ok(()) if !cli.quiet => print!("{board}"),
            Ok(()) => {}
            Err(err) => {
                warn!("rejected {line:?}: {err}");
                eprintln!("{err}");
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let env = Env::default().filter_or("CHESSAI_LOG", "warn");
    env_logger::Builder::from_env(env).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
