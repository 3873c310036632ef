#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;
mod logger;
mod output;

use std::process::ExitCode;

use args::{Args, RunMode};
use clap::Parser;
use util::{
  error::{WordsearchError, WordsearchResult},
  time::time_fn,
};
use ws_gen::{Board, WordFinder};
use ws_words::WordList;

fn generate(args: &Args) -> WordsearchResult {
  let words = WordList::load(&args.words)?;
  let config = args.board_config();
  let mut board = match args.seed {
    Some(seed) => Board::seeded(config, seed)?,
    None => Board::new(config)?,
  };

  let (time, placed) = time_fn(|| board.populate(words.iter()));
  log::info!("Generation took {}s", time.as_secs_f32());
  if !placed {
    return Err(WordsearchError::Missing(board.missing().to_vec()).into());
  }

  println!();
  println!("{}", board.display());
  println!();
  println!("{}", words.render());
  println!();
  println!("{}", board.answer());
  println!();
  println!("{}", output::render_key(board.placements()));

  if let Some(dir) = &args.save {
    output::save_puzzle(dir, &board, &words)?;
  }
  Ok(())
}

fn solve(args: &Args) -> WordsearchResult {
  let grid_path = args
    .grid
    .as_ref()
    .ok_or_else(|| WordsearchError::InvalidConfig("--grid is required to solve".to_owned()))?;
  let (mut finder, words) = WordFinder::load(grid_path, &args.words)?;

  let (time, found) = time_fn(|| finder.find_list(words.iter()));
  log::info!("Solving took {}s", time.as_secs_f32());

  println!();
  println!("{}", finder.solution());
  println!();
  println!("{}", output::render_key(finder.placements()));

  if let Some(dir) = &args.save {
    output::save_solution(dir, &finder)?;
  }

  if !found {
    return Err(WordsearchError::Missing(finder.missing().to_vec()).into());
  }
  Ok(())
}

fn run(args: &Args) -> WordsearchResult {
  match args.mode {
    RunMode::Generate => generate(args),
    RunMode::Solve => solve(args),
  }
}

fn main() -> ExitCode {
  let args = Args::parse();
  logger::init_logger(args.debug);

  if let Err(err) = run(&args) {
    eprintln!("Error: {err}");
    ExitCode::FAILURE
  } else {
    ExitCode::SUCCESS
  }
}
