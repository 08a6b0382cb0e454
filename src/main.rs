use anyhow::Result;
use clap::{CommandFactory, Parser};

mod chart;
mod cli;
mod commands;
mod dataset;
mod dates;
mod ext;
mod filter;
mod github;
mod logging;
mod model;

use crate::cli::{Cli, normalize};

fn render_man_page<T: CommandFactory>() -> Result<String> {
  let man = clap_mangen::Man::new(T::command());
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}

fn run(cli: Cli) -> Result<()> {
  if cli.gen_man {
    print!("{}", render_man_page::<Cli>()?);
    return Ok(());
  }

  let (command, cfg) = normalize(cli)?;
  logging::init(cfg.verbose);

  commands::dispatch(command, &cfg)
}

fn main() {
  if let Err(e) = run(Cli::parse()) {
    eprintln!("error: {:#}", e);
    std::process::exit(1);
  }
}
