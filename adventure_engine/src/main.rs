#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Adventure **
//! A small text adventure played at a console prompt.

use adventure_engine::repl::{intro_handler, start_place_handler};
use adventure_engine::{View, load_world, run_repl};

use anyhow::{Context, Result};
use log::info;

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading adventure world...");
    let mut world = load_world().context("while loading AdventureWorld")?;
    info!("AdventureWorld loaded successfully (v{}).", world.version);

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush().context("while clearing the screen")?;
    info!("Starting the game!");

    let mut view = View::new();
    intro_handler(&mut view);
    view.flush();
    start_place_handler(&world, &mut view)?;
    view.flush();

    run_repl(&mut world)?;
    info!("Game over: session ended.");
    Ok(())
}
