//! Raysprite main entry point.
//!
//! A 2D sprite animation demo written in Rust using:
//! - **raylib** for windowing, graphics, and input
//! - **configparser** for the INI window configuration
//! - **clap** for command line parsing
//!
//! This executable demonstrates frame-indexed sprite sheet animation: a fox
//! character walks around under keyboard control, switching between an idle
//! and a walk clip cut from the same sheet, while a camera bobs over the
//! scene and a grayscale shader tints a spinning gem in the UI layer.
//!
//! # Project Structure
//!
//! - [`config`] – Window and frame rate configuration loaded from `config.ini`
//! - [`game`] – Game context, per-tick update and the frame loop
//! - [`input`] – Mode-based keyboard/mouse queries and cursor conversions
//! - [`visuals`] – Sprite sheet clips and their frame arithmetic
//!
//! # Main Loop
//!
//! 1. Initialize logging, parse the command line, load `config.ini`
//! 2. Open the raylib window and load textures, clips and the grayscale shader
//! 3. Run the frame loop:
//!    - Refresh input and check the Alt+F4 quit combo
//!    - Update the camera, cursor caches, click timer, character and clips
//!    - Render the world under the 2D camera, then the screen-space UI
//!    - Measure the frame delta and clamp it for the next tick
//! 4. Drop the game context (releases GPU resources) before the window closes
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod config;
mod game;
mod input;
mod visuals;

use crate::config::GameConfig;
use crate::game::Game;
use clap::Parser;
use std::path::PathBuf;

/// Sprite animation demo
#[derive(Parser)]
#[command(version, about = "Frame-indexed sprite sheet animation demo built on raylib.")]
struct Cli {
    /// Read window settings from this INI file instead of ./config.ini.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let explicit_config = cli.config.is_some();
    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        // A missing default file is normal; a missing explicit one is not.
        if explicit_config {
            log::warn!("{}", e);
        } else {
            log::debug!("{}", e);
        }
    }

    log::info!("Hello! This is the sprite animation demo!");

    let (window_width, window_height) = config.window_size();

    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title(&config.window_title)
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);

    let mut game = match Game::new(&mut rl, &thread) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };

    game.run(&mut rl, &thread);

    log::info!("Goodbye!");
}
