//! goomba-wrap - Game Boy to Game Boy Advance ROM converter
//!
//! Wraps .gb/.gbc/.sgb ROM files with the bundled Goomba or Goomba Color
//! emulator core, producing .gba executables the handheld's loader runs
//! directly. Each argument is converted independently; one bad file never
//! stops the batch, and the process always exits 0.

use anyhow::Result;
use clap::Parser;

use goomba_wrap::Job;

#[derive(Parser)]
#[command(name = "goomba-wrap")]
#[command(about = "Game Boy to Game Boy Advance ROM converter")]
#[command(version)]
struct Cli {
    /// ROM files to convert (.gb, .gbc or .sgb)
    roms: Vec<String>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    if cli.roms.is_empty() {
        println!("Drag and drop a rom file onto goomba-wrap.");
        return Ok(());
    }

    for rom in &cli.roms {
        println!("------------------------------");

        let job = Job::stage(rom);
        println!("Converting: {}", job.file_name);
        println!("Rom type: {}", job.category);
        println!("Emulator: {}", job.emulator);

        match job.run() {
            Ok(done) => println!("Success! Wrote {}", done.output_path),
            Err(err) => println!("Error - {err}"),
        }
    }

    Ok(())
}
