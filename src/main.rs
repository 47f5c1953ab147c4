/**
 * Fractal Noise CLI - Command-line interface for fractal noise texture generation
 */

mod generator;
mod sampler;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use generator::{save_fractal_noise_to_png, FractalNoiseConfig, FractalNoiseGenerator};

/// Fractal simplex noise texture generation tools
#[derive(Parser)]
#[command(name = "fractal-noise")]
#[command(version = "0.1.0")]
#[command(about = "Fractal simplex noise texture generation tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fractal noise texture from octave-summed simplex noise
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "res/perlin.png")]
        output: PathBuf,

        /// Texture size (width and height)
        #[arg(short, long, default_value = "256")]
        size: usize,

        /// Number of noise octaves to sum
        #[arg(long, default_value = "20")]
        octaves: u32,

        /// Amplitude decay per octave
        #[arg(long, default_value = "0.5")]
        persistence: f64,

        /// Frequency growth per octave
        #[arg(long, default_value = "2.0")]
        lacunarity: f64,

        /// Frequency of the first octave
        #[arg(long, default_value = "12.0")]
        frequency: f64,

        /// Random seed for reproducibility
        #[arg(long, default_value = "0")]
        seed: u32,

        /// Show detailed generation progress
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            output,
            size,
            octaves,
            persistence,
            lacunarity,
            frequency,
            seed,
            verbose,
        } => {
            // Validate inputs
            if size < 1 || size > 8192 {
                anyhow::bail!("Size must be between 1 and 8192");
            }
            if octaves < 1 {
                anyhow::bail!("Octaves must be at least 1");
            }

            if !verbose {
                println!("Generating {}×{} fractal noise texture", size, size);
                println!("Octaves: {}", octaves);
                println!("Persistence: {}", persistence);
                println!("Lacunarity: {}", lacunarity);
                println!("Seed: {}", seed);
                println!("Output: {}", output.display());
                println!();
            }

            // Create output directory if it doesn't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)
                    .context("Failed to create output directory")?;
            }

            // Generate fractal noise
            let config = FractalNoiseConfig {
                size,
                octaves,
                persistence,
                lacunarity,
                base_frequency: frequency,
                seed,
                verbose,
            };

            let generator = FractalNoiseGenerator::new(config)
                .context("Failed to create generator")?;
            let result = generator.generate()
                .context("Failed to generate fractal noise")?;

            // Save to file
            save_fractal_noise_to_png(&result, &output)
                .context("Failed to save fractal noise texture")?;

            println!();
            println!("Done!");
        }
    }

    Ok(())
}
