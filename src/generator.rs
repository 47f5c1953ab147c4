/**
 * Fractal Noise Texture Generator
 *
 * Fills an N×N grayscale buffer by sampling octave-summed simplex noise at
 * normalised coordinates and writes it out as a lossless PNG.
 *
 * PIXEL PIPELINE
 * ==============
 * For each pixel (x, y), row-major:
 * 1. Map to the unit square: (x / N, y / N). Texture appearance is therefore
 *    resolution-independent apart from sampling density.
 * 2. Evaluate the octave noise sampler at that coordinate (nominally [-1, 1]).
 * 3. Rescale to [0, 1] via (value + 1) * 0.5.
 * 4. Quantise to 8 bits: multiply by 255, round, clamp to [0, 255]. The clamp
 *    keeps adversarial persistence/lacunarity values from overflowing the
 *    channel when the raw sum escapes [-1, 1].
 *
 * OUTPUT FORMAT
 * =============
 * Pixels are stored as one grayscale byte each and expanded to equal-valued
 * RGB triples on save, matching the reference texture format.
 *
 * Each pixel is independent, so the fill loop is embarrassingly parallel;
 * the single-threaded loop here is fast enough for texture-asset sizes.
 */

use image::{ImageBuffer, Rgb, RgbImage};
use indicatif::{ProgressBar, ProgressStyle};
use noise::{NoiseFn, OpenSimplex};
use std::path::Path;
use thiserror::Error;

use crate::sampler::{OctaveNoise, OctaveNoiseConfig, SamplerError};

/// Configuration for fractal noise texture generation
#[derive(Debug, Clone)]
pub struct FractalNoiseConfig {
    /// Side length of the square texture in pixels
    pub size: usize,
    /// Number of noise octaves to sum (must be at least 1)
    pub octaves: u32,
    /// Amplitude decay per octave (typically in (0, 1))
    pub persistence: f64,
    /// Frequency growth per octave (typically > 1)
    pub lacunarity: f64,
    /// Frequency of the first octave
    pub base_frequency: f64,
    /// Seed for the underlying noise source
    pub seed: u32,
    /// Show progress indicators
    pub verbose: bool,
}

impl Default for FractalNoiseConfig {
    fn default() -> Self {
        Self {
            size: FractalNoiseGenerator::<OpenSimplex>::DEFAULT_SIZE,
            octaves: OctaveNoise::<OpenSimplex>::DEFAULT_OCTAVES,
            persistence: OctaveNoise::<OpenSimplex>::DEFAULT_PERSISTENCE,
            lacunarity: OctaveNoise::<OpenSimplex>::DEFAULT_LACUNARITY,
            base_frequency: OctaveNoise::<OpenSimplex>::DEFAULT_BASE_FREQUENCY,
            seed: 0,
            verbose: false,
        }
    }
}

/// Result of fractal noise generation
#[derive(Debug, Clone)]
pub struct FractalNoiseResult {
    /// Row-major grayscale data (0-255), one byte per pixel
    pub data: Vec<u8>,
    /// Side length of the generated texture
    pub size: usize,
}

/// Error types for fractal noise generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Texture side length is zero
    #[error("Size must be positive")]
    InvalidSize,

    /// Sampler configuration was rejected
    #[error(transparent)]
    Sampler(#[from] SamplerError),

    /// Failed to save generated image
    #[error("Failed to save image: {0}")]
    ImageSaveError(#[from] image::ImageError),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/**
 * Main class for generating fractal noise textures
 */
pub struct FractalNoiseGenerator<S = OpenSimplex> {
    size: usize,
    sampler: OctaveNoise<S>,
    verbose: bool,
    progress: Option<ProgressBar>,
}

impl FractalNoiseGenerator<OpenSimplex> {
    /// Default texture side length
    pub const DEFAULT_SIZE: usize = 256;

    /// Create a new generator with the given configuration
    pub fn new(config: FractalNoiseConfig) -> Result<Self> {
        Self::with_source(OpenSimplex::new(config.seed), config)
    }
}

impl<S: NoiseFn<f64, 2>> FractalNoiseGenerator<S> {
    /// Create a generator over an arbitrary 2D noise source
    pub fn with_source(source: S, config: FractalNoiseConfig) -> Result<Self> {
        if config.size == 0 {
            return Err(GeneratorError::InvalidSize);
        }

        let sampler_config = OctaveNoiseConfig {
            octaves: config.octaves,
            persistence: config.persistence,
            lacunarity: config.lacunarity,
            base_frequency: config.base_frequency,
            seed: config.seed,
        };
        let sampler = OctaveNoise::with_source(source, &sampler_config)?;

        let progress = if config.verbose {
            let pb = ProgressBar::new(config.size as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>4}/{len:4} rows")
                    .unwrap()
                    .progress_chars("##-"),
            );
            Some(pb)
        } else {
            None
        };

        Ok(Self {
            size: config.size,
            sampler,
            verbose: config.verbose,
            progress,
        })
    }

    /**
     * Generate the fractal noise texture
     *
     * Every pixel is written exactly once; the returned buffer is fully
     * populated and exactly size×size bytes long.
     */
    pub fn generate(self) -> Result<FractalNoiseResult> {
        let start_time = std::time::Instant::now();

        if self.verbose {
            println!("Generating {}×{} fractal noise texture...", self.size, self.size);
        }

        let n = self.size as f64;
        let mut data = Vec::with_capacity(self.size * self.size);

        for y in 0..self.size {
            for x in 0..self.size {
                let value = self.sampler.sample(x as f64 / n, y as f64 / n);
                let height = (value + 1.0) * 0.5;
                data.push((height * 255.0).round().clamp(0.0, 255.0) as u8);
            }

            if let Some(pb) = &self.progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = &self.progress {
            pb.finish_with_message("Fractal noise generation complete");
        }

        if self.verbose {
            let elapsed = start_time.elapsed();
            println!(
                "Fractal noise generation complete in {:.2}s",
                elapsed.as_secs_f32()
            );
        }

        Ok(FractalNoiseResult {
            data,
            size: self.size,
        })
    }
}

/**
 * Convenience function to generate a fractal noise texture
 */
pub fn generate_fractal_noise(size: usize, octaves: u32, seed: u32) -> Result<FractalNoiseResult> {
    let config = FractalNoiseConfig {
        size,
        octaves,
        seed,
        ..Default::default()
    };
    let generator = FractalNoiseGenerator::new(config)?;
    generator.generate()
}

/**
 * Expand a generated texture into an RGB image with equal channel values
 */
pub fn fractal_noise_to_image(result: &FractalNoiseResult) -> RgbImage {
    ImageBuffer::from_fn(result.size as u32, result.size as u32, |x, y| {
        let value = result.data[y as usize * result.size + x as usize];
        Rgb([value, value, value])
    })
}

/**
 * Save a fractal noise texture to a PNG file
 *
 * The write is a single save call; failure (missing directory, permissions)
 * propagates without partial-file cleanup.
 */
pub fn save_fractal_noise_to_png<P: AsRef<Path>>(
    result: &FractalNoiseResult,
    filename: P,
) -> Result<()> {
    let img = fractal_noise_to_image(result);
    img.save(&filename)?;
    println!(
        "Saved fractal noise texture to {}",
        filename.as_ref().display()
    );

    Ok(())
}
