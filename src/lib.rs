//! Fractal Noise Library
//!
//! A Rust implementation of fractal (octave-summed) simplex noise texture
//! generation. Multiple octaves of OpenSimplex noise are summed with
//! per-octave amplitude decay and frequency growth, producing the classic
//! fractal Brownian motion look used for terrain heightmaps, clouds, and
//! procedural texture assets.
//!
//! # Features
//!
//! - Octave noise sampling over any 2D coherent noise source
//! - Amplitude-normalised output independent of octave count
//! - Resolution-independent textures (pixels map onto the unit square)
//! - Grayscale-as-RGB PNG output preserving exact pixel values
//! - Reproducible results with explicit seeding
//!
//! # Quick Start
//!
//! ## Generating a Texture
//!
//! ```no_run
//! use fractal_noise::{FractalNoiseConfig, FractalNoiseGenerator, save_fractal_noise_to_png};
//!
//! let config = FractalNoiseConfig {
//!     size: 256,
//!     octaves: 20,
//!     seed: 42,
//!     ..Default::default()
//! };
//!
//! let generator = FractalNoiseGenerator::new(config).unwrap();
//! let result = generator.generate().unwrap();
//! save_fractal_noise_to_png(&result, "res/perlin.png").unwrap();
//! ```
//!
//! ## Sampling Noise Directly
//!
//! ```no_run
//! use fractal_noise::{OctaveNoise, OctaveNoiseConfig};
//!
//! let config = OctaveNoiseConfig {
//!     octaves: 6,
//!     persistence: 0.5,
//!     lacunarity: 2.0,
//!     ..Default::default()
//! };
//!
//! let sampler = OctaveNoise::new(&config).unwrap();
//! let value = sampler.sample(0.25, 0.75); // nominally in [-1, 1]
//! ```
//!
//! # Algorithm
//!
//! Each octave samples the base noise source at a frequency that grows by
//! `lacunarity` per octave and mixes the sample in at an amplitude that
//! decays by `persistence` per octave. Dividing the accumulated value by
//! the running amplitude total normalises the result back toward the base
//! source's nominal [-1, 1] range regardless of octave count.
//!
//! The texture fill maps pixel (x, y) of an N×N grid onto the unit square
//! as (x / N, y / N), rescales the sampled value from [-1, 1] to [0, 1],
//! and quantises to an 8-bit grayscale value (clamped, so parameter choices
//! that push the sum outside [-1, 1] can never overflow a channel).

#![doc(html_root_url = "https://docs.rs/fractal-noise/0.1.0")]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

/// Fractal noise texture generation module
pub mod generator;
/// Octave noise sampling module
pub mod sampler;

// Re-export main types for convenience
pub use generator::{
    fractal_noise_to_image, generate_fractal_noise, save_fractal_noise_to_png,
    FractalNoiseConfig, FractalNoiseGenerator, FractalNoiseResult, GeneratorError,
};
pub use sampler::{OctaveNoise, OctaveNoiseConfig, SamplerError};
