//! Short-time spectrum features
//!
//! Frames are centred like librosa: the signal is padded by half a frame on
//! both sides, so frame `k` is centred on sample `k * hop_size`.

use crate::config::AnalysisConfig;
use rustfft::{num_complex::Complex, FftPlanner};
use std::f32::consts::PI;

/// Magnitude sum below which a frame counts as silent
const SILENCE_FLOOR: f32 = 1e-6;

/// Per-frame features of a mono signal
#[derive(Debug, Clone, Default)]
pub struct SpectralFrames {
    /// Half-wave rectified spectral flux, normalised to [0, 1]
    pub onset_envelope: Vec<f32>,
    /// Spectral centroid in Hz, `None` for silent frames
    pub centroids: Vec<Option<f32>>,
}

impl SpectralFrames {
    pub fn num_frames(&self) -> usize {
        self.onset_envelope.len()
    }

    /// Mean centroid over non-silent frames
    pub fn mean_centroid(&self) -> f32 {
        let (sum, count) = self
            .centroids
            .iter()
            .flatten()
            .fold((0.0f32, 0usize), |(sum, count), c| (sum + c, count + 1));
        if count == 0 {
            0.0
        } else {
            sum / count as f32
        }
    }
}

/// Compute onset envelope and centroids
pub fn compute_frames(samples: &[f32], config: &AnalysisConfig) -> SpectralFrames {
    let fft_size = config.fft_size;
    let hop_size = config.hop_size;

    if samples.len() < fft_size {
        return SpectralFrames::default();
    }

    // Zero-pad so the first frame is centred on sample 0
    let pad = fft_size / 2;
    let mut padded = vec![0.0f32; samples.len() + 2 * pad];
    padded[pad..pad + samples.len()].copy_from_slice(samples);

    let num_frames = 1 + samples.len() / hop_size;

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(fft_size);
    let window = create_hann_window(fft_size);
    let bin_hz = config.sample_rate as f32 / fft_size as f32;

    let mut onset_envelope = Vec::with_capacity(num_frames);
    let mut centroids = Vec::with_capacity(num_frames);
    let mut prev_spectrum: Option<Vec<f32>> = None;
    let mut buffer = vec![Complex::new(0.0f32, 0.0); fft_size];

    for frame_idx in 0..num_frames {
        let start = frame_idx * hop_size;
        let frame = &padded[start..start + fft_size];

        for (slot, (s, w)) in buffer.iter_mut().zip(frame.iter().zip(&window)) {
            *slot = Complex::new(s * w, 0.0);
        }
        fft.process(&mut buffer);

        // Magnitudes of the non-negative frequency bins
        let spectrum: Vec<f32> = buffer[..fft_size / 2].iter().map(|c| c.norm()).collect();

        // Centroid is undefined for silence
        let magnitude_sum: f32 = spectrum.iter().sum();
        centroids.push(if magnitude_sum > SILENCE_FLOOR {
            let weighted: f32 = spectrum
                .iter()
                .enumerate()
                .map(|(bin, m)| m * bin as f32 * bin_hz)
                .sum();
            Some(weighted / magnitude_sum)
        } else {
            None
        });

        // Only increases in magnitude indicate an onset
        let flux = match &prev_spectrum {
            Some(prev) => spectrum
                .iter()
                .zip(prev)
                .map(|(curr, prev)| (curr - prev).max(0.0))
                .sum(),
            None => 0.0,
        };
        onset_envelope.push(flux);

        prev_spectrum = Some(spectrum);
    }

    // Normalise to [0, 1]
    let max = onset_envelope.iter().cloned().fold(0.0f32, f32::max);
    if max > 0.0 {
        for v in &mut onset_envelope {
            *v /= max;
        }
    }

    SpectralFrames {
        onset_envelope,
        centroids,
    }
}

/// Periodic Hann window
fn create_hann_window(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| 0.5 * (1.0 - (2.0 * PI * i as f32 / size as f32).cos()))
        .collect()
}
