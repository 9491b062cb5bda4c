//! Audio decoding for multiple formats

use super::{decode_container, resample_to_target, AudioFormat};
use anyhow::{Context, Result};
use std::path::Path;

/// Decoded audio, interleaved when `channels > 1`
#[derive(Debug, Clone)]
pub struct AudioData {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl AudioData {
    /// Convert to mono by averaging channels
    pub fn to_mono(&self) -> Vec<f32> {
        if self.channels <= 1 {
            return self.samples.clone();
        }

        self.samples
            .chunks(self.channels as usize)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect()
    }

    /// Length in seconds
    pub fn duration_s(&self) -> f64 {
        if self.sample_rate == 0 || self.channels == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / (self.sample_rate as f64 * self.channels as f64)
    }
}

/// Decode an audio file to mono at the target sample rate
pub fn decode_audio(path: &Path, target_sample_rate: u32) -> Result<AudioData> {
    if !path.exists() {
        anyhow::bail!("Audio file not found: {}", path.display());
    }

    let format = AudioFormat::from_path(path);
    let audio = if format.is_container() {
        decode_container(path)?
    } else {
        match format {
            AudioFormat::Wav => decode_wav(path)?,
            AudioFormat::Mp3 => decode_mp3(path)?,
            AudioFormat::Flac => decode_flac(path)?,
            AudioFormat::Ogg => decode_ogg(path)?,
            _ => anyhow::bail!("Unsupported audio format: {}", path.display()),
        }
    };

    if audio.sample_rate == 0 || audio.channels == 0 {
        anyhow::bail!("Audio file has no decodable stream: {}", path.display());
    }

    log::debug!(
        "Decoded {:?}: {} channels @ {}Hz, {:.2}s",
        format,
        audio.channels,
        audio.sample_rate,
        audio.duration_s()
    );

    // Analysis runs on a single channel at a fixed rate
    let mono = audio.to_mono();
    let samples = resample_to_target(&mono, audio.sample_rate, target_sample_rate);

    Ok(AudioData {
        samples,
        sample_rate: target_sample_rate,
        channels: 1,
    })
}

/// Scale factor mapping signed integer PCM of `bits` width onto [-1, 1)
fn pcm_scale(bits: u32) -> Result<f32> {
    if bits == 0 || bits > 32 {
        anyhow::bail!("Unsupported PCM bit depth: {}", bits);
    }
    Ok((1i64 << (bits - 1)) as f32)
}

fn i16_to_f32(sample: i16) -> f32 {
    sample as f32 / 32768.0
}

fn decode_wav(path: &Path) -> Result<AudioData> {
    let mut reader = hound::WavReader::open(path)
        .with_context(|| format!("Failed to open WAV file: {}", path.display()))?;
    let spec = reader.spec();

    let samples = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<Vec<_>, _>>()
            .context("Corrupt WAV sample data")?,
        hound::SampleFormat::Int => {
            let scale = pcm_scale(spec.bits_per_sample as u32)?;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<Vec<_>, _>>()
                .context("Corrupt WAV sample data")?
        }
    };

    Ok(AudioData {
        samples,
        sample_rate: spec.sample_rate,
        channels: spec.channels,
    })
}

fn decode_mp3(path: &Path) -> Result<AudioData> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read MP3 file: {}", path.display()))?;
    let mut decoder = minimp3::Decoder::new(&data[..]);

    let mut audio = AudioData {
        samples: Vec::new(),
        sample_rate: 0,
        channels: 0,
    };
    let mut skipped = 0usize;

    loop {
        let frame = match decoder.next_frame() {
            Ok(frame) => frame,
            Err(minimp3::Error::Eof) => break,
            Err(e) => anyhow::bail!("MP3 decode error: {}", e),
        };

        // The first frame fixes the stream layout
        if audio.sample_rate == 0 {
            audio.sample_rate = frame.sample_rate as u32;
            audio.channels = frame.channels as u16;
        }
        if frame.sample_rate as u32 != audio.sample_rate || frame.channels as u16 != audio.channels
        {
            skipped += 1;
            continue;
        }

        audio.samples.extend(frame.data.iter().copied().map(i16_to_f32));
    }

    if skipped > 0 {
        log::warn!(
            "Skipped {} MP3 frames with a different layout in {}",
            skipped,
            path.display()
        );
    }

    Ok(audio)
}

fn decode_flac(path: &Path) -> Result<AudioData> {
    let mut reader = claxon::FlacReader::open(path)
        .with_context(|| format!("Failed to open FLAC file: {}", path.display()))?;
    let info = reader.streaminfo();
    let scale = pcm_scale(info.bits_per_sample)?;

    let samples = reader
        .samples()
        .map(|s| s.map(|v| v as f32 / scale))
        .collect::<Result<Vec<_>, _>>()
        .context("Corrupt FLAC sample data")?;

    Ok(AudioData {
        samples,
        sample_rate: info.sample_rate,
        channels: info.channels as u16,
    })
}

fn decode_ogg(path: &Path) -> Result<AudioData> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open OGG file: {}", path.display()))?;
    let mut reader = lewton::inside_ogg::OggStreamReader::new(file)
        .with_context(|| format!("Not an OGG Vorbis stream: {}", path.display()))?;

    let mut audio = AudioData {
        samples: Vec::new(),
        sample_rate: reader.ident_hdr.audio_sample_rate,
        channels: reader.ident_hdr.audio_channels as u16,
    };

    // Packets come back interleaved across channels
    while let Some(packet) = reader.read_dec_packet_itl()? {
        audio.samples.extend(packet.into_iter().map(i16_to_f32));
    }

    Ok(audio)
}
