//! Shared fixtures for integration tests.
//!
//! Media files are synthesized on the fly so the tests need nothing beyond
//! the linked FFmpeg libraries.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Write a mono 16-bit PCM WAV of `samples` silent frames.
pub fn write_wav(dir: &Path, name: &str, sample_rate: u32, samples: u32) -> PathBuf {
    let data_len = samples * 2;
    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.resize(bytes.len() + data_len as usize, 0);

    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

/// Write a TOML config file and return its path.
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("avinfo.toml");
    fs::write(&path, contents).unwrap();
    path
}
