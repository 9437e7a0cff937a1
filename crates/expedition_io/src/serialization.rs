//! Serialization helpers with uniform error handling.
//!
//! JSON is the only document format. Files ending in `.gz` are gzip
//! compressed transparently; hex-wrapped JSON gives a single token that can
//! be pasted into a command line or a transaction memo.

use crate::error::{IoError, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Serializes data to JSON.
pub fn to_json<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    serde_json::to_string(data)
        .map_err(|e| IoError::serialization(format!("JSON serialization failed: {}", e)))
}

pub fn to_json_pretty<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(data)
        .map_err(|e| IoError::serialization(format!("JSON serialization failed: {}", e)))
}

/// Deserializes data from a JSON string. Blank input is a validation error.
pub fn from_json<T>(json: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    if json.trim().is_empty() {
        return Err(IoError::validation("Empty JSON string"));
    }

    serde_json::from_str(json)
        .map_err(|e| IoError::serialization(format!("JSON deserialization failed: {}", e)))
}

/// Hex-encoded compact JSON.
pub fn to_hex_json<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    let json = to_json(data)?;
    Ok(hex::encode(json.as_bytes()))
}

/// Inverse of [`to_hex_json`]. Accepts an optional `0x` prefix.
pub fn from_hex_json<T>(hex_str: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let trimmed = hex_str.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if digits.is_empty() {
        return Err(IoError::validation("Empty hex string"));
    }

    let bytes = hex::decode(digits)
        .map_err(|e| IoError::validation(format!("Invalid hex encoding: {}", e)))?;
    let json = String::from_utf8(bytes)
        .map_err(|e| IoError::validation(format!("Invalid UTF-8 in hex: {}", e)))?;

    from_json(&json)
}

fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Writes pretty JSON, gzip compressed when the path ends in `.gz`.
pub fn write_json_file<T, P>(data: &T, path: P) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let context = || format!("writing JSON to {:?}", path);
    let json = to_json_pretty(data)?;
    let file = File::create(path).map_err(|e| IoError::FileSystem(e).with_context(context()))?;

    let mut writer = if is_gzip_path(path) {
        let compress_err = |e: std::io::Error| IoError::compression(e.to_string()).with_context(context());
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        encoder.write_all(json.as_bytes()).map_err(compress_err)?;
        encoder.finish().map_err(compress_err)?
    } else {
        let mut writer = BufWriter::new(file);
        writer
            .write_all(json.as_bytes())
            .map_err(|e| IoError::FileSystem(e).with_context(context()))?;
        writer
    };
    writer
        .flush()
        .map_err(|e| IoError::FileSystem(e).with_context(context()))?;
    Ok(())
}

/// Reads JSON written by [`write_json_file`].
pub fn read_json_file<T, P>(path: P) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let context = || format!("reading JSON from {:?}", path);
    let file = File::open(path).map_err(|e| IoError::FileSystem(e).with_context(context()))?;

    let mut json = String::new();
    if is_gzip_path(path) {
        GzDecoder::new(BufReader::new(file))
            .read_to_string(&mut json)
            .map_err(|e| IoError::compression(e.to_string()).with_context(context()))?;
    } else {
        BufReader::new(file)
            .read_to_string(&mut json)
            .map_err(|e| IoError::FileSystem(e).with_context(context()))?;
    }
    from_json(&json).map_err(|e| e.with_context(context()))
}
