//! Fixtures shared by unit tests.

use std::fs;
use std::path::Path;

use lofty::config::WriteOptions;
use lofty::picture::{MimeType, Picture, PictureType};
use lofty::tag::{Tag, TagExt, TagType};

const SAMPLE_RATE: u32 = 8000;

/// Write a silent mono 16-bit PCM WAV of `seconds` length.
pub(crate) fn write_wav(path: &Path, seconds: u32) {
    let data_len = SAMPLE_RATE * seconds * 2;

    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    bytes.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.resize(bytes.len() + data_len as usize, 0);

    fs::write(path, bytes).unwrap();
}

/// Attach an ID3v2 tag to an existing WAV file.
pub(crate) fn write_id3(path: &Path, fill: impl FnOnce(&mut Tag)) {
    let mut tag = Tag::new(TagType::Id3v2);
    fill(&mut tag);
    tag.save_to_path(path, WriteOptions::default()).unwrap();
}

/// An ID3v2 front-cover picture with the given payload.
pub(crate) fn png_picture(data: &[u8]) -> Picture {
    Picture::new_unchecked(
        PictureType::CoverFront,
        Some(MimeType::Png),
        None,
        data.to_vec(),
    )
}
