use super::extract::fill_missing_duration;
use super::*;
use crate::config::MetadataSettings;
use crate::test_support::{write_id3, write_wav};
use lofty::tag::{Accessor, ItemKey};
use std::path::Path;
use tempfile::tempdir;

fn raw(common: CommonTags) -> RawMetadata {
    RawMetadata {
        common,
        format: FormatInfo {
            duration: Some(200.5),
            file_size: 1024,
        },
    }
}

fn no_probe() -> MetadataSettings {
    MetadataSettings {
        probe_duration: false,
    }
}

#[test]
fn default_metadata_uses_placeholders() {
    let m = TrackMetadata::default();
    assert_eq!(m.path(), Path::new(""));
    assert_eq!(m.title(), "");
    assert_eq!(m.artist(), ["Unknown artist".to_string()]);
    assert_eq!(m.album(), "Unknown");
    assert!(m.genre().is_empty());
    assert_eq!(m.year, None);
    assert_eq!(m.track, NumberPair { no: 0, of: 0 });
    assert_eq!(m.disk, NumberPair { no: 0, of: 0 });
    assert_eq!(m.duration, 0.0);
    assert_eq!(m.play_count, 0);
}

#[test]
fn merge_keeps_defaults_for_absent_fields_and_path_always_wins() {
    let parsed = ParsedMetadata {
        title: Some("Halo".into()),
        year: Some(0),
        ..ParsedMetadata::default()
    };
    let m = TrackMetadata::merge(Path::new("/music/halo.mp3"), parsed);

    assert_eq!(m.path(), Path::new("/music/halo.mp3"));
    assert_eq!(m.title(), "Halo");
    // Present but zero still beats the default.
    assert_eq!(m.year, Some(0));
    assert_eq!(m.artist(), ["Unknown artist".to_string()]);
    assert_eq!(m.album(), "Unknown");
}

#[test]
fn lowered_metas_follow_the_searchable_fields() {
    let parsed = ParsedMetadata {
        title: Some("Déjà Vu".into()),
        artist: Some(vec!["Beyoncé".into(), "JAY-Z".into()]),
        album: Some("B'Day".into()),
        genre: Some(vec!["R&B".into(), "Électro".into()]),
        ..ParsedMetadata::default()
    };
    let m = TrackMetadata::merge(Path::new("/x.mp3"), parsed);

    let lowered = m.lowered_metas();
    assert_eq!(lowered.artist, vec!["beyonce", "jay-z"]);
    assert_eq!(lowered.album, "b'day");
    assert_eq!(lowered.title, "deja vu");
    assert_eq!(lowered.genre, vec!["r&b", "electro"]);
    assert_eq!(
        *lowered,
        get_lowered_meta(m.artist(), m.album(), m.title(), m.genre())
    );
}

#[test]
fn retag_recomputes_lowered_metas() {
    let mut m = TrackMetadata::merge(Path::new("/x.mp3"), ParsedMetadata::default());
    m.retag(Some("Ça Plane".into()), None, Some("Émotion".into()), None);

    assert_eq!(m.title(), "Ça Plane");
    assert_eq!(m.lowered_metas().title, "ca plane");
    assert_eq!(m.lowered_metas().album, "emotion");
    assert_eq!(m.lowered_metas().artist, vec!["unknown artist"]);
}

#[test]
fn parse_music_metadata_without_parse_result_is_empty() {
    let parsed = parse_music_metadata(None, Path::new("/music/a.mp3"));
    assert!(parsed.is_empty());
}

#[test]
fn parse_music_metadata_artist_fallback_order() {
    let path = Path::new("/music/a.mp3");

    let both = raw(CommonTags {
        artists: vec!["A".into(), "B".into()],
        artist: Some("A".into()),
        album_artist: Some("Various".into()),
        ..CommonTags::default()
    });
    assert_eq!(
        parse_music_metadata(Some(&both), path).artist,
        Some(vec!["A".to_string(), "B".to_string()])
    );

    let single = raw(CommonTags {
        artist: Some("Solo".into()),
        album_artist: Some("Various".into()),
        ..CommonTags::default()
    });
    assert_eq!(
        parse_music_metadata(Some(&single), path).artist,
        Some(vec!["Solo".to_string()])
    );

    let album_artist_only = raw(CommonTags {
        album_artist: Some("Various".into()),
        ..CommonTags::default()
    });
    assert_eq!(
        parse_music_metadata(Some(&album_artist_only), path).artist,
        Some(vec!["Various".to_string()])
    );

    assert_eq!(
        parse_music_metadata(Some(&raw(CommonTags::default())), path).artist,
        None
    );
}

#[test]
fn parse_music_metadata_maps_fields_and_falls_back_to_file_name() {
    let data = raw(CommonTags {
        album: Some("Kid A".into()),
        genre: vec!["Electronic".into()],
        year: Some(2000),
        track: (Some(3), None),
        disk: (None, None),
        ..CommonTags::default()
    });
    let parsed = parse_music_metadata(Some(&data), Path::new("/music/03 - Kid A.flac"));

    assert_eq!(parsed.title.as_deref(), Some("03 - Kid A.flac"));
    assert_eq!(parsed.album.as_deref(), Some("Kid A"));
    assert_eq!(parsed.genre, Some(vec!["Electronic".to_string()]));
    assert_eq!(parsed.year, Some(2000));
    assert_eq!(parsed.track, Some(NumberPair { no: 3, of: 0 }));
    assert_eq!(parsed.disk, None);
    assert_eq!(parsed.duration, Some(200.5));
}

#[test]
fn get_metadata_on_unreadable_file_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.mp3");
    std::fs::write(&path, b"definitely not audio").unwrap();

    for settings in [no_probe(), MetadataSettings::default()] {
        let m = get_metadata_with(&path, &settings);

        let mut expected = TrackMetadata::merge(&path, ParsedMetadata::default());
        expected.retag(Some("broken.mp3".into()), None, None, None);
        assert_eq!(m, expected);
        assert_eq!(m.duration, 0.0);
        assert_eq!(m.lowered_metas().title, "broken.mp3");
    }
}

#[test]
fn get_metadata_on_missing_file_does_not_fail() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gone.ogg");

    let m = get_metadata(&path);
    assert_eq!(m.path(), path.as_path());
    assert_eq!(m.title(), "gone.ogg");
    assert_eq!(m.duration, 0.0);
}

#[test]
fn get_metadata_reads_container_duration_of_untagged_wav() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    write_wav(&path, 2);

    let m = get_metadata_with(&path, &no_probe());
    assert_eq!(m.title(), "tone.wav");
    assert_eq!(m.artist(), ["Unknown artist".to_string()]);
    assert!((m.duration - 2.0).abs() < 0.01, "duration {}", m.duration);
}

#[test]
fn get_metadata_reads_id3_tags() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tagged.wav");
    write_wav(&path, 1);
    write_id3(&path, |tag| {
        tag.set_title("Crème Brûlée".to_string());
        tag.set_artist("Sigur Rós".to_string());
        tag.set_album("Ágætis byrjun".to_string());
        tag.set_genre("Post-Rock".to_string());
        tag.set_track(4);
        tag.set_track_total(10);
        tag.insert_text(ItemKey::RecordingDate, "1999-06-12".to_string());
    });

    let m = get_metadata_with(&path, &no_probe());
    assert_eq!(m.title(), "Crème Brûlée");
    assert_eq!(m.artist(), ["Sigur Rós".to_string()]);
    assert_eq!(m.album(), "Ágætis byrjun");
    assert_eq!(m.genre(), ["Post-Rock".to_string()]);
    assert_eq!(m.track, NumberPair { no: 4, of: 10 });
    assert_eq!(m.year, Some(1999));
    assert_eq!(m.lowered_metas().artist, vec!["sigur ros"]);
    assert_eq!(m.lowered_metas().title, "creme brulee");
}

#[test]
fn probe_duration_fails_on_non_audio() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("noise.mp3");
    std::fs::write(&path, b"\x00\x01\x02 not audio").unwrap();

    assert!(probe_duration(&path).is_err());
    assert!(probe_duration(&dir.path().join("missing.mp3")).is_err());
}

#[test]
fn probe_duration_reads_decoder_duration() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    write_wav(&path, 2);

    let seconds = probe_duration(&path).unwrap();
    assert!((seconds - 2.0).abs() < 0.01, "duration {seconds}");
}

#[test]
fn missing_duration_is_filled_from_the_decoder() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    write_wav(&path, 2);

    let mut m = TrackMetadata::merge(&path, ParsedMetadata::default());
    assert_eq!(m.duration, 0.0);
    fill_missing_duration(&mut m, &path);
    assert!((m.duration - 2.0).abs() < 0.01, "duration {}", m.duration);

    // A known duration is left alone.
    let mut known = TrackMetadata::merge(
        &path,
        ParsedMetadata {
            duration: Some(90.0),
            ..ParsedMetadata::default()
        },
    );
    fill_missing_duration(&mut known, &path);
    assert_eq!(known.duration, 90.0);
}

#[test]
fn read_raw_metadata_reports_file_size() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    write_wav(&path, 1);
    let len = std::fs::metadata(&path).unwrap().len();

    let raw = read_raw_metadata(&path, len).unwrap();
    assert_eq!(raw.format.file_size, len);
    assert_eq!(raw.format.file_size, 44 + 8000 * 2);
}
