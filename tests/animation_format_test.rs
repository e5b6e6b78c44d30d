use std::path::PathBuf;

use tui_dmd::core::{Animation, Frame};
use tui_dmd::types::{DMD_HEADER_LEN, DMD_MAGIC};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tui-dmd-{}-{}.dmd", name, std::process::id()))
}

fn two_frame_animation() -> Animation {
    let mut anim = Animation::new();
    anim.push_frame(Frame::from_data(3, 2, vec![0, 1, 2, 3, 0, 1]).unwrap())
        .unwrap();
    anim.push_frame(Frame::from_data(3, 2, vec![3, 3, 3, 0, 0, 0]).unwrap())
        .unwrap();
    anim
}

#[test]
fn save_then_load_preserves_frames() {
    let path = temp_path("round-trip");
    let anim = two_frame_animation();
    anim.save(&path).unwrap();

    let loaded = Animation::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.width(), Some(3));
    assert_eq!(loaded.height(), Some(2));
    assert_eq!(loaded, anim);
}

#[test]
fn header_is_four_little_endian_words() {
    let bytes = two_frame_animation().to_bytes().unwrap();
    assert_eq!(bytes.len(), DMD_HEADER_LEN + 2 * 6);
    assert_eq!(&bytes[0..4], &DMD_MAGIC.to_le_bytes());
    assert_eq!(&bytes[4..8], &2u32.to_le_bytes());
    assert_eq!(&bytes[8..12], &3u32.to_le_bytes());
    assert_eq!(&bytes[12..16], &2u32.to_le_bytes());
    assert_eq!(&bytes[16..22], &[0, 1, 2, 3, 0, 1]);
}

#[test]
fn size_mismatch_by_one_byte_is_rejected() {
    let bytes = two_frame_animation().to_bytes().unwrap();

    let short = &bytes[..bytes.len() - 1];
    assert!(Animation::from_bytes(short).unwrap_err().is_format());

    let mut long = bytes.clone();
    long.push(0);
    assert!(Animation::from_bytes(&long).unwrap_err().is_format());

    assert!(Animation::from_bytes(&bytes[..DMD_HEADER_LEN - 1])
        .unwrap_err()
        .is_format());
}

#[test]
fn zero_frame_file_keeps_its_size() {
    let anim = Animation::with_size(128, 32);
    let bytes = anim.to_bytes().unwrap();
    assert_eq!(bytes.len(), DMD_HEADER_LEN);

    let loaded = Animation::from_bytes(&bytes).unwrap();
    assert!(loaded.is_empty());
    assert_eq!((loaded.width(), loaded.height()), (Some(128), Some(32)));
}

#[test]
fn saving_without_size_is_an_error() {
    let path = temp_path("no-size");
    let err = Animation::new().save(&path).unwrap_err();
    assert!(err.is_format());
    assert!(!path.exists());
}

#[test]
fn missing_file_is_io_error() {
    let err = Animation::load(temp_path("does-not-exist")).unwrap_err();
    assert!(matches!(err, tui_dmd::core::DmdError::Io(_)));
}
