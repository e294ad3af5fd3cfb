use cerbicon_data::{Canvas, ScreenImage, render_splash, write_image};

const GOLDEN: &[u8] = include_bytes!("fixtures/cerbicon.img");

fn temp_image_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("cerbicon-{}-{name}.img", std::process::id()))
}

#[test]
fn splash_matches_golden_image() {
    let canvas = render_splash().unwrap();
    let image = ScreenImage::from_canvas(&canvas);

    assert_eq!(GOLDEN.len(), ScreenImage::LEN);
    assert_eq!(image.as_bytes(), GOLDEN);
}

#[test]
fn splash_layout() {
    let image = ScreenImage::from_canvas(&render_splash().unwrap());
    let lines: Vec<&[u8]> = image.lines().collect();

    // the glyph header lands on the second line, the first line stays blank
    assert!(lines[0].iter().all(|&b| b == ScreenImage::BLANK));
    assert_eq!(&lines[1][12..25], &[13, b' ', 22, b' ', 23, b' ', 24, b' ', 25, b' ', 26, b' ', 27]);

    assert_eq!(lines[17], b"      Created at The Byte Attic!      ");
    assert_eq!(lines[21], b"   Type help or ? for BIOS commands   ");
    assert!(lines[22].iter().all(|&b| b == ScreenImage::BLANK));
}

#[test]
fn unwritten_cells_serialize_as_spaces() {
    let canvas = render_splash().unwrap();
    let image = ScreenImage::from_canvas(&canvas);

    let unset = canvas
        .rows()
        .skip(ScreenImage::FIRST_ROW)
        .flatten()
        .zip(image.as_bytes())
        .filter(|&(&cell, _)| cell == Canvas::UNSET);

    for (_, &byte) in unset {
        assert_eq!(byte, ScreenImage::BLANK);
    }
    assert!(!image.as_bytes().contains(&Canvas::UNSET));
}

#[test]
fn render_and_save_is_idempotent() {
    let path = temp_image_path("idempotent");

    write_image(&path, &render_splash().unwrap()).unwrap();
    let first = std::fs::read(&path).unwrap();

    write_image(&path, &render_splash().unwrap()).unwrap();
    let second = std::fs::read(&path).unwrap();

    std::fs::remove_file(&path).ok();

    assert_eq!(first, second);
    assert_eq!(first.len(), ScreenImage::LEN);
    assert_eq!(first, GOLDEN);
}

#[test]
fn save_truncates_existing_file() {
    let path = temp_image_path("truncate");
    std::fs::write(&path, vec![b'#'; 4096]).unwrap();

    ScreenImage::from_canvas(&Canvas::new()).save(&path).unwrap();
    let loaded = ScreenImage::load(&path);

    std::fs::remove_file(&path).ok();

    let loaded = loaded.unwrap();
    assert!(loaded.as_bytes().iter().all(|&b| b == ScreenImage::BLANK));
}

#[test]
fn golden_round_trips_through_load() {
    let path = temp_image_path("load");
    std::fs::write(&path, GOLDEN).unwrap();

    let loaded = ScreenImage::load(&path);
    std::fs::remove_file(&path).ok();

    let rendered = ScreenImage::from_canvas(&render_splash().unwrap());
    assert!(rendered.diff(&loaded.unwrap()).is_empty());
}
