// tests/integration_smoke.rs
//
// Интеграционные тесты верхнего уровня: синтетический знак → PGM → профиль → символы.

use std::fs;

use plategraph::pgm::{load_pgm, write_pgm_p5};
use plategraph::prelude::*;
use plategraph::synth::PlateLayout;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn synthetic_plate_splits_between_glyphs() {
    init_logger();
    let layout = PlateLayout::default();
    let img = layout.render();

    let seg = PlateSegmenter::default()
        .segment_image(&img.as_gray())
        .expect("segmentation of a non-empty plate");

    // 7 символов + правое поле: левое поле даёт промежуток с вершиной в 0
    assert_eq!(seg.characters.len(), layout.glyphs + 1);
    assert_eq!(seg.characters.first().map(Region::left), Some(0));
    assert_eq!(seg.characters.last().map(Region::right), Some(layout.width() - 1));

    for i in 0..layout.glyphs {
        let cols = layout.glyph_columns(i);
        let r = seg.characters[i];
        assert!(
            r.left() <= cols.start && cols.end - 1 <= r.right(),
            "glyph {i} {cols:?} is not inside {r:?}"
        );
    }
    assert_eq!(seg.profile.peaks(), &seg.characters[..]);
}

#[test]
fn plate_height_limits_gap_width() {
    init_logger();
    // промежутки шире высоты знака: все отбрасываются
    let layout = PlateLayout { gap: 10, margin: 12, height: 8, border: 1, ..PlateLayout::default() };
    let img = layout.render();
    let chars = plategraph::segment_plate(&img.as_gray()).unwrap();
    assert!(chars.is_empty());
}

#[test]
fn blank_plate_yields_no_characters() {
    // однородный профиль: единственный «промежуток» на всю ширину шире знака
    let img = LumaImage { data: vec![255; 32 * 16], width: 32, height: 16 };
    let chars = plategraph::segment_plate(&img.as_gray()).unwrap();
    assert!(chars.is_empty());
}

#[test]
fn empty_image_reports_empty_profile() {
    let img = LumaImage { data: Vec::new(), width: 0, height: 10 };
    assert_eq!(
        plategraph::segment_plate(&img.as_gray()),
        Err(SegmentError::EmptyProfile)
    );
}

#[test]
fn short_image_buffer_is_an_error_not_a_panic() {
    let data = [1u8, 2, 3];
    let img = GrayImage { data: &data, width: 4, height: 2 };
    assert_eq!(
        plategraph::segment_plate(&img),
        Err(SegmentError::MalformedImage { width: 4, height: 2, len: 3 })
    );
}

#[test]
fn pgm_roundtrip_through_disk() {
    init_logger();
    let layout = PlateLayout { glyphs: 5, ..PlateLayout::default() };
    let img = layout.render();

    let dir = std::env::temp_dir().join(format!("plategraph-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("plate.pgm");
    write_pgm_p5(&path, img.width, img.height, &img.data).expect("write pgm");

    let loaded = load_pgm(&path).expect("read pgm");
    assert_eq!((loaded.width, loaded.height), (img.width, img.height));
    assert_eq!(loaded.data, img.data);

    let chars = plategraph::segment_plate(&loaded.as_gray()).unwrap();
    assert_eq!(chars.len(), layout.glyphs + 1);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn thresholds_from_toml_drive_segmenter() {
    let t = Thresholds::from_toml_str(
        "plategraph_rel_minpeaksize = 0.5\nplategraph_peakfootconstant = 0.5\n",
    )
    .unwrap();
    let seg = PlateSegmenter::new(SegmentOptions { count: 2, thresholds: t });
    let mut p = Profile::new(vec![1.0, 1.0, 1.0, 9.0, 1.0, 1.0, 1.0, 9.0, 1.0, 1.0, 1.0]);
    let chars = seg.segment(&mut p, &100usize).unwrap();
    assert_eq!(
        chars,
        [Region::span(0, 3), Region::span(3, 7), Region::span(7, 10)]
    );
}
