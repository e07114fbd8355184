use std::{env, path::PathBuf};

use plategraph::pgm::write_pgm_p5;
use plategraph::synth::PlateLayout;
use plategraph::PlateSegmenter;

fn main() {
    env_logger::init();

    let mut layout = PlateLayout::default();
    let mut write_pgm: Option<PathBuf> = None;

    // Примитивный парсер аргументов:
    // --glyphs 7  --glyph-width 8  --gap 3  --height 24  --write-pgm out.pgm
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--glyphs" => if let Some(v) = args.next() { layout.glyphs = v.parse().unwrap_or(7); },
            "--glyph-width" => if let Some(v) = args.next() { layout.glyph_width = v.parse().unwrap_or(8); },
            "--gap" => if let Some(v) = args.next() { layout.gap = v.parse().unwrap_or(3); },
            "--height" => if let Some(v) = args.next() { layout.height = v.parse().unwrap_or(24); },
            "--write-pgm" => if let Some(v) = args.next() { write_pgm = Some(PathBuf::from(v)); },
            "--help" | "-h" => {
                print_help();
                return;
            }
            other => {
                eprintln!("Неизвестный аргумент: {other}");
                print_help();
                std::process::exit(2);
            }
        }
    }

    let img = layout.render();
    match PlateSegmenter::default().segment_image(&img.as_gray()) {
        Ok(seg) if seg.characters.is_empty() => println!("Символы не найдены :("),
        Ok(seg) => {
            for (i, r) in seg.characters.iter().enumerate() {
                println!("#{i}: x={}..={}", r.left(), r.right());
            }
        }
        Err(e) => {
            eprintln!("Сегментация не удалась: {e}");
            std::process::exit(1);
        }
    }

    // По необходимости сохраним PGM (P5)
    if let Some(path) = write_pgm {
        if let Err(e) = write_pgm_p5(&path, img.width, img.height, &img.data) {
            eprintln!("Ошибка записи PGM: {e}");
        } else {
            println!("PGM сохранён: {}", path.display());
        }
    }
}

fn print_help() {
    eprintln!(
r#"Использование:
  cargo run --bin segment_synthetic -- [--glyphs <N>] [--glyph-width <px>] [--gap <px>] [--height <px>] [--write-pgm <file.pgm>]

По умолчанию рисуется знак из 7 символов 8 px с промежутками 3 px, высота 24 px.

Примеры:
  cargo run --bin segment_synthetic --
  cargo run --bin segment_synthetic -- --glyphs 9 --gap 4
  cargo run --bin segment_synthetic -- --write-pgm plate.pgm
"#
    );
}
