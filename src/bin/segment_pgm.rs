use std::{env, path::PathBuf};

use plategraph::pgm::load_pgm;
use plategraph::{PlateSegmenter, SegmentOptions, Thresholds};

fn main() {
    env_logger::init();

    let mut path: Option<PathBuf> = None;
    let mut count: Option<i32> = None;
    let mut config: Option<PathBuf> = None;

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--count" => {
                if let Some(v) = args.next() {
                    count = Some(v.parse().unwrap_or(plategraph::config::DEFAULT_PEAK_COUNT));
                }
            }
            "--config" => {
                if let Some(v) = args.next() {
                    config = Some(PathBuf::from(v));
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            other => {
                if path.is_none() {
                    path = Some(PathBuf::from(other));
                } else {
                    eprintln!("Лишний аргумент: {other}");
                    print_help();
                    std::process::exit(2);
                }
            }
        }
    }

    let Some(path) = path else {
        print_help();
        std::process::exit(2);
    };

    let thresholds = match config {
        Some(cfg) => match Thresholds::load(&cfg) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Не удалось прочитать конфиг: {e}");
                std::process::exit(1);
            }
        },
        None => Thresholds::default(),
    };

    let img = match load_pgm(&path) {
        Ok(img) => img,
        Err(e) => {
            eprintln!("Не удалось прочитать PGM: {e}");
            std::process::exit(1);
        }
    };

    let mut opts = SegmentOptions { thresholds, ..SegmentOptions::default() };
    if let Some(c) = count {
        opts.count = c;
    }
    let seg = match PlateSegmenter::new(opts).segment_image(&img.as_gray()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Сегментация не удалась: {e}");
            std::process::exit(1);
        }
    };

    if seg.characters.is_empty() {
        println!("Символы не найдены.");
    } else {
        for (i, r) in seg.characters.iter().enumerate() {
            println!("#{i}: x={}..={}  (ширина {})", r.left(), r.right(), r.width());
        }
    }
}

fn print_help() {
    eprintln!(
        r#"Использование:
  cargo run --bin segment_pgm -- <plate.pgm> [--count <N>] [--config <thresholds.toml>]

Требуется PGM P5 (8-бит, maxval=255): вырезанный знак, символы тёмные на светлом.
Конфиг (TOML):
  plategraph_rel_minpeaksize = 0.86
  plategraph_peakfootconstant = 0.7

Примеры:
  cargo run --bin segment_pgm -- ./plate.pgm
  RUST_LOG=debug cargo run --bin segment_pgm -- ./plate.pgm --count 12
"#
    );
}
