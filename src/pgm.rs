//! Минимальный ввод/вывод PGM (P5, 8 бит) для демо-бинарей и тестов.
//! Сам алгоритм сегментации файлов не касается.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::core::types::LumaImage;

fn invalid(msg: &'static str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

// пропускаем пробелы и #-комментарии, возвращаем следующий ascii-токен
fn read_token<'a>(buf: &'a [u8], i: &mut usize) -> Option<&'a [u8]> {
    while *i < buf.len() {
        let c = buf[*i];
        if c == b'#' {
            while *i < buf.len() && buf[*i] != b'\n' {
                *i += 1;
            }
        } else if c.is_ascii_whitespace() {
            *i += 1;
        } else {
            break;
        }
    }
    if *i >= buf.len() {
        return None;
    }
    let start = *i;
    while *i < buf.len() && !buf[*i].is_ascii_whitespace() {
        *i += 1;
    }
    Some(&buf[start..*i])
}

fn read_usize(buf: &[u8], i: &mut usize, missing: &'static str, bad: &'static str) -> io::Result<usize> {
    let tok = read_token(buf, i).ok_or_else(|| invalid(missing))?;
    std::str::from_utf8(tok)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| invalid(bad))
}

/// Разобрать PGM P5 из памяти: хедер "P5\n<width> <height>\n<maxval>\n" + данные.
pub fn read_pgm_p5(buf: &[u8]) -> io::Result<LumaImage> {
    let mut i = 0usize;

    let magic = read_token(buf, &mut i).ok_or_else(|| invalid("PGM: нет магической сигнатуры"))?;
    if magic != b"P5" {
        return Err(invalid("PGM: поддерживается только P5 (binary)"));
    }
    let width = read_usize(buf, &mut i, "PGM: нет width", "PGM: неверный width")?;
    let height = read_usize(buf, &mut i, "PGM: нет height", "PGM: неверный height")?;
    let maxval = read_usize(buf, &mut i, "PGM: нет maxval", "PGM: неверный maxval")?;
    if maxval != 255 {
        return Err(invalid("PGM: поддерживается только maxval=255"));
    }

    // ровно один пробельный символ после maxval
    if i >= buf.len() {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "PGM: нет данных изображения"));
    }
    i += 1;

    let expected = width
        .checked_mul(height)
        .ok_or_else(|| invalid("PGM: переполнение размера"))?;
    if buf.len() - i < expected {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "PGM: мало байтов данных"));
    }
    Ok(LumaImage {
        data: buf[i..i + expected].to_vec(),
        width,
        height,
    })
}

pub fn load_pgm(path: &Path) -> io::Result<LumaImage> {
    let buf = fs::read(path)?;
    read_pgm_p5(&buf)
}

pub fn write_pgm_p5(path: &Path, width: usize, height: usize, data: &[u8]) -> io::Result<()> {
    if width.checked_mul(height) != Some(data.len()) {
        return Err(invalid("PGM: размер данных не совпадает с width*height"));
    }
    let mut f = io::BufWriter::new(fs::File::create(path)?);
    write!(f, "P5\n{width} {height}\n255\n")?;
    f.write_all(data)?;
    f.flush()
}
