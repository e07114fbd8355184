//! Сегментация профиля знака на символы.
//!
//! Алгоритм:
//! 1) Нормализуем профиль: `shift = 2·avg − max`, каждый отсчёт `v -= shift`.
//!    Так порог из шага 2 ведёт себя одинаково на тёмных и светлых знаках.
//! 2) Жадно вынимаем до `count` непересекающихся пиков (промежутков между
//!    символами): берём максимум среди незанятых индексов, останавливаемся,
//!    как только он ниже `rel_min_peak_size · max`; подошвы ищем по `peak_foot_constant`.
//! 3) Выкидываем промежутки шире высоты знака.
//! 4) Сортируем оставшиеся слева направо.
//! 5) Между соседними вершинами лежат символы, плюс крайние куски, если они непустые.

use crate::config::{SegmentOptions, Thresholds};
use crate::core::error::{Result, SegmentError};
use crate::core::types::{GrayImage, Plate};
use crate::graph::profile::Profile;
use crate::graph::project::column_profile;
use crate::graph::region::{order_left_to_right, Region};

/// Шаг 1. Возвращает применённый сдвиг.
fn normalize(profile: &mut Profile) -> Result<f32> {
    let shift = 2.0 * profile.average_value()? - profile.max_value()?;
    let shifted = profile.samples().iter().map(|&v| v - shift).collect();
    profile.set_samples(shifted);
    Ok(shift)
}

/// Самый высокий незанятый отсчёт; при равенстве: самый левый.
fn highest_unclaimed(samples: &[f32], claimed: &[Region]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &v) in samples.iter().enumerate() {
        if Profile::is_claimed(claimed, i) {
            continue;
        }
        match best {
            Some((_, bv)) if v <= bv => {}
            _ => best = Some((i, v)),
        }
    }
    best
}

/// Шаги 1–4: нормализация, жадный поиск пиков, фильтр по ширине, сортировка.
/// Возвращает промежутки между символами (пики с подошвами), слева направо.
///
/// Профиль нормализуется на месте.
pub fn find_gaps(
    profile: &mut Profile,
    count: i32,
    plate_height: usize,
    thresholds: &Thresholds,
) -> Result<Vec<Region>> {
    let count = usize::try_from(count).map_err(|_| SegmentError::InvalidArgument { count })?;

    let shift = normalize(profile)?;
    let max = profile.max_value()?;
    let floor = thresholds.rel_min_peak_size * f64::from(max);
    log::debug!(
        "профиль n={} нормализован: shift={shift}, max={max}, порог пика={floor}",
        profile.len()
    );

    let last = profile.len() - 1;
    let mut candidates: Vec<Region> = Vec::with_capacity(count.min(profile.len()));
    for _ in 0..count {
        let Some((apex, value)) = highest_unclaimed(profile.samples(), &candidates) else {
            log::debug!("все индексы заняты после {} пиков", candidates.len());
            break;
        };
        if f64::from(value) < floor {
            log::debug!("пик {value} в {apex} ниже порога {floor}: стоп");
            break;
        }
        let left = profile.foot_left(apex, thresholds.peak_foot_constant);
        let right = profile.foot_right(apex, thresholds.peak_foot_constant).min(last);
        log::trace!("пик: [{left}, {apex}, {right}] = {value}");
        candidates.push(Region::peak(left, apex, right));
    }

    // промежуток не может быть шире высоты знака
    let mut gaps: Vec<Region> = candidates
        .into_iter()
        .filter(|p| {
            let keep = p.width() < plate_height;
            if !keep {
                log::debug!(
                    "промежуток {p:?} шириной {} отброшен (высота знака {plate_height})",
                    p.width()
                );
            }
            keep
        })
        .collect();
    order_left_to_right(&mut gaps);
    Ok(gaps)
}

/// Шаг 5: промежутки (уже отсортированные) → отрезки символов.
///
/// Без промежутков символов нет вовсе: весь профиль целиком символом не считается.
pub fn characters_from_gaps(gaps: &[Region], len: usize) -> Vec<Region> {
    let (Some(first), Some(last)) = (gaps.first(), gaps.last()) else {
        return Vec::new();
    };

    let mut chars = Vec::with_capacity(gaps.len() + 1);
    // символ слева от первого промежутка
    let head = Region::span(0, first.apex());
    if head.width() > 0 {
        chars.push(head);
    }
    chars.extend(gaps.windows(2).map(|w| Region::span(w[0].apex(), w[1].apex())));
    // символ справа от последнего
    let tail = Region::span(last.apex(), len.saturating_sub(1));
    if tail.width() > 0 {
        chars.push(tail);
    }
    chars
}

/// Полная сегментация. Результат также сохраняется в [`Profile::peaks`];
/// при ошибке там остаётся пусто, а не итог предыдущего вызова.
///
/// Ошибки: `count < 0` → [`SegmentError::InvalidArgument`] (отсчёты не трогаем),
/// пустой профиль → [`SegmentError::EmptyProfile`].
pub fn segment(
    profile: &mut Profile,
    count: i32,
    plate_height: usize,
    rel_min_peak_size: f64,
    peak_foot_constant: f64,
) -> Result<Vec<Region>> {
    let thresholds = Thresholds { rel_min_peak_size, peak_foot_constant };
    profile.set_peaks(Vec::new());
    let gaps = find_gaps(profile, count, plate_height, &thresholds)?;
    let chars = characters_from_gaps(&gaps, profile.len());
    log::debug!("промежутков: {}, символов: {}", gaps.len(), chars.len());
    profile.set_peaks(chars.clone());
    Ok(chars)
}

/// Результат сегментации картинки: нормализованный профиль и символы.
#[derive(Clone, Debug)]
pub struct Segmentation {
    pub profile: Profile,
    pub characters: Vec<Region>,
}

/// Сегментатор с фиксированными параметрами.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlateSegmenter {
    opts: SegmentOptions,
}

impl PlateSegmenter {
    #[inline]
    pub fn new(opts: SegmentOptions) -> Self {
        Self { opts }
    }

    #[inline]
    pub fn options(&self) -> &SegmentOptions {
        &self.opts
    }

    pub fn segment<P: Plate + ?Sized>(&self, profile: &mut Profile, plate: &P) -> Result<Vec<Region>> {
        let t = self.opts.thresholds;
        segment(
            profile,
            self.opts.count,
            plate.height(),
            t.rel_min_peak_size,
            t.peak_foot_constant,
        )
    }

    /// Проекция столбцов картинки → сегментация; знаком служит сама картинка.
    /// Буфер короче `width * height` → [`SegmentError::MalformedImage`].
    pub fn segment_image(&self, img: &GrayImage<'_>) -> Result<Segmentation> {
        img.validate()?;
        let mut profile = column_profile(img);
        let characters = self.segment(&mut profile, img)?;
        Ok(Segmentation { profile, characters })
    }
}
