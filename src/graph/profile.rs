//! Профиль яркости знака: упорядоченные отсчёты + лениво пересчитываемые агрегаты.
//!
//! Агрегаты (максимум, минимум, среднее) считаются при первом запросе после
//! инвалидации и кешируются. Любая замена отсчётов сбрасывает кеш; пересчёта
//! сразу не происходит: до следующего запроса отсчёты могут смениться ещё раз.

use std::cell::Cell;

use crate::core::error::{Result, SegmentError};
use crate::graph::region::Region;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Stats {
    max: f32,
    min: f32,
    average: f32,
}

impl Stats {
    fn compute(samples: &[f32]) -> Option<Self> {
        let (&first, rest) = samples.split_first()?;
        let mut max = first;
        let mut min = first;
        let mut sum = first;
        for &v in rest {
            if v > max {
                max = v;
            }
            if v < min {
                min = v;
            }
            sum += v;
        }
        #[allow(clippy::cast_precision_loss)]
        let average = sum / samples.len() as f32;
        Some(Self { max, min, average })
    }
}

/// Одномерный профиль (проекция картинки знака на одну ось).
#[derive(Clone, Debug, Default)]
pub struct Profile {
    samples: Vec<f32>,
    stats: Cell<Option<Stats>>,
    peaks: Vec<Region>,
}

impl Profile {
    #[inline]
    pub fn new(samples: Vec<f32>) -> Self {
        Self {
            samples,
            stats: Cell::new(None),
            peaks: Vec::new(),
        }
    }

    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Заменить отсчёты целиком. Кеш агрегатов сбрасывается.
    #[inline]
    pub fn set_samples(&mut self, samples: Vec<f32>) {
        self.samples = samples;
        self.invalidate();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Пометить агрегаты устаревшими. Пересчёт произойдёт при следующем запросе.
    #[inline]
    pub fn invalidate(&self) {
        self.stats.set(None);
    }

    fn stats(&self) -> Result<Stats> {
        if let Some(s) = self.stats.get() {
            return Ok(s);
        }
        let s = Stats::compute(&self.samples).ok_or(SegmentError::EmptyProfile)?;
        self.stats.set(Some(s));
        Ok(s)
    }

    pub fn max_value(&self) -> Result<f32> {
        self.stats().map(|s| s.max)
    }

    pub fn min_value(&self) -> Result<f32> {
        self.stats().map(|s| s.min)
    }

    pub fn average_value(&self) -> Result<f32> {
        self.stats().map(|s| s.average)
    }

    /// Символы, найденные последним вызовом сегментации (до него пусто).
    #[inline]
    pub fn peaks(&self) -> &[Region] {
        &self.peaks
    }

    #[inline]
    pub(crate) fn set_peaks(&mut self, peaks: Vec<Region>) {
        self.peaks = peaks;
    }

    /// Попадает ли `index` в `[left, right]` хотя бы одного уже занятого интервала.
    #[inline]
    pub fn is_claimed(claimed: &[Region], index: usize) -> bool {
        claimed.iter().any(|r| r.contains(index))
    }

    /// Левая подошва пика: идём от вершины влево, пока значение
    /// `>= fraction * samples[apex]`. Возвращаем первый индекс ниже порога,
    /// либо 0, если порог так и не был пройден.
    ///
    /// # Panics
    /// Если `apex` вне профиля.
    pub fn foot_left(&self, apex: usize, fraction: f64) -> usize {
        let level = fraction * f64::from(self.samples[apex]);
        (0..=apex)
            .rev()
            .find(|&i| f64::from(self.samples[i]) < level)
            .unwrap_or(0)
    }

    /// Правая подошва пика, симметрично [`Profile::foot_left`]; по умолчанию `n - 1`.
    ///
    /// # Panics
    /// Если `apex` вне профиля.
    pub fn foot_right(&self, apex: usize, fraction: f64) -> usize {
        let level = fraction * f64::from(self.samples[apex]);
        (apex..self.samples.len())
            .find(|&i| f64::from(self.samples[i]) < level)
            .unwrap_or(self.samples.len() - 1)
    }
}

impl From<Vec<f32>> for Profile {
    #[inline]
    fn from(samples: Vec<f32>) -> Self {
        Self::new(samples)
    }
}

impl FromIterator<f32> for Profile {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
