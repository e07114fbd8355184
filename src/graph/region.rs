//! Интервал по индексам профиля: «пик с подошвами» или просто отрезок символа.

use std::cmp::Ordering;

/// Неизменяемый интервал `[left, right]` с вершиной.
///
/// Две формы:
/// - пик `(left, apex, right)`: найденный максимум и его подошвы;
/// - отрезок `(left, right)`: вершина не хранится и совпадает с `right`,
///   так что отрезок можно сразу цеплять левым концом следующего.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    left: usize,
    apex: Option<usize>,
    right: usize,
}

impl Region {
    #[inline]
    pub const fn peak(left: usize, apex: usize, right: usize) -> Self {
        Self { left, apex: Some(apex), right }
    }

    #[inline]
    pub const fn span(left: usize, right: usize) -> Self {
        Self { left, apex: None, right }
    }

    #[inline]
    pub const fn left(&self) -> usize {
        self.left
    }

    #[inline]
    pub const fn right(&self) -> usize {
        self.right
    }

    /// Вершина пика; у отрезка это правый конец.
    #[inline]
    pub fn apex(&self) -> usize {
        self.apex.unwrap_or(self.right)
    }

    /// `right - left`; для вырожденного интервала (right < left) это 0.
    #[inline]
    pub const fn width(&self) -> usize {
        self.right.saturating_sub(self.left)
    }

    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        self.left <= index && index <= self.right
    }

    /// Срез `left..=right`: то, что нижняя стадия вырезает как символ.
    /// `None`, если интервал выходит за пределы `data`.
    #[inline]
    pub fn slice<'a, T>(&self, data: &'a [T]) -> Option<&'a [T]> {
        data.get(self.left..=self.right)
    }
}

/// Порядок «слева направо» по вершине.
#[inline]
pub fn left_to_right(a: &Region, b: &Region) -> Ordering {
    a.apex().cmp(&b.apex())
}

/// Стабильная сортировка промежутков слева направо.
#[inline]
pub fn order_left_to_right(regions: &mut [Region]) {
    regions.sort_by_key(Region::apex);
}
