//! Пороги сегментации и их загрузка.
//!
//! Значения ищутся по именам `plategraph_rel_minpeaksize` и
//! `plategraph_peakfootconstant`: в TOML-файле или в любом источнике,
//! реализующем [`PropertySource`]. Глобального конфигуратора нет: пороги
//! передаются в сегментатор явно.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::ConfigError;

pub const REL_MIN_PEAK_SIZE_KEY: &str = "plategraph_rel_minpeaksize";
pub const PEAK_FOOT_CONSTANT_KEY: &str = "plategraph_peakfootconstant";

/// Сколько промежутков искать по умолчанию.
pub const DEFAULT_PEAK_COUNT: i32 = 20;

/// Источник вещественных настроек по имени.
pub trait PropertySource {
    fn double_property(&self, name: &str) -> Option<f64>;
}

impl PropertySource for BTreeMap<String, f64> {
    fn double_property(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl PropertySource for toml::Table {
    #[allow(clippy::cast_precision_loss)]
    fn double_property(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            toml::Value::Float(v) => Some(*v),
            toml::Value::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Доля максимума профиля, которой должен достигать пик.
    /// Меньше: режем символы, больше: склеиваем соседние.
    #[serde(rename = "plategraph_rel_minpeaksize")]
    pub rel_min_peak_size: f64,
    /// Доля высоты пика, на которой считаем, что достигли подошвы.
    #[serde(rename = "plategraph_peakfootconstant")]
    pub peak_foot_constant: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            rel_min_peak_size: 0.86,
            peak_foot_constant: 0.7,
        }
    }
}

impl Thresholds {
    /// Оба ключа обязательны.
    pub fn from_properties<S: PropertySource + ?Sized>(src: &S) -> Result<Self, ConfigError> {
        let rel_min_peak_size = src
            .double_property(REL_MIN_PEAK_SIZE_KEY)
            .ok_or(ConfigError::Missing(REL_MIN_PEAK_SIZE_KEY))?;
        let peak_foot_constant = src
            .double_property(PEAK_FOOT_CONSTANT_KEY)
            .ok_or(ConfigError::Missing(PEAK_FOOT_CONSTANT_KEY))?;
        Self { rel_min_peak_size, peak_foot_constant }.validated()
    }

    /// Отсутствующие ключи берутся из [`Thresholds::default`].
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let t: Self = toml::from_str(text)?;
        t.validated()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let t = Self::from_toml_str(&text)?;
        log::debug!("пороги из {}: {t:?}", path.display());
        Ok(t)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        for (name, value) in [
            (REL_MIN_PEAK_SIZE_KEY, self.rel_min_peak_size),
            (PEAK_FOOT_CONSTANT_KEY, self.peak_foot_constant),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        Ok(self)
    }
}

/// Параметры одного прогона сегментатора.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentOptions {
    /// Максимум промежутков (пиков), которые пытаемся найти.
    pub count: i32,
    pub thresholds: Thresholds,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_PEAK_COUNT,
            thresholds: Thresholds::default(),
        }
    }
}
