//! Ошибки сегментации и загрузки конфигурации.

use thiserror::Error;

/// Ошибки сегментации. Все означают нарушение предусловий, ничего не ретраим.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// Отрицательное число искомых пиков.
    #[error("недопустимый аргумент: count = {count} (ожидается >= 0)")]
    InvalidArgument { count: i32 },

    /// Запрос максимума/среднего у пустого профиля.
    #[error("пустой профиль: агрегаты не определены")]
    EmptyProfile,

    /// Буфер картинки короче, чем `width * height`.
    #[error("битая картинка {width}x{height}: в буфере {len} байт")]
    MalformedImage { width: usize, height: usize, len: usize },
}

/// Ошибки чтения порогов сегментации.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("не удалось прочитать конфиг: {0}")]
    Io(#[from] std::io::Error),

    #[error("не удалось разобрать TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("в конфиге нет ключа `{0}`")]
    Missing(&'static str),

    #[error("значение `{name}` должно быть конечным числом, получено {value}")]
    NotFinite { name: &'static str, value: f64 },
}

pub type Result<T, E = SegmentError> = std::result::Result<T, E>;
