use thiserror::Error;

/// Ошибки конвейера списков (фильтр / агрегаты / группировка)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListViewError {
    /// Ключ колонки отсутствует в заданном порядке колонок
    #[error("Unknown bucket kind: {0}")]
    UnknownBucketKind(String),

    /// Строка не соответствует ни одному варианту закрытого перечисления
    #[error("Unknown {kind} value: '{value}'")]
    UnknownEnumValue { kind: &'static str, value: String },

    #[error("Unknown facet: '{0}'")]
    UnknownFacet(String),

    #[error("Unknown sort key: '{0}'")]
    UnknownSortKey(String),

    #[error("Unknown sort direction: '{0}'")]
    UnknownSortDirection(String),

    /// Дата не в формате YYYY-MM-DD
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

impl ListViewError {
    pub fn unknown_value(kind: &'static str, value: &str) -> Self {
        Self::UnknownEnumValue {
            kind,
            value: value.to_string(),
        }
    }
}
