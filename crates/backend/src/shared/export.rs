//! CSV выгрузка отфильтрованных списков

use axum::http::header;
use axum::response::{IntoResponse, Response};

use super::list_query::ListQueryError;

/// A record that can be written as one CSV line
pub trait CsvRow {
    fn headers() -> &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

pub fn to_csv<R: CsvRow>(records: &[R]) -> Result<String, ListQueryError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(R::headers())
        .map_err(|e| ListQueryError::Export(e.to_string()))?;

    for record in records {
        writer
            .write_record(record.row())
            .map_err(|e| ListQueryError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ListQueryError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ListQueryError::Export(e.to_string()))
}

/// `text/csv` attachment response
pub fn csv_response(filename: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        name: &'static str,
        amount: i64,
    }

    impl CsvRow for Line {
        fn headers() -> &'static [&'static str] {
            &["name", "amount"]
        }

        fn row(&self) -> Vec<String> {
            vec![self.name.to_string(), self.amount.to_string()]
        }
    }

    #[test]
    fn test_to_csv_quotes_commas() {
        let csv = to_csv(&[
            Line { name: "Sink, steel", amount: 4500 },
            Line { name: "Hinge", amount: 120 },
        ])
        .unwrap();
        assert_eq!(csv, "name,amount\n\"Sink, steel\",4500\nHinge,120\n");
    }

    #[test]
    fn test_empty_export_has_header() {
        assert_eq!(to_csv::<Line>(&[]).unwrap(), "name,amount\n");
    }
}
