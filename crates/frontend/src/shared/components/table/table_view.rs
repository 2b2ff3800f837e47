//! Render-ready table model, independent of any DOM

/// Column header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub title: &'static str,
    /// Right-aligned
    pub numeric: bool,
}

impl ColumnDef {
    pub const fn text(title: &'static str) -> Self {
        Self {
            title,
            numeric: false,
        }
    }

    pub const fn number(title: &'static str) -> Self {
        Self {
            title,
            numeric: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    /// One entry per record, cells in column order
    Rows(Vec<Vec<String>>),
    /// Single row spanning every column
    Placeholder { message: String, colspan: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub id: &'static str,
    pub columns: Vec<ColumnDef>,
    pub body: TableBody,
}

impl TableView {
    /// Uses the placeholder when `rows` is empty
    pub fn new(
        id: &'static str,
        columns: Vec<ColumnDef>,
        rows: Vec<Vec<String>>,
        empty_message: impl Into<String>,
    ) -> Self {
        let body = if rows.is_empty() {
            TableBody::Placeholder {
                message: empty_message.into(),
                colspan: columns.len(),
            }
        } else {
            TableBody::Rows(rows)
        };
        Self { id, columns, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rows_give_placeholder() {
        let view = TableView::new(
            "t",
            vec![ColumnDef::text("A"), ColumnDef::number("B")],
            vec![],
            "Nothing here",
        );
        assert_eq!(
            view.body,
            TableBody::Placeholder {
                message: "Nothing here".to_string(),
                colspan: 2
            }
        );
    }

    #[test]
    fn test_rows_kept() {
        let rows = vec![
            vec!["x".to_string(), "1".to_string()],
            vec!["y".to_string(), "2".to_string()],
        ];
        let view = TableView::new(
            "t",
            vec![ColumnDef::text("A"), ColumnDef::number("B")],
            rows.clone(),
            "Nothing here",
        );
        assert_eq!(view.body, TableBody::Rows(rows));
        assert_eq!(view.columns[1], ColumnDef::number("B"));
    }
}
