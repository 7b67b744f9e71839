/// Two-column tabular view of an audit result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    pub title: &'static str,
    pub headers: [&'static str; 2],
    pub rows: Vec<(String, String)>,
}

impl AuditReport {
    pub fn new(title: &'static str, headers: [&'static str; 2]) -> Self {
        Self {
            title,
            headers,
            rows: Vec::new(),
        }
    }

    pub fn with_row(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.rows.push((label.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
