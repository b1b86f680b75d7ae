use chrono::NaiveDate;
use serde::Serialize;

/// A company holiday. `work_center = None` applies to every center.
#[derive(Debug, Clone, Serialize)]
pub struct Holiday {
    pub id: i64,
    pub date: NaiveDate,
    pub name: String,
    pub work_center: Option<String>,
}

impl Holiday {
    pub fn center_label(&self) -> &str {
        self.work_center.as_deref().unwrap_or("All centers")
    }
}
