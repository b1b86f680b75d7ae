use serde::Serialize;

/// An employee profile. Events, requests and the presence board all key off
/// the subject id.
#[derive(Debug, Clone, Serialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub work_centers: Vec<String>,
    pub is_active: bool,
    pub created_at: String,
}

impl Subject {
    pub fn has_center(&self, center: &str) -> bool {
        self.work_centers.iter().any(|c| c == center)
    }

    pub fn centers_label(&self) -> String {
        if self.work_centers.is_empty() {
            "-".to_string()
        } else {
            self.work_centers.join(", ")
        }
    }
}
