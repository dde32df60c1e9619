//! Patient models.

use serde::{Deserialize, Serialize};

/// A patient record as listed in the transfer workflow's search picker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Local UUID - always present, generated locally
    pub local_id: String,
    /// Medical record number (hospital-issued external id)
    pub mrn: String,
    /// Patient name
    pub name: String,
    /// Date of birth (RFC3339 date)
    pub date_of_birth: Option<String>,
    /// Label of the ward the patient currently occupies, if admitted
    pub current_ward: Option<String>,
    /// Additional notes
    pub notes: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl Patient {
    /// Create a new patient with required fields.
    pub fn new(name: String, mrn: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            local_id: uuid::Uuid::new_v4().to_string(),
            mrn,
            name,
            date_of_birth: None,
            current_ward: None,
            notes: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Case-insensitive substring match over name, MRN, and local id.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.mrn.to_lowercase().contains(&q)
            || self.local_id.to_lowercase().contains(&q)
    }
}
