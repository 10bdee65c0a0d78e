use serde::{Deserialize, Serialize};

/// Geographic position attached to a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Short "lat, lon" form shown in the submission preview.
    pub fn display(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    /// Server-side string form ("lat, lon" at full precision), the shape
    /// the records endpoint reports back.
    pub fn server_str(&self) -> String {
        format!("{}, {}", self.latitude, self.longitude)
    }
}

/// One record as returned by `GET {base_url}/{device_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRecord {
    pub coords: String,   // "lat, lon"
    pub datetime: String, // server clock, "DD/MM/YYYY HH:MM:SS"
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>, // base64; absent or null on older records
}

/// A row of the local `reports` journal/cache.
#[derive(Debug, Clone, Serialize)]
pub struct StoredReport {
    pub id: i32,
    pub coords: String,     // ⇔ reports.coords ("lat, lon")
    pub datetime: String,   // ⇔ reports.datetime (server clock string)
    pub status: String,     // ⇔ reports.status
    pub comment: String,    // ⇔ reports.comment (empty when none was sent)
    pub has_image: bool,    // ⇔ reports.has_image (0/1)
    pub source: String,     // ⇔ reports.source ('submit' | 'remote')
    pub created_at: String, // ⇔ reports.created_at (ISO8601, local clock)
}

impl StoredReport {
    /// Row for a report this client just submitted. The server's record
    /// list drops the comment, so the journal is the only place it
    /// survives.
    pub fn from_submission(
        coords: &Coordinates,
        status: &str,
        comment: &str,
        has_image: bool,
    ) -> Self {
        Self {
            id: 0,
            coords: coords.server_str(),
            datetime: chrono::Local::now().format("%d/%m/%Y %H:%M:%S").to_string(),
            status: status.to_string(),
            comment: comment.to_string(),
            has_image,
            source: "submit".to_string(),
            created_at: chrono::Local::now().to_rfc3339(),
        }
    }

    /// Row cached from a remote records fetch.
    pub fn from_remote(record: &ReportRecord) -> Self {
        Self {
            id: 0,
            coords: record.coords.clone(),
            datetime: record.datetime.clone(),
            status: record.status.clone(),
            comment: String::new(),
            has_image: record.image.as_deref().is_some_and(|s| !s.is_empty()),
            source: "remote".to_string(),
            created_at: chrono::Local::now().to_rfc3339(),
        }
    }
}
