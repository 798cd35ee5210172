use chrono::{Datelike, NaiveDate};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    #[default]
    Student,
    Staff,
}

impl PersonKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonKind::Student => "student",
            PersonKind::Staff => "staff",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "student" => Some(PersonKind::Student),
            "staff" => Some(PersonKind::Staff),
            _ => None,
        }
    }

    pub fn section_label(&self) -> &'static str {
        match self {
            PersonKind::Student => "Students",
            PersonKind::Staff => "Staff",
        }
    }
}

impl std::fmt::Display for PersonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-section fields of a record. A student never carries staff fields and
/// vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonDetails {
    Student {
        roll_no: String,
        academic_year: Option<u32>,
    },
    Staff {
        emp_id: String,
        designation: String,
    },
}

impl PersonDetails {
    pub fn kind(&self) -> PersonKind {
        match self {
            PersonDetails::Student { .. } => PersonKind::Student,
            PersonDetails::Staff { .. } => PersonKind::Staff,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawAttendanceRecord")]
pub struct AttendanceRecord {
    pub id: String,
    pub name: String,
    pub present: bool,
    pub details: PersonDetails,
}

impl AttendanceRecord {
    pub fn kind(&self) -> PersonKind {
        self.details.kind()
    }

    /// Roll number for students, employee id for staff.
    pub fn identifier(&self) -> &str {
        match &self.details {
            PersonDetails::Student { roll_no, .. } => roll_no,
            PersonDetails::Staff { emp_id, .. } => emp_id,
        }
    }

    pub fn academic_year(&self) -> Option<u32> {
        match &self.details {
            PersonDetails::Student { academic_year, .. } => *academic_year,
            PersonDetails::Staff { .. } => None,
        }
    }

    pub fn designation(&self) -> Option<&str> {
        match &self.details {
            PersonDetails::Staff { designation, .. } => Some(designation),
            PersonDetails::Student { .. } => None,
        }
    }
}

// Flat wire shape; the server keys records by `_id` and sends camelCase fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAttendanceRecord {
    #[serde(rename = "_id", default)]
    underscore_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "type")]
    kind: PersonKind,
    name: String,
    #[serde(default)]
    present: bool,
    #[serde(default)]
    roll_no: Option<String>,
    #[serde(default)]
    academic_year: Option<u32>,
    #[serde(default)]
    emp_id: Option<String>,
    #[serde(default)]
    designation: Option<String>,
}

impl TryFrom<RawAttendanceRecord> for AttendanceRecord {
    type Error = String;

    fn try_from(raw: RawAttendanceRecord) -> Result<Self, Self::Error> {
        let id = raw
            .underscore_id
            .or(raw.id)
            .ok_or_else(|| format!("attendance record '{}' has no id", raw.name))?;
        let details = match raw.kind {
            PersonKind::Student => PersonDetails::Student {
                roll_no: raw.roll_no.unwrap_or_default(),
                academic_year: raw.academic_year,
            },
            PersonKind::Staff => PersonDetails::Staff {
                emp_id: raw.emp_id.unwrap_or_default(),
                designation: raw.designation.unwrap_or_default(),
            },
        };
        Ok(Self {
            id,
            name: raw.name,
            present: raw.present,
            details,
        })
    }
}

/// The `(day, month, year, type)` tuple a list read is issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceQuery {
    pub date: NaiveDate,
    pub kind: PersonKind,
}

impl AttendanceQuery {
    pub fn new(date: NaiveDate, kind: PersonKind) -> Self {
        Self { date, kind }
    }

    pub fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("date", self.date.day().to_string()),
            ("month", self.date.month().to_string()),
            ("year", self.date.year().to_string()),
            ("type", self.kind.as_str().to_string()),
        ]
    }
}

impl std::fmt::Display for AttendanceQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.date.format("%Y-%m-%d"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emp_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(rename = "type")]
    pub kind: PersonKind,
    pub date: u32,
    pub month: u32,
    pub year: i32,
}

impl CreatePersonRequest {
    pub fn new(name: impl Into<String>, details: PersonDetails, date: NaiveDate) -> Self {
        let mut request = Self {
            name: name.into(),
            roll_no: None,
            emp_id: None,
            academic_year: None,
            designation: None,
            kind: details.kind(),
            date: date.day(),
            month: date.month(),
            year: date.year(),
        };
        match details {
            PersonDetails::Student {
                roll_no,
                academic_year,
            } => {
                request.roll_no = Some(roll_no);
                request.academic_year = academic_year;
            }
            PersonDetails::Staff {
                emp_id,
                designation,
            } => {
                request.emp_id = Some(emp_id);
                request.designation = Some(designation);
            }
        }
        request
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.code == "VALIDATION_ERROR"
    }
}
