use crate::api::{AttendanceRecord, PersonKind};

/// Select value shared by the year and designation filters.
pub const ALL_OPTION: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearFilter {
    #[default]
    All,
    Year(u32),
}

impl YearFilter {
    pub const CHOICES: [(&'static str, &'static str); 5] = [
        (ALL_OPTION, "All Years"),
        ("1", "1st Year"),
        ("2", "2nd Year"),
        ("3", "3rd Year"),
        ("4", "4th Year"),
    ];

    /// Parses a select value. The `all` sentinel is matched before any
    /// numeric parse; anything else that is not an integer yields `None`.
    pub fn from_value(value: &str) -> Option<Self> {
        let value = value.trim();
        if value == ALL_OPTION {
            return Some(YearFilter::All);
        }
        value.parse::<u32>().ok().map(YearFilter::Year)
    }

    pub fn as_value(&self) -> String {
        match self {
            YearFilter::All => ALL_OPTION.to_string(),
            YearFilter::Year(year) => year.to_string(),
        }
    }

    fn admits(&self, record: &AttendanceRecord) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(year) => record.academic_year() == Some(*year),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DesignationFilter {
    #[default]
    All,
    Only(String),
}

impl DesignationFilter {
    pub fn from_value(value: &str) -> Self {
        if value == ALL_OPTION {
            DesignationFilter::All
        } else {
            DesignationFilter::Only(value.to_string())
        }
    }

    pub fn as_value(&self) -> String {
        match self {
            DesignationFilter::All => ALL_OPTION.to_string(),
            DesignationFilter::Only(designation) => designation.clone(),
        }
    }

    fn admits(&self, record: &AttendanceRecord) -> bool {
        match self {
            DesignationFilter::All => true,
            DesignationFilter::Only(wanted) => record.designation() == Some(wanted.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub category: PersonKind,
    pub search_term: String,
    pub year: YearFilter,
    pub designation: DesignationFilter,
}

impl FilterState {
    pub fn admits(&self, record: &AttendanceRecord) -> bool {
        let needle = self.search_term.to_lowercase();
        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);
        // Records are not re-checked against their own type; the server only
        // returns the active section.
        match self.category {
            PersonKind::Student => self.year.admits(record) && contains(&record.name),
            PersonKind::Staff => {
                self.designation.admits(record)
                    && (contains(&record.name) || record.designation().is_some_and(contains))
            }
        }
    }
}

/// Rows to render, in server order.
pub fn project_records(records: &[AttendanceRecord], filter: &FilterState) -> Vec<AttendanceRecord> {
    records
        .iter()
        .filter(|record| filter.admits(record))
        .cloned()
        .collect()
}

/// `all` followed by each distinct staff designation in first-seen order.
pub fn designation_options(records: &[AttendanceRecord]) -> Vec<String> {
    let mut options = vec![ALL_OPTION.to_string()];
    for record in records.iter().filter(|r| r.kind() == PersonKind::Staff) {
        if let Some(designation) = record.designation() {
            if !options.iter().any(|known| known == designation) {
                options.push(designation.to_string());
            }
        }
    }
    options
}
