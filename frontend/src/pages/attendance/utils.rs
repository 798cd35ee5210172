use crate::api::{ApiError, CreatePersonRequest, PersonDetails, PersonKind};
use chrono::NaiveDate;
use leptos::*;

/// Fields of the add-person modal, held as raw input text until submit.
#[derive(Clone, Copy)]
pub struct NewPersonFormState {
    kind: RwSignal<PersonKind>,
    name: RwSignal<String>,
    roll_no: RwSignal<String>,
    emp_id: RwSignal<String>,
    academic_year: RwSignal<String>,
    designation: RwSignal<String>,
}

impl Default for NewPersonFormState {
    fn default() -> Self {
        Self {
            kind: create_rw_signal(PersonKind::Student),
            name: create_rw_signal(String::new()),
            roll_no: create_rw_signal(String::new()),
            emp_id: create_rw_signal(String::new()),
            academic_year: create_rw_signal(String::new()),
            designation: create_rw_signal(String::new()),
        }
    }
}

impl NewPersonFormState {
    pub fn kind_signal(&self) -> RwSignal<PersonKind> {
        self.kind
    }

    pub fn name_signal(&self) -> RwSignal<String> {
        self.name
    }

    pub fn roll_no_signal(&self) -> RwSignal<String> {
        self.roll_no
    }

    pub fn emp_id_signal(&self) -> RwSignal<String> {
        self.emp_id
    }

    pub fn academic_year_signal(&self) -> RwSignal<String> {
        self.academic_year
    }

    pub fn designation_signal(&self) -> RwSignal<String> {
        self.designation
    }

    pub fn reset(&self) {
        self.kind.set(PersonKind::Student);
        self.name.set(String::new());
        self.roll_no.set(String::new());
        self.emp_id.set(String::new());
        self.academic_year.set(String::new());
        self.designation.set(String::new());
    }

    pub fn is_pristine(&self) -> bool {
        self.kind.get_untracked() == PersonKind::Student
            && [
                self.name,
                self.roll_no,
                self.emp_id,
                self.academic_year,
                self.designation,
            ]
            .iter()
            .all(|field| field.with_untracked(|value| value.is_empty()))
    }

    /// Builds the create payload for `date`, carrying only the fields that
    /// belong to the selected type.
    pub fn to_request(&self, date: NaiveDate) -> Result<CreatePersonRequest, ApiError> {
        let name = required(&self.name.get_untracked(), "Name is required.")?;
        let details = match self.kind.get_untracked() {
            PersonKind::Student => PersonDetails::Student {
                roll_no: required(&self.roll_no.get_untracked(), "Roll No is required.")?,
                academic_year: Some(parse_academic_year(&self.academic_year.get_untracked())?),
            },
            PersonKind::Staff => PersonDetails::Staff {
                emp_id: required(&self.emp_id.get_untracked(), "Employee ID is required.")?,
                designation: required(
                    &self.designation.get_untracked(),
                    "Designation is required.",
                )?,
            },
        };
        Ok(CreatePersonRequest::new(name, details, date))
    }
}

fn required(value: &str, message: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(message));
    }
    Ok(trimmed.to_string())
}

fn parse_academic_year(value: &str) -> Result<u32, ApiError> {
    let year = value
        .trim()
        .parse::<u32>()
        .map_err(|_| ApiError::validation("Academic Year must be a number between 1 and 4."))?;
    if !(1..=4).contains(&year) {
        return Err(ApiError::validation(
            "Academic Year must be a number between 1 and 4.",
        ));
    }
    Ok(year)
}
