#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AttendanceRecord, PersonDetails};

    pub fn student_record(id: &str, name: &str, academic_year: Option<u32>) -> AttendanceRecord {
        AttendanceRecord {
            id: id.into(),
            name: name.into(),
            present: true,
            details: PersonDetails::Student {
                roll_no: format!("R-{id}"),
                academic_year,
            },
        }
    }

    pub fn staff_record(id: &str, name: &str, designation: &str) -> AttendanceRecord {
        AttendanceRecord {
            id: id.into(),
            name: name.into(),
            present: true,
            details: PersonDetails::Staff {
                emp_id: format!("E-{id}"),
                designation: designation.into(),
            },
        }
    }
}
