pub mod add_person;
pub mod date_selector;
pub mod filters;
pub mod section_tabs;
pub mod table;

pub use add_person::AddPersonModal;
pub use date_selector::DateSelector;
pub use filters::RecordFilters;
pub use section_tabs::SectionTabs;
pub use table::AttendanceTable;
