use crate::api::{AttendanceRecord, PersonKind};
use crate::components::empty_state::EmptyState;
use leptos::*;

fn column_titles(kind: PersonKind) -> [&'static str; 4] {
    match kind {
        PersonKind::Student => ["Roll No", "Name", "Academic Year", "Status"],
        PersonKind::Staff => ["Emp ID", "Name", "Designation", "Status"],
    }
}

/// Third column of a row: the academic year for students, the designation
/// for staff. Missing values render as a dash.
fn detail_cell(record: &AttendanceRecord) -> String {
    match record.kind() {
        PersonKind::Student => record
            .academic_year()
            .map(|year| year.to_string())
            .unwrap_or_else(|| "-".to_string()),
        PersonKind::Staff => record.designation().unwrap_or("-").to_string(),
    }
}

fn status_badge(present: bool) -> (&'static str, &'static str) {
    if present {
        ("Present", "bg-green-100 text-green-800")
    } else {
        ("Absent", "bg-red-100 text-red-800")
    }
}

#[component]
pub fn AttendanceTable(
    category: Signal<PersonKind>,
    rows: Signal<Vec<AttendanceRecord>>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gradient-to-r from-blue-50 to-indigo-50">
                    <tr>
                        {move || {
                            column_titles(category.get())
                                .into_iter()
                                .map(|title| view! {
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-600 uppercase tracking-wider">
                                        {title}
                                    </th>
                                })
                                .collect_view()
                        }}
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200">
                    <Show
                        when=move || !rows.with(|r| r.is_empty())
                        fallback=move || view! {
                            <tr>
                                <td colspan="4">
                                    <EmptyState
                                        title="No records found"
                                        description="Adjust the filters or pick another date."
                                    />
                                </td>
                            </tr>
                        }
                    >
                        <For
                            each=move || rows.get()
                            key=|record| record.id.clone()
                            children=move |record| view! { <AttendanceRow record=record /> }
                        />
                    </Show>
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn AttendanceRow(record: AttendanceRecord) -> impl IntoView {
    let (status, badge_class) = status_badge(record.present);
    view! {
        <tr class="hover:bg-blue-50">
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{record.identifier().to_string()}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">{record.name.clone()}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-600">{detail_cell(&record)}</td>
            <td class="px-6 py-4 whitespace-nowrap">
                <span class=format!("px-2 inline-flex text-xs leading-5 font-semibold rounded-full {badge_class}")>
                    {status}
                </span>
            </td>
        </tr>
    }
}
