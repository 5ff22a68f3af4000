use crate::models::Student;

/// Mean character count of the phone field; zero when there are no students.
pub fn average_phone_length(students: &[Student]) -> f64 {
    if students.is_empty() {
        return 0.0;
    }

    let total: usize = students.iter().map(|s| s.phone.chars().count()).sum();
    total as f64 / students.len() as f64
}

pub fn phone_length_report(students: &[Student]) -> String {
    format!(
        "Average phone number length: {:.2} digits.",
        average_phone_length(students)
    )
}
