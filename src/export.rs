use crate::errors::{AppError, AppResult};
use crate::models::Student;

pub const EXPORT_FILENAME: &str = "students_data.csv";

const HEADER: [&str; 7] = ["ID", "Name", "Email", "Course", "Address", "Phone", "Book Name"];

/// Serializes the students to CSV, header first, rows in the given order.
pub fn students_csv(students: &[Student]) -> AppResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER).map_err(AppError::internal)?;
    for student in students {
        let id = student.id.to_string();
        writer
            .write_record([
                id.as_str(),
                student.name.as_str(),
                student.email.as_str(),
                student.course.as_str(),
                student.address.as_str(),
                student.phone.as_str(),
                student.book_name.as_str(),
            ])
            .map_err(AppError::internal)?;
    }

    writer
        .into_inner()
        .map_err(|err| AppError::Internal(err.to_string()))
}
