use serde::Deserialize;
use sqlx::FromRow;
use std::fmt;

/// A student together with the book they have on loan.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub course: String,
    pub address: String,
    pub phone: String,
    pub book_name: String,
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student:'{}', email:'{}', course:'{}', address:'{}', phone:'{}', book_name:'{}'",
            self.name, self.email, self.course, self.address, self.phone, self.book_name
        )
    }
}

/// Field values submitted by the add and update forms.
///
/// Absent form fields deserialize as empty strings so that `validate` can
/// report every missing field at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StudentInput {
    pub name: String,
    pub email: String,
    pub course: String,
    pub address: String,
    pub phone: String,
    pub book_name: String,
}

impl StudentInput {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("course", &self.course),
            ("address", &self.address),
            ("phone", &self.phone),
            ("book_name", &self.book_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

impl From<&Student> for StudentInput {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone(),
            course: student.course.clone(),
            address: student.address.clone(),
            phone: student.phone.clone(),
            book_name: student.book_name.clone(),
        }
    }
}
