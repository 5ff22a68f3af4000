use crate::models::{Student, StudentInput};

pub fn render_home(students: &[Student]) -> String {
    let rows = if students.is_empty() {
        EMPTY_ROW.to_string()
    } else {
        students.iter().map(render_row).collect::<Vec<_>>().join("\n")
    };

    layout("Library Students", &HOME_HTML.replace("{{ROWS}}", &rows))
}

pub fn render_add_form() -> String {
    layout(
        "Add Student",
        &render_form("Add Student", "/add/student", &StudentInput::default(), "Add"),
    )
}

pub fn render_update_form(student: &Student) -> String {
    let action = format!("/update/student/{}", student.id);
    layout(
        "Update Student",
        &render_form("Update Student", &action, &StudentInput::from(student), "Update"),
    )
}

fn render_row(student: &Student) -> String {
    ROW_HTML
        .replace("{{ID}}", &student.id.to_string())
        .replace("{{NAME}}", &escape_html(&student.name))
        .replace("{{EMAIL}}", &escape_html(&student.email))
        .replace("{{COURSE}}", &escape_html(&student.course))
        .replace("{{ADDRESS}}", &escape_html(&student.address))
        .replace("{{PHONE}}", &escape_html(&student.phone))
        .replace("{{BOOK_NAME}}", &escape_html(&student.book_name))
}

fn render_form(heading: &str, action: &str, values: &StudentInput, submit: &str) -> String {
    FORM_HTML
        .replace("{{HEADING}}", heading)
        .replace("{{ACTION}}", action)
        .replace("{{SUBMIT}}", submit)
        .replace("{{NAME}}", &escape_html(&values.name))
        .replace("{{EMAIL}}", &escape_html(&values.email))
        .replace("{{COURSE}}", &escape_html(&values.course))
        .replace("{{ADDRESS}}", &escape_html(&values.address))
        .replace("{{PHONE}}", &escape_html(&values.phone))
        .replace("{{BOOK_NAME}}", &escape_html(&values.book_name))
}

fn layout(title: &str, content: &str) -> String {
    LAYOUT_HTML
        .replace("{{TITLE}}", title)
        .replace("{{CONTENT}}", content)
}

// Record values are substituted after the template markers, so they must not
// be able to inject markup or another `{{...}}` marker.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '{' => escaped.push_str("&#123;"),
            '}' => escaped.push_str("&#125;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const EMPTY_ROW: &str = r#"<tr><td colspan="8" class="empty">No students recorded yet.</td></tr>"#;

const ROW_HTML: &str = r#"<tr>
          <td>{{ID}}</td>
          <td>{{NAME}}</td>
          <td>{{EMAIL}}</td>
          <td>{{COURSE}}</td>
          <td>{{ADDRESS}}</td>
          <td>{{PHONE}}</td>
          <td>{{BOOK_NAME}}</td>
          <td class="actions">
            <a href="/update/student/{{ID}}">Edit</a>
            <form method="post" action="/delete/student/{{ID}}">
              <button type="submit" class="danger">Delete</button>
            </form>
          </td>
        </tr>"#;

const HOME_HTML: &str = r#"<header>
    <h1>Library Students</h1>
    <p class="subtitle">Students and the books they have borrowed.</p>
  </header>
  <nav>
    <a class="button" href="/add/student">Add student</a>
    <a href="/export/students">Export CSV</a>
    <a href="/stats/phone_length">Phone length stats</a>
  </nav>
  <table>
    <thead>
      <tr>
        <th>ID</th>
        <th>Name</th>
        <th>Email</th>
        <th>Course</th>
        <th>Address</th>
        <th>Phone</th>
        <th>Book Name</th>
        <th></th>
      </tr>
    </thead>
    <tbody>
        {{ROWS}}
    </tbody>
  </table>"#;

const FORM_HTML: &str = r#"<header>
    <h1>{{HEADING}}</h1>
    <p class="subtitle"><a href="/">Back to the list</a></p>
  </header>
  <form method="post" action="{{ACTION}}" class="record">
    <label>Name <input type="text" name="name" value="{{NAME}}" required /></label>
    <label>Email <input type="email" name="email" value="{{EMAIL}}" required /></label>
    <label>Course <input type="text" name="course" value="{{COURSE}}" required /></label>
    <label>Address <input type="text" name="address" value="{{ADDRESS}}" required /></label>
    <label>Phone <input type="tel" name="phone" value="{{PHONE}}" required /></label>
    <label>Book Name <input type="text" name="book_name" value="{{BOOK_NAME}}" required /></label>
    <button type="submit" class="button">{{SUBMIT}}</button>
  </form>"#;

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --ink: #2b2a28;
      --accent: #2f4858;
      --danger: #ff6b4a;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1100px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Georgia", serif;
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f5c57;
    }

    nav {
      display: flex;
      gap: 18px;
      align-items: center;
    }

    a {
      color: var(--accent);
    }

    .button {
      background: var(--accent);
      color: #fff;
      border: none;
      border-radius: 12px;
      padding: 10px 18px;
      text-decoration: none;
      cursor: pointer;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th, td {
      text-align: left;
      padding: 8px 10px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.15);
    }

    .actions {
      display: flex;
      gap: 10px;
      align-items: center;
    }

    .actions form {
      margin: 0;
    }

    .danger {
      background: none;
      border: none;
      color: var(--danger);
      cursor: pointer;
      padding: 0;
    }

    .empty {
      text-align: center;
      color: #5f5c57;
    }

    form.record {
      display: grid;
      gap: 14px;
      max-width: 480px;
    }

    form.record label {
      display: grid;
      gap: 4px;
    }

    form.record input {
      padding: 8px 10px;
      border-radius: 10px;
      border: 1px solid rgba(47, 72, 88, 0.3);
    }
  </style>
</head>
<body>
  <main class="app">
  {{CONTENT}}
  </main>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> Student {
        Student {
            id: 7,
            name: "<Ann>".into(),
            email: "a@x.com".into(),
            course: "CS & Math".into(),
            address: "1 St".into(),
            phone: "12345".into(),
            book_name: "{{ROWS}}".into(),
        }
    }

    #[test]
    fn home_lists_each_student_with_actions() {
        let html = render_home(&[student()]);
        assert!(html.contains("<td>&lt;Ann&gt;</td>"));
        assert!(html.contains("<td>CS &amp; Math</td>"));
        assert!(html.contains(r#"href="/update/student/7""#));
        assert!(html.contains(r#"action="/delete/student/7""#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn empty_home_shows_placeholder_row() {
        let html = render_home(&[]);
        assert!(html.contains("No students recorded yet."));
    }

    #[test]
    fn update_form_is_prefilled() {
        let html = render_update_form(&student());
        assert!(html.contains(r#"action="/update/student/7""#));
        assert!(html.contains(r#"value="&lt;Ann&gt;""#));
        assert!(html.contains(r#"value="12345""#));
    }

    #[test]
    fn add_form_is_empty() {
        let html = render_add_form();
        assert!(html.contains(r#"action="/add/student""#));
        assert!(html.contains(r#"name="book_name" value="""#));
    }
}
