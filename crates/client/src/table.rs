//! Plain-text rendering of the employee table.

use roster_core::employee::Employee;

const HEADERS: [&str; 7] = ["ID", "Name", "Email", "Position", "Salary", "MobNum", "Address"];
const EMPTY_ROW: &str = "No employees found";

/// Render every employee as an aligned text table.
///
/// An empty list renders the header followed by a single
/// `No employees found` row.
pub fn render_table(employees: &[Employee]) -> String {
    let rows: Vec<[String; 7]> = employees.iter().map(cells).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    let rule_len = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');

    if rows.is_empty() {
        out.push_str(EMPTY_ROW);
        out.push('\n');
    }
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn cells(employee: &Employee) -> [String; 7] {
    [
        employee.id.to_string(),
        employee.name.clone(),
        employee.email.clone(),
        employee.position.clone(),
        format!("₹ {}", employee.salary),
        employee.mobn.clone(),
        employee.address.clone(),
    ]
}

fn push_line(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}
