use chrono::NaiveDateTime;

use crate::dto::result::ResultRow;

/// Column order matches the dashboard table.
const HEADER: &[&str] = &[
    "name",
    "email",
    "position",
    "total_questions",
    "correct_answers",
    "score",
    "completion_time",
    "status",
    "created_at",
];

/// Render the filtered result set as CSV: one header row plus one row per
/// result, fields quoted when they contain separators.
pub fn render_csv(rows: &[ResultRow]) -> String {
    let mut out = String::new();
    write_record(&mut out, HEADER.iter().map(|s| s.to_string()));

    for row in rows {
        write_record(
            &mut out,
            [
                row.name.clone(),
                row.email.clone(),
                row.position.clone(),
                row.total_questions.to_string(),
                row.correct_answers.to_string(),
                format!("{:.1}", row.score),
                row.completion_time.to_string(),
                row.status.clone(),
                row.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            ]
            .into_iter(),
        );
    }

    out
}

pub fn export_filename(now: NaiveDateTime) -> String {
    format!("test_results_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

fn write_record(out: &mut String, fields: impl Iterator<Item = String>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&escape(&field));
    }
    out.push('\n');
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn row(name: &str, score: f64, status: &str) -> ResultRow {
        ResultRow {
            result_id: Uuid::nil(),
            participant_id: Uuid::nil(),
            name: name.into(),
            email: "a@example.com".into(),
            position: "Backend Developer".into(),
            total_questions: 5,
            correct_answers: 4,
            score,
            completion_time: 12,
            status: status.into(),
            created_at: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn row_count_is_results_plus_header() {
        let rows = vec![row("A", 80.0, "PASS"), row("B", 40.0, "FAIL")];
        let csv = render_csv(&rows);
        assert_eq!(csv.lines().count(), 3);
        assert!(csv.starts_with("name,email,position"));
    }

    #[test]
    fn empty_export_is_just_the_header() {
        let csv = render_csv(&[]);
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn fields_with_separators_are_quoted() {
        let rows = vec![row("Roe, Jane \"JJ\"", 80.0, "PASS")];
        let csv = render_csv(&rows);
        assert!(csv.contains("\"Roe, Jane \"\"JJ\"\"\""));
    }

    #[test]
    fn score_keeps_one_decimal() {
        let csv = render_csv(&[row("A", 80.0, "PASS")]);
        assert!(csv.contains(",80.0,"));
    }

    #[test]
    fn filename_is_timestamped() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 30, 5)
            .unwrap();
        assert_eq!(export_filename(now), "test_results_20240301_103005.csv");
    }
}
