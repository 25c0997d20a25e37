use crate::model::{Catalog, Subject};
use crate::search::SearchHit;
use std::io::{self, Write};

pub fn display_programs(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "Available Programs:")?;
    for p in catalog.programs() {
        writeln!(out, "{} ({} semesters)", p.name, p.semester_count())?;
    }
    Ok(())
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(c, &w)| format!("{c:>w$}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print rows as a table whose columns are right-aligned on their widest cell.
fn display_table(out: &mut impl Write, header: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
    let widths = header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();
    writeln!(out, "{}", format_row(header.iter().copied(), &widths))?;
    for row in rows {
        writeln!(out, "{}", format_row(row.iter().map(String::as_str), &widths))?;
    }
    Ok(())
}

pub fn display_subjects(
    out: &mut impl Write,
    program: &str,
    ceiling: i64,
    subjects: Option<&[(u32, &Subject)]>,
) -> io::Result<()> {
    writeln!(out, "Subjects for {program} up to Semester {ceiling}:\n")?;
    match subjects {
        None => writeln!(out, "Program not found in the database."),
        Some([]) => writeln!(
            out,
            "No subjects found for the specified program and semester."
        ),
        Some(subjects) => {
            let rows = subjects
                .iter()
                .map(|(semester, s)| {
                    vec![
                        format!("Semester {semester}"),
                        s.name.clone(),
                        s.credits.to_string(),
                        s.description.clone(),
                    ]
                })
                .collect::<Vec<_>>();
            display_table(out, &["Semester", "Subject", "Credits", "Description"], &rows)
        }
    }
}

pub fn display_search_results(out: &mut impl Write, hits: &[SearchHit]) -> io::Result<()> {
    writeln!(out, "Search Results:\n")?;
    if hits.is_empty() {
        return writeln!(out, "No matching subjects found.");
    }
    writeln!(out, "Program | Semester | Subject | Credits | Description")?;
    writeln!(out, "{}", "-".repeat(60))?;
    for hit in hits {
        writeln!(
            out,
            "{:<7} | {:<9} | {:<7} | {:<7} | {}",
            hit.program, hit.semester, hit.subject.name, hit.subject.credits, hit.subject.description
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{SearchField, search};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.push_subject("CS", 1, Subject::new("Intro", 3, "Basics"));
        catalog.push_subject("CS", 2, Subject::new("Algorithms", 4, "Graphs"));
        catalog.push_subject("Law", 1, Subject::new("Civil law", 6, "Contracts"));
        catalog
    }

    #[test]
    fn test_display_programs() {
        let catalog = sample();
        assert_eq!(
            render(|out| display_programs(out, &catalog)),
            "Available Programs:\nCs (2 semesters)\nLaw (1 semesters)\n"
        );
    }

    #[test]
    fn test_single_row_table() {
        let catalog = sample();
        let subjects = catalog.subjects_until("Cs", 1);
        assert_eq!(
            render(|out| display_subjects(out, "Cs", 1, subjects.as_deref())),
            "Subjects for Cs up to Semester 1:\n\n  \
             Semester Subject Credits Description\n\
             Semester 1   Intro       3      Basics\n"
        );
    }

    #[test]
    fn test_not_found_and_empty() {
        let catalog = sample();
        let text = render(|out| display_subjects(out, "Bio", 2, catalog.subjects_until("Bio", 2).as_deref()));
        assert!(text.ends_with("Program not found in the database.\n"));
        let text = render(|out| display_subjects(out, "Cs", 0, catalog.subjects_until("Cs", 0).as_deref()));
        assert!(text.ends_with("No subjects found for the specified program and semester.\n"));
    }

    #[test]
    fn test_search_results() {
        let catalog = sample();
        let hits = search(&catalog, "intro", SearchField::Subject);
        assert_eq!(
            render(|out| display_search_results(out, &hits)),
            format!(
                "Search Results:\n\n\
                 Program | Semester | Subject | Credits | Description\n\
                 {}\n\
                 Cs      | 1         | Intro   | 3       | Basics\n",
                "-".repeat(60)
            )
        );
        let hits = search(&catalog, "nothing", SearchField::Subject);
        assert_eq!(
            render(|out| display_search_results(out, &hits)),
            "Search Results:\n\nNo matching subjects found.\n"
        );
    }
}
