use crate::console::Console;
use crate::model::{Catalog, Program, Subject, capitalize};
use eyre::Error;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const DONE: &str = "done";

/// Interactively build a program and add it to the catalog. The catalog is
/// only touched once the whole program has been entered, and an existing
/// program of the same name is replaced only after confirmation when
/// `confirm_overwrite` is set. Returns whether the catalog changed.
pub fn add_program<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &mut Catalog,
    confirm_overwrite: bool,
) -> Result<bool, Error> {
    let name = capitalize(&console.prompt("Enter the name of the program you want to add: ")?);
    if confirm_overwrite
        && catalog.contains(&name)
        && !console.confirm(&format!(
            "Program {name} already exists. Overwrite it? (y/n): "
        ))?
    {
        writeln!(console.output(), "Program {name} left unchanged.")?;
        return Ok(false);
    }
    let max_semester: i64 =
        console.prompt_number("Enter the maximum semester for this program: ")?;
    let mut program = Program::new(&name);
    for semester in 1..=u32::try_from(max_semester.max(0)).unwrap_or(u32::MAX) {
        let subjects = program.add_semester(semester);
        loop {
            let subject = console.prompt(&format!(
                "Enter subject name for Semester {semester} (or type '{DONE}' to finish): "
            ))?;
            if subject.to_lowercase() == DONE {
                break;
            }
            let credits = console.prompt_number(&format!("Enter credits for {subject}: "))?;
            let description = console.prompt(&format!("Enter description for {subject}: "))?;
            subjects.push(Subject::new(subject, credits, description));
        }
    }
    debug!(
        program = %program.name,
        semesters = program.semester_count(),
        subjects = program.subject_count(),
        "program entered",
    );
    if let Some(old) = catalog.insert_program(program) {
        warn!(program = %old.name, subjects = old.subject_count(), "program overwritten");
    }
    writeln!(console.output(), "Program and subjects added successfully!")?;
    Ok(true)
}
