use crate::config::Config;
use crate::console::Console;
use crate::display::{display_programs, display_search_results, display_subjects};
use crate::editor::add_program;
use crate::loader::Loader;
use crate::model::{Catalog, capitalize};
use crate::search::{SearchField, search};
use eyre::Error;
use std::io::{BufRead, Write};
use tracing::debug;

const MENU: &str = "\
1. View subjects from the program
2. Add a new program
3. Save subjects to CSV file
4. Search subjects
5. Exit";

fn view_subjects<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &Catalog,
) -> Result<(), Error> {
    display_programs(console.output(), catalog)?;
    let program = capitalize(&console.prompt("Enter the program you're interested in: ")?);
    let ceiling: i64 =
        console.prompt_number("Enter the semester up to which you want to see the subjects: ")?;
    let subjects = catalog.subjects_until(&program, ceiling);
    display_subjects(console.output(), &program, ceiling, subjects.as_deref())?;
    Ok(())
}

fn save_subjects<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &Catalog,
    loader: &Loader,
) -> Result<(), Error> {
    loader.save(catalog)?;
    writeln!(
        console.output(),
        "Subjects saved to {} file.",
        loader.path().display()
    )?;
    Ok(())
}

fn search_subjects<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &Catalog,
) -> Result<(), Error> {
    let query = console.prompt("Enter search query: ")?;
    let field = console.prompt(
        "Would you like to search within subjects, credits, or descriptions? (s/c/d): ",
    )?;
    match field.parse::<SearchField>() {
        Ok(field) => {
            let hits = search(catalog, &query, field);
            display_search_results(console.output(), &hits)?;
        }
        Err(e) => {
            debug!("{e}");
            writeln!(console.output(), "Invalid search option.")?;
        }
    }
    Ok(())
}

/// Run the interactive menu until the user exits or the input is exhausted.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &mut Catalog,
    loader: &Loader,
    config: &Config,
) -> Result<(), Error> {
    writeln!(console.output(), "Welcome to the Dashboard!")?;
    loop {
        writeln!(console.output(), "\nMenu:\n{MENU}")?;
        let Some(choice) = console.prompt_opt("Enter your choice (1/2/3/4/5): ")? else {
            debug!("input closed, leaving");
            writeln!(console.output())?;
            break;
        };
        match choice.as_str() {
            "1" => view_subjects(console, catalog)?,
            "2" => {
                add_program(console, catalog, config.confirm_overwrite)?;
            }
            "3" => save_subjects(console, catalog, loader)?,
            "4" => search_subjects(console, catalog)?,
            "5" => {
                writeln!(console.output(), "Exiting...")?;
                break;
            }
            _ => writeln!(console.output(), "Invalid choice.")?,
        }
    }
    Ok(())
}
