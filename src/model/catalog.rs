use super::Subject;

/// Normalize a program name: first character upper case, the rest lower case.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut capitalized = first.to_uppercase().collect::<String>();
            capitalized.push_str(&chars.as_str().to_lowercase());
            capitalized
        }
        None => String::new(),
    }
}

/// A program and its semesters, kept in the order they were first added.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Program {
    pub name: String,
    semesters: Vec<(u32, Vec<Subject>)>,
}

impl Program {
    pub fn new(name: &str) -> Program {
        Program {
            name: capitalize(name),
            semesters: Vec::new(),
        }
    }

    pub fn semester_count(&self) -> usize {
        self.semesters.len()
    }

    pub fn semesters(&self) -> impl Iterator<Item = (u32, &[Subject])> {
        self.semesters.iter().map(|(n, subjects)| (*n, subjects.as_slice()))
    }

    pub fn semester(&self, semester: u32) -> Option<&[Subject]> {
        self.semesters
            .iter()
            .find(|(n, _)| *n == semester)
            .map(|(_, subjects)| subjects.as_slice())
    }

    /// Subjects of `semester`, appending an empty semester if it is new.
    pub fn add_semester(&mut self, semester: u32) -> &mut Vec<Subject> {
        let idx = match self.semesters.iter().position(|(n, _)| *n == semester) {
            Some(idx) => idx,
            None => {
                self.semesters.push((semester, Vec::new()));
                self.semesters.len() - 1
            }
        };
        &mut self.semesters[idx].1
    }

    pub fn subject_count(&self) -> usize {
        self.semesters.iter().map(|(_, subjects)| subjects.len()).sum()
    }
}

/// Programs in order of first appearance, each holding its semesters.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Catalog {
    programs: Vec<Program>,
}

impl Catalog {
    pub fn new() -> Catalog {
        Catalog::default()
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn program(&self, name: &str) -> Option<&Program> {
        self.programs.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.program(name).is_some()
    }

    /// Append a subject, creating the program and semester if needed.
    pub fn push_subject(&mut self, program: &str, semester: u32, subject: Subject) {
        let name = capitalize(program);
        let idx = match self.programs.iter().position(|p| p.name == name) {
            Some(idx) => idx,
            None => {
                self.programs.push(Program::new(&name));
                self.programs.len() - 1
            }
        };
        self.programs[idx].add_semester(semester).push(subject);
    }

    /// Insert a program, replacing in place any program of the same name.
    /// The replaced program is returned.
    pub fn insert_program(&mut self, program: Program) -> Option<Program> {
        match self.programs.iter_mut().find(|p| p.name == program.name) {
            Some(existing) => Some(std::mem::replace(existing, program)),
            None => {
                self.programs.push(program);
                None
            }
        }
    }

    /// Subjects of semesters `1..=ceiling` of a program, in ascending
    /// semester then insertion order, or `None` if the program is unknown.
    pub fn subjects_until(&self, program: &str, ceiling: i64) -> Option<Vec<(u32, &Subject)>> {
        let program = self.program(program)?;
        let mut semesters = program
            .semesters()
            .filter(|&(n, _)| n >= 1 && i64::from(n) <= ceiling)
            .collect::<Vec<_>>();
        semesters.sort_by_key(|&(n, _)| n);
        Some(
            semesters
                .into_iter()
                .flat_map(|(semester, subjects)| subjects.iter().map(move |s| (semester, s)))
                .collect(),
        )
    }

    /// Every subject with its program name and semester, in storage order.
    pub fn records(&self) -> impl Iterator<Item = (&str, u32, &Subject)> {
        self.programs.iter().flat_map(|p| {
            p.semesters().flat_map(move |(semester, subjects)| {
                subjects.iter().map(move |s| (p.name.as_str(), semester, s))
            })
        })
    }

    pub fn subject_count(&self) -> usize {
        self.programs.iter().map(Program::subject_count).sum()
    }
}
