#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Subject {
    pub name: String,
    pub credits: i64,
    pub description: String,
}

impl Subject {
    pub fn new(name: impl Into<String>, credits: i64, description: impl Into<String>) -> Subject {
        Subject {
            name: name.into(),
            credits,
            description: description.into(),
        }
    }
}
