use crate::model::{Catalog, Subject};
use std::str::FromStr;
use tracing::debug;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchField {
    Subject,
    Credits,
    Description,
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "s" => Ok(SearchField::Subject),
            "c" => Ok(SearchField::Credits),
            "d" => Ok(SearchField::Description),
            other => Err(format!("unknown search field: {other}")),
        }
    }
}

#[derive(Debug)]
pub struct SearchHit<'a> {
    pub program: &'a str,
    pub semester: u32,
    pub subject: &'a Subject,
}

/// Subject names and descriptions are always looked at, whatever the field.
/// Credits are only looked at when searching within credits.
fn matches(subject: &Subject, query: &str, field: SearchField) -> bool {
    subject.name.to_lowercase().contains(query)
        || subject.description.to_lowercase().contains(query)
        || (field == SearchField::Credits && subject.credits.to_string().contains(query))
}

/// Every record matching `query`, in catalog order.
pub fn search<'a>(catalog: &'a Catalog, query: &str, field: SearchField) -> Vec<SearchHit<'a>> {
    let query = query.to_lowercase();
    debug!(%query, ?field, "searching catalog");
    catalog
        .records()
        .filter(|(_, _, subject)| matches(subject, &query, field))
        .map(|(program, semester, subject)| SearchHit {
            program,
            semester,
            subject,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.push_subject("CS", 1, Subject::new("Intro", 3, "Basics of programming"));
        catalog.push_subject("CS", 2, Subject::new("Algorithms", 4, "Graphs and trees"));
        catalog.push_subject("Law", 1, Subject::new("Civil law", 12, "Contracts"));
        catalog
    }

    fn names(hits: &[SearchHit]) -> Vec<String> {
        hits.iter().map(|h| h.subject.name.clone()).collect()
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!("s".parse(), Ok(SearchField::Subject));
        assert_eq!("C".parse(), Ok(SearchField::Credits));
        assert_eq!("d".parse(), Ok(SearchField::Description));
        assert!("x".parse::<SearchField>().is_err());
        assert!("subjects".parse::<SearchField>().is_err());
    }

    #[test]
    fn test_exact_name_any_case() {
        let catalog = sample();
        let hits = search(&catalog, "ALGORITHMS", SearchField::Subject);
        assert_eq!(names(&hits), vec!["Algorithms"]);
        assert_eq!(hits[0].program, "Cs");
        assert_eq!(hits[0].semester, 2);
    }

    #[test]
    fn test_no_match() {
        let catalog = sample();
        assert!(search(&catalog, "astronomy", SearchField::Description).is_empty());
    }

    #[test]
    fn test_name_and_description_match_whatever_the_field() {
        let catalog = sample();
        assert_eq!(names(&search(&catalog, "contracts", SearchField::Subject)), vec!["Civil law"]);
        assert_eq!(names(&search(&catalog, "intro", SearchField::Description)), vec!["Intro"]);
        assert_eq!(names(&search(&catalog, "intro", SearchField::Credits)), vec!["Intro"]);
    }

    #[test]
    fn test_credits_only_with_credits_field() {
        let catalog = sample();
        assert!(search(&catalog, "12", SearchField::Subject).is_empty());
        assert!(search(&catalog, "12", SearchField::Description).is_empty());
        assert_eq!(names(&search(&catalog, "12", SearchField::Credits)), vec!["Civil law"]);
        assert_eq!(
            names(&search(&catalog, "4", SearchField::Credits)),
            vec!["Algorithms"]
        );
    }
}
