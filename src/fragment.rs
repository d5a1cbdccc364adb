//! Line-oriented extraction of inline fragment fields from a selection set.
//!
//! The selection text is scanned one line at a time. A line containing `{`
//! opens a level, otherwise a line containing `}` closes one. Every line seen
//! at level two is collected; a bucket ends with the line closing that level.
//! The first line of a bucket names the type (its fifth space-separated
//! token, as in `  ... on FullTimeJob {`) and the lines in between are field
//! names. Nested objects below level two are skipped.

use std::collections::HashMap;

use tracing::{debug, warn};

/// Field names requested for each fragment type.
pub type FragmentMap = HashMap<String, Vec<String>>;

const FRAGMENT_DEPTH: i64 = 2;
const TYPE_NAME_TOKEN: usize = 4;

pub fn parse(text: &str) -> FragmentMap {
    let mut buckets: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut depth: i64 = 0;

    for line in text.split('\n') {
        if line.contains('{') {
            depth += 1;
            if depth == FRAGMENT_DEPTH {
                current.push(line);
            }
        } else if line.contains('}') {
            if depth == FRAGMENT_DEPTH {
                current.push(line);
                buckets.push(std::mem::take(&mut current));
            }
            depth -= 1;
        } else if depth == FRAGMENT_DEPTH {
            current.push(line);
        }
    }

    let mut fragments = FragmentMap::new();
    for bucket in buckets {
        let (opening, body) = match bucket.as_slice() {
            [opening, body @ .., _closing] => (*opening, body),
            _ => continue,
        };
        let type_name = match opening.split(' ').nth(TYPE_NAME_TOKEN) {
            Some(type_name) if !type_name.is_empty() => type_name,
            _ => {
                warn!(line = opening, "Skipping fragment without a type name");
                continue;
            }
        };
        let fields: Vec<String> = body
            .iter()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<String>())
            .filter(|field| !field.is_empty())
            .collect();
        fragments.insert(type_name.to_owned(), fields);
    }

    debug!(?fragments, "Parsed fragments");
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOBS_SELECTION: &str = "{\n  company\n  ... on FullTimeJob {\n    pensionPlan\n    yearlySalary\n  }\n  ... on ContractJob {\n    hourlySalary\n  }\n}\n";

    #[test]
    fn collects_fields_per_fragment_type() {
        let fragments = parse(JOBS_SELECTION);
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments["FullTimeJob"], vec!["pensionPlan", "yearlySalary"]);
        assert_eq!(fragments["ContractJob"], vec!["hourlySalary"]);
    }

    #[test]
    fn single_fragment_at_second_level() {
        let fragments = parse("{\n  ... on SomeType {\n  fieldA\n  fieldB\n}\n}\n");
        assert_eq!(
            fragments,
            FragmentMap::from([(
                "SomeType".to_string(),
                vec!["fieldA".to_string(), "fieldB".to_string()]
            )])
        );
    }

    #[test]
    fn parsing_is_idempotent() {
        assert_eq!(parse(JOBS_SELECTION), parse(JOBS_SELECTION));
    }

    #[test]
    fn top_level_fields_are_ignored() {
        assert!(parse("{\n  userId\n  company\n}\n").is_empty());
        assert!(parse("").is_empty());
    }

    #[test]
    fn nested_objects_inside_a_fragment_are_skipped() {
        let text = "{\n  ... on FullTimeJob {\n    company\n    manager {\n      name\n    }\n    yearlySalary\n  }\n}\n";
        assert_eq!(parse(text)["FullTimeJob"], vec!["company", "yearlySalary"]);
    }

    #[test]
    fn opening_line_without_type_name_is_skipped() {
        assert!(parse("{\n  owner {\n    name\n  }\n}\n").is_empty());
    }

    #[test]
    fn later_fragment_of_the_same_type_wins() {
        let text = "{\n  ... on ContractJob {\n    company\n  }\n  ... on ContractJob {\n    hourlySalary\n  }\n}\n";
        assert_eq!(parse(text)["ContractJob"], vec!["hourlySalary"]);
    }
}
