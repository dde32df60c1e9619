//! Patient search for the transfer picker.

use strsim::jaro_winkler;

use crate::models::Patient;

/// Search the patient list for the transfer picker.
///
/// Membership is a strict case-insensitive substring match over name, MRN,
/// and local id; matches are ranked by name similarity to the query so the
/// closest names surface first. An empty query returns the head of the list
/// in its original order.
pub fn search_patients<'a>(patients: &'a [Patient], query: &str, limit: usize) -> Vec<&'a Patient> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return patients.iter().take(limit).collect();
    }

    let query_lower = trimmed.to_lowercase();
    let mut matched: Vec<(&Patient, f64)> = patients
        .iter()
        .filter(|p| p.matches(trimmed))
        .map(|p| (p, jaro_winkler(&query_lower, &p.name.to_lowercase())))
        .collect();

    matched.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    matched.into_iter().take(limit).map(|(p, _)| p).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patients() -> Vec<Patient> {
        let mut priya = Patient::new("Priya Sharma".into(), "MRN-1042".into());
        priya.local_id = "pat-priya".into();
        let mut prateek = Patient::new("Prateek Sharma".into(), "MRN-2087".into());
        prateek.local_id = "pat-prateek".into();
        let mut harish = Patient::new("Harish Kalyan".into(), "MRN-2210".into());
        harish.local_id = "pat-harish".into();
        vec![harish, prateek, priya]
    }

    #[test]
    fn test_substring_membership() {
        let patients = patients();
        let results = search_patients(&patients, "sharma", 10);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|p| p.name.contains("Sharma")));
    }

    #[test]
    fn test_matches_mrn_and_id() {
        let patients = patients();
        let by_mrn = search_patients(&patients, "mrn-2210", 10);
        assert_eq!(by_mrn.len(), 1);
        assert_eq!(by_mrn[0].name, "Harish Kalyan");

        let by_id = search_patients(&patients, "pat-priya", 10);
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].name, "Priya Sharma");
    }

    #[test]
    fn test_ranked_by_name_similarity() {
        let patients = patients();
        let results = search_patients(&patients, "priya", 10);
        assert!(!results.is_empty());
        assert_eq!(results[0].name, "Priya Sharma");
    }

    #[test]
    fn test_empty_query_returns_head() {
        let patients = patients();
        let results = search_patients(&patients, "   ", 2);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "Harish Kalyan");
    }

    #[test]
    fn test_results_are_subset() {
        let patients = patients();
        let all = search_patients(&patients, "", patients.len());
        let narrowed = search_patients(&patients, "a", patients.len());
        assert!(narrowed.len() <= all.len());
    }
}
