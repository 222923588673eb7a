//! Reference data for career recommendations and growth guides.
//!
//! The built-in catalog is constructed once on first access and never
//! mutated afterwards. Handlers share it through `AppState` by reference.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::career::{CareerRecord, GuideRecord, JobListing};

static BUILTIN: LazyLock<Catalog> = LazyLock::new(Catalog::seed);

/// Immutable skill → career mapping plus the ordered guide list.
#[derive(Debug, Clone)]
pub struct Catalog {
    careers: HashMap<String, CareerRecord>,
    guides: Vec<GuideRecord>,
}

impl Catalog {
    /// Builds a catalog from arbitrary entries. Keys are stored lowercased.
    pub fn new<I, K>(careers: I, guides: Vec<GuideRecord>) -> Self
    where
        I: IntoIterator<Item = (K, CareerRecord)>,
        K: AsRef<str>,
    {
        let careers = careers
            .into_iter()
            .map(|(skill, record)| (skill.as_ref().to_lowercase(), record))
            .collect();
        Self { careers, guides }
    }

    /// The process-wide catalog served by the API.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Exact-string lookup. Callers are responsible for lowercasing.
    pub fn lookup(&self, skill: &str) -> Option<&CareerRecord> {
        self.careers.get(skill)
    }

    pub fn guides(&self) -> &[GuideRecord] {
        &self.guides
    }

    pub fn skill_count(&self) -> usize {
        self.careers.len()
    }

    fn seed() -> Self {
        let careers = [
            (
                "react",
                career(
                    "Frontend Developer",
                    90,
                    &["React", "Vite", "JavaScript"],
                    "$80k-$120k",
                    vec![
                        job(
                            "React Developer",
                            "TechSoft",
                            "Remote",
                            "https://example.com/job/react-dev",
                        ),
                        job(
                            "Frontend Engineer",
                            "WebWorks",
                            "Bangalore",
                            "https://example.com/job/frontend-eng",
                        ),
                    ],
                ),
            ),
            (
                "python",
                career(
                    "Backend Developer",
                    88,
                    &["Python", "FastAPI", "SQL"],
                    "$85k-$130k",
                    vec![
                        job(
                            "Python Backend Developer",
                            "DataCore",
                            "Remote",
                            "https://example.com/job/python-backend",
                        ),
                        job(
                            "API Engineer",
                            "CloudNet",
                            "Delhi",
                            "https://example.com/job/api-eng",
                        ),
                    ],
                ),
            ),
            (
                "fastapi",
                career(
                    "Backend Developer",
                    85,
                    &["Python", "FastAPI", "Docker"],
                    "$85k-$130k",
                    vec![job(
                        "FastAPI Developer",
                        "APISolutions",
                        "Remote",
                        "https://example.com/job/fastapi-dev",
                    )],
                ),
            ),
            (
                "vite",
                career(
                    "Frontend Developer",
                    80,
                    &["Vite", "React", "JavaScript"],
                    "$75k-$110k",
                    vec![job(
                        "Vite Frontend Developer",
                        "SpeedyWeb",
                        "Remote",
                        "https://example.com/job/vite-dev",
                    )],
                ),
            ),
        ];

        let guides = vec![
            guide(
                "Frontend Developer",
                "Learn React, Vite, CSS",
                &["react.dev", "vitejs.dev"],
            ),
            guide(
                "Backend Developer",
                "Learn Python, FastAPI, Databases",
                &["fastapi.tiangolo.com", "realpython.com"],
            ),
        ];

        Self::new(careers, guides)
    }
}

fn career(
    role: &str,
    score: u32,
    tools: &[&str],
    salary: &str,
    jobs: Vec<JobListing>,
) -> CareerRecord {
    CareerRecord {
        role: role.to_string(),
        score,
        tools: tools.iter().map(|t| t.to_string()).collect(),
        salary: salary.to_string(),
        jobs,
    }
}

fn job(title: &str, company: &str, location: &str, link: &str) -> JobListing {
    JobListing {
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        link: link.to_string(),
    }
}

fn guide(role: &str, roadmap: &str, resources: &[&str]) -> GuideRecord {
    GuideRecord {
        role: role.to_string(),
        roadmap: roadmap.to_string(),
        resources: resources.iter().map(|r| r.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_four_skills() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.skill_count(), 4);
        for skill in ["react", "python", "fastapi", "vite"] {
            assert!(catalog.lookup(skill).is_some(), "missing {skill}");
        }
    }

    #[test]
    fn test_builtin_keys_are_lowercase() {
        let catalog = Catalog::builtin();
        assert!(catalog.careers.keys().all(|k| *k == k.to_lowercase()));
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = Catalog::builtin();
        assert!(catalog.lookup("React").is_none());
        assert!(catalog.lookup(" react").is_none());
        assert!(catalog.lookup("reac").is_none());
    }

    #[test]
    fn test_new_lowercases_keys() {
        let record = career("Systems Engineer", 75, &["Rust"], "$90k-$140k", vec![]);
        let catalog = Catalog::new([("Rust", record.clone())], vec![]);
        assert_eq!(catalog.lookup("rust"), Some(&record));
        assert!(catalog.lookup("Rust").is_none());
    }

    #[test]
    fn test_react_record_contents() {
        let react = Catalog::builtin().lookup("react").unwrap();
        assert_eq!(react.role, "Frontend Developer");
        assert_eq!(react.score, 90);
        assert_eq!(react.tools, vec!["React", "Vite", "JavaScript"]);
        assert_eq!(react.salary, "$80k-$120k");
        assert_eq!(react.jobs.len(), 2);
        assert_eq!(react.jobs[1].location, "Bangalore");
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(Catalog::builtin(), Catalog::builtin()));
    }
}
