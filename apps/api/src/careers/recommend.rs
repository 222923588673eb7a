//! Skill → career recommendation lookup.
//!
//! Algorithm:
//! 1. Lowercase every input skill (no trimming).
//! 2. In input order, append the catalog record for each skill that matches.
//!    Duplicate inputs yield duplicate records.
//! 3. If nothing matched, return a single generic record whose `tools` echo
//!    the original, un-normalized input.

use serde::Serialize;

use crate::careers::catalog::Catalog;
use crate::models::career::CareerRecord;

pub const FALLBACK_ROLE: &str = "Software Engineer";
pub const FALLBACK_SCORE: u32 = 70;
pub const FALLBACK_SALARY: &str = "$60k-$100k";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<CareerRecord>,
}

pub fn recommend(catalog: &Catalog, skills: &[String]) -> RecommendationResponse {
    let mut recommendations: Vec<CareerRecord> = skills
        .iter()
        .map(|skill| skill.to_lowercase())
        .filter_map(|skill| catalog.lookup(&skill).cloned())
        .collect();

    if recommendations.is_empty() {
        recommendations.push(fallback_record(skills));
    }

    RecommendationResponse { recommendations }
}

fn fallback_record(skills: &[String]) -> CareerRecord {
    CareerRecord {
        role: FALLBACK_ROLE.to_string(),
        score: FALLBACK_SCORE,
        tools: skills.to_vec(),
        salary: FALLBACK_SALARY.to_string(),
        jobs: vec![],
    }
}
