use serde::{Deserialize, Serialize};

/// An open position attached to a career recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub link: String,
}

/// A recommended role for one matched skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerRecord {
    pub role: String,
    /// Confidence in the match. Built-in records range 70 – 90.
    pub score: u32,
    pub tools: Vec<String>,
    pub salary: String,
    pub jobs: Vec<JobListing>,
}

/// A static learning roadmap for a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuideRecord {
    pub role: String,
    pub roadmap: String,
    pub resources: Vec<String>,
}

/// Request body for `POST /recommend-careers`.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillInput {
    pub skills: Vec<String>,
}
