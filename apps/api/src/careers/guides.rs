//! Static growth-guide listing.

use serde::Serialize;

use crate::careers::catalog::Catalog;
use crate::models::career::GuideRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuideResponse {
    pub guides: Vec<GuideRecord>,
}

pub fn list_guides(catalog: &Catalog) -> GuideResponse {
    GuideResponse {
        guides: catalog.guides().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_guides_in_fixed_order() {
        let response = list_guides(Catalog::builtin());
        let roles: Vec<&str> = response.guides.iter().map(|g| g.role.as_str()).collect();
        assert_eq!(roles, vec!["Frontend Developer", "Backend Developer"]);
    }

    #[test]
    fn test_guide_resources() {
        let response = list_guides(Catalog::builtin());
        assert_eq!(response.guides[0].roadmap, "Learn React, Vite, CSS");
        assert_eq!(response.guides[0].resources, vec!["react.dev", "vitejs.dev"]);
        assert_eq!(
            response.guides[1].resources,
            vec!["fastapi.tiangolo.com", "realpython.com"]
        );
    }

    #[test]
    fn test_listing_is_stable_across_calls() {
        assert_eq!(list_guides(Catalog::builtin()), list_guides(Catalog::builtin()));
    }
}
