//! Read-only projections used by the public pages and the leads tab.

use crate::model::document::PortfolioDocument;
use crate::model::lead::Lead;
use crate::model::project::{Project, ProjectCategory};

/// Portfolio page category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// Filter tabs in display order: `All` followed by every category.
    pub fn tabs() -> Vec<CategoryFilter> {
        std::iter::once(Self::All)
            .chain(ProjectCategory::ALL.into_iter().map(Self::Only))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }
}

/// Projects flagged for the home showcase, in store order.
pub fn featured_projects(document: &PortfolioDocument) -> Vec<&Project> {
    document
        .projects
        .iter()
        .filter(|project| project.featured)
        .collect()
}

pub fn filter_projects(document: &PortfolioDocument, filter: CategoryFilter) -> Vec<&Project> {
    document
        .projects
        .iter()
        .filter(|project| filter.matches(project))
        .collect()
}

pub fn unread_lead_count(document: &PortfolioDocument) -> usize {
    document.leads.iter().filter(|lead| !lead.read).count()
}

/// Leads tab contents, newest first as stored.
pub fn lead_inbox(document: &PortfolioDocument) -> &[Lead] {
    &document.leads
}

#[cfg(test)]
mod tests {
    use super::{featured_projects, filter_projects, lead_inbox, unread_lead_count, CategoryFilter};
    use crate::model::lead::Lead;
    use crate::model::project::ProjectCategory;
    use crate::model::seed::seed_document;

    #[test]
    fn tabs_start_with_all() {
        let tabs = CategoryFilter::tabs();
        assert_eq!(tabs.len(), 5);
        assert_eq!(tabs[0].label(), "All");
        assert_eq!(tabs[4].label(), "AI/ML");
    }

    #[test]
    fn featured_keeps_store_order() {
        let doc = seed_document();
        let featured = featured_projects(&doc);
        let ids: Vec<&str> = featured.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn empty_category_yields_no_projects() {
        let doc = seed_document();
        assert!(filter_projects(&doc, CategoryFilter::Only(ProjectCategory::Design)).is_empty());
        assert_eq!(filter_projects(&doc, CategoryFilter::All).len(), 4);
        assert_eq!(
            filter_projects(&doc, CategoryFilter::Only(ProjectCategory::Web)).len(),
            2
        );
    }

    fn lead(id: &str, read: bool) -> Lead {
        Lead {
            id: id.into(),
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi".to_string(),
            timestamp: 1,
            read,
        }
    }

    #[test]
    fn inbox_lists_stored_leads_newest_first() {
        let mut doc = seed_document();
        assert!(lead_inbox(&doc).is_empty());
        doc.prepend_lead(lead("10", true));
        doc.prepend_lead(lead("11", false));

        let ids: Vec<&str> = lead_inbox(&doc).iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["11", "10"]);
        assert_eq!(unread_lead_count(&doc), 1);
    }
}
