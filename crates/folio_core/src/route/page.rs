//! Page selection and navigation-item highlighting rules.

/// Every page the site can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Portfolio,
    Contact,
    Admin,
}

impl Page {
    /// Canonical fragment linking to this page.
    pub fn fragment(self) -> &'static str {
        match self {
            Self::Home => "#/",
            Self::About => "#/about",
            Self::Portfolio => "#/portfolio",
            Self::Contact => "#/contact",
            Self::Admin => "#/admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Portfolio => "Portfolio",
            Self::Contact => "Contact",
            Self::Admin => "Console",
        }
    }
}

/// Header navigation entries. The admin console link is rendered apart.
pub const NAV_ITEMS: [Page; 4] = [Page::Home, Page::About, Page::Portfolio, Page::Contact];

/// Ordered containment rules checked after the root test.
const PAGE_RULES: [(&str, Page); 4] = [
    ("about", Page::About),
    ("portfolio", Page::Portfolio),
    ("contact", Page::Contact),
    ("admin", Page::Admin),
];

/// Lower-cases `fragment`, mapping an empty fragment to `#/`.
pub fn normalize_path(fragment: &str) -> String {
    if fragment.is_empty() {
        return Page::Home.fragment().to_string();
    }
    fragment.to_lowercase()
}

fn is_root(path: &str) -> bool {
    matches!(path, "" | "#" | "/" | "#/")
}

/// Selects the page for `path`. Case-insensitive; first matching rule wins.
pub fn select_page(path: &str) -> Page {
    let path = path.to_lowercase();
    if is_root(&path) {
        return Page::Home;
    }
    PAGE_RULES
        .iter()
        .find(|(needle, _)| path.contains(needle))
        .map_or(Page::Home, |(_, page)| *page)
}

/// Whether the nav entry for `item` should be highlighted at `current_path`.
///
/// Exactly the nav entry of the selected page is active, so fallback paths
/// highlight Home and overlapping paths highlight only the winning rule.
pub fn is_nav_active(item: Page, current_path: &str) -> bool {
    NAV_ITEMS.contains(&item) && select_page(&normalize_path(current_path)) == item
}

#[cfg(test)]
mod tests {
    use super::{is_nav_active, normalize_path, select_page, Page, NAV_ITEMS};

    #[test]
    fn root_variants_select_home() {
        for path in ["", "#", "#/", "/"] {
            assert_eq!(select_page(path), Page::Home, "path {path:?}");
        }
    }

    #[test]
    fn selection_is_case_insensitive() {
        assert_eq!(select_page("#/ABOUT"), Page::About);
        assert_eq!(select_page("#/Portfolio"), Page::Portfolio);
    }

    #[test]
    fn earlier_rule_wins_on_overlap() {
        assert_eq!(select_page("#/about-portfolio"), Page::About);
        assert_eq!(select_page("#/contact-admin"), Page::Contact);
    }

    #[test]
    fn unknown_path_falls_back_to_home() {
        assert_eq!(select_page("#/unknown"), Page::Home);
    }

    #[test]
    fn every_page_fragment_round_trips() {
        for page in [Page::Home, Page::About, Page::Portfolio, Page::Contact, Page::Admin] {
            assert_eq!(select_page(page.fragment()), page);
        }
    }

    #[test]
    fn nav_highlight_agrees_with_selection() {
        for path in [
            "#/",
            "#/about",
            "#/PORTFOLIO",
            "#/contact",
            "#/admin",
            "#/unknown",
            "#/about-portfolio",
        ] {
            let selected = select_page(path);
            for item in NAV_ITEMS {
                assert_eq!(
                    is_nav_active(item, path),
                    item == selected,
                    "item {item:?} at {path}"
                );
            }
        }
    }

    #[test]
    fn fallback_and_overlap_highlight_single_item() {
        let active = |path: &str| -> Vec<Page> {
            NAV_ITEMS
                .into_iter()
                .filter(|item| is_nav_active(*item, path))
                .collect()
        };
        assert_eq!(active("#/unknown"), vec![Page::Home]);
        assert_eq!(active("#/about-portfolio"), vec![Page::About]);
        assert!(active("#/admin").is_empty());
    }

    #[test]
    fn labels_name_header_links() {
        let labels: Vec<&str> = NAV_ITEMS.into_iter().map(Page::label).collect();
        assert_eq!(labels, vec!["Home", "About", "Portfolio", "Contact"]);
        assert_eq!(Page::Admin.label(), "Console");
    }

    #[test]
    fn empty_fragment_normalizes_to_root() {
        assert_eq!(normalize_path(""), "#/");
        assert!(is_nav_active(Page::Home, ""));
    }
}
