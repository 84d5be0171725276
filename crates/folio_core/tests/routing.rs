use folio_core::{is_nav_active, select_page, NavigationListener, Page, Router, NAV_ITEMS};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn selection_follows_fixed_priority_rules() {
    assert_eq!(select_page("#/ABOUT"), Page::About);
    assert_eq!(select_page(""), Page::Home);
    assert_eq!(select_page("#"), Page::Home);
    assert_eq!(select_page("#/"), Page::Home);
    assert_eq!(select_page("#/unknown"), Page::Home);
    assert_eq!(select_page("#/portfolio?filter=web"), Page::Portfolio);
    assert_eq!(select_page("#/about-portfolio"), Page::About);
    assert_eq!(select_page("#/ADMIN"), Page::Admin);
}

#[test]
fn nav_items_exclude_admin_console() {
    assert!(!NAV_ITEMS.contains(&Page::Admin));
    assert!(!NAV_ITEMS.iter().any(|item| is_nav_active(*item, "#/admin")));
}

#[test]
fn nav_highlight_is_case_insensitive() {
    assert!(is_nav_active(Page::About, "#/ABOUT"));
    assert!(!is_nav_active(Page::Home, "#/ABOUT"));
}

#[derive(Clone, Default)]
struct PageLog(Rc<RefCell<Vec<Page>>>);

impl NavigationListener for PageLog {
    fn on_navigate(&mut self, page: Page, _path: &str) {
        self.0.borrow_mut().push(page);
    }
}

#[test]
fn router_tracks_current_path_across_navigations() {
    let log = PageLog::default();
    let mut router = Router::new(Some("#/Portfolio"));
    router.add_listener(Box::new(log.clone()));

    assert_eq!(router.current_path(), "#/portfolio");
    assert_eq!(router.current_page(), Page::Portfolio);

    router.navigate("#/contact");
    router.navigate("#/nowhere");
    router.navigate("#/Admin");

    assert_eq!(router.current_path(), "#/admin");
    assert_eq!(
        *log.0.borrow(),
        vec![Page::Contact, Page::Home, Page::Admin]
    );
}
