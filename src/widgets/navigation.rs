//! Header navigation: mobile menu, scroll style and active link

use tracing::debug;

use crate::app::events::TimerEvent;
use crate::config::{NavLink, Timings};
use crate::runtime::{Debouncer, Scheduler};
use crate::ui::View;
use crate::ui::elements::{CLASS_ACTIVE, CLASS_SCROLLED, HEADER, NAV_MENU, NAV_TOGGLE};

/// Page name a location path refers to
///
/// The last path segment, or `index.html` when that segment is empty.
pub fn current_page(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(page) if !page.is_empty() => page,
        _ => "index.html",
    }
}

/// Mobile menu and header state
///
/// The header style and active link always work; the mobile menu only when
/// both its toggle and its menu are on the page.
#[derive(Debug, Clone)]
pub struct Navigation {
    links: Vec<NavLink>,
    has_menu: bool,
    has_header: bool,
    menu_open: bool,
    scrolled: bool,
    last_width: u32,
    resize: Debouncer,
    scroll_threshold: u32,
    breakpoint: u32,
}

impl Navigation {
    /// Binds to whichever navigation elements the page has
    pub fn attach(view: &dyn View, links: &[NavLink], timings: &Timings) -> Self {
        let has_menu = view.has_element(NAV_TOGGLE) && view.has_element(NAV_MENU);
        if !has_menu {
            debug!("mobile menu not attached: toggle or menu missing");
        }

        Self {
            links: links
                .iter()
                .filter(|link| view.has_element(&link.id))
                .cloned()
                .collect(),
            has_menu,
            has_header: view.has_element(HEADER),
            menu_open: false,
            scrolled: false,
            last_width: 0,
            resize: Debouncer::new(timings.resize_debounce_ms),
            scroll_threshold: timings.header_scroll_threshold_px,
            breakpoint: timings.mobile_breakpoint_px,
        }
    }

    pub fn has_menu(&self) -> bool {
        self.has_menu
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn toggle_menu(&mut self, view: &mut dyn View) {
        if !self.has_menu {
            return;
        }
        self.menu_open = !self.menu_open;
        view.set_class(NAV_MENU, CLASS_ACTIVE, self.menu_open);
        view.set_class(NAV_TOGGLE, CLASS_ACTIVE, self.menu_open);
        debug!(open = self.menu_open, "menu toggled");
    }

    pub fn close_menu(&mut self, view: &mut dyn View) {
        if !self.has_menu {
            return;
        }
        self.menu_open = false;
        view.set_class(NAV_MENU, CLASS_ACTIVE, false);
        view.set_class(NAV_TOGGLE, CLASS_ACTIVE, false);
    }

    /// Any nav link click closes the mobile menu
    pub fn link_clicked(&mut self, view: &mut dyn View, link_id: &str) {
        debug!(link_id, "nav link clicked");
        self.close_menu(view);
    }

    /// Header gets its scrolled style past the threshold
    pub fn scrolled_to(&mut self, view: &mut dyn View, y: u32) {
        if !self.has_header {
            return;
        }
        let scrolled = y > self.scroll_threshold;
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            view.set_class(HEADER, CLASS_SCROLLED, scrolled);
        }
    }

    /// Records the width and restarts the debounce window
    pub fn resized(&mut self, scheduler: &mut Scheduler<TimerEvent>, width: u32) {
        if !self.has_menu {
            return;
        }
        self.last_width = width;
        self.resize.trigger(scheduler, TimerEvent::ResizeSettled);
    }

    /// Debounce elapsed: leaving the mobile layout closes the menu
    pub fn resize_settled(&mut self, view: &mut dyn View) {
        self.resize.fired();
        if self.last_width > self.breakpoint {
            self.close_menu(view);
        }
    }

    /// Marks the link pointing at the current page as active
    pub fn highlight_active(&self, view: &mut dyn View, location_path: &str) {
        let page = current_page(location_path);
        for link in &self.links {
            view.set_class(&link.id, CLASS_ACTIVE, link.href == page);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::RecordingView;

    fn links() -> Vec<NavLink> {
        ["index", "about", "contact"]
            .into_iter()
            .map(|page| NavLink {
                id: format!("nav-{page}"),
                href: format!("{page}.html"),
            })
            .collect()
    }

    fn page() -> RecordingView {
        let mut view = RecordingView::new();
        for id in [HEADER, NAV_TOGGLE, NAV_MENU, "nav-index", "nav-about", "nav-contact"] {
            view.register(id);
        }
        view
    }

    #[test]
    fn current_page_from_path() {
        assert_eq!(current_page("/about.html"), "about.html");
        assert_eq!(current_page("/site/contact.html"), "contact.html");
        assert_eq!(current_page("/"), "index.html");
        assert_eq!(current_page(""), "index.html");
    }

    #[test]
    fn missing_toggle_disables_only_the_menu() {
        let mut view = page();
        view.remove(NAV_TOGGLE);
        let mut scheduler = Scheduler::new();
        let mut nav = Navigation::attach(&view, &links(), &Timings::default());
        assert!(!nav.has_menu());

        nav.toggle_menu(&mut view);
        assert!(!view.has_class(NAV_MENU, CLASS_ACTIVE));
        nav.resized(&mut scheduler, 1280);
        assert_eq!(scheduler.pending_count(), 0);

        nav.scrolled_to(&mut view, 240);
        assert!(view.has_class(HEADER, CLASS_SCROLLED));
        nav.highlight_active(&mut view, "/contact.html");
        assert_eq!(view.ids_with_class(CLASS_ACTIVE), vec!["nav-contact"]);
    }

    #[test]
    fn missing_header_and_links_are_skipped() {
        let mut view = page();
        view.remove(HEADER);
        view.remove("nav-about");
        let mut nav = Navigation::attach(&view, &links(), &Timings::default());

        nav.scrolled_to(&mut view, 240);
        assert!(!nav.is_scrolled());
        nav.highlight_active(&mut view, "/about.html");
        assert_eq!(view.dropped_updates(), 0);
    }

    #[test]
    fn toggle_and_link_click() {
        let mut view = page();
        let mut nav = Navigation::attach(&view, &links(), &Timings::default());

        nav.toggle_menu(&mut view);
        assert!(view.has_class(NAV_MENU, CLASS_ACTIVE));
        assert!(view.has_class(NAV_TOGGLE, CLASS_ACTIVE));

        nav.link_clicked(&mut view, "nav-about");
        assert!(!nav.is_menu_open());
        assert!(!view.has_class(NAV_MENU, CLASS_ACTIVE));
    }

    #[test]
    fn header_scroll_threshold_is_exclusive() {
        let mut view = page();
        let mut nav = Navigation::attach(&view, &links(), &Timings::default());

        nav.scrolled_to(&mut view, 100);
        assert!(!view.has_class(HEADER, CLASS_SCROLLED));
        nav.scrolled_to(&mut view, 101);
        assert!(view.has_class(HEADER, CLASS_SCROLLED));
        nav.scrolled_to(&mut view, 0);
        assert!(!view.has_class(HEADER, CLASS_SCROLLED));
    }

    #[test]
    fn only_last_resize_counts() {
        let mut view = page();
        let mut scheduler = Scheduler::new();
        let mut nav = Navigation::attach(&view, &links(), &Timings::default());
        nav.toggle_menu(&mut view);

        nav.resized(&mut scheduler, 1024);
        scheduler.advance(200);
        nav.resized(&mut scheduler, 600);

        for event in scheduler.advance(250) {
            assert_eq!(event, TimerEvent::ResizeSettled);
            nav.resize_settled(&mut view);
        }
        // Settled at a mobile width, so the menu stays open
        assert!(nav.is_menu_open());

        nav.resized(&mut scheduler, 1200);
        for _ in scheduler.advance(250) {
            nav.resize_settled(&mut view);
        }
        assert!(!nav.is_menu_open());
        assert!(!view.has_class(NAV_MENU, CLASS_ACTIVE));
    }

    #[test]
    fn active_link_matches_current_page() {
        let mut view = page();
        let nav = Navigation::attach(&view, &links(), &Timings::default());

        nav.highlight_active(&mut view, "/about.html");
        assert_eq!(view.ids_with_class(CLASS_ACTIVE), vec!["nav-about"]);

        nav.highlight_active(&mut view, "/");
        assert_eq!(view.ids_with_class(CLASS_ACTIVE), vec!["nav-index"]);
    }
}
