//! Navigation routes and the slide-out menu.
//!
//! Nothing here feeds the calculation; the menu only opens pages, the
//! tutorial, or clears saved defaults.

use serde::Serialize;

/// A secondary page reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Tutorial,
    Subscription,
    Faq,
    Feedback,
    SpecialThanks,
    PrivacyPolicy,
    Terms,
    BugReport,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Tutorial,
        Route::Subscription,
        Route::Faq,
        Route::Feedback,
        Route::SpecialThanks,
        Route::PrivacyPolicy,
        Route::Terms,
        Route::BugReport,
    ];

    /// Route path relative to the app root.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Tutorial => "sidebar_items/tutorial",
            Self::Subscription => "sidebar_items/subscription",
            Self::Faq => "sidebar_items/faq",
            Self::Feedback => "sidebar_items/feedback",
            Self::SpecialThanks => "sidebar_items/about/special-thanks",
            Self::PrivacyPolicy => "sidebar_items/about/privacy-policy",
            Self::Terms => "sidebar_items/about/terms",
            Self::BugReport => "sidebar_items/about/bug-report",
        }
    }

    /// Page title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Tutorial => "Tutorial",
            Self::Subscription => "Subscription",
            Self::Faq => "FAQ",
            Self::Feedback => "Feedback & Suggestions",
            Self::SpecialThanks => "Special Thanks",
            Self::PrivacyPolicy => "Privacy Policy",
            Self::Terms => "Terms of Service",
            Self::BugReport => "Report a Bug",
        }
    }

    /// Whether the page lives under the "About Us" group.
    #[must_use]
    pub const fn is_about(self) -> bool {
        matches!(
            self,
            Self::SpecialThanks | Self::PrivacyPolicy | Self::Terms | Self::BugReport
        )
    }
}

/// What selecting a menu entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "route", rename_all = "snake_case")]
pub enum MenuAction {
    OpenTutorial,
    Navigate(Route),
    RateUs,
    ToggleAbout,
    ResetTutorial,
    ClearDefaults,
    Close,
}

/// One visible row of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub label: &'static str,
    pub action: MenuAction,
    /// Nesting level: 0 for top-level rows, 1 for the About sub-list.
    pub depth: u8,
}

impl MenuEntry {
    const fn top(label: &'static str, action: MenuAction) -> Self {
        Self {
            label,
            action,
            depth: 0,
        }
    }

    const fn nested(route: Route) -> Self {
        Self {
            label: route.title(),
            action: MenuAction::Navigate(route),
            depth: 1,
        }
    }
}

/// Open/closed state of the slide-out menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DrawerState {
    pub open: bool,
    pub about_open: bool,
}

impl DrawerState {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the menu. The About group collapses with it.
    pub fn close(&mut self) {
        self.open = false;
        self.about_open = false;
    }

    pub fn toggle_about(&mut self) {
        self.about_open = !self.about_open;
    }

    /// Visible rows, top to bottom.
    ///
    /// `show_qa` adds the tutorial-reset row used when testing onboarding.
    #[must_use]
    pub fn entries(&self, show_qa: bool) -> Vec<MenuEntry> {
        let mut entries = vec![
            MenuEntry::top("Tutorial", MenuAction::OpenTutorial),
            MenuEntry::top("Subscription", MenuAction::Navigate(Route::Subscription)),
            MenuEntry::top("FAQ", MenuAction::Navigate(Route::Faq)),
            MenuEntry::top(
                "Feedback & Suggestions",
                MenuAction::Navigate(Route::Feedback),
            ),
            MenuEntry::top("Rate Us", MenuAction::RateUs),
            MenuEntry::top("About Us", MenuAction::ToggleAbout),
        ];

        if self.about_open {
            entries.extend(
                Route::ALL
                    .into_iter()
                    .filter(|route| route.is_about())
                    .map(MenuEntry::nested),
            );
        }

        if show_qa {
            entries.push(MenuEntry::top(
                "Reset Tutorial (QA)",
                MenuAction::ResetTutorial,
            ));
        }

        entries.push(MenuEntry::top("Clear Defaults", MenuAction::ClearDefaults));
        entries
    }
}
