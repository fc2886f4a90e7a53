//! Route table and navigation items.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router in `app.rs`, the route guard, and both navigation bars read
//! the same table so a path's access level and label are defined once.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Whether a route needs a signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Protected,
}

/// Every top-level screen of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Auth,
    Chat,
    Dashboard,
    Journal,
    Exercises,
    Profile,
    NotFound,
}

impl AppRoute {
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Auth,
        Self::Chat,
        Self::Dashboard,
        Self::Journal,
        Self::Exercises,
        Self::Profile,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Auth => "/auth",
            Self::Chat => "/chat",
            Self::Dashboard => "/dashboard",
            Self::Journal => "/journal",
            Self::Exercises => "/exercises",
            Self::Profile => "/profile",
            Self::NotFound => "/404",
        }
    }

    /// Path segment for the router (`""` for the root).
    #[must_use]
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    #[must_use]
    pub fn access(self) -> RouteAccess {
        match self {
            Self::Home | Self::Auth | Self::NotFound => RouteAccess::Public,
            Self::Chat | Self::Dashboard | Self::Journal | Self::Exercises | Self::Profile => {
                RouteAccess::Protected
            }
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "MindfulAI",
            Self::Auth => "Sign in | MindfulAI",
            Self::Chat => "Chat | MindfulAI",
            Self::Dashboard => "Dashboard | MindfulAI",
            Self::Journal => "Journal | MindfulAI",
            Self::Exercises => "Exercises | MindfulAI",
            Self::Profile => "Profile | MindfulAI",
            Self::NotFound => "Page not found | MindfulAI",
        }
    }

    /// Look up a route by location; query string and trailing slash ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .unwrap_or(Self::NotFound)
    }
}

/// One navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

/// Bottom navigation of the app layout.
pub const BOTTOM_NAV: [NavItem; 5] = [
    NavItem { label: "Home", href: "/", icon: "home" },
    NavItem { label: "Chat", href: "/chat", icon: "message-square" },
    NavItem { label: "Dashboard", href: "/dashboard", icon: "bar-chart" },
    NavItem { label: "Journal", href: "/journal", icon: "book-open" },
    NavItem { label: "Help", href: "/exercises", icon: "help-circle" },
];

/// Top navigation of the public layout.
pub const TOP_NAV: [NavItem; 5] = [
    NavItem { label: "Home", href: "/", icon: "" },
    NavItem { label: "Features", href: "/#features", icon: "" },
    NavItem { label: "Testimonials", href: "/#testimonials", icon: "" },
    NavItem { label: "Exercises", href: "/exercises", icon: "" },
    NavItem { label: "Help", href: "/#help", icon: "" },
];

/// Primary call to action in the public layout.
pub const START_JOURNEY: NavItem = NavItem { label: "Start Your Journey", href: "/chat", icon: "" };

/// Bottom-nav items are active on an exact path match.
#[must_use]
pub fn is_active(item: &NavItem, current_path: &str) -> bool {
    item.href == current_path
}
