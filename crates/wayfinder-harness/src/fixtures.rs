//! Concrete items and screens for tests.

use wayfinder_core::{NavAction, NavigationItem, ScreenFactory, ScreenHandle};

/// Primary tab family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MainTab {
    /// Landing tab.
    Home,
    /// Search tab.
    Search,
    /// Profile tab.
    Profile,
}

impl NavigationItem for MainTab {
    fn activation(&self) -> Option<NavAction> {
        Some(NavAction::show(*self, None))
    }

    fn family(&self) -> Vec<Self> {
        vec![MainTab::Home, MainTab::Search, MainTab::Profile]
    }
}

/// A second, unrelated family for family-switch tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthStep {
    /// Sign-in step.
    Login,
    /// Account creation step.
    Register,
}

impl NavigationItem for AuthStep {
    fn activation(&self) -> Option<NavAction> {
        Some(NavAction::show(*self, None))
    }

    fn family(&self) -> Vec<Self> {
        vec![AuthStep::Login, AuthStep::Register]
    }
}

macro_rules! stub_screen {
    ($(#[$doc:meta])* $name:ident, $ctor:ident, $tag:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl ScreenFactory for $name {
            fn build(&self) -> Box<dyn std::any::Any + Send> {
                Box::new($tag)
            }
        }

        $(#[$doc])*
        pub fn $ctor() -> ScreenHandle {
            ScreenHandle::new($name)
        }
    };
}

stub_screen!(
    /// Home landing screen.
    HomeScreen,
    home_screen,
    "home"
);
stub_screen!(
    /// Search results screen.
    SearchScreen,
    search_screen,
    "search"
);
stub_screen!(
    /// Profile screen.
    ProfileScreen,
    profile_screen,
    "profile"
);
stub_screen!(
    /// Drill-down detail screen.
    DetailScreen,
    detail_screen,
    "detail"
);
stub_screen!(
    /// Modal composer screen.
    ComposeScreen,
    compose_screen,
    "compose"
);
stub_screen!(
    /// Sign-in screen.
    LoginScreen,
    login_screen,
    "login"
);
