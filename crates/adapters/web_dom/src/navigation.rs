//! How the page was reached, from the Navigation Timing API.

use expensepilot_domain::navigation::NavigationKind;
use web_sys::Window;

/// Navigation type of the current page, if the browser reports one.
#[must_use]
pub fn navigation_kind(window: &Window) -> Option<NavigationKind> {
    let performance = window.performance()?;
    Some(NavigationKind::from_code(performance.navigation().type_()))
}

/// Log a reload of the page.
pub fn report(window: &Window) {
    if navigation_kind(window).is_some_and(NavigationKind::is_reload) {
        tracing::info!("page reload detected");
    }
}
