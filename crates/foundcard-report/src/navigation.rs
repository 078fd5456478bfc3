//! Route changes requested by the report flow

use std::fmt::{Display, Formatter, Result as FmtResult};

use foundcard_core::constants::HOME_ROUTE;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    ReportCard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => HOME_ROUTE,
            Route::ReportCard => "/signaler",
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.path())
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Publishes the current route on a watch channel
pub struct WatchNavigator {
    sender: watch::Sender<Route>,
}

impl WatchNavigator {
    pub fn new(initial: Route) -> (Self, watch::Receiver<Route>) {
        let (sender, receiver) = watch::channel(initial);
        (Self { sender }, receiver)
    }

    pub fn current(&self) -> Route {
        *self.sender.borrow()
    }
}

impl Navigator for WatchNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(route = %route, "Navigating");
        self.sender.send_replace(route);
    }
}
