//! State

use std::sync::Arc;

use vaxtag_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Port the server was bound to, echoed by the network-info endpoint.
    pub(crate) port: u16,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, port: u16) -> Self {
        Self { app, port }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, port: u16) -> Arc<Self> {
        Arc::new(Self::new(app, port))
    }
}
