//! State

use std::{sync::Arc, time::Duration};

use trolley_app::{context::AppContext, operation::OperationContext};

use crate::auth::Authenticator;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) auth: Arc<dyn Authenticator>,
    request_timeout: Duration,
}

impl State {
    #[must_use]
    pub(crate) fn new(
        app: AppContext,
        auth: Arc<dyn Authenticator>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            app,
            auth,
            request_timeout,
        }
    }

    #[must_use]
    pub(crate) fn shared(
        app: AppContext,
        auth: Arc<dyn Authenticator>,
        request_timeout: Duration,
    ) -> Arc<Self> {
        Arc::new(Self::new(app, auth, request_timeout))
    }

    /// Context bounding one request's cart operation.
    #[must_use]
    pub(crate) fn operation_context(&self) -> OperationContext {
        OperationContext::with_timeout(self.request_timeout)
    }
}
