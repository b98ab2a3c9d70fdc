#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use casetrack_core::api::CaseApi;
use casetrack_core::session::SessionRoleStore;
use casetrack_core::ui::{Confirm, Notification, NotificationLevel, Notifier};
use casetrack_infrastructure::http::{
    ApiClient, AuthRedirectInterceptor, HttpCaseApi, ScriptedTransport,
};
use casetrack_infrastructure::{InMemoryNavigator, MemoryTabStorage};

#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn all(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }

    pub fn messages(&self, level: NotificationLevel) -> Vec<String> {
        self.all()
            .into_iter()
            .filter(|n| n.level == level)
            .map(|n| n.message)
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(NotificationLevel::Error)
    }

    pub fn successes(&self) -> Vec<String> {
        self.messages(NotificationLevel::Success)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

/// Answers every confirmation with a fixed choice.
pub struct FixedConfirm(pub bool);

#[async_trait]
impl Confirm for FixedConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

/// Everything a view needs, wired against a scripted server.
pub struct Harness {
    pub transport: Arc<ScriptedTransport>,
    pub api: Arc<dyn CaseApi>,
    pub navigator: Arc<InMemoryNavigator>,
    pub notifier: Arc<RecordingNotifier>,
    pub store: Arc<SessionRoleStore>,
}

impl Harness {
    pub fn at(path: &str) -> Self {
        let transport = Arc::new(ScriptedTransport::new());
        let navigator = Arc::new(InMemoryNavigator::new(path));
        let client = ApiClient::new("http://localhost:3000", transport.clone()).with_interceptor(
            Arc::new(AuthRedirectInterceptor::with_default_policy(navigator.clone())),
        );
        let store = SessionRoleStore::create(Arc::new(MemoryTabStorage::new())).unwrap();

        Self {
            transport,
            api: Arc::new(HttpCaseApi::new(client)),
            navigator,
            notifier: Arc::new(RecordingNotifier::default()),
            store: Arc::new(store),
        }
    }
}
