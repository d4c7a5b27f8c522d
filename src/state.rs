use time::Date;

use crate::auth::dto::{LoginRequest, ProfileUpdate, RegisterRequest};
use crate::auth::repo_types::User;
use crate::auth::services as auth;
use crate::config::AppConfig;
use crate::error::Result;
use crate::store::{ExportSnapshot, FsBackend, LocalStore, MemoryBackend};
use crate::summary::activity_source::{ActivitySource, SimulatedActivitySource};
use crate::summary::dashboard::DashboardSummary;
use crate::summary::nutrition::NutritionSummary;
use crate::summary::progress::ProgressSummary;
use crate::summary::{dashboard, nutrition, progress};

/// Everything a UI needs to drive the tracker: the store, the runtime
/// settings and the instrumentation source feeding the dashboard.
pub struct App {
    pub store: LocalStore,
    pub config: AppConfig,
    pub activity: Box<dyn ActivitySource>,
}

impl App {
    /// File-backed store under `config.data_dir`, one JSON document per key.
    pub fn new(config: AppConfig) -> Self {
        let store = LocalStore::new(Box::new(FsBackend::new(&config.data_dir)));
        Self {
            store,
            config,
            activity: Box::new(SimulatedActivitySource),
        }
    }

    /// Ephemeral instance that forgets everything on drop; used by tests and
    /// previews.
    pub fn in_memory() -> Self {
        Self {
            store: LocalStore::new(Box::new(MemoryBackend::default())),
            config: AppConfig::default(),
            activity: Box::new(SimulatedActivitySource),
        }
    }

    /// Swap the instrumentation source, e.g. for a real wearable feed.
    pub fn with_activity_source(mut self, activity: Box<dyn ActivitySource>) -> Self {
        self.activity = activity;
        self
    }

    pub fn login(&self, req: LoginRequest) -> Result<User> {
        auth::login(&self.store, &self.config, req)
    }

    pub fn register(&self, req: RegisterRequest) -> Result<User> {
        auth::register(&self.store, req)
    }

    pub fn logout(&self) -> Result<()> {
        auth::logout(&self.store)
    }

    pub fn current_user(&self) -> Option<User> {
        auth::current(&self.store)
    }

    pub fn update_profile(&self, update: ProfileUpdate) -> Option<User> {
        let user = self.current_user()?;
        Some(auth::update_profile(&self.store, &user, update))
    }

    /// Dashboard for the signed-in user; `None` when nobody is signed in.
    pub fn dashboard(&self, today: Date) -> Option<DashboardSummary> {
        let user = self.current_user()?;
        let data = self.store.user_data(&user.id);
        Some(dashboard(today, &data, self.activity.as_ref()))
    }

    /// Nutrition page for the signed-in user; `None` when nobody is signed in.
    pub fn nutrition(&self, today: Date) -> Option<NutritionSummary> {
        let user = self.current_user()?;
        let data = self.store.user_data(&user.id);
        Some(nutrition(today, &data))
    }

    /// Progress page for the signed-in user; `None` when nobody is signed in.
    pub fn progress(&self) -> Option<ProgressSummary> {
        let user = self.current_user()?;
        let data = self.store.user_data(&user.id);
        Some(progress(&data))
    }

    /// The whole store as a downloadable JSON document.
    pub fn export_json(&self) -> Result<String> {
        self.store.export_json()
    }

    pub fn import(&self, snapshot: &ExportSnapshot) -> Result<()> {
        self.store.import_all(snapshot)
    }

    /// Delete-account flow: wipes every key, session included.
    pub fn clear_all(&self) -> Result<()> {
        self.store.clear_all()
    }
}
