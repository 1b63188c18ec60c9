use std::sync::Arc;

use storage::Database;
use storage::questions::QuestionBank;

use crate::features::quiz::session::SessionStore;
use crate::middleware::auth::AdminSecret;

/// Everything the handlers need: the pool, the read-only question bank,
/// the live session map, and the dashboard secret.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub questions: Arc<QuestionBank>,
    pub sessions: SessionStore,
    pub admin: AdminSecret,
}

impl AppState {
    pub fn new(db: Database, questions: QuestionBank, admin: AdminSecret) -> Self {
        Self {
            db,
            questions: Arc::new(questions),
            sessions: SessionStore::new(),
            admin,
        }
    }
}
