use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::NaiveDateTime;
use uuid::Uuid;

/// One answered question, kept in session state until finalization.
#[derive(Debug, Clone)]
pub struct RecordedAnswer {
    pub question_id: i32,
    pub answer: String,
    pub is_correct: bool,
}

/// In-progress quiz attempt: the question pointer, the collected answers
/// and the start timestamp. Terminal once the pointer reaches the bank size.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub session_id: Uuid,
    pub participant_id: Uuid,
    pub current_question: usize,
    pub answers: HashMap<i32, RecordedAnswer>,
    pub started_at: NaiveDateTime,
}

impl QuizSession {
    pub fn new(participant_id: Uuid, started_at: NaiveDateTime) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            participant_id,
            current_question: 0,
            answers: HashMap::new(),
            started_at,
        }
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    pub fn correct_count(&self) -> usize {
        self.answers.values().filter(|a| a.is_correct).count()
    }

    pub fn is_complete(&self, total_questions: usize) -> bool {
        self.current_question >= total_questions
    }

    /// Store the answer for the current question and advance the pointer.
    fn record(&mut self, answer: RecordedAnswer) {
        self.answers.insert(answer.question_id, answer);
        self.current_question += 1;
    }
}

/// Live quiz attempts keyed by session id. The lock guards map access only
/// and is never held across an await point.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, QuizSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the session unless its participant already has one open.
    pub fn try_start(&self, session: QuizSession) -> bool {
        let mut sessions = self.inner.write().expect("session store lock poisoned");
        if sessions
            .values()
            .any(|s| s.participant_id == session.participant_id)
        {
            return false;
        }
        sessions.insert(session.session_id, session);
        true
    }

    pub fn get(&self, session_id: Uuid) -> Option<QuizSession> {
        self.inner
            .read()
            .expect("session store lock poisoned")
            .get(&session_id)
            .cloned()
    }

    /// Apply one answer to the stored session, returning the updated copy.
    pub fn record_answer(&self, session_id: Uuid, answer: RecordedAnswer) -> Option<QuizSession> {
        let mut sessions = self.inner.write().expect("session store lock poisoned");
        let session = sessions.get_mut(&session_id)?;
        session.record(answer);
        Some(session.clone())
    }

    pub fn remove(&self, session_id: Uuid) -> Option<QuizSession> {
        self.inner
            .write()
            .expect("session store lock poisoned")
            .remove(&session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn started_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn answer(question_id: i32, is_correct: bool) -> RecordedAnswer {
        RecordedAnswer {
            question_id,
            answer: "x".into(),
            is_correct,
        }
    }

    #[test]
    fn pointer_advances_once_per_answer() {
        let store = SessionStore::new();
        let session = QuizSession::new(Uuid::new_v4(), started_at());
        let id = session.session_id;
        assert!(store.try_start(session));

        let after_one = store.record_answer(id, answer(1, true)).unwrap();
        assert_eq!(after_one.current_question, 1);
        assert_eq!(after_one.answered(), 1);

        let after_two = store.record_answer(id, answer(2, false)).unwrap();
        assert_eq!(after_two.current_question, 2);
        assert_eq!(after_two.correct_count(), 1);
    }

    #[test]
    fn complete_when_pointer_reaches_bank_size() {
        let mut session = QuizSession::new(Uuid::new_v4(), started_at());
        assert!(!session.is_complete(2));
        session.record(answer(1, true));
        session.record(answer(2, true));
        assert!(session.is_complete(2));
        assert_eq!(session.correct_count(), 2);
    }

    #[test]
    fn one_open_session_per_participant() {
        let store = SessionStore::new();
        let participant_id = Uuid::new_v4();
        let first = QuizSession::new(participant_id, started_at());
        let first_id = first.session_id;
        assert!(store.try_start(first));
        assert!(!store.try_start(QuizSession::new(participant_id, started_at())));

        // once finished and removed, a fresh attempt may open
        store.remove(first_id);
        assert!(store.try_start(QuizSession::new(participant_id, started_at())));
    }

    #[test]
    fn removal_consumes_the_session() {
        let store = SessionStore::new();
        let session = QuizSession::new(Uuid::new_v4(), started_at());
        let id = session.session_id;
        assert!(store.try_start(session));

        assert!(store.remove(id).is_some());
        assert!(store.get(id).is_none());
        assert!(store.record_answer(id, answer(1, true)).is_none());
    }
}
