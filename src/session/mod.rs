use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;

use crate::error::QuizError;
use crate::model::{ACTIVE_SET_SIZE, Question, QuizPool, SessionPhase, Verdict};
use crate::report::CompletionReporter;

// Submódulos
pub mod actions;
pub mod completion;
pub mod queries;
pub mod resets;
pub mod selector;
pub mod view_models;

pub use view_models::{QuestionView, SummaryRow};

/// Intento de quiz de un único alumno.
///
/// Mantiene el set activo acotado (≤ 5 preguntas), el cursor, las respuestas
/// enviadas y la puntuación. Toda mutación pasa por las operaciones de
/// `actions.rs`; se descarta entera al navegar fuera, no hay progreso parcial.
pub struct QuizSession {
    pub(crate) pool: QuizPool,
    pub(crate) active_questions: Vec<Question>,
    pub(crate) cursor: usize,
    pub(crate) answers: HashMap<usize, usize>, // posición → opción elegida
    pub(crate) score: u32,
    pub(crate) phase: SessionPhase,
    pub(crate) message: Option<String>, // único slot de error visible
    pub(crate) verdict: Option<Verdict>,
    pub(crate) summary: Vec<SummaryRow>, // una fila por posición ya evaluada
    pub(crate) rng: StdRng,
    pub(crate) reporter: CompletionReporter,
}

impl QuizSession {
    /// Crea una sesión sembrada con las primeras `min(5, |banco|)` preguntas.
    /// Un banco vacío se rechaza aquí, nunca llega al cálculo del veredicto.
    pub fn new(pool: QuizPool, reporter: CompletionReporter) -> Result<Self, QuizError> {
        Self::with_rng(pool, reporter, StdRng::from_entropy())
    }

    /// Igual que `new` pero con la fuente aleatoria inyectada, para que la
    /// selección de reemplazos sea reproducible en tests.
    pub fn with_rng(
        pool: QuizPool,
        reporter: CompletionReporter,
        rng: StdRng,
    ) -> Result<Self, QuizError> {
        let active_questions = pool.sample(ACTIVE_SET_SIZE)?;
        Ok(Self {
            pool,
            active_questions,
            cursor: 0,
            answers: HashMap::new(),
            score: 0,
            phase: SessionPhase::NotStarted,
            message: None,
            verdict: None,
            summary: Vec::new(),
            rng,
            reporter,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::model::Question;
    use crate::report::{ProgressSink, ProgressUpdate};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Banco de `n` preguntas q1..qn donde la opción correcta siempre es la 0.
    pub fn pool_of(n: usize) -> QuizPool {
        let questions = (1..=n)
            .map(|i| Question {
                id: format!("q{i}"),
                prompt: format!("pregunta {i}"),
                options: vec!["correcta".into(), "incorrecta".into(), "otra".into()],
                correct_index: 0,
                difficulty: None,
            })
            .collect();
        QuizPool::new(questions)
    }

    pub fn session_of(n: usize) -> QuizSession {
        QuizSession::with_rng(
            pool_of(n),
            CompletionReporter::detached(),
            StdRng::seed_from_u64(7),
        )
        .expect("banco no vacío")
    }

    pub struct RecordingSink(pub Rc<RefCell<Vec<ProgressUpdate>>>);

    impl ProgressSink for RecordingSink {
        fn update_quiz_progress(&self, update: &ProgressUpdate) -> Result<(), QuizError> {
            self.0.borrow_mut().push(update.clone());
            Ok(())
        }
    }

    /// Contesta la posición actual y avanza: opción 0 acierta, 1 falla.
    pub fn answer_current(session: &mut QuizSession, correct: bool) {
        let option = if correct { 0 } else { 1 };
        session.seleccionar_respuesta(option);
        session.comprobar_respuesta().expect("había respuesta elegida");
        session.avanzar();
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn session_seeds_min_of_five_and_pool_size() {
        assert_eq!(session_of(3).active_questions.len(), 3);
        assert_eq!(session_of(5).active_questions.len(), 5);
        assert_eq!(session_of(9).active_questions.len(), 5);
    }

    #[test]
    fn empty_pool_is_rejected_at_creation() {
        let result = QuizSession::with_rng(
            QuizPool::new(vec![]),
            CompletionReporter::detached(),
            StdRng::seed_from_u64(7),
        );
        assert!(matches!(result, Err(QuizError::EmptyPool)));
    }

    #[test]
    fn fresh_session_starts_clean() {
        let session = session_of(6);
        assert_eq!(session.phase, SessionPhase::NotStarted);
        assert_eq!(session.cursor, 0);
        assert_eq!(session.score, 0);
        assert!(session.answers.is_empty());
        assert!(session.verdict.is_none());
        assert!(session.message.is_none());
    }
}
