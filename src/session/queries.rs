use super::*;

impl QuizSession {
    // Accesores de solo lectura para la capa de presentación

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == SessionPhase::Completed
    }

    /// Posición actual, 0-based.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Longitud del set activo; constante durante toda la sesión.
    pub fn total_questions(&self) -> usize {
        self.active_questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.is_completed() {
            return None;
        }
        self.active_questions.get(self.cursor)
    }

    /// Opción tentativa elegida para la posición actual, si la hay.
    pub fn selected_option(&self) -> Option<usize> {
        self.answers.get(&self.cursor).copied()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// Slot único de error visible para el usuario.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn pool(&self) -> &QuizPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn accessors_track_the_walkthrough() {
        let mut session = session_of(6);
        assert_eq!(session.total_questions(), 5);
        assert_eq!(session.cursor(), 0);
        assert!(session.current_question().is_some());
        assert_eq!(session.selected_option(), None);

        session.empezar();
        session.seleccionar_respuesta(2);
        assert_eq!(session.selected_option(), Some(2));

        session.comprobar_respuesta();
        session.avanzar();
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.selected_option(), None);
    }

    #[test]
    fn no_current_question_after_completion() {
        let mut session = session_of(5);
        session.empezar();
        for _ in 0..5 {
            answer_current(&mut session, true);
        }
        assert!(session.is_completed());
        assert!(session.current_question().is_none());
        assert_eq!(session.score(), 5);
        assert!(session.verdict().is_some());
    }
}
