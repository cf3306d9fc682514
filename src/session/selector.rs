use super::*;
use rand::seq::SliceRandom;
use std::collections::HashSet;

impl QuizSession {
    /// Elige uniformemente una pregunta no vista del banco para sustituir a
    /// la fallada. Devuelve `None` si el resto del banco está agotado (no es
    /// un error). No muta ni el banco ni el set activo.
    pub(crate) fn select_replacement(&mut self) -> Option<Question> {
        let exclude: HashSet<&str> = self
            .active_questions
            .iter()
            .map(|q| q.id.as_str())
            .collect();
        let remainder = self.pool.remainder(&exclude);
        remainder.choose(&mut self.rng).map(|q| (*q).clone())
    }
}
