use super::*;
use crate::error::QuizError;

impl QuizSession {
    /// Arranca la sesión: `NotStarted → Answering`. En cualquier otra fase
    /// no hace nada.
    pub fn empezar(&mut self) {
        if self.phase == SessionPhase::NotStarted {
            self.phase = SessionPhase::Answering;
        }
    }

    /// Registra la opción elegida para la posición actual.
    ///
    /// Solo válido en fase `Answering`; tras comprobar, la respuesta queda
    /// bloqueada y la llamada se ignora. Limpia el slot de error pendiente.
    pub fn seleccionar_respuesta(&mut self, option_index: usize) {
        if self.phase != SessionPhase::Answering {
            return;
        }
        let question = &self.active_questions[self.cursor];
        if option_index >= question.options.len() {
            log::warn!(
                "opción {} fuera de rango para la pregunta {}",
                option_index,
                question.id
            );
            return;
        }
        self.answers.insert(self.cursor, option_index);
        self.message = None;
    }

    /// Comprueba la respuesta tentativa de la posición actual.
    ///
    /// Devuelve `Some(es_correcta)` y pasa a `Checked`. Si no hay respuesta
    /// elegida, deja el error en el slot visible y devuelve `None` sin tocar
    /// nada más. En `Checked` es idempotente (vuelve a revelar lo mismo).
    pub fn comprobar_respuesta(&mut self) -> Option<bool> {
        if !matches!(self.phase, SessionPhase::Answering | SessionPhase::Checked) {
            return None;
        }
        let Some(&selected) = self.answers.get(&self.cursor) else {
            self.message = Some(QuizError::NoAnswerSelected.to_string());
            return None;
        };
        self.message = None;
        self.phase = SessionPhase::Checked;
        Some(selected == self.active_questions[self.cursor].correct_index)
    }

    /// Avanza tras una comprobación. Solo válido en fase `Checked`.
    pub fn avanzar(&mut self) {
        if self.phase != SessionPhase::Checked {
            return;
        }

        // 1) Evaluar la posición actual (una sola vez, justo al pasarla)
        let question = &self.active_questions[self.cursor];
        let is_correct =
            self.answers.get(&self.cursor).copied() == Some(question.correct_index);

        self.record_outcome(is_correct);

        if is_correct {
            // 2) Sumar el acierto
            self.score += 1;
        } else {
            // 3) Sustituir en sitio la pregunta fallada por una no vista.
            //    Si el banco está agotado, el hueco se queda como está y
            //    cuenta como fallo en el recuento final.
            if let Some(replacement) = self.select_replacement() {
                log::debug!(
                    "pregunta {} fallada, entra {}",
                    self.active_questions[self.cursor].id,
                    replacement.id
                );
                self.active_questions[self.cursor] = replacement;
            }
        }

        // 4) Siguiente posición, o 5) fin de sesión con la última ya sumada
        if self.cursor + 1 < self.active_questions.len() {
            self.cursor += 1;
            self.phase = SessionPhase::Answering;
        } else {
            self.finalizar();
        }
    }
}
