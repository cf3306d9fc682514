use super::*;

/// Lo que la capa de presentación necesita para pintar la pregunta en curso.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub number: usize, // 1-based
    pub total: usize,
    pub prompt: String,
    pub options: Vec<String>,
    pub difficulty: Option<crate::model::Difficulty>,
    pub selected: Option<usize>,
    /// `Some(índice correcto)` solo cuando la respuesta ya está comprobada.
    pub revealed_correct: Option<usize>,
}

/// Una fila del resumen final por posición evaluada. Conserva la pregunta
/// tal y como se respondió, aunque luego un reemplazo haya pisado su hueco.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub number: usize, // 1-based
    pub question_id: String,
    pub prompt: String,
    pub selected_text: String,
    pub correct_text: String,
    pub was_correct: bool,
}

impl QuizSession {
    pub fn question_view(&self) -> Option<QuestionView> {
        let question = self.current_question()?;
        Some(QuestionView {
            number: self.cursor + 1,
            total: self.active_questions.len(),
            prompt: question.prompt.clone(),
            options: question.options.clone(),
            difficulty: question.difficulty,
            selected: self.selected_option(),
            revealed_correct: (self.phase == SessionPhase::Checked)
                .then_some(question.correct_index),
        })
    }

    pub fn summary_rows(&self) -> &[SummaryRow] {
        &self.summary
    }
}
