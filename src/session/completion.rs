use super::*;

impl QuizSession {
    /// Guarda la fila de resumen de la posición actual en el momento de
    /// evaluarla, antes de que un posible reemplazo pise el hueco.
    pub(crate) fn record_outcome(&mut self, was_correct: bool) {
        let question = &self.active_questions[self.cursor];
        let selected = self.answers.get(&self.cursor).copied();
        self.summary.push(SummaryRow {
            number: self.cursor + 1,
            question_id: question.id.clone(),
            prompt: question.prompt.clone(),
            selected_text: selected
                .and_then(|i| question.options.get(i))
                .cloned()
                .unwrap_or_default(),
            correct_text: question.options[question.correct_index].clone(),
            was_correct,
        });
    }

    /// Cierra la sesión: calcula el veredicto (la última posición ya está
    /// sumada en `score`) y publica el resultado. Un fallo al publicar queda
    /// en el slot de mensaje; el veredicto mostrado no se invalida.
    pub(crate) fn finalizar(&mut self) {
        self.phase = SessionPhase::Completed;

        let verdict = Verdict::new(self.score, self.active_questions.len() as u32);
        log::info!(
            "sesión completada: {}/{} ({:.1}%) aprobado={}",
            verdict.correct_count,
            verdict.total_count,
            verdict.percentage,
            verdict.passed
        );
        self.verdict = Some(verdict);

        if let Some(msg) = self.reporter.report(&verdict) {
            self.message = Some(msg);
        }
    }
}
