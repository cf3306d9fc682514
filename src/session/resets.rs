use super::*;

impl QuizSession {
    /// Reinicia el intento desde el mismo banco.
    ///
    /// Es la única manera de volver a jugar tras `Completed`, aunque también
    /// vale como reinicio manual a mitad de sesión: no hay progreso parcial.
    pub fn reintentar(&mut self) {
        // 1) Volver a sembrar el set activo desde el banco (puede salir
        //    idéntico si el banco tiene ≤ 5 preguntas). El banco nunca está
        //    vacío aquí: la creación de la sesión ya lo rechazó.
        if let Ok(seed) = self.pool.sample(ACTIVE_SET_SIZE) {
            self.active_questions = seed;
        }

        // 2) Limpiar todo el estado del intento anterior
        self.answers.clear();
        self.summary.clear();
        self.cursor = 0;
        self.score = 0;
        self.verdict = None;
        self.message = None;
        self.phase = SessionPhase::NotStarted;
    }
}
