use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::QuizError;

/// Tamaño inicial del set activo de una sesión.
pub const ACTIVE_SET_SIZE: usize = 5;

/// Porcentaje mínimo (sin redondear) para aprobar el quiz.
pub const PASS_THRESHOLD: f64 = 75.0;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub id: String,
    pub prompt: String,       // Pregunta
    pub options: Vec<String>, // Opciones de respuesta (≥ 2)
    pub correct_index: usize, // Índice de la opción correcta
    #[serde(default)]
    pub difficulty: Option<Difficulty>, // Solo para mostrar, no afecta la lógica
}

impl Question {
    /// Comprueba los invariantes básicos de autoría.
    pub fn is_valid(&self) -> bool {
        self.options.len() >= 2 && self.correct_index < self.options.len()
    }
}

/// Banco completo e inmutable de preguntas de un quiz.
///
/// Las sesiones solo leen de aquí; nunca se modifica una vez construido,
/// así que puede compartirse entre sesiones sin problema.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizPool {
    questions: Vec<Question>,
}

impl QuizPool {
    /// Construye el banco descartando las preguntas mal autoradas y
    /// deduplicando por `id` (se conserva la primera).
    pub fn new(questions: Vec<Question>) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut unique = Vec::with_capacity(questions.len());
        for q in questions {
            if !q.is_valid() {
                log::warn!("pregunta inválida en el banco, se descarta: {}", q.id);
            } else if seen.insert(q.id.clone()) {
                unique.push(q);
            } else {
                log::warn!("pregunta duplicada en el banco, se descarta: {}", q.id);
            }
        }
        Self { questions: unique }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Devuelve las primeras `n` preguntas en orden de banco (sin barajar)
    /// para sembrar una sesión. Si `n` supera el banco, devuelve todo.
    pub fn sample(&self, n: usize) -> Result<Vec<Question>, QuizError> {
        if self.questions.is_empty() {
            return Err(QuizError::EmptyPool);
        }
        Ok(self.questions.iter().take(n).cloned().collect())
    }

    /// Preguntas del banco cuyo `id` no está en el set de exclusión.
    /// No muta ni el banco ni el set.
    pub fn remainder(&self, exclude: &HashSet<&str>) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| !exclude.contains(q.id.as_str()))
            .collect()
    }
}

/// Fases de una sesión. Variantes explícitas en lugar de banderas sueltas
/// para que las transiciones inválidas no sean representables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    Answering, // sin respuesta enviada para la posición actual
    Checked,   // respuesta enviada, corrección revelada
    Completed,
}

/// Resultado final de una sesión. Derivado, no se persiste como entidad.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Verdict {
    pub correct_count: u32,
    pub total_count: u32,
    pub percentage: f64,
    pub passed: bool,
}

impl Verdict {
    /// La decisión de aprobado se toma sobre el cociente sin redondear;
    /// el redondeo de la capa de presentación no influye.
    pub fn new(correct_count: u32, total_count: u32) -> Self {
        debug_assert!(total_count > 0, "una sesión nunca completa con 0 preguntas");
        let percentage = 100.0 * f64::from(correct_count) / f64::from(total_count);
        Self {
            correct_count,
            total_count,
            percentage,
            passed: percentage >= PASS_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(id: &str) -> Question {
        Question {
            id: id.to_string(),
            prompt: format!("pregunta {id}"),
            options: vec!["a".into(), "b".into()],
            correct_index: 0,
            difficulty: None,
        }
    }

    #[test]
    fn pool_dedups_by_id_keeping_first() {
        let pool = QuizPool::new(vec![q("q1"), q("q2"), q("q1")]);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.questions()[0].id, "q1");
        assert_eq!(pool.questions()[1].id, "q2");
    }

    #[test]
    fn pool_drops_badly_authored_questions_on_construction() {
        // Un banco montado a mano (sin pasar por el loader) tampoco puede
        // colar un índice de respuesta fuera de rango.
        let mut oob = q("fuera_de_rango");
        oob.correct_index = 9;
        let mut corta = q("una_opcion");
        corta.options = vec!["única".into()];

        let pool = QuizPool::new(vec![q("q1"), oob, corta]);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.questions()[0].id, "q1");
    }

    #[test]
    fn sample_takes_pool_order_and_caps_at_pool_size() {
        let pool = QuizPool::new(vec![q("q1"), q("q2"), q("q3")]);
        let seed = pool.sample(5).expect("banco no vacío");
        assert_eq!(seed.len(), 3);
        assert_eq!(seed[0].id, "q1");

        let seed = pool.sample(2).expect("banco no vacío");
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[1].id, "q2");
    }

    #[test]
    fn sample_on_empty_pool_is_empty_pool_error() {
        let pool = QuizPool::new(vec![]);
        assert!(matches!(pool.sample(5), Err(QuizError::EmptyPool)));
    }

    #[test]
    fn remainder_excludes_by_id_without_mutating() {
        let pool = QuizPool::new(vec![q("q1"), q("q2"), q("q3")]);
        let exclude: HashSet<&str> = ["q1", "q3"].into_iter().collect();
        let rest = pool.remainder(&exclude);
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].id, "q2");
        assert_eq!(pool.len(), 3);
        assert_eq!(exclude.len(), 2);
    }

    #[test]
    fn verdict_threshold_is_inclusive() {
        // 3 de 4 = 75.0 exacto → aprobado (el umbral es >=, no >)
        let v = Verdict::new(3, 4);
        assert_eq!(v.percentage, 75.0);
        assert!(v.passed);

        let v = Verdict::new(2, 4);
        assert_eq!(v.percentage, 50.0);
        assert!(!v.passed);
    }

    #[test]
    fn question_validity_checks_options_and_index() {
        let mut bad = q("q1");
        bad.options = vec!["solo una".into()];
        bad.correct_index = 0;
        assert!(!bad.is_valid());

        let mut oob = q("q2");
        oob.correct_index = 2;
        assert!(!oob.is_valid());

        assert!(q("q3").is_valid());
    }
}
