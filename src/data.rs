// src/data.rs

use std::path::Path;

use crate::error::Result;
use crate::model::{Question, QuizPool};

/// Carga el banco de preguntas de demostración embebido en el binario.
pub fn read_bank_embedded() -> QuizPool {
    let file_content = include_str!("data/quiz_questions.yaml");
    read_bank_str(file_content).expect("el banco embebido siempre parsea")
}

/// Parsea un banco de preguntas desde YAML.
///
/// Las preguntas mal autoradas (menos de 2 opciones o índice de respuesta
/// fuera de rango) las descarta el propio banco con un aviso en lugar de
/// invalidar la carga entera.
pub fn read_bank_str(yaml: &str) -> Result<QuizPool> {
    let questions: Vec<Question> = serde_yaml::from_str(yaml)?;
    Ok(QuizPool::new(questions))
}

/// Carga un banco de preguntas desde un fichero YAML.
pub fn read_bank_file(path: impl AsRef<Path>) -> Result<QuizPool> {
    let yaml = std::fs::read_to_string(path)?;
    read_bank_str(&yaml)
}
