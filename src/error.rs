use thiserror::Error;

/// Errores recuperables del motor de quiz.
///
/// Ninguno es fatal: todos se convierten en estado visible para el usuario
/// (el slot de mensaje de la sesión o la pantalla de "sin preguntas") en la
/// frontera donde ocurren.
#[derive(Debug, Error)]
pub enum QuizError {
    /// El quiz no tiene ninguna pregunta; la sesión se rechaza al crearla.
    #[error("No hay preguntas disponibles para este quiz.")]
    EmptyPool,

    /// Se intentó comprobar sin haber elegido una opción.
    #[error("⚠ Debes seleccionar una respuesta antes de comprobar.")]
    NoAnswerSelected,

    /// El aviso de progreso falló; el veredicto ya calculado sigue siendo válido.
    #[error("No se pudo guardar tu progreso: {0}")]
    ProgressUpdate(String),

    /// Fallo de lectura del banco de preguntas.
    #[error("No se pudo leer el banco de preguntas: {0}")]
    BankRead(#[from] std::io::Error),

    /// Fallo de parseo YAML del banco de preguntas.
    #[error("No se pudo parsear el banco de preguntas: {0}")]
    BankParse(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
