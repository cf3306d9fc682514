use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use serde::Serialize;

use crate::error::QuizError;
use crate::model::Verdict;

/// Aviso de progreso que se envía al colaborador externo al completar
/// una sesión. `passed` significa "aprobado", no solo "terminado".
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub learner_id: String,
    pub course_id: String,
    pub section_id: String,
    pub chapter_id: String,
    pub passed: bool,
}

/// Identifica a quién y a qué capítulo pertenece la sesión.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub learner_id: String,
    pub course_id: String,
    pub section_id: String,
    pub chapter_id: String,
}

/// Destino del aviso de progreso. El motor lo invoca exactamente una vez
/// por sesión terminada; los reintentos son responsabilidad del caller.
pub trait ProgressSink {
    fn update_quiz_progress(&self, update: &ProgressUpdate) -> Result<(), QuizError>;
}

/// Sink por defecto: POST del aviso como JSON contra el backend de progreso.
pub struct HttpProgressSink {
    client: Client,
    endpoint: String,
}

impl HttpProgressSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl ProgressSink for HttpProgressSink {
    fn update_quiz_progress(&self, update: &ProgressUpdate) -> Result<(), QuizError> {
        let body =
            serde_json::to_vec(update).map_err(|e| QuizError::ProgressUpdate(e.to_string()))?;
        let resp = self
            .client
            .post(&self.endpoint)
            .header(USER_AGENT, concat!("adaptive-quiz/", env!("CARGO_PKG_VERSION")))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|e| QuizError::ProgressUpdate(e.to_string()))?;

        if let Err(e) = resp.error_for_status() {
            return Err(QuizError::ProgressUpdate(e.to_string()));
        }
        Ok(())
    }
}

/// Callback opcional que recibe `(aciertos, total)` al completar.
pub type CompletionCallback = Box<dyn FnMut(u32, u32)>;

/// Agrupa el contexto, el sink y el callback de fin de sesión.
///
/// El fallo del sink se devuelve al caller como mensaje (nunca invalida el
/// veredicto ya calculado) y el callback se dispara después del intento,
/// haya ido bien o mal.
pub struct CompletionReporter {
    context: SessionContext,
    sink: Option<Box<dyn ProgressSink>>,
    on_complete: Option<CompletionCallback>,
}

impl CompletionReporter {
    pub fn new(context: SessionContext) -> Self {
        Self {
            context,
            sink: None,
            on_complete: None,
        }
    }

    /// Reporter sin contexto ni colaboradores, útil para sesiones sueltas.
    pub fn detached() -> Self {
        Self::new(SessionContext::default())
    }

    pub fn with_sink(mut self, sink: Box<dyn ProgressSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_on_complete(mut self, callback: CompletionCallback) -> Self {
        self.on_complete = Some(callback);
        self
    }

    /// Publica el veredicto. Devuelve el error de progreso (si lo hubo)
    /// ya convertido a mensaje para el slot visible de la sesión.
    pub fn report(&mut self, verdict: &Verdict) -> Option<String> {
        // 1) Intentar el aviso externo
        let failure = match &self.sink {
            Some(sink) => {
                let update = ProgressUpdate {
                    learner_id: self.context.learner_id.clone(),
                    course_id: self.context.course_id.clone(),
                    section_id: self.context.section_id.clone(),
                    chapter_id: self.context.chapter_id.clone(),
                    passed: verdict.passed,
                };
                match sink.update_quiz_progress(&update) {
                    Ok(()) => {
                        log::info!(
                            "progreso guardado: learner={} chapter={} passed={}",
                            update.learner_id,
                            update.chapter_id,
                            update.passed
                        );
                        None
                    }
                    Err(e) => {
                        log::warn!("fallo al guardar el progreso: {e}");
                        Some(e.to_string())
                    }
                }
            }
            None => None,
        };

        // 2) El callback se dispara igualmente, el caller nunca se queda colgado
        if let Some(cb) = self.on_complete.as_mut() {
            cb(verdict.correct_count, verdict.total_count);
        }

        failure
    }
}
