use std::io::{self, Write};

use adaptive_quiz::{CompletionReporter, HttpProgressSink, QuizSession, SessionContext, data};

/// Front de terminal para el motor de quiz. Toda la lógica vive en la
/// librería; aquí solo se pinta y se lee de stdin.
fn main() {
    pretty_env_logger::init();

    let pool = data::read_bank_embedded();
    let mut session = match QuizSession::new(pool, build_reporter()) {
        Ok(s) => s,
        Err(e) => {
            // Banco vacío: estado "sin quiz disponible", no un crash
            eprintln!("{e}");
            return;
        }
    };

    println!("=== Quiz adaptativo ===");
    println!("Responde con el número de la opción. Al fallar, la pregunta se");
    println!("sustituye por otra del banco si queda alguna sin ver.\n");

    session.empezar();

    loop {
        while let Some(view) = session.question_view() {
            println!("[{}/{}] {}", view.number, view.total, view.prompt);
            for (i, option) in view.options.iter().enumerate() {
                println!("  {}) {}", i + 1, option);
            }

            let Some(line) = read_line("> ") else { return };
            match line.trim().parse::<usize>() {
                Ok(n) if n >= 1 => session.seleccionar_respuesta(n - 1),
                _ => {}
            }

            match session.comprobar_respuesta() {
                Some(true) => println!("✅ ¡Correcto!\n"),
                Some(false) => {
                    // La vista de antes de comprobar no revela la correcta
                    let revealed = session
                        .question_view()
                        .and_then(|v| v.revealed_correct)
                        .and_then(|i| view.options.get(i).cloned())
                        .unwrap_or_default();
                    println!("❌ Incorrecto. La respuesta era: {revealed}\n");
                }
                None => {
                    if let Some(msg) = session.message() {
                        println!("{msg}\n");
                    }
                    continue;
                }
            }
            session.avanzar();
        }

        print_summary(&session);

        let Some(line) = read_line("¿Reintentar? (s/n) ") else { return };
        if line.trim().eq_ignore_ascii_case("s") {
            session.reintentar();
            session.empezar();
            println!();
        } else {
            return;
        }
    }
}

fn build_reporter() -> CompletionReporter {
    let context = SessionContext {
        learner_id: std::env::var("QUIZ_LEARNER_ID").unwrap_or_else(|_| "demo".into()),
        course_id: std::env::var("QUIZ_COURSE_ID").unwrap_or_else(|_| "demo-course".into()),
        section_id: std::env::var("QUIZ_SECTION_ID").unwrap_or_else(|_| "demo-section".into()),
        chapter_id: std::env::var("QUIZ_CHAPTER_ID").unwrap_or_else(|_| "demo-chapter".into()),
    };

    let reporter = CompletionReporter::new(context);
    match std::env::var("QUIZ_PROGRESS_ENDPOINT") {
        Ok(endpoint) => reporter.with_sink(Box::new(HttpProgressSink::new(endpoint))),
        Err(_) => reporter,
    }
}

fn print_summary(session: &QuizSession) {
    println!("--- Resumen ---");
    for row in session.summary_rows() {
        let mark = if row.was_correct { "✅" } else { "❌" };
        println!(
            "{} {}. {} (tu respuesta: {})",
            mark, row.number, row.prompt, row.selected_text
        );
    }

    if let Some(v) = session.verdict() {
        let outcome = if v.passed { "¡Aprobado!" } else { "Suspendido" };
        println!(
            "\nResultado: {}/{} ({:.0}%): {}",
            v.correct_count, v.total_count, v.percentage, outcome
        );
    }
    if let Some(msg) = session.message() {
        println!("{msg}");
    }
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}
