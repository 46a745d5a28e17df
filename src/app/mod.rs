pub mod progress;

use crate::backend::{BackendError, ChatTurn, GenerativeBackend, HttpBackend};
use crate::config::load_settings;
use crate::orchestration::{
    decision_from_answer, ApprovalGate, ReviewDecision, RunOutcome, WorkflowDriver,
};
use crate::templates::EXECUTION_INSTRUCTIONS_FILE;
use progress::Spinner;
use std::io::{self, BufRead, Write};
use std::time::Duration;

pub const EXIT_COMMANDS: &[&str] = &["exit", "quit"];
pub const HELP_COMMAND: &str = "help";

pub fn is_exit_command(input: &str) -> bool {
    EXIT_COMMANDS
        .iter()
        .any(|command| input.eq_ignore_ascii_case(command))
}

pub fn help_text() -> &'static str {
    "Describe the project you want and it will be generated under the project root.\n\
     Mention a problem to fix and the affected project to update it in place.\n\
     Ask how to run a project to get execution guidance.\n\n\
     Commands:\n  help        show this message\n  exit, quit  leave the session"
}

struct AnimatedBackend<'a> {
    inner: &'a dyn GenerativeBackend,
}

impl GenerativeBackend for AnimatedBackend<'_> {
    fn generate(
        &self,
        system_instruction: Option<&str>,
        turns: &[ChatTurn],
    ) -> Result<String, BackendError> {
        let spinner = Spinner::start("thinking");
        let result = self.inner.generate(system_instruction, turns);
        spinner.stop();
        result
    }
}

struct StdinApproval;

impl ApprovalGate for StdinApproval {
    fn review_structure(&mut self, paths: &[String]) -> ReviewDecision {
        println!("Proposed project structure:");
        for path in paths {
            println!("  {path}");
        }
        print!("Generate these files? (yes/no): ");
        let _ = io::stdout().flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return ReviewDecision::Reject;
        }
        decision_from_answer(&answer)
    }
}

pub fn run_repl() -> Result<(), String> {
    let settings = load_settings().map_err(|err| err.to_string())?;
    let api_key = settings.resolve_api_key().map_err(|err| err.to_string())?;
    let http = HttpBackend::new(
        &settings.backend.endpoint,
        &settings.backend.model,
        api_key,
    )
    .with_timeout(Duration::from_secs(settings.backend.timeout_seconds));
    let backend = AnimatedBackend { inner: &http };
    let mut approval = StdinApproval;
    let mut driver = WorkflowDriver::new(&backend, &mut approval, settings.project_root.clone());

    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => return Err(format!("failed to read input: {err}")),
        }
        let request = line.trim();
        if request.is_empty() {
            continue;
        }
        if is_exit_command(request) {
            break;
        }
        if request.eq_ignore_ascii_case(HELP_COMMAND) {
            println!("{}", help_text());
            continue;
        }

        let outcome = driver.run_request(request, |record| {
            println!("[{}] {}", record.step, record.content);
        });
        match outcome {
            Ok(RunOutcome::Completed {
                summary,
                project_name,
                execution_query,
            }) => {
                if execution_query {
                    let project = project_name.unwrap_or_else(|| "<project>".to_string());
                    println!(
                        "See {}/{project}/{EXECUTION_INSTRUCTIONS_FILE} for how to run this project.",
                        settings.project_root.display()
                    );
                } else {
                    println!("{summary}");
                }
            }
            Ok(RunOutcome::Rejected) => {
                println!("Structure rejected; nothing was generated.");
            }
            Err(err) => eprintln!("request failed: {err}"),
        }
    }

    Ok(())
}
