use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing_subscriber::EnvFilter;

use tandem_core::language::Language;
use tandem_core::record::PersistTarget;
use tandem_core::session::{BatchState, SessionController};
use tandem_infrastructure::paths::DEFAULT_LOG_FILE;
use tandem_infrastructure::{
    ConfigService, FallbackLog, FileSecretService, PersistenceGateway, SupabaseStore,
};
use tandem_interaction::ChatApiPartner;

mod survey;

#[derive(Parser)]
#[command(name = "tandem")]
#[command(about = "TANDEM - Guided Role-Play Communication Trainer", long_about = None)]
struct Cli {
    /// Interface language: en or de
    #[arg(long)]
    language: Option<String>,

    /// Student ID or nickname (used only to identify sessions in the dataset)
    #[arg(long, default_value = "")]
    student_id: String,

    /// Path of the local fallback log
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Chat model override
    #[arg(long)]
    model: Option<String>,
}

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/scenarios".to_string(),
                "/select".to_string(),
                "/language".to_string(),
                "/start".to_string(),
                "/end".to_string(),
                "/reveal".to_string(),
                "/quit".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Picks the localized variant of a UI string.
fn t(language: Language, en: &'static str, de: &'static str) -> &'static str {
    match language {
        Language::English => en,
        Language::German => de,
    }
}

fn print_scenarios(controller: &SessionController, language: Language) {
    match controller.batch().label(language) {
        Some(label) => println!("{}", label.bright_magenta().bold()),
        None => return,
    }
    for id in controller.available_scenarios() {
        if let Some(scenario) = tandem_core::scenario::find(id) {
            println!("  {}", scenario.title(language));
        }
    }
    println!(
        "{}",
        t(
            language,
            "Choose with /select <number>.",
            "Wählen Sie mit /select <Nummer>.",
        )
        .bright_black()
    );
}

fn print_selection(controller: &SessionController, language: Language) {
    let Some(meta) = controller.meta() else {
        return;
    };
    let Some(scenario) = tandem_core::scenario::find(meta.roleplay_id) else {
        return;
    };

    println!("{}", scenario.title(language).bright_magenta().bold());
    println!();
    println!(
        "{}",
        t(language, "Instructions for YOU", "Anweisungen für SIE").bright_yellow()
    );
    println!("{}", scenario.learner_instructions(language));
    println!(
        "{}",
        t(
            language,
            "Suggested maximum conversation time: about 10 minutes. You can end the \
             conversation at any time by writing \"Thank you, goodbye\".",
            "Empfohlene maximale Gesprächsdauer: ca. 10 Minuten. Sie können das Gespräch \
             jederzeit mit „Danke, tschüss\" beenden.",
        )
        .bright_black()
    );
    println!(
        "{}",
        t(
            language,
            "Type /start to begin the conversation.",
            "Tippen Sie /start, um das Gespräch zu beginnen.",
        )
        .bright_black()
    );
}

fn print_batch_completion(batch: BatchState, language: Language) {
    let message = match batch {
        BatchState::Batch2 => t(
            language,
            "Thank you! Batch 1 is completed. Please continue with Batch 2 (Role-Plays 6-10).",
            "Danke! Block 1 ist abgeschlossen. Bitte machen Sie mit Block 2 (Rollenspiele 6-10) weiter.",
        ),
        BatchState::Finished => t(
            language,
            "Thank you! You completed both batches.",
            "Vielen Dank! Sie haben beide Blöcke abgeschlossen.",
        ),
        BatchState::Batch1 => return,
    };
    println!("{}", message.bright_green());
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ConfigService::new().get_config();

    let mut language: Language = cli
        .language
        .or(config.language)
        .as_deref()
        .unwrap_or("en")
        .parse()?;

    // ===== Backend Initialization =====
    let secrets = match FileSecretService::new(None) {
        Ok(service) => service.load().unwrap_or_default(),
        Err(_) => Default::default(),
    };

    // No chat credentials means no session: halt gracefully.
    let partner = match ChatApiPartner::from_secrets(&secrets) {
        Ok(partner) => match &cli.model {
            Some(model) => partner.with_model(model.clone()),
            None => partner,
        },
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            eprintln!(
                "{}",
                "Please provide an OpenAI API key (secret.json or OPENAI_API_KEY).".red()
            );
            return Ok(());
        }
    };

    let remote = match &secrets.supabase {
        Some(secret) => match SupabaseStore::new(secret) {
            Ok(store) => Some(Arc::new(store) as Arc<dyn tandem_core::record::RemoteStore>),
            Err(err) => {
                eprintln!("{}", format!("Remote store error: {err}").yellow());
                None
            }
        },
        None => {
            eprintln!(
                "{}",
                "Supabase URL or key not set. Using local file logging.".yellow()
            );
            None
        }
    };

    let log_path = cli
        .log_file
        .or_else(|| config.log_file.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    let gateway = PersistenceGateway::new(remote, FallbackLog::new(log_path));

    let mut controller = SessionController::new(cli.student_id.clone());

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::<CliHelper, DefaultHistory>::new()?;
    rl.set_helper(Some(helper));

    println!(
        "{}",
        "=== TANDEM Role-Play Communication Trainer ==="
            .bright_magenta()
            .bold()
    );
    println!(
        "{}",
        t(
            language,
            "Commands: /scenarios, /select <id>, /language en|de, /start, /end, /reveal, /quit",
            "Befehle: /scenarios, /select <id>, /language en|de, /start, /end, /reveal, /quit",
        )
        .bright_black()
    );
    println!();
    print_scenarios(&controller, language);

    // ===== Main REPL Loop =====
    loop {
        if controller.is_finished() {
            println!(
                "{}",
                t(
                    language,
                    "You have completed one role-play from Batch 1 and one from Batch 2. Thank you!",
                    "Sie haben je ein Rollenspiel aus Block 1 und Block 2 abgeschlossen. Vielen Dank!",
                )
                .bright_green()
                .bold()
            );
            break;
        }

        let readline = rl.readline(">> ");
        let line = match readline {
            Ok(line) => line,
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type /quit to exit.".yellow());
                continue;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(&line);

        if trimmed == "/quit" || trimmed == "quit" || trimmed == "exit" {
            println!("{}", "Goodbye!".bright_green());
            break;
        }

        if let Some(rest) = trimmed.strip_prefix("/select") {
            let parsed = rest.trim().parse::<u32>();
            match parsed {
                Ok(id) => match controller.select(id, language) {
                    Ok(_) => print_selection(&controller, language),
                    Err(err) => println!("{}", err.to_string().red()),
                },
                Err(_) => println!("{}", "Usage: /select <number>".red()),
            }
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("/language") {
            match rest.trim().parse::<Language>() {
                Ok(new_language) => {
                    language = new_language;
                    // re-apply the selection so the reset rule sees the change
                    if let Some(id) = controller.meta().map(|meta| meta.roleplay_id) {
                        if let Err(err) = controller.select(id, language) {
                            println!("{}", err.to_string().red());
                        }
                    }
                    println!(
                        "{}",
                        t(language, "Language set to English.", "Sprache auf Deutsch gestellt.")
                            .bright_black()
                    );
                }
                Err(err) => println!("{}", err.to_string().red()),
            }
            continue;
        }

        match trimmed {
            "/scenarios" => {
                print_scenarios(&controller, language);
            }
            "/reveal" => {
                // Teacher view: the hidden instructions for the AI partner.
                match controller.meta() {
                    Some(meta) => {
                        if let Some(scenario) = tandem_core::scenario::find(meta.roleplay_id) {
                            println!(
                                "{}",
                                t(
                                    language,
                                    "Hidden instructions for the AI partner (teacher view):",
                                    "Verdeckte Anweisungen für die KI-Gesprächspartner:in (nur Lehrkraft):",
                                )
                                .bright_yellow()
                            );
                            println!("{}", scenario.persona_script(language).bright_black());
                        }
                    }
                    None => println!(
                        "{}",
                        t(language, "No scenario selected.", "Kein Rollenspiel ausgewählt.").red()
                    ),
                }
            }
            "/start" => match controller.start_conversation() {
                Ok(()) => {
                    println!(
                        "{}",
                        t(
                            language,
                            "Conversation started. Write your next message...",
                            "Gespräch gestartet. Schreiben Sie Ihre nächste Nachricht...",
                        )
                        .bright_green()
                    );
                }
                Err(err) => println!("{}", err.to_string().red()),
            },
            "/end" => {
                // An aborted survey leaves the conversation ended but still
                // awaiting feedback; /end then resumes the survey directly.
                if controller.conversation_active() {
                    if let Err(err) = controller.end_conversation() {
                        println!("{}", err.to_string().red());
                        continue;
                    }
                } else if !controller.awaiting_feedback() {
                    println!(
                        "{}",
                        t(
                            language,
                            "No active conversation to end.",
                            "Kein aktives Gespräch zu beenden.",
                        )
                        .red()
                    );
                    continue;
                }
                let answers = match survey::collect(&mut rl, language)? {
                    Some(answers) => answers,
                    None => {
                        println!(
                            "{}",
                            t(
                                language,
                                "Survey aborted; run /end again to retry.",
                                "Umfrage abgebrochen; mit /end erneut versuchen.",
                            )
                            .yellow()
                        );
                        continue;
                    }
                };
                match controller.submit_feedback(answers, &gateway).await {
                    Ok(outcome) => {
                        if let Some(remote_error) = &outcome.remote_error {
                            eprintln!(
                                "{}",
                                format!("Saving to remote store failed: {remote_error}").red()
                            );
                        }
                        let saved = match outcome.target {
                            PersistTarget::Remote => "Chat and feedback saved to online database.",
                            PersistTarget::Local => "Chat and feedback saved locally (fallback).",
                        };
                        println!("{}", saved.bright_green());
                        print_batch_completion(controller.batch(), language);
                        print_scenarios(&controller, language);
                    }
                    Err(err) => {
                        // Local fallback write failed: data for this attempt
                        // is lost unless the learner submits again.
                        eprintln!(
                            "{}",
                            format!("Failed to save chat and feedback locally: {err}").red()
                        );
                    }
                }
            }
            _ if trimmed.starts_with('/') => {
                println!("{}", "Unknown command".bright_black());
            }
            text => {
                if !controller.conversation_active() {
                    println!(
                        "{}",
                        t(
                            language,
                            "No active conversation. Use /select and /start first.",
                            "Kein aktives Gespräch. Nutzen Sie zuerst /select und /start.",
                        )
                        .bright_black()
                    );
                    continue;
                }
                println!("{}", format!("> {text}").green());
                match controller.send_learner_turn(text, &partner).await {
                    Ok(reply) => {
                        let error_turn = reply.content.starts_with("[Error");
                        for reply_line in reply.content.lines() {
                            if error_turn {
                                println!("{}", reply_line.red());
                            } else {
                                println!("{}", reply_line.bright_blue());
                            }
                        }
                    }
                    Err(err) => println!("{}", err.to_string().red()),
                }
            }
        }
    }

    Ok(())
}
