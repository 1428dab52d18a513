//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::chat::presets::sample_presets;
use crate::output::sidebar::SidebarView;
use crate::output::transcript::TranscriptFormatter;
use assist_application::{
    ChatGateway, OpenConversationUseCase, OpenOutcome, RefreshIndexUseCase, SendError,
    SendMessageUseCase, SendOutcome, Shared,
};
use assist_domain::{
    ActiveSession, ConversationCache, ConversationId, ConversationIndex, project,
};
use colored::Colorize;
use indicatif::ProgressBar;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Interactive chat REPL
pub struct ChatRepl {
    send: Arc<SendMessageUseCase>,
    open: OpenConversationUseCase,
    refresh: RefreshIndexUseCase,
    cache: Shared<ConversationCache>,
    index: Shared<ConversationIndex>,
    session: Shared<ActiveSession>,
    presets_shown: usize,
    history_file: Option<PathBuf>,
    show_spinner: bool,
}

impl ChatRepl {
    /// Create a new ChatRepl over shared state handles
    pub fn new(
        gateway: Arc<dyn ChatGateway>,
        cache: Shared<ConversationCache>,
        index: Shared<ConversationIndex>,
        session: Shared<ActiveSession>,
    ) -> Self {
        let send = Arc::new(SendMessageUseCase::new(
            gateway.clone(),
            cache.clone(),
            index.clone(),
            session.clone(),
        ));
        let open = OpenConversationUseCase::new(gateway.clone(), cache.clone(), session.clone());
        let refresh = RefreshIndexUseCase::new(gateway, index.clone());
        Self {
            send,
            open,
            refresh,
            cache,
            index,
            session,
            presets_shown: 3,
            history_file: None,
            show_spinner: true,
        }
    }

    /// Set how many preset questions to suggest
    pub fn with_presets_shown(mut self, count: usize) -> Self {
        self.presets_shown = count;
        self
    }

    /// Set an explicit readline history file
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Set whether to show the in-flight spinner
    pub fn with_spinner(mut self, show: bool) -> Self {
        self.show_spinner = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self
            .history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("uni-assist").join("history.txt")));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        if let Err(error) = self.refresh.execute().await {
            eprintln!(
                "{}",
                format!("Could not load your conversations: {error}").red()
            );
        }
        self.print_sidebar().await;

        let mut suggestions = sample_presets(self.presets_shown);
        Self::print_suggestions(&suggestions);

        loop {
            // A failed send leaves the draft behind; offer it back for retry.
            let draft = self.send.draft().await;
            let readline = if draft.is_empty() {
                rl.readline(">>> ")
            } else {
                rl.readline_with_initial(">>> ", (draft.as_str(), ""))
            };

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line, &mut suggestions).await {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);
                    self.ask(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Submit typed input as a question.
    async fn ask(&self, line: &str) {
        self.send.set_draft(line).await;
        let spinner = self.spinner();
        let result = self.send.submit_draft().await;
        if let Some(bar) = spinner {
            bar.finish_and_clear();
        }
        self.report(result).await;
    }

    /// Handle a slash command; returns true when the REPL should exit.
    async fn handle_command(&self, line: &str, suggestions: &mut Vec<&'static str>) -> bool {
        let mut parts = line.splitn(2, ' ');
        let command = parts.next().unwrap_or_default();
        let argument = parts.next().map(str::trim).unwrap_or_default();

        match command {
            "/quit" | "/exit" | "/q" => return true,
            "/help" => Self::print_help(),
            "/new" => {
                self.session.lock().await.start_new();
                println!("{}", "Started a new chat. Ask away!".green());
                *suggestions = sample_presets(self.presets_shown);
                Self::print_suggestions(suggestions);
            }
            "/list" => {
                if let Err(error) = self.refresh.execute().await {
                    eprintln!(
                        "{}",
                        format!("Could not refresh your conversations: {error}").red()
                    );
                }
                self.print_sidebar().await;
            }
            "/open" => {
                if argument.is_empty() {
                    println!("Usage: /open <id>  (ids are shown by /list)");
                } else {
                    self.open_conversation(ConversationId::from(argument)).await;
                }
            }
            "/ask" => match argument.parse::<usize>() {
                Ok(n) if (1..=suggestions.len()).contains(&n) => {
                    let question = suggestions[n - 1];
                    println!("{} {}", ">".dimmed(), question);
                    let spinner = self.spinner();
                    let result = self.send.submit_preset(question).await;
                    if let Some(bar) = spinner {
                        bar.finish_and_clear();
                    }
                    self.report(result).await;
                }
                _ => {
                    println!("Usage: /ask <1-{}>", suggestions.len());
                    Self::print_suggestions(suggestions);
                }
            },
            _ => {
                println!("Unknown command: {command}. Try /help.");
            }
        }
        false
    }

    async fn open_conversation(&self, id: ConversationId) {
        match self.open.execute(id).await {
            Ok(OpenOutcome::Ready) => self.print_active_transcript().await,
            Ok(OpenOutcome::Missing) => {
                println!("{}", "That conversation no longer exists.".yellow());
            }
            Err(error) => eprintln!("{}", format!("{error}").red()),
        }
    }

    async fn report(&self, result: Result<SendOutcome, SendError>) {
        match result {
            Ok(SendOutcome::Delivered(_)) => self.print_active_transcript().await,
            Ok(SendOutcome::Busy) => {
                println!("{}", "Still waiting for the previous answer...".yellow());
            }
            Ok(SendOutcome::EmptyInput) => {}
            Err(error) => eprintln!("{}", error.user_message().red()),
        }
    }

    async fn print_active_transcript(&self) {
        let Some(id) = self.session.lock().await.current().cloned() else {
            return;
        };
        let title = self.active_title(&id).await;
        let cache = self.cache.lock().await;
        if let Some(conversation) = cache.get(&id) {
            println!("\n{}", TranscriptFormatter::format(conversation, &title));
        }
    }

    async fn active_title(&self, id: &ConversationId) -> String {
        match self.index.lock().await.find_by_id(id) {
            Some(summary) => summary.title.clone(),
            None => format!("Conversation {id}"),
        }
    }

    async fn print_sidebar(&self) {
        let groups = {
            let index = self.index.lock().await;
            project(index.snapshot())
        };
        println!("\n{}", SidebarView::format(&groups));
    }

    fn print_suggestions(suggestions: &[&'static str]) {
        if suggestions.is_empty() {
            return;
        }
        println!("{}", "Try asking:".dimmed());
        for (n, question) in suggestions.iter().enumerate() {
            println!("  {}. {}", n + 1, question);
        }
        println!("{}", "(/ask <n> submits a suggestion)".dimmed());
    }

    fn spinner(&self) -> Option<ProgressBar> {
        if !self.show_spinner {
            return None;
        }
        let bar = ProgressBar::new_spinner();
        bar.set_message("Thinking...");
        bar.enable_steady_tick(Duration::from_millis(120));
        Some(bar)
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        uni-assist - Student Assistant       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Type a question, or /help for commands.");
    }

    fn print_help() {
        println!("Commands:");
        println!("  /new        start a new chat");
        println!("  /list       refresh and show your conversations");
        println!("  /open <id>  open a conversation");
        println!("  /ask <n>    submit a suggested question");
        println!("  /help       show this help");
        println!("  /quit       exit");
    }
}
