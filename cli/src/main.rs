//! CLI entrypoint for uni-assist
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use assist_application::{
    AnonymousCredentials, ChatGateway, CredentialProvider, RefreshIndexUseCase,
    SendMessageUseCase, SendOutcome, shared,
};
use assist_domain::{ActiveSession, ConversationCache, ConversationIndex};
use assist_infrastructure::{ConfigLoader, HttpChatGateway, TokenFileCredentials};
use assist_presentation::{ChatRepl, Cli, TranscriptFormatter};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting uni-assist");

    let config = ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?;

    // Credentials: token file when locatable, anonymous otherwise. The
    // backend rejects unauthenticated calls with an auth error the user
    // will see; there is nothing more to do client-side.
    let token_path = config
        .auth
        .token_file
        .clone()
        .or_else(TokenFileCredentials::default_path);
    let credentials: Arc<dyn CredentialProvider> = match token_path {
        Some(path) => Arc::new(TokenFileCredentials::load(path)?),
        None => Arc::new(AnonymousCredentials),
    };
    if !credentials.is_authenticated() {
        eprintln!("Note: no credential found; requests will be unauthenticated.");
    }

    // === Dependency Injection ===
    let gateway: Arc<dyn ChatGateway> = Arc::new(HttpChatGateway::new(
        config.gateway.base_url.clone(),
        Duration::from_secs(config.gateway.timeout_secs),
        credentials,
    )?);

    let cache = shared(ConversationCache::new());
    let index = shared(ConversationIndex::new());
    let session = shared(ActiveSession::new());

    // Chat mode
    if cli.chat {
        let repl = ChatRepl::new(gateway, cache, index, session)
            .with_presets_shown(config.repl.presets_shown)
            .with_history_file(config.repl.history_file.clone())
            .with_spinner(!cli.quiet);

        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };

    // Warm the index so the transcript header can show a real title.
    let refresh = RefreshIndexUseCase::new(gateway.clone(), index.clone());
    let _ = refresh.execute().await;

    let send = SendMessageUseCase::new(
        gateway.clone(),
        cache.clone(),
        index.clone(),
        session.clone(),
    );

    match send.submit(&question).await {
        Ok(SendOutcome::Delivered(id)) => {
            let title = match index.lock().await.find_by_id(&id) {
                Some(summary) => summary.title.clone(),
                None => format!("Conversation {id}"),
            };
            let cache = cache.lock().await;
            if let Some(conversation) = cache.get(&id) {
                println!("{}", TranscriptFormatter::format(conversation, &title));
            }
            Ok(())
        }
        Ok(SendOutcome::EmptyInput) => bail!("Question cannot be empty."),
        Ok(SendOutcome::Busy) => bail!("Another request is already in flight."),
        Err(error) => bail!(error.user_message()),
    }
}
