//! Terminal operator console. Lines starting with `/` are commands,
//! anything else is what the caller said.

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::call::{
    CallSession, Conversation, HttpTransport, LocalTransport, ReplyTransport, Speaker,
};
use crate::core::{AppConfig, init_tracing};

const HELP: &str = "Commands: /start, /end, /voice, /send, /logs, /help, /quit";

fn print_turn(speaker: Speaker, text: &str) {
    match speaker {
        Speaker::User => println!("caller> {}", text),
        Speaker::Assistant => println!("agent> {}", text),
    }
}

fn print_logs(calls: &[Conversation]) {
    if calls.is_empty() {
        println!("No calls yet");
        return;
    }
    for call in calls {
        let ended = call
            .ended_at
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        println!("[{}] {} ({} messages)", ended, call.preview(), call.len());
    }
}

async fn send(session: &mut CallSession, text: &str, transport: &dyn ReplyTransport) {
    if !session.in_call() {
        println!("No call in progress, /start to answer one");
        return;
    }
    if session.send(text, transport).await {
        if let Some(turn) = session.current().and_then(|c| c.turns().last()) {
            print_turn(turn.speaker, &turn.text);
        }
    }
}

pub async fn run(remote: bool, url: Option<String>) -> Result<()> {
    // Keep the console readable unless RUST_LOG says otherwise
    init_tracing(&format!("{}=warn", env!("CARGO_CRATE_NAME")));

    let config = AppConfig::default();
    let transport: Box<dyn ReplyTransport> = match (remote, url) {
        (_, Some(url)) => Box::new(HttpTransport::new(&url)),
        (true, None) => Box::new(HttpTransport::new(&config.api_base_url)),
        (false, None) => Box::new(LocalTransport),
    };

    let mut rl = DefaultEditor::new()?;
    let mut session = CallSession::new();
    println!("{}", HELP);

    loop {
        let prompt = if session.in_call() { "call> " } else { "idle> " };
        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                match line {
                    "" => {}
                    "/start" => match session.start_call() {
                        Ok(call) => {
                            let greeting = &call.turns()[0];
                            print_turn(greeting.speaker, &greeting.text);
                        }
                        Err(e) => println!("{}", e),
                    },
                    "/end" => {
                        if session.end_call() {
                            println!("Call ended and logged");
                        } else {
                            println!("Call ended");
                        }
                    }
                    "/voice" => {
                        if !session.in_call() {
                            println!("No call in progress, /start to answer one");
                            continue;
                        }
                        println!("Listening...");
                        let heard = session
                            .simulate_voice_input(config.listen_delay)
                            .await
                            .to_string();
                        println!("Heard: {} (/send to submit)", heard);
                    }
                    "/send" => {
                        let draft = session.input().to_string();
                        send(&mut session, &draft, transport.as_ref()).await;
                    }
                    "/logs" => print_logs(session.archive().calls()),
                    "/help" => println!("{}", HELP),
                    "/quit" => break,
                    text => {
                        let _ = rl.add_history_entry(text);
                        send(&mut session, text, transport.as_ref()).await;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    session.end_call();
    Ok(())
}
