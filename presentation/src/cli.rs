use application::ChatService;
use clap::Parser;
use colored::Colorize;
use domain::{ChatTransport, Conversation};
use shared::telemetry::Telemetry;
use shared::types::Result;
use shared::utils::{is_exit_command, strip_line_ending};
use std::io::{BufRead, Write};
use tracing::debug;

/// Chat with Dobby-70B through the Fireworks inference API.
///
/// Reads `FIREWORKS_API_KEY` (and optionally `FIREWORKS_API_URL`,
/// `FIREWORKS_MODEL`) from the environment or a `.env` file.
#[derive(Parser, Debug)]
#[command(name = "dobby_chat")]
#[command(version, about = "Chat with Dobby-70B via Fireworks", long_about = None)]
pub struct Cli {}

/// The read-eval-print loop. One blocking request per line of input.
pub struct CliApp<T: ChatTransport> {
    service: ChatService<T>,
    conversation: Conversation,
}

impl<T: ChatTransport> CliApp<T> {
    pub fn new(service: ChatService<T>) -> Self {
        let conversation = Conversation::for_persona(service.persona());
        Self {
            service,
            conversation,
        }
    }

    pub fn service(&self) -> &ChatService<T> {
        &self.service
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Drive the chat until `exit` or end of input.
    pub async fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        self.print_banner(&mut out)?;

        let mut buf = Vec::new();
        loop {
            write!(out, "\n{} ", "You:".cyan().bold())?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);

            if is_exit_command(&line) {
                writeln!(out, "{}", "Exiting.".yellow())?;
                break;
            }

            let reply = self.turn(strip_line_ending(&line)).await;
            writeln!(out, "{} {}", self.label().magenta().bold(), reply)?;
        }

        Ok(())
    }

    /// Append the user line, ask the endpoint, append and return the reply.
    pub async fn turn(&mut self, user_input: &str) -> String {
        let telemetry = Telemetry::new();
        self.conversation.push_user(user_input);

        let reply = self.service.reply(self.conversation.messages()).await;
        self.conversation.push_assistant(reply.clone());

        debug!(
            turn = self.conversation.turns(),
            messages = self.conversation.len(),
            elapsed_ms = telemetry.elapsed_ms() as u64,
            "turn complete"
        );
        reply
    }

    fn label(&self) -> String {
        format!("{}:", self.service.persona().name)
    }

    fn print_banner<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "{}",
            "=== Chat with Dobby-70B via Fireworks ===".green().bold()
        )?;
        writeln!(out, "Type 'exit' to end the conversation.")?;
        Ok(())
    }
}
