//! Line-oriented front end: parses commands, drives the controller, and
//! renders the board as plain text.

use std::io::{self, Write};

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::board::BoardSnapshot;
use crate::client::CollectionClient;
use crate::controller::{Confirmation, Controller};
use crate::entity::{Entity, EntityId};
use crate::events::{BoardEvent, EventStream};

pub const HELP: &str = "\
Commands:
  list         show all entries
  show <id>    show details for an entry
  vote         add a vote to the shown entry
  reset        reset the shown entry's votes (asks first)
  add          add a new entry
  help         show this help
  quit         exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Show(EntityId),
    Vote,
    Reset,
    Add,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("Usage: show <id>")]
    MissingId,
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };

        let command = match head.to_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "show" | "select" => {
                let id = words.next().ok_or(CommandError::MissingId)?;
                Command::Show(EntityId::from(id))
            }
            "vote" | "+" => Command::Vote,
            "reset" => Command::Reset,
            "add" | "new" => Command::Add,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// `y`/`yes` (any case) affirms, anything else refuses.
pub fn parse_confirmation(answer: &str) -> Confirmation {
    let answer = answer.trim().to_lowercase();
    Confirmation::from(answer == "y" || answer == "yes")
}

pub fn render_list(snapshot: &BoardSnapshot) -> String {
    if snapshot.entities.is_empty() {
        return "(no entries)".to_string();
    }

    snapshot
        .entities
        .iter()
        .map(|entity| {
            let marker = if snapshot.is_active(&entity.id) { ">" } else { " " };
            format!("{} [{}] {}", marker, entity.id, entity.name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_detail(entity: &Entity) -> String {
    format!(
        "{}\n  image: {}\n  votes: {}",
        entity.name, entity.image, entity.votes
    )
}

/// Text to print for an event, if any.
pub fn render_event(event: &BoardEvent) -> Option<String> {
    match event {
        BoardEvent::DetailLoaded { entity } => Some(render_detail(entity)),
        BoardEvent::VoteAdded { votes, .. } => Some(format!("votes: {}", votes)),
        BoardEvent::VotesReset { .. } => Some("votes: 0".to_string()),
        other => other.user_message(),
    }
}

/// Interactive session over an input line source and an output sink.
pub struct Repl<R, W, C> {
    lines: Lines<R>,
    out: W,
    controller: Controller<C>,
    events: EventStream,
}

impl<R, W, C> Repl<R, W, C>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    C: CollectionClient,
{
    pub fn new(input: R, out: W, controller: Controller<C>, events: EventStream) -> Self {
        Self {
            lines: input.lines(),
            out,
            controller,
            events,
        }
    }

    pub fn controller(&self) -> &Controller<C> {
        &self.controller
    }

    /// Load the list, then process commands until `quit` or end of input.
    pub async fn run(mut self) -> io::Result<()> {
        if self.controller.load_all().await.is_ok() {
            self.print_list()?;
        }
        self.flush_events()?;

        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let Some(line) = self.lines.next_line().await? else {
                break;
            };

            match Command::parse(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command).await?,
                Ok(None) => {}
                Err(err) => writeln!(self.out, "{}", err)?,
            }
        }

        Ok(())
    }

    async fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::List => self.print_list()?,
            Command::Show(id) => {
                // Failures reach the user as events; only log here.
                if let Err(err) = self.controller.select(&id).await {
                    tracing::debug!(id = %id, error = %err, "Show command failed");
                }
            }
            Command::Vote => {
                if self.controller.add_vote().is_none() {
                    writeln!(self.out, "Nothing selected")?;
                }
            }
            Command::Reset => self.reset().await?,
            Command::Add => self.add().await?,
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => {}
        }
        self.flush_events()
    }

    async fn reset(&mut self) -> io::Result<()> {
        let Some(prompt) = self.controller.reset_prompt() else {
            return writeln!(self.out, "Nothing selected");
        };

        let answer = self.ask(&format!("{} [y/N]", prompt)).await?;
        self.controller.reset_votes(parse_confirmation(&answer));
        Ok(())
    }

    async fn add(&mut self) -> io::Result<()> {
        let name = self.ask("Name").await?;
        let image = self.ask("Image URL").await?;

        if self.controller.create_entity(&name, &image).await.is_ok() {
            self.flush_events()?;
            self.print_list()?;
        }
        Ok(())
    }

    async fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.out, "{}: ", prompt)?;
        self.out.flush()?;
        Ok(self.lines.next_line().await?.unwrap_or_default())
    }

    fn print_list(&mut self) -> io::Result<()> {
        let snapshot = self.controller.snapshot();
        writeln!(self.out, "{}", render_list(&snapshot))
    }

    fn flush_events(&mut self) -> io::Result<()> {
        for event in self.events.drain() {
            if let Some(text) = render_event(&event) {
                writeln!(self.out, "{}", text)?;
            }
        }
        Ok(())
    }
}
