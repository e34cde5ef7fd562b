//! REPL commands
//!
//! The command registry and what each command does.

use tokio::io::AsyncWrite;

use crate::api::PokeApiClient;
use crate::error::{CommandError, FetchError};
use crate::repl::session::Session;
use crate::repl::write_line;

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Every command the prompt understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

impl Command {
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::MapBack,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Displays the next 20 location areas",
            Command::MapBack => "Displays the previous 20 location areas",
            Command::Explore => "Lists the Pokemon found in a location area: explore <area>",
            Command::Catch => "Throws a Pokeball at a Pokemon: catch <pokemon>",
            Command::Inspect => "Shows details of a caught Pokemon: inspect <pokemon>",
            Command::Pokedex => "Lists the Pokemon you have caught",
        }
    }

    /// Looks up a command by its (already lowercased) name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    /// Runs the command with the words that followed its name.
    pub async fn execute<W>(
        self,
        args: &[String],
        session: &mut Session,
        client: &PokeApiClient,
        out: &mut W,
    ) -> Result<Flow, CommandError>
    where
        W: AsyncWrite + Unpin,
    {
        match self {
            Command::Help => help(out).await?,
            Command::Exit => {
                write_line(out, "Closing the Pokedex... Goodbye!").await?;
                return Ok(Flow::Exit);
            }
            Command::Map => map_forward(session, client, out).await?,
            Command::MapBack => map_back(session, client, out).await?,
            Command::Explore => explore(required_arg(args, self)?, client, out).await?,
            Command::Catch => catch(required_arg(args, self)?, session, client, out).await?,
            Command::Inspect => inspect(required_arg(args, self)?, session, out).await?,
            Command::Pokedex => pokedex(session, out).await?,
        }
        Ok(Flow::Continue)
    }
}

fn required_arg(args: &[String], command: Command) -> Result<&str, CommandError> {
    args.first().map(String::as_str).ok_or_else(|| {
        let what = match command {
            Command::Explore => "location area",
            _ => "pokemon",
        };
        CommandError::Usage(format!("usage: {} <{}>", command.name(), what))
    })
}

/// Turns a 404 into a readable not-found error; other failures pass through.
fn not_found_as(err: FetchError, message: String) -> CommandError {
    match err {
        FetchError::Status { status: 404, .. } => CommandError::NotFound(message),
        other => CommandError::Fetch(other),
    }
}

async fn help<W: AsyncWrite + Unpin>(out: &mut W) -> Result<(), CommandError> {
    write_line(out, "Welcome to the Pokedex!").await?;
    write_line(out, "Usage:").await?;
    write_line(out, "").await?;

    let mut commands = Command::ALL;
    commands.sort_by_key(|command| command.name());
    for command in commands {
        write_line(out, &format!("{}: {}", command.name(), command.description())).await?;
    }
    Ok(())
}

async fn map_forward<W: AsyncWrite + Unpin>(
    session: &mut Session,
    client: &PokeApiClient,
    out: &mut W,
) -> Result<(), CommandError> {
    if session.has_paged() && session.next_page().is_none() {
        write_line(out, "you're on the last page").await?;
        return Ok(());
    }

    let next = session.next_page().map(str::to_string);
    show_page(next.as_deref(), session, client, out).await
}

async fn map_back<W: AsyncWrite + Unpin>(
    session: &mut Session,
    client: &PokeApiClient,
    out: &mut W,
) -> Result<(), CommandError> {
    let Some(previous) = session.previous_page().map(str::to_string) else {
        write_line(out, "you're on the first page").await?;
        return Ok(());
    };

    show_page(Some(&previous), session, client, out).await
}

async fn show_page<W: AsyncWrite + Unpin>(
    url: Option<&str>,
    session: &mut Session,
    client: &PokeApiClient,
    out: &mut W,
) -> Result<(), CommandError> {
    let page = client.location_areas(url).await?;
    session.record_page(&page);

    for area in &page.results {
        write_line(out, &area.name).await?;
    }
    Ok(())
}

async fn explore<W: AsyncWrite + Unpin>(
    area_name: &str,
    client: &PokeApiClient,
    out: &mut W,
) -> Result<(), CommandError> {
    write_line(out, &format!("Exploring {}...", area_name)).await?;

    let area = client
        .location_area(area_name)
        .await
        .map_err(|err| not_found_as(err, format!("unknown location area: {}", area_name)))?;

    if area.pokemon_encounters.is_empty() {
        write_line(out, "No Pokemon found").await?;
        return Ok(());
    }

    write_line(out, "Found Pokemon:").await?;
    for encounter in &area.pokemon_encounters {
        write_line(out, &format!(" - {}", encounter.pokemon.name)).await?;
    }
    Ok(())
}

async fn catch<W: AsyncWrite + Unpin>(
    name: &str,
    session: &mut Session,
    client: &PokeApiClient,
    out: &mut W,
) -> Result<(), CommandError> {
    write_line(out, &format!("Throwing a Pokeball at {}...", name)).await?;

    let pokemon = client
        .pokemon(name)
        .await
        .map_err(|err| not_found_as(err, format!("unknown pokemon: {}", name)))?;
    let caught_name = pokemon.name.clone();

    if session.try_catch(pokemon) {
        write_line(out, &format!("{} was caught!", caught_name)).await?;
        write_line(out, "You may now inspect it with the inspect command.").await?;
    } else {
        write_line(out, &format!("{} escaped!", caught_name)).await?;
    }
    Ok(())
}

async fn inspect<W: AsyncWrite + Unpin>(
    name: &str,
    session: &Session,
    out: &mut W,
) -> Result<(), CommandError> {
    let Some(pokemon) = session.caught(name) else {
        write_line(out, "you have not caught that pokemon").await?;
        return Ok(());
    };

    write_line(out, &format!("Name: {}", pokemon.name)).await?;
    write_line(out, &format!("Height: {}", pokemon.height)).await?;
    write_line(out, &format!("Weight: {}", pokemon.weight)).await?;
    write_line(out, "Stats:").await?;
    for stat in &pokemon.stats {
        write_line(out, &format!("  -{}: {}", stat.stat.name, stat.base_stat)).await?;
    }
    write_line(out, "Types:").await?;
    for kind in &pokemon.types {
        write_line(out, &format!("  - {}", kind.kind.name)).await?;
    }
    write_line(out, "Abilities:").await?;
    for ability in &pokemon.abilities {
        write_line(out, &format!("  - {}", ability.ability.name)).await?;
    }
    write_line(out, "Moves:").await?;
    for learned in &pokemon.moves {
        write_line(out, &format!("  - {}", learned.learned.name)).await?;
    }
    Ok(())
}

async fn pokedex<W: AsyncWrite + Unpin>(session: &Session, out: &mut W) -> Result<(), CommandError> {
    if session.caught_count() == 0 {
        write_line(out, "Your Pokedex is empty. Go catch some Pokemon!").await?;
        return Ok(());
    }

    write_line(out, &format!("Your Pokedex ({}):", session.caught_count())).await?;
    for name in session.caught_names() {
        write_line(out, &format!(" - {}", name)).await?;
    }
    Ok(())
}
