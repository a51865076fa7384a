use color_eyre::eyre::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::AsyncReadExt;
use tracing::debug;

use super::Command;
use crate::facade::{Catalog, OpResult};
use crate::item::core::{CatalogError, EntityId, EntityKind};
use crate::item::entities::{
    CatalogItem, Cheat, CheatData, Episode, Game, Genre, Medium, Movie, Music, Picture, Program,
    Season, Show, Song,
};

/// Rendered result of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub ok: bool,
    /// Pretty-printed JSON `OpResult`
    pub output: String,
}

/// What to do with one kind once it has been resolved to a type.
enum Action {
    List,
    Get(EntityId),
    Find(EntityId),
    Add(String),
    Update(String),
    Remove(EntityId),
    Duplicate(EntityId),
    MoveUp(EntityId),
    MoveDown(EntityId),
    Renumber,
    Clear,
}

macro_rules! with_kind {
    ($kind:expr, $run:ident($($arg:expr),*)) => {
        match $kind {
            EntityKind::Movie => $run::<Movie>($($arg),*).await,
            EntityKind::Medium => $run::<Medium>($($arg),*).await,
            EntityKind::Show => $run::<Show>($($arg),*).await,
            EntityKind::Season => $run::<Season>($($arg),*).await,
            EntityKind::Episode => $run::<Episode>($($arg),*).await,
            EntityKind::Game => $run::<Game>($($arg),*).await,
            EntityKind::Cheat => $run::<Cheat>($($arg),*).await,
            EntityKind::CheatData => $run::<CheatData>($($arg),*).await,
            EntityKind::Music => $run::<Music>($($arg),*).await,
            EntityKind::Song => $run::<Song>($($arg),*).await,
            EntityKind::Program => $run::<Program>($($arg),*).await,
            EntityKind::Picture => $run::<Picture>($($arg),*).await,
            EntityKind::Genre => $run::<Genre>($($arg),*).await,
        }
    };
}

/// Run one command against the catalog.
///
/// Rejected operations are reported inside the returned [`Outcome`]; only
/// malformed payloads and serialization failures are errors.
pub async fn execute(catalog: &Catalog, command: Command) -> Result<Outcome> {
    let (kind, action) = match command {
        Command::Stats => return render(&catalog.statistics().await),
        Command::Renumber { kind: None } => return render(&catalog.update_all_positions().await),
        Command::Renumber { kind: Some(kind) } => (kind, Action::Renumber),
        Command::List { kind } => (kind, Action::List),
        Command::Clear { kind } => (kind, Action::Clear),
        Command::Get { kind, id } => (kind, Action::Get(id)),
        Command::Find { kind, parent } => (kind, Action::Find(parent)),
        Command::Remove { kind, id } => (kind, Action::Remove(id)),
        Command::Duplicate { kind, id } => (kind, Action::Duplicate(id)),
        Command::MoveUp { kind, id } => (kind, Action::MoveUp(id)),
        Command::MoveDown { kind, id } => (kind, Action::MoveDown(id)),
        Command::Add { kind, payload } => (kind, Action::Add(read_payload(payload).await?)),
        Command::Update { kind, payload } => (kind, Action::Update(read_payload(payload).await?)),
    };
    debug!(%kind, "Dispatching command");
    with_kind!(kind, run_typed(catalog, action))
}

async fn run_typed<T>(catalog: &Catalog, action: Action) -> Result<Outcome>
where
    T: CatalogItem + Serialize + DeserializeOwned,
{
    let facade = catalog.facade::<T>();
    match action {
        Action::List => render(&facade.list().await),
        Action::Get(id) => render(&facade.get(id).await),
        Action::Find(parent) => render(&facade.find(parent).await),
        Action::Remove(id) => render(&facade.remove(id).await),
        Action::Duplicate(id) => render(&facade.duplicate(id).await),
        Action::MoveUp(id) => render(&facade.move_up(id).await),
        Action::MoveDown(id) => render(&facade.move_down(id).await),
        Action::Renumber => render(&facade.update_positions().await),
        Action::Clear => render(&facade.clear().await),
        Action::Add(raw) => match parse_payload::<T>(&raw)? {
            Ok(entity) => render(&facade.add(entity).await),
            Err(err) => render(&OpResult::<T>::from(Err(err))),
        },
        Action::Update(raw) => match parse_payload::<T>(&raw)? {
            Ok(entity) => render(&facade.update(entity).await),
            Err(err) => render(&OpResult::<()>::from(Err(err))),
        },
    }
}

/// Decode a JSON payload for kind `T`.
///
/// The payload may carry a `kind` tag; when it names another kind the inner
/// result is [`CatalogError::KindMismatch`].
pub fn parse_payload<T>(raw: &str) -> Result<Result<T, CatalogError>, serde_json::Error>
where
    T: CatalogItem + DeserializeOwned,
{
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if let Some(tag) = value.get("kind") {
        let found: EntityKind = serde_json::from_value(tag.clone())?;
        if found != T::KIND {
            return Ok(Err(CatalogError::KindMismatch {
                expected: T::KIND,
                found,
            }));
        }
    }
    serde_json::from_value(value).map(Ok)
}

/// `-` reads the payload from stdin.
async fn read_payload(payload: String) -> Result<String> {
    if payload != "-" {
        return Ok(payload);
    }
    let mut buffer = String::new();
    tokio::io::stdin().read_to_string(&mut buffer).await?;
    Ok(buffer)
}

fn render<R: Serialize>(result: &OpResult<R>) -> Result<Outcome> {
    Ok(Outcome {
        ok: result.is_ok(),
        output: serde_json::to_string_pretty(result)?,
    })
}
