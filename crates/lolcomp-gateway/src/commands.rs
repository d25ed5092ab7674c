//! CLI run modes. Library calls return typed outcomes; the printing of
//! user-facing messages happens here.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use rand::thread_rng;

use lolcomp_catalog::{CatalogProvider, DdragonClient};
use lolcomp_gateway::{AppState, Settings, run_http};
use lolcomp_roll::{Selection, roll_n};
use lolcomp_store::{CompositionStore, DeleteOutcome, FileStorage, SaveOutcome};
use lolcomp_types::{CatalogSnapshot, Composition, Role};

use crate::cli::{CompositionsAction, RoleArg};

fn provider(settings: &Settings) -> Arc<DdragonClient> {
    Arc::new(DdragonClient::with_base_url(
        settings.provider_base_url(),
        settings.provider_locale(),
    ))
}

fn open_store(settings: &Settings) -> Result<CompositionStore> {
    let storage = Arc::new(FileStorage::new(settings.storage_path()));
    CompositionStore::load(storage, settings.storage_key())
        .context("failed to load saved compositions")
}

async fn fetch_snapshot(settings: &Settings) -> Result<CatalogSnapshot> {
    let envelope = provider(settings)
        .fetch_catalog()
        .await
        .context("failed to fetch the champion catalog")?;
    Ok(CatalogSnapshot::from_envelope(envelope))
}

pub(crate) async fn run_gateway_mode(bind: Option<String>, settings: &Settings) -> Result<()> {
    let storage = Arc::new(FileStorage::new(settings.storage_path()));
    let state = AppState::initialize(provider(settings), storage, &settings.storage_key()).await;
    run_http(state, &settings.bind(bind.as_deref())).await
}

pub(crate) async fn run_roll_mode(
    tags: Vec<RoleArg>,
    count: usize,
    json: bool,
    settings: &Settings,
) -> Result<()> {
    let snapshot = fetch_snapshot(settings).await?;
    let selection: Selection = tags.into_iter().map(Role::from).collect();
    let rolled = {
        let mut rng = thread_rng();
        roll_n(&snapshot, &selection, count, &mut rng)
    };
    if rolled.is_empty() {
        println!("No champions match the selected roles.");
        return Ok(());
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&rolled)?);
        return Ok(());
    }
    for champion in &rolled {
        let tags: Vec<&str> = champion.tags.iter().map(|tag| tag.label()).collect();
        println!("{} - {} [{}]", champion.name, champion.title, tags.join(", "));
    }
    Ok(())
}

pub(crate) async fn run_compositions_mode(
    action: CompositionsAction,
    settings: &Settings,
) -> Result<()> {
    match action {
        CompositionsAction::List => {
            let store = open_store(settings)?;
            if store.is_empty() {
                println!("No saved compositions.");
                return Ok(());
            }
            for saved in store.compositions() {
                let lineup: Vec<&str> = saved.lineup().into_iter().collect();
                println!("{} ({}): {}", saved.id, saved.version, lineup.join(", "));
            }
            Ok(())
        }
        CompositionsAction::Save { champions } => {
            let snapshot = fetch_snapshot(settings).await?;
            let mut store = open_store(settings)?;
            store
                .migrate(&snapshot)
                .context("failed to migrate saved compositions")?;

            let mut records = Vec::with_capacity(champions.len());
            for id in &champions {
                let Some(record) = snapshot.get(id) else {
                    bail!("unknown champion: {id}");
                };
                records.push(record.clone());
            }
            let candidate = Composition::new(snapshot.version(), records);
            match store.save(candidate).context("failed to save composition")? {
                SaveOutcome::Saved { id } => println!("Saved composition {id}."),
                SaveOutcome::Duplicate { existing_id } => {
                    println!("Not saved: an identical composition already exists ({existing_id}).");
                }
            }
            Ok(())
        }
        CompositionsAction::Delete { id } => {
            let mut store = open_store(settings)?;
            match store.delete(&id).context("failed to delete composition")? {
                DeleteOutcome::Deleted => println!("Deleted composition {id}."),
                DeleteOutcome::NotFound => println!("No composition with id {id}."),
            }
            Ok(())
        }
    }
}
