use crate::modules::matches::adapters::outbound::match_store_in_memory::InMemoryMatchStore;
use crate::modules::matches::adapters::outbound::snapshot_file::JsonFileSnapshotStore;
use crate::modules::matches::core::ports::{MatchRepository, SnapshotStore};
use crate::modules::matches::use_cases::restore_matches::handler::restore_matches;
use crate::shell::bootstrap::Application;
use crate::shell::config::Settings;
use crate::tests::fixtures::matches::MatchBuilder;
use serde_json::json;
use std::path::Path;

fn settings_for(path: &Path) -> Settings {
    Settings {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        storage_path: Some(path.to_path_buf()),
    }
}

#[tokio::test]
async fn restores_three_matches_and_continues_at_the_persisted_next_id() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matches.json");
    let document = json!({
        "matches": {
            "1": { "id": 1, "homeTeam": "Ajax", "awayTeam": "PSV", "matchDate": "2024-03-01" },
            "2": { "id": 2, "homeTeam": "AZ", "awayTeam": "Twente", "homeGoals": 3 },
            "3": { "id": 3, "homeTeam": "Utrecht", "awayTeam": "Vitesse", "extraTime": true }
        },
        "nextID": 4
    });
    std::fs::write(&path, serde_json::to_vec_pretty(&document).unwrap()).unwrap();

    let snapshot = restore_matches(&JsonFileSnapshotStore::new(&path)).await;
    let store = InMemoryMatchStore::from_snapshot(snapshot);

    let all = store.list().await;
    assert_eq!(all.len(), 3);
    assert_eq!(all[1].home_goals, 3);
    assert!(all[2].extra_time);
    assert_eq!(store.create(MatchBuilder::new().build()).await.id, 4);
}

#[tokio::test]
async fn starts_empty_when_the_file_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matches.json");
    std::fs::write(&path, "{\"matches\": [").unwrap();

    let application = Application::build(&settings_for(&path)).await;

    assert!(application.state.matches.list().await.is_empty());
    assert_eq!(
        application
            .state
            .matches
            .create(MatchBuilder::new().build())
            .await
            .id,
        1
    );
    application.shutdown().await;
}

#[tokio::test]
async fn survives_a_restart_through_the_backing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("matches.json");

    let first_run = Application::build(&settings_for(&path)).await;
    let kept = first_run
        .state
        .matches
        .create(MatchBuilder::new().build())
        .await;
    let dropped = first_run
        .state
        .matches
        .create(MatchBuilder::new().home_team("PSV").build())
        .await;
    first_run.state.matches.register_goal(kept.id).await;
    first_run.state.matches.delete(dropped.id).await;
    first_run.shutdown().await;

    let persisted = JsonFileSnapshotStore::new(&path)
        .load()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(persisted.next_id, 3);
    assert_eq!(persisted.matches.len(), 1);

    let second_run = Application::build(&settings_for(&path)).await;
    let restored = second_run.state.matches.get(kept.id).await.unwrap();
    assert_eq!(restored.home_goals, kept.home_goals + 1);
    assert_eq!(second_run.state.matches.get(dropped.id).await, None);
    assert_eq!(
        second_run
            .state
            .matches
            .create(MatchBuilder::new().build())
            .await
            .id,
        3
    );
    second_run.shutdown().await;
}

#[tokio::test]
async fn keeps_serving_when_the_file_cannot_be_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matches.json");
    std::fs::create_dir(&path).unwrap();

    let application = Application::build(&settings_for(&path)).await;
    let created = application
        .state
        .matches
        .create(MatchBuilder::new().build())
        .await;

    assert_eq!(application.state.matches.get(created.id).await, Some(created));
    application.shutdown().await;
    assert!(path.is_dir());
}

#[tokio::test]
async fn writes_nothing_when_persistence_is_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        storage_path: None,
        ..settings_for(&dir.path().join("matches.json"))
    };

    let application = Application::build(&settings).await;
    application
        .state
        .matches
        .create(MatchBuilder::new().build())
        .await;
    application.shutdown().await;

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
