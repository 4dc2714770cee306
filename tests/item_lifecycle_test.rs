#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing
)]

mod common;

use common::{create_test_dir, memory_resolvers, niner, resolvers_over};
use items_service::item::{
    FileItemStore, ItemError, ItemQuery, ItemReference, ItemResolvers, RequestContext,
    UpdateItemInput,
};
use std::sync::Arc;

fn owner(owner: &str) -> RequestContext {
    RequestContext::for_owner(owner, "test")
}

fn query(owner: &str) -> ItemQuery {
    ItemQuery {
        owner_id: Some(owner.to_string()),
    }
}

async fn run_niner_scenario(r: &ItemResolvers) {
    let me = owner("yourself");
    let someone = owner("someone-else");

    let created = r.create_item(&me, niner()).await.expect("create");
    assert_eq!(created.owner_id, "yourself");
    assert_eq!(created.name.as_deref(), Some("Niner"));

    let fetched = r.item(&someone, &created.id).await.unwrap();
    assert_eq!(fetched.as_ref(), Some(&created));

    let mine = r.items(&someone, query("yourself")).await.unwrap();
    assert_eq!(mine, vec![created.clone()]);

    let hijack = r
        .update_item(
            &someone,
            UpdateItemInput {
                id: created.id.clone(),
                description: Some("mine now".to_string()),
                ..UpdateItemInput::default()
            },
        )
        .await;
    assert!(matches!(hijack, Err(ItemError::OwnershipConflict)));

    let updated = r
        .update_item(
            &me,
            UpdateItemInput {
                id: created.id.clone(),
                description: Some("updated".to_string()),
                ..UpdateItemInput::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.description.as_deref(), Some("updated"));
    assert_eq!(updated.name.as_deref(), Some("Niner"));

    let stolen = r.delete_item(&someone, &created.id).await;
    assert!(matches!(stolen, Err(ItemError::DeleteConflict)));

    assert!(r.delete_item(&me, &created.id).await.unwrap().ok);
    assert!(r.item(&me, &created.id).await.unwrap().is_none());
    assert!(r.items(&me, query("yourself")).await.unwrap().is_empty());

    let again = r.delete_item(&me, &created.id).await;
    assert!(matches!(again, Err(ItemError::DeleteConflict)));

    let gone = r
        .resolve_reference(&me, ItemReference { id: created.id })
        .await
        .unwrap();
    assert!(gone.is_none());
}

#[tokio::test]
async fn test_niner_scenario_in_memory() {
    run_niner_scenario(&memory_resolvers()).await;
}

#[tokio::test]
async fn test_niner_scenario_on_file_store() {
    let temp_dir = create_test_dir();
    let store = FileItemStore::open(temp_dir.path().join("items.json"))
        .await
        .unwrap();
    run_niner_scenario(&resolvers_over(Arc::new(store))).await;
}

#[tokio::test]
async fn test_file_store_survives_reopen() {
    let temp_dir = create_test_dir();
    let path = temp_dir.path().join("data").join("items.json");

    let created = {
        let store = FileItemStore::open(&path).await.unwrap();
        let r = resolvers_over(Arc::new(store));
        r.create_item(&owner("yourself"), niner()).await.unwrap()
    };

    let reopened = resolvers_over(Arc::new(FileItemStore::open(&path).await.unwrap()));
    let listed = reopened.items(&owner("anyone"), query("yourself")).await.unwrap();
    assert_eq!(listed, vec![created.clone()]);

    // Ownership is still enforced after a reload.
    let result = reopened.delete_item(&owner("someone-else"), &created.id).await;
    assert!(matches!(result, Err(ItemError::DeleteConflict)));
    assert!(reopened.delete_item(&owner("yourself"), &created.id).await.unwrap().ok);
}

#[tokio::test]
async fn test_owners_see_only_their_items() {
    let r = memory_resolvers();
    for _ in 0..3 {
        r.create_item(&owner("a"), niner()).await.unwrap();
    }
    r.create_item(&owner("b"), niner()).await.unwrap();

    let a_items = r.items(&owner("b"), query("a")).await.unwrap();
    assert_eq!(a_items.len(), 3);
    assert!(a_items.iter().all(|i| i.owner_id == "a"));
    assert_eq!(r.items(&owner("a"), query("b")).await.unwrap().len(), 1);
    assert!(r.items(&owner("a"), query("c")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_updates_from_two_owners() {
    let r = memory_resolvers();
    let created = r.create_item(&owner("yourself"), niner()).await.unwrap();

    let mut tasks = Vec::new();
    for (who, text) in [("yourself", "mine"), ("intruder", "theirs")] {
        let r = r.clone();
        let id = created.id.clone();
        tasks.push(tokio::spawn(async move {
            r.update_item(
                &owner(who),
                UpdateItemInput {
                    id,
                    description: Some(text.to_string()),
                    ..UpdateItemInput::default()
                },
            )
            .await
        }));
    }
    let results = futures::future::join_all(tasks).await;

    assert!(results[0].as_ref().unwrap().is_ok());
    assert!(matches!(
        results[1].as_ref().unwrap(),
        Err(ItemError::OwnershipConflict)
    ));
    let stored = r.item(&owner("x"), &created.id).await.unwrap().unwrap();
    assert_eq!(stored.description.as_deref(), Some("mine"));
}
