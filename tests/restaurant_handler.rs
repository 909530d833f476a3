mod common;

use common::{mcdonalds, wendys, FailingStore, FixedValidator, RecordingRestaurantStore};
use restaurant_reviews::{
    DefaultRestaurantValidator, InMemoryStore, NewRestaurant, Outcome, RestaurantService,
};
use std::sync::Arc;

fn service_with(valid: bool, store: Arc<RecordingRestaurantStore>) -> RestaurantService {
    RestaurantService::new(Arc::new(FixedValidator(valid)), store)
}

#[tokio::test]
async fn list_without_params_returns_everything() {
    let store = Arc::new(RecordingRestaurantStore::with_rows(vec![mcdonalds().with_id(1)]));
    let service = service_with(true, store.clone());

    let outcome = service.list(None, None).await.unwrap();

    assert_eq!(outcome, Outcome::Success(vec![mcdonalds().with_id(1)]));
    assert_eq!(*store.last_filter.lock().unwrap(), Some(None));
}

#[tokio::test]
async fn list_with_city_only_is_invalid() {
    let store = Arc::new(RecordingRestaurantStore::default());
    let service = service_with(true, store.clone());

    let outcome = service.list(Some("Pittsburgh"), None).await.unwrap();

    assert_eq!(
        outcome,
        Outcome::InvalidArgument("state is required when city is provided".to_string())
    );
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn list_with_state_only_is_invalid() {
    let store = Arc::new(RecordingRestaurantStore::default());
    let service = service_with(true, store.clone());

    assert!(service.list(None, Some("PA")).await.unwrap().is_invalid_argument());
    assert!(service.list(Some("  "), Some("PA")).await.unwrap().is_invalid_argument());
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn list_with_both_params_filters() {
    let store = Arc::new(RecordingRestaurantStore::with_rows(vec![mcdonalds().with_id(1)]));
    let service = service_with(true, store.clone());

    let outcome = service.list(Some("Pittsburgh"), Some("PA")).await.unwrap();

    assert_eq!(outcome.body().map(Vec::len), Some(1));
    let filter = store.last_filter.lock().unwrap().clone().unwrap().unwrap();
    assert_eq!(filter.city, "Pittsburgh");
    assert_eq!(filter.state, "PA");
}

#[tokio::test]
async fn empty_list_is_still_success() {
    let service = service_with(true, Arc::new(RecordingRestaurantStore::default()));

    assert_eq!(
        service.list(Some("Erie"), Some("PA")).await.unwrap(),
        Outcome::Success(vec![])
    );
}

#[tokio::test]
async fn get_with_valid_id_returns_restaurant() {
    let store = Arc::new(RecordingRestaurantStore::with_rows(vec![mcdonalds().with_id(7)]));
    let service = service_with(true, store);

    let outcome = service.get(7).await.unwrap();

    assert_eq!(outcome.body().map(|r| r.name.as_str()), Some("McDonalds"));
    assert!(matches!(outcome, Outcome::Success(_)));
}

#[tokio::test]
async fn get_with_unknown_id_is_not_found() {
    let store = Arc::new(RecordingRestaurantStore::with_rows(vec![mcdonalds().with_id(7)]));
    let service = service_with(true, store);

    assert_eq!(service.get(8).await.unwrap(), Outcome::NotFound(None));
}

#[tokio::test]
async fn get_with_non_positive_id_never_hits_store() {
    let store = Arc::new(RecordingRestaurantStore::default());
    let service = service_with(true, store.clone());

    for id in [0, -1, i64::MIN] {
        assert!(service.get(id).await.unwrap().is_invalid_argument());
    }
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn create_new_restaurant_inserts_once() {
    let store = Arc::new(RecordingRestaurantStore::with_rows(vec![mcdonalds().with_id(1)]));
    let service = service_with(true, store.clone());

    let outcome = service.create(wendys()).await.unwrap();

    assert_eq!(outcome, Outcome::Created(wendys().with_id(1000)));
    assert_eq!(store.inserts(), 1);
}

#[tokio::test]
async fn create_invalid_restaurant_never_reaches_store() {
    let store = Arc::new(RecordingRestaurantStore::default());
    let service = service_with(false, store.clone());

    let outcome = service.create(wendys()).await.unwrap();

    assert!(outcome.is_invalid_argument());
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn create_existing_restaurant_conflicts_with_existing_row() {
    let existing = mcdonalds().with_id(1);
    let store = Arc::new(RecordingRestaurantStore::with_rows(vec![existing.clone()]));
    let service = service_with(true, store.clone());

    let outcome = service.create(mcdonalds()).await.unwrap();

    assert_eq!(outcome, Outcome::Conflict(existing));
    assert_eq!(store.inserts(), 0);
}

#[tokio::test]
async fn duplicate_key_match_is_exact() {
    let store = Arc::new(RecordingRestaurantStore::with_rows(vec![mcdonalds().with_id(1)]));
    let service = service_with(true, store.clone());

    let outcome = service
        .create(NewRestaurant::new("mcdonalds", "Pittsburgh", "PA"))
        .await
        .unwrap();

    assert!(matches!(outcome, Outcome::Created(_)));
    assert_eq!(store.inserts(), 1);
}

#[tokio::test]
async fn create_twice_yields_created_then_conflict() {
    let service = RestaurantService::new(
        Arc::new(DefaultRestaurantValidator),
        Arc::new(InMemoryStore::new()),
    );

    let first = service.create(mcdonalds()).await.unwrap();
    let created = match first {
        Outcome::Created(r) => r,
        other => panic!("expected Created, got {:?}", other),
    };
    assert!(created.id > 0);

    let second = service.create(mcdonalds()).await.unwrap();
    assert_eq!(second, Outcome::Conflict(created));
}

#[tokio::test]
async fn store_failures_propagate_as_errors() {
    let service = RestaurantService::new(Arc::new(FixedValidator(true)), Arc::new(FailingStore));

    assert!(service.list(None, None).await.is_err());
    assert!(service.get(1).await.is_err());
    assert!(service.create(mcdonalds()).await.is_err());
    // Validation still short-circuits before the store.
    assert!(service.get(0).await.unwrap().is_invalid_argument());
}

#[tokio::test]
async fn padded_fields_are_trimmed_and_still_listable() {
    let service = RestaurantService::new(
        Arc::new(DefaultRestaurantValidator),
        Arc::new(InMemoryStore::new()),
    );

    let created = match service
        .create(NewRestaurant::new(" Eat ", "Pittsburgh ", " PA"))
        .await
        .unwrap()
    {
        Outcome::Created(r) => r,
        other => panic!("expected Created, got {:?}", other),
    };
    assert_eq!((created.name.as_str(), created.city.as_str(), created.state.as_str()), ("Eat", "Pittsburgh", "PA"));

    for city in ["Pittsburgh", "Pittsburgh "] {
        let listed = service.list(Some(city), Some("PA")).await.unwrap();
        assert_eq!(listed, Outcome::Success(vec![created.clone()]), "city {:?}", city);
    }

    let again = service
        .create(NewRestaurant::new("Eat", " Pittsburgh", "PA "))
        .await
        .unwrap();
    assert_eq!(again, Outcome::Conflict(created));
}
