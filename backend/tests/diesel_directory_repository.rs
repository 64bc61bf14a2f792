//! Integration tests for the Diesel directory adapters against SQLite.
//!
//! Each test gets its own migrated database file in a temporary directory,
//! populated from the bundled seed fixture through the seed repository.

use pet_directory::domain::ports::{
    DirectoryRepository, DirectorySeedRepository, DirectorySeedRepositoryError,
};
use pet_directory::domain::{DirectorySeed, Owner, OwnerId, Pet, PetId};
use pet_directory::outbound::persistence::{
    DieselDirectoryRepository, DieselDirectorySeedRepository,
};
use pet_directory::test_support::{TestDatabase, fixture_seed};
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

struct TestContext {
    runtime: Runtime,
    database: TestDatabase,
    repository: DieselDirectoryRepository,
}

fn setup_context() -> TestContext {
    let runtime = Runtime::new().expect("tokio runtime");
    let database = TestDatabase::new().expect("test database");
    let seed = fixture_seed().expect("fixture seed");
    let repository = runtime.block_on(async {
        database.seed(&seed).await.expect("seed database");
        DieselDirectoryRepository::new(database.pool().await.expect("pool"))
    });

    TestContext {
        runtime,
        database,
        repository,
    }
}

#[fixture]
fn context() -> TestContext {
    setup_context()
}

#[rstest]
fn pet_lookup_joins_its_owner(context: TestContext) {
    let profile = context
        .runtime
        .block_on(context.repository.find_pet_with_owner(PetId::new(1)))
        .expect("query succeeds")
        .expect("pet exists");

    assert_eq!(profile.pet.name, "Rex");
    assert_eq!(profile.pet.species, "Dog");
    assert_eq!(profile.owner_name(), Some("Jo"));
}

#[rstest]
fn stray_lookup_has_no_owner(context: TestContext) {
    let profile = context
        .runtime
        .block_on(context.repository.find_pet_with_owner(PetId::new(3)))
        .expect("query succeeds")
        .expect("pet exists");

    assert_eq!(profile.pet.name, "Pip");
    assert!(profile.pet.owner_id.is_none());
    assert!(profile.owner.is_none());
}

#[rstest]
fn owner_lookup_returns_pets_in_id_order(context: TestContext) {
    let profile = context
        .runtime
        .block_on(context.repository.find_owner_with_pets(OwnerId::new(1)))
        .expect("query succeeds")
        .expect("owner exists");

    assert_eq!(profile.owner.name, "Jo");
    let names: Vec<&str> = profile.pets.iter().map(|pet| pet.name.as_str()).collect();
    assert_eq!(names, vec!["Rex", "Whiskers"]);
}

#[rstest]
fn owner_without_pets_has_empty_collection(context: TestContext) {
    let profile = context
        .runtime
        .block_on(context.repository.find_owner_with_pets(OwnerId::new(2)))
        .expect("query succeeds")
        .expect("owner exists");

    assert_eq!(profile.owner.name, "Sam");
    assert!(profile.has_no_pets());
}

#[rstest]
#[case(0)]
#[case(99)]
#[case(i32::MAX)]
fn missing_ids_return_none(context: TestContext, #[case] id: i32) {
    let pet = context
        .runtime
        .block_on(context.repository.find_pet_with_owner(PetId::new(id)))
        .expect("pet query succeeds");
    let owner = context
        .runtime
        .block_on(context.repository.find_owner_with_pets(OwnerId::new(id)))
        .expect("owner query succeeds");

    assert!(pet.is_none());
    assert!(owner.is_none());
}

#[rstest]
fn reseeding_replaces_previous_rows(context: TestContext) {
    let seed = DirectorySeed::from_json(
        r#"{"owners":[{"id":7,"name":"Ada","pets":[{"id":9,"name":"Bolt","species":"Hare"}]}]}"#,
    )
    .expect("valid seed");

    let summary = context
        .runtime
        .block_on(context.database.seed(&seed))
        .expect("reseed");
    let old_owner = context
        .runtime
        .block_on(context.repository.find_owner_with_pets(OwnerId::new(1)))
        .expect("query succeeds");
    let new_owner = context
        .runtime
        .block_on(context.repository.find_owner_with_pets(OwnerId::new(7)))
        .expect("query succeeds")
        .expect("new owner exists");

    assert_eq!((summary.owners, summary.pets), (1, 1));
    assert!(old_owner.is_none());
    assert_eq!(new_owner.pets.len(), 1);
}

#[rstest]
fn failed_seed_rolls_back(context: TestContext) {
    let seed_repository = context.runtime.block_on(async {
        DieselDirectorySeedRepository::new(context.database.pool().await.expect("pool"))
    });
    // Duplicate primary key fails the second insert mid-transaction.
    let owners = vec![Owner::new(OwnerId::new(4), "Kit")];
    let pets = vec![
        Pet::new(PetId::new(5), "Dot", "Cat", Some(OwnerId::new(4))),
        Pet::new(PetId::new(5), "Dash", "Cat", Some(OwnerId::new(4))),
    ];

    let err = context
        .runtime
        .block_on(seed_repository.replace_all(&owners, &pets))
        .expect_err("duplicate pet id");
    let original = context
        .runtime
        .block_on(context.repository.find_pet_with_owner(PetId::new(1)))
        .expect("query succeeds");

    assert!(matches!(err, DirectorySeedRepositoryError::Query { .. }));
    assert!(original.is_some(), "rollback keeps the previous rows");
}
