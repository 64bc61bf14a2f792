//! Builders for HTTP state backed by the record store.

use std::sync::Arc;

use actix_web::web;

use pet_directory::domain::DirectoryService;
use pet_directory::inbound::http::state::HttpState;
use pet_directory::outbound::persistence::DieselDirectoryRepository;

use super::ServerConfig;

/// Assemble handler state: Diesel repository, lookup service, HTTP state.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repository = DieselDirectoryRepository::new(config.db_pool.clone());
    let service = DirectoryService::new(Arc::new(repository));
    web::Data::new(HttpState::new(Arc::new(service)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pet_directory::domain::PetId;
    use pet_directory::test_support::{TestDatabase, fixture_seed};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn state_reads_from_the_configured_pool() {
        let database = TestDatabase::new().expect("test database");
        database
            .seed(&fixture_seed().expect("fixture seed"))
            .await
            .expect("seeded");
        let pool = database.pool().await.expect("pool");
        let config = ServerConfig::new("127.0.0.1:0".parse().expect("addr"), pool);

        let state = build_http_state(&config);
        let profile = state
            .directory
            .find_pet_by_id(PetId::new(1))
            .await
            .expect("seeded pet");

        assert_eq!(profile.pet.name, "Rex");
        assert_eq!(profile.owner_name(), Some("Jo"));
    }
}
