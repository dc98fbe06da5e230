//! Application router configuration.

use axum::{Router, middleware, routing::get};

use crate::{
    AppState, endpoints,
    image::get_image_endpoint,
    item::{create_item_endpoint, get_item_endpoint, list_items_endpoint, search_items_endpoint},
    logging::logging_middleware,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::ITEMS,
            get(list_items_endpoint).post(create_item_endpoint),
        )
        .route(endpoints::ITEM, get(get_item_endpoint))
        .route(endpoints::SEARCH, get(search_items_endpoint))
        .route(endpoints::IMAGE, get(get_image_endpoint))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

// The POST route is covered by handler-level tests in `item::create`; the
// tests here exercise the read surface through a real server.
#[cfg(test)]
mod router_tests {
    use std::{fs, path::PathBuf};

    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{
        AppState, build_router,
        category::resolve_category,
        endpoints::{self, format_endpoint},
        item::{Item, ItemName, ItemsResponse, create_item},
    };

    fn get_test_image_dir(test_name: &str) -> PathBuf {
        std::env::temp_dir()
            .join("item_catalog_router_tests")
            .join(format!("{}_{}", std::process::id(), test_name))
    }

    fn get_test_state(test_name: &str) -> AppState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");

        AppState::new(connection, &get_test_image_dir(test_name))
            .expect("Could not create app state")
    }

    fn insert_test_item(name: &str, category_name: &str, state: &AppState) -> Item {
        let connection = state.db_connection.lock().unwrap();
        let category =
            resolve_category(category_name, &connection).expect("Could not resolve category");

        create_item(
            ItemName::new_unchecked(name),
            &category,
            format!("{name}.jpg"),
            &connection,
        )
        .expect("Could not create test item")
    }

    #[tokio::test]
    async fn list_and_search_agree_on_the_full_catalog() {
        let state = get_test_state("list_and_search_agree");
        let inserted = vec![
            insert_test_item("Jacket", "Fashion", &state),
            insert_test_item("Kettle", "Kitchen", &state),
        ];
        let app = build_router(state);
        let server = TestServer::new(app);

        let listed: ItemsResponse = server.get(endpoints::ITEMS).await.json();
        let searched: ItemsResponse = server.get(endpoints::SEARCH).await.json();

        assert_eq!(listed.items, inserted);
        assert_eq!(searched, listed);
    }

    #[tokio::test]
    async fn positional_lookup_returns_single_item_envelope() {
        let state = get_test_state("positional_lookup");
        let first = insert_test_item("Jacket", "Fashion", &state);
        insert_test_item("Shoes", "Fashion", &state);
        let app = build_router(state);
        let server = TestServer::new(app);

        let response: ItemsResponse = server.get(&format_endpoint(endpoints::ITEM, 1)).await.json();
        assert_eq!(response.items, vec![first]);

        let out_of_range = server.get(&format_endpoint(endpoints::ITEM, 99)).await;
        out_of_range.assert_status_ok();
        assert!(out_of_range.json::<ItemsResponse>().items.is_empty());
    }

    #[tokio::test]
    async fn search_filters_through_query_string() {
        let state = get_test_state("search_filters");
        insert_test_item("Jacket", "Fashion", &state);
        let kettle = insert_test_item("Kettle", "Kitchen", &state);
        let app = build_router(state);
        let server = TestServer::new(app);

        let response: ItemsResponse = server
            .get(endpoints::SEARCH)
            .add_query_param("category", "Kitch")
            .await
            .json();

        assert_eq!(response.items, vec![kettle]);
    }

    #[tokio::test]
    async fn image_route_serves_placeholder_for_missing_file() {
        let state = get_test_state("image_placeholder");
        fs::write(state.image_dir.join("default.jpg"), b"placeholder bytes")
            .expect("Could not write placeholder image");
        let app = build_router(state);
        let server = TestServer::new(app);

        let response = server.get("/images/missing.jpg").await;

        response.assert_status_ok();
        assert_eq!(response.as_bytes().as_ref(), b"placeholder bytes");
    }

    #[tokio::test]
    async fn image_route_rejects_wrong_extension() {
        let state = get_test_state("image_wrong_extension");
        let app = build_router(state);
        let server = TestServer::new(app);

        let response = server.get("/images/cat.png").await;

        response.assert_status_bad_request();
    }
}
