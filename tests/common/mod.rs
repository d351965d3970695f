//! Shared utilities for integration tests.

use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use todo_lists::config::TodoConfig;
use todo_lists::http::HttpServer;
use todo_lists::lifecycle::Shutdown;
use todo_lists::model::{Item, ItemId, List};
use todo_lists::store::{StoreError, StoreResult, TodoStore};

/// A server running on an ephemeral port.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: Shutdown,
}

#[allow(dead_code)]
impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.expect("server unreachable")
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("server unreachable")
    }

    /// GET a page, following a single seeding redirect if one comes back.
    pub async fn page(&self, path: &str) -> String {
        let mut response = self.get(path).await;
        if response.status() == 303 {
            let location = location(&response);
            response = self.get(&location).await;
        }
        assert_eq!(response.status(), 200, "GET {path} did not render");
        response.text().await.unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the server over `store`.
pub async fn spawn_app(store: Arc<dyn TodoStore>) -> TestApp {
    let mut config = TodoConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, store);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap();

    TestApp { addr, client, shutdown }
}

/// The `Location` header of a redirect.
pub fn location(response: &reqwest::Response) -> String {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .expect("missing Location header")
        .to_str()
        .unwrap()
        .to_string()
}

/// Item IDs in the order they appear on a rendered page.
#[allow(dead_code)]
pub fn rendered_ids(html: &str) -> Vec<String> {
    html.split("name=\"checkbox\" value=\"")
        .skip(1)
        .map(|rest| rest.split('"').next().unwrap().to_string())
        .collect()
}

/// A store whose every operation fails.
#[allow(dead_code)]
pub struct FailingStore;

#[async_trait]
impl TodoStore for FailingStore {
    async fn find_items(&self) -> StoreResult<Vec<Item>> {
        Err(unavailable())
    }

    async fn insert_items(&self, _items: Vec<Item>) -> StoreResult<()> {
        Err(unavailable())
    }

    async fn remove_item(&self, _id: ItemId) -> StoreResult<bool> {
        Err(unavailable())
    }

    async fn find_list(&self, _name: &str) -> StoreResult<Option<List>> {
        Err(unavailable())
    }

    async fn insert_list(&self, _list: List) -> StoreResult<()> {
        Err(unavailable())
    }

    async fn save_list(&self, _list: &List) -> StoreResult<bool> {
        Err(unavailable())
    }

    async fn pull_list_item(&self, _name: &str, _id: ItemId) -> StoreResult<Option<List>> {
        Err(unavailable())
    }
}

#[allow(dead_code)]
fn unavailable() -> StoreError {
    StoreError::Unavailable("injected failure".into())
}
