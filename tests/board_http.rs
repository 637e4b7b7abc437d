use std::net::SocketAddr;
use std::sync::Arc;

use mini_board::config::AppConfig;
use mini_board::network::BoardServer;
use mini_board::storage::MessageStore;
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, LOCATION};

async fn start_board() -> (SocketAddr, Arc<MessageStore>) {
    let config = AppConfig {
        listen_addr: "127.0.0.1:0".to_string(),
        stats_interval_secs: 0,
    };
    let store = Arc::new(MessageStore::new());
    let server = BoardServer::bind(&config, Arc::clone(&store)).await.unwrap();
    let addr = server.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = server.run().await;
    });

    (addr, store)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

async fn get_board(client: &reqwest::Client, addr: SocketAddr) -> String {
    let response = client
        .get(format!("http://{addr}/board"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response.text().await.unwrap()
}

async fn post(
    client: &reqwest::Client,
    addr: SocketAddr,
    nickname: &str,
    content: &str,
) -> reqwest::Response {
    client
        .post(format!("http://{addr}/board"))
        .form(&[("nickname", nickname), ("content", content)])
        .send()
        .await
        .unwrap()
}

fn assert_redirects_to_board(response: &reqwest::Response) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/board");
}

#[tokio::test]
async fn test_board_is_html() {
    let (addr, _store) = start_board().await;
    let response = client()
        .get(format!("http://{addr}/board"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "text/html; charset=UTF-8");
}

#[tokio::test]
async fn test_post_then_render_newest_first() {
    let (addr, store) = start_board().await;
    let client = client();

    let page = get_board(&client, addr).await;
    assert!(page.contains("<p><i>(No messages yet)</i></p>"));

    let response = post(&client, addr, "Alice", "Hi there").await;
    assert_redirects_to_board(&response);
    let page = get_board(&client, addr).await;
    assert!(page.contains("<p><b>Alice</b>: Hi there</p>"));
    assert!(!page.contains("(No messages yet)"));

    let response = post(&client, addr, "Bob", "Yo").await;
    assert_redirects_to_board(&response);
    let page = get_board(&client, addr).await;
    let bob = page.find("<p><b>Bob</b>: Yo</p>").unwrap();
    let alice = page.find("<p><b>Alice</b>: Hi there</p>").unwrap();
    assert!(bob < alice);

    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_blank_posts_are_dropped_but_still_redirect() {
    let (addr, store) = start_board().await;
    let client = client();

    let response = post(&client, addr, "", "hello").await;
    assert_redirects_to_board(&response);
    let response = post(&client, addr, "Alice", "   ").await;
    assert_redirects_to_board(&response);

    let response = client
        .post(format!("http://{addr}/board"))
        .form(&[("nickname", "Alice")])
        .send()
        .await
        .unwrap();
    assert_redirects_to_board(&response);

    let response = client
        .post(format!("http://{addr}/board"))
        .body("not a form")
        .send()
        .await
        .unwrap();
    assert_redirects_to_board(&response);

    assert!(store.is_empty());
    let page = get_board(&client, addr).await;
    assert!(page.contains("<p><i>(No messages yet)</i></p>"));
}

#[tokio::test]
async fn test_repeated_fields_use_first_value() {
    let (addr, store) = start_board().await;
    let client = client();

    let response = client
        .post(format!("http://{addr}/board"))
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body("nickname=a&nickname=b&content=c&extra=x")
        .send()
        .await
        .unwrap();
    assert_redirects_to_board(&response);

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].nickname(), "a");
    assert_eq!(snapshot[0].content(), "c");
}

#[tokio::test]
async fn test_markup_is_escaped() {
    let (addr, _store) = start_board().await;
    let client = client();

    post(&client, addr, "<b>X</b>", "test").await;
    let page = get_board(&client, addr).await;

    assert!(page.contains("<p><b>&lt;b&gt;X&lt;/b&gt;</b>: test</p>"));
    assert!(!page.contains("<b><b>X</b></b>"));
}

#[tokio::test]
async fn test_root_redirects_to_board() {
    let (addr, _store) = start_board().await;
    let response = client()
        .get(format!("http://{addr}/"))
        .send()
        .await
        .unwrap();
    assert_redirects_to_board(&response);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_posts_are_all_stored() {
    let (addr, store) = start_board().await;
    let client = client();

    let tasks: Vec<_> = (0..100)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move {
                let response = post(&client, addr, &format!("user{i}"), &format!("unique-{i}")).await;
                assert_eq!(response.status(), StatusCode::SEE_OTHER);
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 100);

    let page = get_board(&client, addr).await;
    for i in 0..100 {
        let line = format!("<p><b>user{i}</b>: unique-{i}</p>");
        assert_eq!(page.matches(&line).count(), 1);
    }
}
