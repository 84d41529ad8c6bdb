mod common;

use common::spawn_test_server;
use serde_json::{Value, json};
use std::collections::HashSet;
use trivia::messages::QuizResponse;

async fn next_question(
    client: &reqwest::Client,
    url: &str,
    category: Value,
    previous: &[i64],
) -> QuizResponse {
    let response = client
        .post(url)
        .json(&json!({
            "previous_questions": previous,
            "quiz_category": category,
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

#[tokio::test]
async fn category_session_serves_each_question_once() {
    let server = spawn_test_server().await;
    let client = reqwest::Client::new();
    let url = server.url("/quizzes");
    let category = json!({"type": "Geography", "id": "3"});

    let mut previous: Vec<i64> = Vec::new();
    loop {
        let response = next_question(&client, &url, category.clone(), &previous).await;
        assert!(response.success);

        let Some(question) = response.question else {
            assert_eq!(response.previous_questions.ids(), previous.as_slice());
            break;
        };
        assert_eq!(question.category, Some(3));
        assert!(!previous.contains(&question.id));

        previous.push(question.id);
        assert_eq!(response.previous_questions.ids(), previous.as_slice());
    }

    let served: HashSet<i64> = previous.iter().copied().collect();
    assert_eq!(served, HashSet::from([9, 10, 11]));
}

#[tokio::test]
async fn full_session_covers_every_question() {
    let server = spawn_test_server().await;
    let client = reqwest::Client::new();
    let url = server.url("/quizzes");

    let mut previous: Vec<i64> = Vec::new();
    for _ in 0..19 {
        let response = next_question(&client, &url, json!("all"), &previous).await;
        let question = response.question.expect("pool should not be exhausted yet");
        previous.push(question.id);
    }

    let response = next_question(&client, &url, json!("all"), &previous).await;
    assert!(response.question.is_none());

    let served: HashSet<i64> = previous.iter().copied().collect();
    assert_eq!(served.len(), 19);
}

#[tokio::test]
async fn deleted_question_is_never_served() {
    let server = spawn_test_server().await;
    let client = reqwest::Client::new();

    let response = client
        .delete(server.url("/questions/6"))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let response = next_question(&client, &server.url("/quizzes"), json!(6), &[]).await;
    assert_eq!(response.question.map(|q| q.id), Some(7));

    let response = next_question(&client, &server.url("/quizzes"), json!(6), &[7]).await;
    assert!(response.question.is_none());
}

#[tokio::test]
async fn categories_endpoint_over_http() {
    let server = spawn_test_server().await;

    let response = reqwest::get(&server.url("/categories")).await.unwrap();
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["total_categories"], 6);
}
