use std::collections::HashMap;

use axum::http::StatusCode;
use privet_api::router;
use privet_db::repositories::user as user_repo;
use serde_json::{Value, json};

use crate::common::{self, TestClient};

/// Map of prompt to translation, read from the user's progress report
async fn answer_key(client: &TestClient, token: &str) -> HashMap<String, String> {
    progress(client, token)
        .await
        .into_iter()
        .map(|entry| {
            (
                entry["russian"].as_str().expect("russian").to_string(),
                entry["english"].as_str().expect("english").to_string(),
            )
        })
        .collect()
}

async fn current_word(client: &TestClient, token: &str) -> String {
    let response = client.get_with_token("/api/word", token).await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert!(body["translit"].is_string());
    body["word"].as_str().expect("word").to_string()
}

async fn progress(client: &TestClient, token: &str) -> Vec<Value> {
    let response = client.get_with_token("/api/users/progress", token).await;
    response.assert_status(StatusCode::OK);

    let mut body: Value = response.json();
    match body["questions"].take() {
        Value::Array(questions) => questions,
        other => panic!("Expected a questions array, got {other}"),
    }
}

fn entry_for<'a>(progress: &'a [Value], word: &str) -> &'a Value {
    progress
        .iter()
        .find(|entry| entry["russian"] == word)
        .expect("word should appear in progress")
}

#[tokio::test]
async fn test_words_require_authentication() {
    let state = test_state!();
    let client = TestClient::new(router::router().with_state(state));

    client
        .get("/api/word")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    client
        .get("/api/users/progress")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    client
        .post_json("/api/word", &json!({ "answer": "hello" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_first_question_is_first_catalog_word() {
    let state = test_state!();
    let client = TestClient::new(router::router().with_state(state.clone()));
    let (username, token) = common::register_and_login(&client).await;

    let progress = progress(&client, &token).await;
    let word = current_word(&client, &token).await;
    assert_eq!(progress[0]["russian"], word.as_str());

    // Reading the question does not move the ring
    assert_eq!(current_word(&client, &token).await, word);

    common::db::delete_user(&state.pool, &username)
        .await
        .expect("Failed to cleanup user");
}

#[tokio::test]
async fn test_correct_and_incorrect_answers() {
    let state = test_state!();
    let client = TestClient::new(router::router().with_state(state.clone()));
    let (username, token) = common::register_and_login(&client).await;
    let answers = answer_key(&client, &token).await;

    // Case and surrounding whitespace are ignored
    let first = current_word(&client, &token).await;
    let expected = answers[&first].clone();
    let response = client
        .post_json_with_token(
            "/api/word",
            &json!({ "answer": format!("  {} ", expected.to_uppercase()) }),
            &token,
        )
        .await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["correct"], true);
    assert_eq!(body["answer"], expected.as_str());

    let second = current_word(&client, &token).await;
    assert_ne!(second, first, "the head should advance after an answer");
    let response = client
        .post_json_with_token("/api/word", &json!({ "answer": "definitely wrong" }), &token)
        .await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["correct"], false);
    assert_eq!(body["answer"], answers[&second].as_str());

    let progress = progress(&client, &token).await;
    let first_entry = entry_for(&progress, &first);
    assert_eq!(first_entry["score"], 1);
    assert_eq!(first_entry["attempts"], 1);
    assert_eq!(first_entry["sessionScore"], 1);
    assert_eq!(first_entry["sessionAttempts"], 1);

    let second_entry = entry_for(&progress, &second);
    assert_eq!(second_entry["score"], 0);
    assert_eq!(second_entry["attempts"], 1);
    assert_eq!(second_entry["sessionAttempts"], 1);

    common::db::delete_user(&state.pool, &username)
        .await
        .expect("Failed to cleanup user");
}

#[tokio::test]
async fn test_reset_clears_session_counters_only() {
    let state = test_state!();
    let client = TestClient::new(router::router().with_state(state.clone()));
    let (username, token) = common::register_and_login(&client).await;
    let answers = answer_key(&client, &token).await;

    let word = current_word(&client, &token).await;
    client
        .post_json_with_token("/api/word", &json!({ "answer": answers[&word] }), &token)
        .await
        .assert_status(StatusCode::OK);

    client
        .put_with_token("/api/users/reset", &token)
        .await
        .assert_status(StatusCode::OK);

    let progress = progress(&client, &token).await;
    assert!(
        progress
            .iter()
            .all(|entry| entry["sessionScore"] == 0 && entry["sessionAttempts"] == 0)
    );
    let entry = entry_for(&progress, &word);
    assert_eq!(entry["score"], 1);
    assert_eq!(entry["attempts"], 1);

    common::db::delete_user(&state.pool, &username)
        .await
        .expect("Failed to cleanup user");
}

#[tokio::test]
async fn test_answer_validation() {
    let state = test_state!();
    let client = TestClient::new(router::router().with_state(state.clone()));
    let (username, token) = common::register_and_login(&client).await;

    let response = client
        .post_json_with_token("/api/word", &json!({}), &token)
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["location"], "answer");
    assert_eq!(body["error"], "Missing `answer` in request body");

    let response = client
        .post_json_with_token("/api/word", &json!({ "answer": 7 }), &token)
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    // Rejected answers leave the ring untouched
    let progress = progress(&client, &token).await;
    assert!(progress.iter().all(|entry| entry["attempts"] == 0));

    common::db::delete_user(&state.pool, &username)
        .await
        .expect("Failed to cleanup user");
}

#[tokio::test]
async fn test_long_drill_keeps_every_question() {
    let state = test_state!();
    let client = TestClient::new(router::router().with_state(state.clone()));
    let (username, token) = common::register_and_login(&client).await;
    let answers = answer_key(&client, &token).await;

    let rounds = 8;
    for round in 0..rounds {
        let word = current_word(&client, &token).await;
        // Alternate right and wrong answers to exercise both intervals
        let answer = if round % 2 == 0 {
            answers[&word].clone()
        } else {
            "wrong".to_string()
        };
        client
            .post_json_with_token("/api/word", &json!({ "answer": answer }), &token)
            .await
            .assert_status(StatusCode::OK);
    }

    let progress = progress(&client, &token).await;
    assert_eq!(progress.len(), answers.len());

    let attempts: i64 = progress
        .iter()
        .map(|entry| entry["attempts"].as_i64().expect("attempts"))
        .sum();
    assert_eq!(attempts, rounds);

    let score: i64 = progress
        .iter()
        .map(|entry| entry["score"].as_i64().expect("score"))
        .sum();
    assert_eq!(score, rounds / 2);

    common::db::delete_user(&state.pool, &username)
        .await
        .expect("Failed to cleanup user");
}

#[tokio::test]
async fn test_user_without_questions() {
    let state = test_state!();
    let client = TestClient::new(router::router().with_state(state.clone()));
    let username = common::test_data::unique_username("empty");

    let user_id = user_repo::create_user(&state.pool, "Empty Ring", &username, "not-a-hash")
        .await
        .expect("Failed to create user");
    let token = common::jwt::create_test_token(user_id, &username, 1);

    client
        .get_with_token("/api/word", &token)
        .await
        .assert_status(StatusCode::NOT_FOUND);
    client
        .post_json_with_token("/api/word", &json!({ "answer": "hello" }), &token)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let progress = progress(&client, &token).await;
    assert!(progress.is_empty());

    common::db::delete_user(&state.pool, &username)
        .await
        .expect("Failed to cleanup user");
}

#[tokio::test]
async fn test_deleted_user_token() {
    let state = test_state!();
    let client = TestClient::new(router::router().with_state(state.clone()));
    let (username, token) = common::register_and_login(&client).await;

    common::db::delete_user(&state.pool, &username)
        .await
        .expect("Failed to cleanup user");

    client
        .get_with_token("/api/word", &token)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_concurrent_answers_are_all_recorded() {
    let state = test_state!();
    let router = router::router().with_state(state.clone());
    let client = TestClient::new(router.clone());
    let (username, token) = common::register_and_login(&client).await;

    let requests = 8;
    let handles = (0..requests)
        .map(|i| {
            let client = TestClient::new(router.clone()).with_ip(&format!("10.0.0.{}", i + 1));
            let token = token.clone();
            tokio::spawn(async move {
                client
                    .post_json_with_token("/api/word", &json!({ "answer": "wrong" }), &token)
                    .await
                    .status
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(handle.await.expect("task panicked"), StatusCode::OK);
    }

    let progress = progress(&client, &token).await;
    let attempts: i64 = progress
        .iter()
        .map(|entry| entry["attempts"].as_i64().expect("attempts"))
        .sum();
    assert_eq!(attempts, requests);

    common::db::delete_user(&state.pool, &username)
        .await
        .expect("Failed to cleanup user");
}
