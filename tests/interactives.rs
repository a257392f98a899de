mod common;

use std::time::Duration;

use opennote::{
    FlashcardCreateRequest, JobStatus, OpennoteError, PollOptions, PracticeProblem,
    PracticeProblemSetCreateRequest, ProblemType, DEFAULT_FLASHCARD_COUNT,
    DEFAULT_PRACTICE_PROBLEM_COUNT,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn frq_problem() -> Value {
    json!({
        "problem_type": "frq",
        "problem_statement": "Explain what an eigenvalue is.",
        "correct_answer": "A scalar lambda such that Av = lambda v for some non-zero v.",
        "scoring_details": "4 points total",
        "difficulty": "medium",
        "include_graph": false,
        "topic_tags": ["eigenvalues"]
    })
}

#[tokio::test]
async fn flashcards_default_count() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/interactives/flashcards/create"))
        .and(body_json(json!({
            "set_description": "The Silk Road",
            "count": DEFAULT_FLASHCARD_COUNT
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "set_name": "Silk Road",
            "flashcards": [
                { "front": "Where did the Silk Road start?", "back": "Chang'an" }
            ],
            "usage": { "total_tokens_used": 321, "cost": 0.01 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let set = common::client(&server)
        .flashcards()
        .create(FlashcardCreateRequest::new("The Silk Road"))
        .await
        .unwrap();
    assert_eq!(set.flashcards.len(), 1);
    assert_eq!(set.flashcards[0].back, "Chang'an");
    assert_eq!(set.usage.unwrap().total_tokens_used, 321);
}

#[tokio::test]
async fn flashcards_keep_explicit_count() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/interactives/flashcards/create"))
        .and(body_json(json!({
            "set_description": "The Silk Road",
            "count": 5,
            "set_name": "Trade routes"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let request = FlashcardCreateRequest {
        count: Some(5),
        set_name: Some("Trade routes".into()),
        ..FlashcardCreateRequest::new("The Silk Road")
    };
    common::client(&server)
        .flashcards()
        .create(request)
        .await
        .unwrap();
}

#[tokio::test]
async fn blank_descriptions_fail_without_a_request() {
    let server = MockServer::start().await;
    let client = common::client(&server);

    let err = client
        .flashcards()
        .create(FlashcardCreateRequest::new(""))
        .await
        .unwrap_err();
    assert!(matches!(err, OpennoteError::InvalidArgument(_)));

    let err = client
        .practice()
        .create(PracticeProblemSetCreateRequest::new("  "))
        .await
        .unwrap_err();
    assert!(matches!(err, OpennoteError::InvalidArgument(_)));

    assert_eq!(common::request_count(&server).await, 0);
}

#[tokio::test]
async fn practice_create_default_count() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/interactives/practice/create"))
        .and(body_json(json!({
            "set_description": "Linear algebra",
            "count": DEFAULT_PRACTICE_PROBLEM_COUNT,
            "search_for_problems": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "set_id": "set_9"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = PracticeProblemSetCreateRequest {
        search_for_problems: Some(true),
        ..PracticeProblemSetCreateRequest::new("Linear algebra")
    };
    let resp = common::client(&server)
        .practice()
        .create(request)
        .await
        .unwrap();
    assert_eq!(resp.set_id.as_deref(), Some("set_9"));
}

#[tokio::test]
async fn practice_status_requires_an_id() {
    let server = MockServer::start().await;
    let err = common::client(&server)
        .practice()
        .status("")
        .await
        .unwrap_err();
    assert!(matches!(err, OpennoteError::InvalidArgument(_)));
    assert_eq!(common::request_count(&server).await, 0);
}

#[tokio::test]
async fn practice_wait_then_grade() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/interactives/practice/status/set_9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "status": "pending",
            "total_problems": 3,
            "completed_problems": 1,
            "response": null
        })))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/interactives/practice/status/set_9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "status": "success",
            "set_id": "set_9",
            "response": {
                "set_id": "set_9",
                "set_name": "Linear Algebra Practice",
                "problems": [frq_problem()]
            }
        })))
        .mount(&server)
        .await;

    let answer = "A scalar that scales an eigenvector.";
    let mut expected_problem = frq_problem();
    expected_problem["user_answer"] = json!(answer);
    Mock::given(method("POST"))
        .and(path("/v1/interactives/practice/grade"))
        .and(body_json(json!({ "problem": expected_problem })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "score": 3,
            "max_score": 4,
            "percentage": 75.0,
            "explanation": "Missing the non-zero vector condition."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server);
    let opts = PollOptions::default().with_interval(Duration::from_millis(5));
    let done = client.practice().wait("set_9", &opts).await.unwrap();
    assert_eq!(done.status, JobStatus::Success);

    let set = done.response.expect("finished set has problems");
    let problem = set.problems[0].clone();
    assert_eq!(problem.problem_type, ProblemType::Frq);

    let graded = client
        .practice()
        .grade(&problem.with_user_answer(answer))
        .await
        .unwrap();
    assert!(graded.score <= graded.max_score);
    assert_eq!(graded.percentage, 100.0 * graded.score / graded.max_score);
}

#[tokio::test]
async fn grading_without_an_answer_fails_locally() {
    let server = MockServer::start().await;
    let problem: PracticeProblem = serde_json::from_value(frq_problem()).unwrap();

    let err = common::client(&server)
        .practice()
        .grade(&problem)
        .await
        .unwrap_err();
    assert!(matches!(err, OpennoteError::InvalidArgument(_)));
    assert_eq!(common::request_count(&server).await, 0);
}

#[tokio::test]
async fn out_of_credits_surfaces_as_its_own_kind() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/interactives/practice/create"))
        .respond_with(ResponseTemplate::new(402))
        .mount(&server)
        .await;

    let err = common::client(&server)
        .practice()
        .create(PracticeProblemSetCreateRequest::new("Linear algebra"))
        .await
        .unwrap_err();
    assert!(matches!(err, OpennoteError::InsufficientCredits { .. }));
    assert!(!err.is_retryable());
}
