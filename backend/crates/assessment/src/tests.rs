//! Unit tests for assessment crate

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use kernel::Principal;
    use kernel::id::{SubmissionId, UserId};

    use crate::application::{
        ListQuestionsUseCase, SeedQuestionsUseCase, SubmitAnswersInput, SubmitAnswersUseCase,
    };
    use crate::domain::catalogue;
    use crate::domain::entities::AnswerEntry;
    use crate::domain::repository::QuestionRepository;
    use crate::domain::value_objects::QuestionId;
    use crate::error::AssessmentError;
    use crate::infra::memory::InMemoryAssessmentRepository;

    fn candidate() -> Principal {
        Principal {
            user_id: UserId::new(),
            email: "cand@example.com".into(),
            is_admin: false,
        }
    }

    async fn seeded() -> Arc<InMemoryAssessmentRepository> {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        SeedQuestionsUseCase::new(repo.clone()).execute().await.unwrap();
        repo
    }

    fn all_correct(step: u8) -> Vec<AnswerEntry> {
        catalogue::questions()
            .into_iter()
            .filter(|q| q.step.number() == step)
            .map(|q| AnswerEntry {
                question_id: q.question_id,
                answer: q.correct_answer,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let use_case = SeedQuestionsUseCase::new(repo.clone());
        let expected = catalogue::questions().len() as u64;

        assert_eq!(use_case.execute().await.unwrap(), expected);
        assert_eq!(use_case.execute().await.unwrap(), expected);
        assert_eq!(repo.count().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_list_questions_in_exam_order() {
        let repo = seeded().await;
        let (step, questions) = ListQuestionsUseCase::new(repo).execute("2").await.unwrap();

        assert_eq!(step.number(), 2);
        assert!(!questions.is_empty());
        assert!(questions.iter().all(|q| q.step == step));
        assert!(questions.windows(2).all(|w| {
            (w[0].level, &w[0].question_id) <= (w[1].level, &w[1].question_id)
        }));
    }

    #[tokio::test]
    async fn test_list_questions_unknown_assessment() {
        let repo = seeded().await;
        let result = ListQuestionsUseCase::new(repo).execute("9").await;
        assert!(matches!(result, Err(AssessmentError::UnknownAssessment(_))));
    }

    #[tokio::test]
    async fn test_submit_grades_and_replays() {
        let repo = seeded().await;
        let use_case = SubmitAnswersUseCase::new(repo.clone(), repo.clone());
        let principal = candidate();
        let submission_id = SubmissionId::new();

        let answers = all_correct(1);
        let total = answers.len() as u32;
        let first = use_case
            .execute(
                &principal,
                "1",
                SubmitAnswersInput {
                    submission_id,
                    answers: answers.clone(),
                },
            )
            .await
            .unwrap();
        assert_eq!(first.correct_count, total);
        assert_eq!(first.score_percent(), 100);

        // Retry after a lost response: different payload, same id
        let replay = use_case
            .execute(
                &principal,
                "1",
                SubmitAnswersInput {
                    submission_id,
                    answers: Vec::new(),
                },
            )
            .await
            .unwrap();
        assert_eq!(replay, first);
        assert_eq!(repo.submission_count(), 1);
    }

    #[tokio::test]
    async fn test_submit_id_owned_by_other_candidate() {
        let repo = seeded().await;
        let use_case = SubmitAnswersUseCase::new(repo.clone(), repo.clone());
        let submission_id = SubmissionId::new();

        use_case
            .execute(
                &candidate(),
                "1",
                SubmitAnswersInput {
                    submission_id,
                    answers: Vec::new(),
                },
            )
            .await
            .unwrap();

        let result = use_case
            .execute(
                &candidate(),
                "1",
                SubmitAnswersInput {
                    submission_id,
                    answers: Vec::new(),
                },
            )
            .await;
        assert!(matches!(result, Err(AssessmentError::SubmissionConflict)));
    }

    #[tokio::test]
    async fn test_submit_rejects_foreign_question() {
        let repo = seeded().await;
        let use_case = SubmitAnswersUseCase::new(repo.clone(), repo.clone());

        let result = use_case
            .execute(
                &candidate(),
                "1",
                SubmitAnswersInput {
                    submission_id: SubmissionId::new(),
                    answers: vec![AnswerEntry {
                        question_id: QuestionId::new("s3-c2-001"),
                        answer: "water".into(),
                    }],
                },
            )
            .await;
        assert!(matches!(result, Err(AssessmentError::UnknownQuestion(_))));
        assert_eq!(repo.submission_count(), 0);
    }

    #[tokio::test]
    async fn test_submit_to_unseeded_step() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let result = SubmitAnswersUseCase::new(repo.clone(), repo)
            .execute(
                &candidate(),
                "1",
                SubmitAnswersInput {
                    submission_id: SubmissionId::new(),
                    answers: Vec::new(),
                },
            )
            .await;
        assert!(matches!(result, Err(AssessmentError::EmptyAssessment)));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::AssessmentError;
    use kernel::error::{app_error::AppError, kind::ErrorKind};

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            AssessmentError::UnknownAssessment("x".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            AssessmentError::DuplicateAnswer("q".into()).kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(AssessmentError::SubmissionConflict.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn test_database_error_is_500_with_detail() {
        let app: AppError = AssessmentError::Database(sqlx::Error::PoolTimedOut).into();
        assert_eq!(app.status_code(), 500);
        assert!(app.detail().is_some());
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::{Extension, Router};
    use kernel::Principal;
    use kernel::id::UserId;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::AssessmentConfig;
    use crate::domain::catalogue;
    use crate::infra::memory::InMemoryAssessmentRepository;
    use crate::presentation::router::{admin_router, debug_router, exam_router};

    fn app(repo: Arc<InMemoryAssessmentRepository>, principal: Option<Principal>) -> Router {
        let config = Arc::new(AssessmentConfig::default());
        let mut exam = exam_router(repo.clone(), config.clone());
        if let Some(principal) = principal {
            exam = exam.layer(Extension(principal));
        }
        Router::new()
            .nest("/api/admin", admin_router(repo.clone(), config.clone()))
            .nest("/api/debug", debug_router(repo, config))
            .nest("/api/assessments", exam)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        let body = body.map_or_else(Body::empty, |b| Body::from(b.to_string()));
        let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn principal() -> Principal {
        Principal {
            user_id: UserId::new(),
            email: "cand@example.com".into(),
            is_admin: false,
        }
    }

    #[tokio::test]
    async fn test_seed_twice_reports_catalogue_size() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let app = app(repo, None);
        let expected = catalogue::questions().len();

        for _ in 0..2 {
            let (status, body) = send(&app, "POST", "/api/admin/seed-questions", None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["success"], true);
            assert_eq!(body["data"]["count"], expected);
        }
    }

    #[tokio::test]
    async fn test_seed_failure_envelope() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        repo.set_unavailable(true);
        let app = app(repo, None);

        let (status, body) = send(&app, "POST", "/api/admin/seed-questions", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Failed to seed questions");
    }

    #[tokio::test]
    async fn test_sample_questions() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let app = app(repo, None);
        send(&app, "POST", "/api/admin/seed-questions", None).await;

        let (status, body) = send(&app, "GET", "/api/debug/sample-questions", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["questions"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_exam_questions_hide_answers() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let app = app(repo, Some(principal()));
        send(&app, "POST", "/api/admin/seed-questions", None).await;

        let (status, body) = send(&app, "GET", "/api/assessments/1/questions", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["assessmentId"], "1");
        let questions = body["data"]["questions"].as_array().unwrap();
        assert!(!questions.is_empty());
        assert!(questions.iter().all(|q| q.get("correctAnswer").is_none()));
    }

    #[tokio::test]
    async fn test_submission_requires_principal() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let app = app(repo, None);

        let (status, body) = send(
            &app,
            "POST",
            "/api/assessments/1/submissions",
            Some(json!({ "submissionId": uuid::Uuid::new_v4(), "answers": [] })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_submission_stored_once() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let app = app(repo.clone(), Some(principal()));
        send(&app, "POST", "/api/admin/seed-questions", None).await;

        let payload = json!({
            "submissionId": uuid::Uuid::new_v4(),
            "answers": [{ "questionId": "s1-a1-001", "answer": "is" }]
        });
        let (status, first) =
            send(&app, "POST", "/api/assessments/1/submissions", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["data"]["correctCount"], 1);

        let (status, second) =
            send(&app, "POST", "/api/assessments/1/submissions", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["data"], second["data"]);
        assert_eq!(repo.submission_count(), 1);
    }

    #[tokio::test]
    async fn test_submission_bad_body() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let app = app(repo, Some(principal()));

        let (status, body) = send(
            &app,
            "POST",
            "/api/assessments/1/submissions",
            Some(json!({ "answers": [] })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid request body");
    }
}
