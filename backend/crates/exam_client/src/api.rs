//! Exam API
//!
//! The seam between the exam session and the server, plus its HTTP
//! implementation. Every response body is the server's envelope.

use std::sync::Arc;
use std::time::Duration;

use kernel::Envelope;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ClientError, ClientResult};
use crate::storage::{KeyValueStorage, StorageError};
use crate::token_store::{SessionCredential, TokenStore};

/// Question as served to candidates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamQuestion {
    pub question_id: String,
    pub text: String,
    pub options: Vec<String>,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerPayload {
    pub question_id: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub submission_id: Uuid,
    pub answers: Vec<AnswerPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub submission_id: String,
    pub correct_count: u32,
    pub total_count: u32,
    pub score_percent: u32,
    pub submitted_at: String,
}

#[trait_variant::make(ExamApi: Send)]
pub trait LocalExamApi {
    /// Questions of one assessment, in exam order
    async fn fetch_questions(&self, assessment_id: &str) -> ClientResult<Vec<ExamQuestion>>;

    /// Submit all answers; the server stores one record per submission id
    async fn submit_answers(
        &self,
        assessment_id: &str,
        payload: &SubmissionPayload,
    ) -> ClientResult<SubmissionReceipt>;
}

#[derive(Deserialize)]
struct QuestionsData {
    questions: Vec<ExamQuestion>,
}

#[derive(Serialize)]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshBody<'a> {
    refresh_token: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenPairData {
    access_token: String,
    refresh_token: String,
}

impl From<TokenPairData> for SessionCredential {
    fn from(data: TokenPairData) -> Self {
        Self {
            access_token: data.access_token,
            refresh_token: data.refresh_token,
        }
    }
}

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed API; reads the bearer token from the token store per call
pub struct HttpExamApi<S> {
    client: Client,
    base_url: String,
    tokens: Arc<TokenStore<S>>,
}

impl<S: KeyValueStorage + 'static> HttpExamApi<S> {
    pub fn new(base_url: impl Into<String>, tokens: Arc<TokenStore<S>>) -> ClientResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(5))
            .build()?;
        Ok(Self::with_client(client, base_url, tokens))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>, tokens: Arc<TokenStore<S>>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            client,
            base_url,
            tokens,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Storage may be file-backed, so reads run on the blocking pool
    async fn read_token<F>(&self, read: F) -> ClientResult<String>
    where
        F: FnOnce(&TokenStore<S>) -> Result<Option<String>, StorageError> + Send + 'static,
    {
        let tokens = self.tokens.clone();
        tokio::task::spawn_blocking(move || read(&tokens))
            .await??
            .ok_or(ClientError::NotAuthenticated)
    }

    async fn authorized(&self, request: RequestBuilder) -> ClientResult<RequestBuilder> {
        let token = self.read_token(|tokens| tokens.access_token()).await?;
        Ok(request.bearer_auth(token))
    }

    /// POST /api/auth/login; the caller stores the credential via
    /// [`AuthContext::sign_in`](crate::AuthContext::sign_in)
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<SessionCredential> {
        let request = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&CredentialsBody { email, password });
        let data: TokenPairData = read_envelope(request).await?;
        Ok(data.into())
    }

    /// POST /api/auth/refresh with the stored refresh token
    pub async fn refresh(&self) -> ClientResult<SessionCredential> {
        let refresh_token = self.read_token(|tokens| tokens.refresh_token()).await?;
        let request = self
            .client
            .post(self.url("/api/auth/refresh"))
            .json(&RefreshBody {
                refresh_token: &refresh_token,
            });
        let data: TokenPairData = read_envelope(request).await?;
        Ok(data.into())
    }
}

impl<S: KeyValueStorage + 'static> ExamApi for HttpExamApi<S> {
    async fn fetch_questions(&self, assessment_id: &str) -> ClientResult<Vec<ExamQuestion>> {
        let url = self.url(&format!("/api/assessments/{}/questions", assessment_id));
        let request = self.authorized(self.client.get(url)).await?;
        let data: QuestionsData = read_envelope(request).await?;
        Ok(data.questions)
    }

    async fn submit_answers(
        &self,
        assessment_id: &str,
        payload: &SubmissionPayload,
    ) -> ClientResult<SubmissionReceipt> {
        let url = self.url(&format!("/api/assessments/{}/submissions", assessment_id));
        let request = self.authorized(self.client.post(url).json(payload)).await?;
        read_envelope(request).await
    }
}

async fn read_envelope<T: DeserializeOwned>(request: RequestBuilder) -> ClientResult<T> {
    let response = request.send().await?;
    let status = response.status();
    let bytes = response.bytes().await?;
    decode_envelope(status, &bytes)
}

fn decode_envelope<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> ClientResult<T> {
    let envelope: Envelope<T> = serde_json::from_slice(body).map_err(|e| ClientError::Api {
        status: status.as_u16(),
        message: format!("Unreadable response body: {}", e),
    })?;

    if !status.is_success() || !envelope.success {
        let message = match envelope.error {
            Some(detail) => format!("{}: {}", envelope.message, detail),
            None => envelope.message,
        };
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    envelope.data.ok_or_else(|| ClientError::Api {
        status: status.as_u16(),
        message: "Response envelope has no data".into(),
    })
}
