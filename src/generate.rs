//! [`Generator`] composes the prompt builder and the wire [`Client`] behind
//! the [`GenerateText`] seam, so tests can substitute a stub backend for the
//! real API.

use async_trait::async_trait;

use crate::{client, Article, Client, Model, Prompt, Request, Topic};

/// Text-generation backend. [`Client`] is the real implementation; tests use
/// stubs. One invocation means one generation attempt with no retries.
#[async_trait]
pub trait GenerateText {
    /// Generate text for `prompt` with `model`. Returns the raw text payload
    /// on success.
    async fn generate_text(
        &self,
        model: Model,
        prompt: &Prompt,
    ) -> client::Result<String>;
}

#[async_trait]
impl GenerateText for Client {
    async fn generate_text(
        &self,
        model: Model,
        prompt: &Prompt,
    ) -> client::Result<String> {
        let response = self
            .generate_content(model, Request::from_prompt(prompt))
            .await?;

        response
            .into_text()
            .ok_or(client::Error::UnexpectedResponse {
                message: "Response contains no text candidate.",
            })
    }
}

/// Generates Wikipedia-style articles. Holds a configured backend (shared,
/// read-only) and the [`Model`] to use. Each [`generate`] call is independent
/// and stateless; nothing persists between invocations.
///
/// [`generate`]: Self::generate
#[derive(Clone)]
pub struct Generator<T = Client> {
    backend: T,
    model: Model,
}

impl Generator<Client> {
    /// Create a generator backed by a [`Client`] configured from the
    /// environment. This is the startup path; see [`Client::from_env`] for
    /// the fatal-on-failure contract.
    pub fn from_env() -> Result<Self, client::ConfigError> {
        Ok(Self::new(Client::from_env()?, Model::default()))
    }
}

impl<T> Generator<T>
where
    T: GenerateText,
{
    /// Create a generator from a backend and a [`Model`].
    pub fn new(backend: T, model: Model) -> Self {
        Self { backend, model }
    }

    /// Set the [`Model`] to use for generation.
    pub fn model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Generate a Wikipedia-style [`Article`] about `topic`.
    ///
    /// Builds the [`Prompt`], makes one backend call, and wraps the returned
    /// text. Any backend failure is returned as an [`Error`] value whose
    /// `Display` carries the underlying message; nothing panics and nothing
    /// is retried.
    ///
    /// [`Error`]: client::Error
    pub async fn generate(&self, topic: &Topic) -> client::Result<Article> {
        let prompt = Prompt::for_topic(topic);

        #[cfg(feature = "log")]
        log::info!("Generating article for topic: {}", topic);

        let text = self.backend.generate_text(self.model, &prompt).await?;

        Ok(Article::new(topic.clone(), text))
    }
}
