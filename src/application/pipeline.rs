use crate::domain::message::Message;
use crate::error::Result;
use async_trait::async_trait;

/// One unit of message transformation within a [`Pipeline`].
#[async_trait]
pub trait Step: Send + Sync {
    async fn invoke(&self, input: Message) -> Result<Message>;
}

/// Ordered sequence of steps executed front-to-back with output chaining.
///
/// Steps are registered through the consuming builder before first use, so a
/// pipeline can never grow once a service owns it. Each step receives the
/// previous step's output; the last step's output is the pipeline's result.
#[derive(Default)]
pub struct Pipeline {
    steps: Vec<Box<dyn Step>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, step: impl Step + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Runs every step in registration order. Returns `None` when no steps
    /// are registered; a step failure propagates unmodified.
    pub async fn execute(&self, input: Message) -> Result<Option<Message>> {
        if self.steps.is_empty() {
            return Ok(None);
        }
        let mut message = input;
        for step in &self.steps {
            message = step.invoke(message).await?;
        }
        Ok(Some(message))
    }
}
