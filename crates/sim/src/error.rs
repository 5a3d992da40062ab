use thief_core::AgentError;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("agent rejected the sensor reading: {0}")]
    Agent(#[from] AgentError),

    #[error("agent answered with unknown step code {0}")]
    UnknownStep(u8),
}
