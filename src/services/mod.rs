pub mod anthropic;
pub mod conversation;
pub mod relay;
pub mod relay_client;
