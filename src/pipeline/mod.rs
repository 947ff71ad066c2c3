pub mod builder;
pub mod core;
pub mod turn;

pub use builder::ConversationPipelineBuilder;
pub use core::ConversationPipeline;
pub use turn::TurnError;
