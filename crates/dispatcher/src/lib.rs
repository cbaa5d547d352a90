//! 调度核心：事件接收、响应人员目录、指派引擎与通知编排

pub mod directory;
pub mod engine;
pub mod eta;
pub mod intake;
pub mod notifier;
pub mod strategies;

pub use directory::ResponderDirectory;
pub use engine::DispatchEngine;
pub use intake::IncidentIntake;
pub use notifier::{DispatchNotification, NotificationOrchestrator};
pub use strategies::{strategy_by_name, DispatchStrategy, FirstAvailableStrategy, NearestStrategy};
