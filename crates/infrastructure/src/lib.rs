//! 基础设施层：SQLite 仓储实现与演示数据种子
//!
//! 领域层只依赖仓储抽象，本层提供基于 sqlx 的具体实现。

pub mod database;
pub mod seed;

pub use database::assignment_repository::SqliteAssignmentRepository;
pub use database::report_repository::SqliteReportRepository;
pub use database::responder_repository::SqliteResponderRepository;
pub use database::{create_pool, migrator};
pub use seed::DataSeeder;
