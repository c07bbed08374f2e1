//! 基础设施层：配置、日志、数据库与仓储实现

pub mod config;
pub mod database;
pub mod logger;
pub mod repository;
