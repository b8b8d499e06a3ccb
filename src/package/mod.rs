//! 规则包模块：负责规则包的序列化与落盘
pub mod writer;

pub use self::writer::PackageWriter;
