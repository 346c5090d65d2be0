//! ドメイン層
//!
//! HTTP に依存しないルール（ローカルファイル検証、字幕のエンコード、表示用フォーマット）。

pub mod captions;
pub mod error;
pub mod formatter;
pub mod validator;

pub use error::DomainError;
