//! 原生 Web API 封装模块
//!
//! 对浏览器 History 与 Storage API 的轻量封装，
//! 所有 web_sys 调用集中在此；HTTP 请求走 gloo-net，见 `crate::api`。

pub mod route;
pub mod router;
mod storage;

pub use storage::LocalStorage;
