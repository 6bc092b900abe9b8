//! REST API 客户端
//!
//! 每个 (资源, 动词) 对应一个调用；不做重试、超时或缓存，
//! 任何非 2xx 响应与网络失败都以 [`ApiError`] 形式交给调用方。
//! 动词集合由泛型 [`ResourceEndpoint`] 统一实现，按实体实例化，
//! 取代逐面板手写的增删改查样板。

use gloo_net::http::{Request, RequestBuilder, Response};
use inventory_shared::{
    AssignDeviceRequest, AssignedDevice, Department, Device, DeviceType, Employee,
    EmployeePayload, LoginRequest, NewDepartment, NewDevice, NewDeviceType, SignupRequest,
    TokenPair,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// 后端基础路径
///
/// 原系统中存在带前缀与不带前缀两套路径；客户端统一走这一个，
/// 见 DESIGN.md 的未决问题记录。
pub const API_BASE_URL: &str = "http://localhost:8000/inventory/api";

// =========================================================
// 错误类型
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 网络请求未能完成
    Network(String),
    /// 服务端返回非 2xx 状态码
    Status(u16),
    /// 请求体编码或响应体解析失败
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Status(code) => write!(f, "request failed with status {}", code),
            ApiError::Decode(msg) => write!(f, "invalid payload: {}", msg),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

// =========================================================
// 客户端句柄
// =========================================================

/// 轻量客户端句柄：只携带访问令牌，可随意克隆进 spawn_local
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryApi {
    token: Option<String>,
}

impl InventoryApi {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// 无令牌句柄，仅供登录/注册端点使用
    fn anonymous() -> Self {
        Self { token: None }
    }

    fn url(path: &str) -> String {
        format!("{}{}", API_BASE_URL, path)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.header("Authorization", &format!("Bearer {}", token)),
            None => req,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let res = self
            .authorize(Request::get(url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_json(res).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> ApiResult<T> {
        let res = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_json(res).await
    }

    async fn send_expect_ok<B: Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> ApiResult<()> {
        let res = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(&res)
    }

    async fn delete_url(&self, url: &str) -> ApiResult<()> {
        let res = self
            .authorize(Request::delete(url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(&res)
    }
}

fn ensure_ok(res: &Response) -> ApiResult<()> {
    if res.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(res.status()))
    }
}

async fn decode_json<T: DeserializeOwned>(res: Response) -> ApiResult<T> {
    ensure_ok(&res)?;
    res.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

// =========================================================
// 通用资源端点
// =========================================================

/// 一组 REST 动词的描述子，按 (读取类型, 写入类型) 参数化
///
/// 路径带尾斜杠，详情 URL 形如 `{path}{id}/`（后端对部分资源
/// 的尾斜杠敏感）。
pub struct ResourceEndpoint<T, New = T> {
    path: &'static str,
    _marker: PhantomData<fn() -> (T, New)>,
}

impl<T, New> ResourceEndpoint<T, New> {
    pub const fn new(path: &'static str) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn collection_url(&self) -> String {
        InventoryApi::url(self.path)
    }

    pub fn detail_url(&self, id: u32) -> String {
        format!("{}{}{}/", API_BASE_URL, self.path, id)
    }
}

impl<T, New> ResourceEndpoint<T, New>
where
    T: DeserializeOwned,
    New: Serialize,
{
    pub async fn list(&self, api: &InventoryApi) -> ApiResult<Vec<T>> {
        api.get_json(&self.collection_url()).await
    }

    #[allow(dead_code)]
    pub async fn get(&self, api: &InventoryApi, id: u32) -> ApiResult<T> {
        api.get_json(&self.detail_url(id)).await
    }

    pub async fn create(&self, api: &InventoryApi, payload: &New) -> ApiResult<T> {
        api.send_json(Request::post(&self.collection_url()), payload)
            .await
    }

    pub async fn update<B: Serialize>(&self, api: &InventoryApi, id: u32, payload: &B) -> ApiResult<T> {
        api.send_json(Request::put(&self.detail_url(id)), payload)
            .await
    }

    pub async fn patch<B: Serialize>(&self, api: &InventoryApi, id: u32, payload: &B) -> ApiResult<T> {
        api.send_json(Request::patch(&self.detail_url(id)), payload)
            .await
    }

    pub async fn delete(&self, api: &InventoryApi, id: u32) -> ApiResult<()> {
        api.delete_url(&self.detail_url(id)).await
    }
}

pub const DEVICES: ResourceEndpoint<Device, NewDevice> = ResourceEndpoint::new("/devices/");
pub const EMPLOYEES: ResourceEndpoint<Employee, EmployeePayload> =
    ResourceEndpoint::new("/employees/");
pub const DEPARTMENTS: ResourceEndpoint<Department, NewDepartment> =
    ResourceEndpoint::new("/departments/");
pub const DEVICE_TYPES: ResourceEndpoint<DeviceType, NewDeviceType> =
    ResourceEndpoint::new("/device-types/");

// =========================================================
// 分配流程端点（与员工表单的设备引用并行的旧流程）
// =========================================================

pub async fn assigned_devices(api: &InventoryApi) -> ApiResult<Vec<AssignedDevice>> {
    api.get_json(&InventoryApi::url("/assigned-devices/")).await
}

pub async fn assign_device(api: &InventoryApi, req: &AssignDeviceRequest) -> ApiResult<()> {
    api.send_expect_ok(Request::post(&InventoryApi::url("/assign-device/")), req)
        .await
}

// =========================================================
// 认证端点
// =========================================================

pub async fn login(req: &LoginRequest) -> ApiResult<TokenPair> {
    InventoryApi::anonymous()
        .send_json(Request::post(&InventoryApi::url("/login/")), req)
        .await
}

pub async fn signup(req: &SignupRequest) -> ApiResult<()> {
    InventoryApi::anonymous()
        .send_expect_ok(Request::post(&InventoryApi::url("/signup/")), req)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_urls_keep_trailing_slash() {
        assert_eq!(
            DEVICES.collection_url(),
            "http://localhost:8000/inventory/api/devices/"
        );
        assert_eq!(
            DEVICE_TYPES.collection_url(),
            "http://localhost:8000/inventory/api/device-types/"
        );
    }

    #[test]
    fn detail_urls_append_id_and_trailing_slash() {
        assert_eq!(
            EMPLOYEES.detail_url(7),
            "http://localhost:8000/inventory/api/employees/7/"
        );
        assert_eq!(
            DEPARTMENTS.detail_url(3),
            "http://localhost:8000/inventory/api/departments/3/"
        );
    }

    #[test]
    fn auth_and_assignment_paths_share_the_base() {
        assert_eq!(
            InventoryApi::url("/login/"),
            "http://localhost:8000/inventory/api/login/"
        );
        assert_eq!(
            InventoryApi::url("/assigned-devices/"),
            "http://localhost:8000/inventory/api/assigned-devices/"
        );
    }
}
