// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::client::endpoint::Endpoint;
use crate::client::reqwest_transport::ReqwestTransport;
use crate::client::status::{is_success, reason_phrase, StatusCategory};
use crate::client::traits::{HttpTransport, RawResponse};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// 查询失败类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 未收到响应，或响应体读取中断
    TransportError,
    /// 收到非2xx状态码
    HttpError,
    /// 2xx 响应，但响应体不是合法JSON
    InvalidBody,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorKind::TransportError => "transport error",
            ErrorKind::HttpError => "http error",
            ErrorKind::InvalidBody => "invalid body",
        };
        f.write_str(text)
    }
}

/// 查询失败
///
/// `status_code` 仅在收到响应时存在
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {detail}")]
pub struct QueryFailure {
    /// 失败类别
    pub kind: ErrorKind,
    /// HTTP状态码
    pub status_code: Option<u16>,
    /// 失败详情
    pub detail: String,
}

impl QueryFailure {
    /// 状态码的信息性分类
    pub fn category(&self) -> Option<StatusCategory> {
        self.status_code.map(StatusCategory::of)
    }
}

/// 查询结果
///
/// 恰好是成功或失败之一
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    /// 2xx 且响应体为合法JSON
    Success {
        /// HTTP状态码
        status_code: u16,
        /// 解码后的JSON
        body: Value,
    },
    /// 任意失败
    Failure(QueryFailure),
}

impl QueryResult {
    /// 是否成功
    pub fn is_success(&self) -> bool {
        matches!(self, QueryResult::Success { .. })
    }

    /// 状态码 (成功时一定存在)
    pub fn status_code(&self) -> Option<u16> {
        match self {
            QueryResult::Success { status_code, .. } => Some(*status_code),
            QueryResult::Failure(failure) => failure.status_code,
        }
    }

    /// 成功时的JSON响应体
    pub fn body(&self) -> Option<&Value> {
        match self {
            QueryResult::Success { body, .. } => Some(body),
            QueryResult::Failure(_) => None,
        }
    }

    /// 失败详情
    pub fn failure(&self) -> Option<&QueryFailure> {
        match self {
            QueryResult::Success { .. } => None,
            QueryResult::Failure(failure) => Some(failure),
        }
    }

    /// 转换为标准 `Result`，便于使用 `?`
    pub fn into_result(self) -> Result<(u16, Value), QueryFailure> {
        match self {
            QueryResult::Success { status_code, body } => Ok((status_code, body)),
            QueryResult::Failure(failure) => Err(failure),
        }
    }
}

/// JSON查询客户端
///
/// 每次调用只发一次GET请求，不重试、不缓存，调用之间不保留状态，也不输出日志
#[derive(Clone)]
pub struct QueryClient {
    transport: Arc<dyn HttpTransport>,
}

impl QueryClient {
    /// 使用指定传输创建客户端
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// 使用默认的 reqwest 传输创建客户端
    pub fn with_default_transport() -> Result<Self, reqwest::Error> {
        Ok(Self::new(Arc::new(ReqwestTransport::new()?)))
    }

    /// 当前使用的传输实现名称
    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    /// 查询端点
    ///
    /// # 参数
    ///
    /// * `endpoint` - 目标端点
    ///
    /// # 返回值
    ///
    /// * `QueryResult::Success` - 2xx 且响应体为合法JSON
    /// * `QueryResult::Failure` - 传输失败、非2xx状态码或响应体无法解码
    pub async fn fetch(&self, endpoint: &Endpoint) -> QueryResult {
        let url = endpoint.target_url();
        match self.transport.get(&url).await {
            Ok(response) => decode(response),
            Err(e) => QueryResult::Failure(QueryFailure {
                kind: ErrorKind::TransportError,
                status_code: e.status_code(),
                detail: format!("GET {} failed: {}", url, e),
            }),
        }
    }
}

impl fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryClient")
            .field("transport", &self.transport.name())
            .finish()
    }
}

fn decode(response: RawResponse) -> QueryResult {
    let status_code = response.status_code;

    if !is_success(status_code) {
        let detail = match reason_phrase(status_code) {
            Some(reason) => format!("HTTP {} {}", status_code, reason),
            None => format!("HTTP {}", status_code),
        };
        return QueryResult::Failure(QueryFailure {
            kind: ErrorKind::HttpError,
            status_code: Some(status_code),
            detail,
        });
    }

    match serde_json::from_slice::<Value>(&response.body) {
        Ok(body) => QueryResult::Success { status_code, body },
        Err(e) => QueryResult::Failure(QueryFailure {
            kind: ErrorKind::InvalidBody,
            status_code: Some(status_code),
            detail: format!("Response body is not valid JSON: {}", e),
        }),
    }
}

#[cfg(test)]
#[path = "query_client_test.rs"]
mod tests;
