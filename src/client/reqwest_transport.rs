// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::client::traits::{HttpTransport, RawResponse, TransportError};
use async_trait::async_trait;
use std::error::Error;
use std::time::Duration;
use url::Url;

/// 默认请求超时时间
///
/// reqwest 本身没有总超时，这里统一设为30秒
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// 默认 User-Agent
pub const DEFAULT_USER_AGENT: &str = concat!("skyquery/", env!("CARGO_PKG_VERSION"));

/// 基于reqwest实现的HTTP传输
///
/// 重定向沿用 reqwest 的默认策略 (最多10跳)
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// 使用默认超时和 User-Agent 创建传输
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_options(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// 使用指定超时和 User-Agent 创建传输
    ///
    /// # 参数
    ///
    /// * `timeout` - 整个请求 (连接、发送、读取响应体) 的超时时间
    /// * `user_agent` - User-Agent 请求头
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestTransport)` - 创建成功
    /// * `Err(reqwest::Error)` - TLS后端等初始化失败
    pub fn with_options(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// 使用已构建好的 reqwest 客户端
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| TransportError::NoResponse(describe(&e)))?;

        let status_code = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::BodyRead {
                status_code,
                reason: describe(&e),
            })?;

        Ok(RawResponse { status_code, body })
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

fn describe(error: &reqwest::Error) -> String {
    let kind = if error.is_timeout() {
        "timeout"
    } else if error.is_connect() {
        "connect"
    } else if error.is_redirect() {
        "redirect"
    } else if error.is_body() || error.is_decode() {
        "body"
    } else {
        "request"
    };

    let mut message = format!("{} error: {}", kind, error);
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
