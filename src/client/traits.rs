// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use url::Url;

/// 传输层错误类型
#[derive(Error, Debug)]
pub enum TransportError {
    /// 未收到任何响应 (连接被拒绝、DNS失败、超时等)
    #[error("No response received: {0}")]
    NoResponse(String),
    /// 已收到状态行，但读取响应体失败
    #[error("Failed to read response body (status {status_code}): {reason}")]
    BodyRead { status_code: u16, reason: String },
}

impl TransportError {
    /// 失败时已收到的状态码，如果有的话
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TransportError::NoResponse(_) => None,
            TransportError::BodyRead { status_code, .. } => Some(*status_code),
        }
    }
}

/// 原始HTTP响应
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP状态码
    pub status_code: u16,
    /// 未解码的响应体
    pub body: Bytes,
}

/// HTTP传输特质
///
/// 只负责发出一次GET请求并读回完整响应体，不做重试、不解析内容
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// 对目标URL执行GET请求
    async fn get(&self, url: &Url) -> Result<RawResponse, TransportError>;

    /// 传输实现名称
    fn name(&self) -> &'static str;
}
