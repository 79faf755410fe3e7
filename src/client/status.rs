// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

/// HTTP状态码的信息性分类
///
/// 只供调用方分支使用，客户端本身不会针对某一类做特殊处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    /// 2xx
    Success,
    /// 3xx，服务端要求换到其他端点
    Redirect,
    /// 400
    BadRequest,
    /// 401，未认证
    Unauthenticated,
    /// 403，无权访问
    Forbidden,
    /// 404
    NotFound,
    /// 503，服务暂不可用
    Unavailable,
    /// 其他状态码
    Other,
}

impl StatusCategory {
    /// 对状态码进行分类
    pub fn of(status_code: u16) -> Self {
        match status_code {
            200..=299 => StatusCategory::Success,
            300..=399 => StatusCategory::Redirect,
            400 => StatusCategory::BadRequest,
            401 => StatusCategory::Unauthenticated,
            403 => StatusCategory::Forbidden,
            404 => StatusCategory::NotFound,
            503 => StatusCategory::Unavailable,
            _ => StatusCategory::Other,
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StatusCategory::Success => "success",
            StatusCategory::Redirect => "redirect",
            StatusCategory::BadRequest => "bad request",
            StatusCategory::Unauthenticated => "unauthenticated",
            StatusCategory::Forbidden => "forbidden",
            StatusCategory::NotFound => "not found",
            StatusCategory::Unavailable => "unavailable",
            StatusCategory::Other => "other",
        };
        f.write_str(text)
    }
}

/// 是否为成功状态码 (200-299)
pub fn is_success(status_code: u16) -> bool {
    (200..=299).contains(&status_code)
}

/// 状态码对应的标准原因短语
pub fn reason_phrase(status_code: u16) -> Option<&'static str> {
    reqwest::StatusCode::from_u16(status_code)
        .ok()
        .and_then(|s| s.canonical_reason())
}
