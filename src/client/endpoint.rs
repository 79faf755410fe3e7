// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use thiserror::Error;
use url::Url;

/// 端点构造错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EndpointError {
    /// 基础URL无法解析
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    /// 基础URL不能作为查询目标 (例如 `mailto:`)
    #[error("Endpoint URL '{0}' cannot carry a query string")]
    CannotBeABase(String),
}

/// 查询参数值
///
/// 仅支持标量：字符串、整数与浮点数
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// 字符串
    Str(String),
    /// 整数
    Int(i64),
    /// 浮点数
    Float(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

/// 查询端点
///
/// 基础URL加上按插入顺序排列的查询参数。
/// 交给客户端之后不再修改，参数只能在构造阶段通过 [`Endpoint::with_param`] 追加。
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    base: Url,
    params: Vec<(String, ParamValue)>,
}

impl Endpoint {
    /// 解析基础URL并创建端点
    ///
    /// # 参数
    ///
    /// * `base` - 基础URL字符串
    ///
    /// # 返回值
    ///
    /// * `Ok(Endpoint)` - 不带参数的端点
    /// * `Err(EndpointError)` - URL无法解析或不能携带查询串
    pub fn parse(base: &str) -> Result<Self, EndpointError> {
        let url = Url::parse(base).map_err(|e| EndpointError::InvalidUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_url(url)
    }

    /// 从已解析的URL创建端点
    pub fn from_url(base: Url) -> Result<Self, EndpointError> {
        if base.cannot_be_a_base() {
            return Err(EndpointError::CannotBeABase(base.to_string()));
        }
        Ok(Self {
            base,
            params: Vec::new(),
        })
    }

    /// 在基础URL上拼接相对路径，得到新的端点
    ///
    /// 已有参数会被保留
    pub fn join(&self, path: &str) -> Result<Self, EndpointError> {
        let base = self
            .base
            .join(path)
            .map_err(|e| EndpointError::InvalidUrl {
                url: format!("{}{}", self.base, path),
                reason: e.to_string(),
            })?;
        Ok(Self {
            base,
            params: self.params.clone(),
        })
    }

    /// 追加一个查询参数
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// 基础URL
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// 查询参数（插入顺序）
    pub fn params(&self) -> &[(String, ParamValue)] {
        &self.params
    }

    /// 构造最终请求URL
    ///
    /// 参数按插入顺序以 `application/x-www-form-urlencoded` 规则编码，
    /// 追加在基础URL已有的查询对之后
    pub fn target_url(&self) -> Url {
        let mut url = self.base.clone();
        if !self.params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.params {
                pairs.append_pair(name, &value.to_string());
            }
        }
        url
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target_url())
    }
}

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod tests;
