// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// 投影错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// 对象中缺少键，或数组下标越界
    #[error("Missing key '{segment}' at '{at}'")]
    MissingKey { segment: String, at: String },
    /// 期望对象或数组，实际是别的类型
    #[error("Type mismatch at '{at}': expected {expected}, found {found}")]
    TypeMismatch {
        at: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// 路径中的一步：对象键或数组下标
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// 对象键
    Key(String),
    /// 数组下标
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// JSON值类型名称，用于错误信息
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn render_path(path: &[PathSegment]) -> String {
    let mut out = String::from("$");
    for segment in path {
        match segment {
            PathSegment::Key(key) => {
                out.push('.');
                out.push_str(key);
            }
            PathSegment::Index(index) => {
                out.push_str(&format!("[{}]", index));
            }
        }
    }
    out
}

/// 沿路径取出JSON子值
///
/// # 参数
///
/// * `value` - 已解码的JSON
/// * `path` - 依次经过的对象键或数组下标，空路径返回 `value` 本身
///
/// # 返回值
///
/// * `Ok(&Value)` - 路径末端的子值
/// * `Err(ProjectionError::MissingKey)` - 某个键不存在或下标越界
/// * `Err(ProjectionError::TypeMismatch)` - 中途遇到标量，或键/下标与容器类型不符
pub fn project<'a>(value: &'a Value, path: &[PathSegment]) -> Result<&'a Value, ProjectionError> {
    let mut current = value;
    for (depth, segment) in path.iter().enumerate() {
        let at = &path[..depth];
        current = match (segment, current) {
            (PathSegment::Key(key), Value::Object(map)) => {
                map.get(key).ok_or_else(|| ProjectionError::MissingKey {
                    segment: segment.to_string(),
                    at: render_path(at),
                })?
            }
            (PathSegment::Index(index), Value::Array(items)) => {
                items
                    .get(*index)
                    .ok_or_else(|| ProjectionError::MissingKey {
                        segment: segment.to_string(),
                        at: render_path(at),
                    })?
            }
            (PathSegment::Key(_), other) => {
                return Err(ProjectionError::TypeMismatch {
                    at: render_path(at),
                    expected: "object",
                    found: type_name(other),
                })
            }
            (PathSegment::Index(_), other) => {
                return Err(ProjectionError::TypeMismatch {
                    at: render_path(at),
                    expected: "array",
                    found: type_name(other),
                })
            }
        };
    }
    Ok(current)
}

/// 用字符串键构造路径的简便写法
pub fn keys<I, S>(segments: I) -> Vec<PathSegment>
where
    I: IntoIterator<Item = S>,
    S: Into<PathSegment>,
{
    segments.into_iter().map(Into::into).collect()
}

/// 投影出一个整数
pub fn project_i64(value: &Value, path: &[PathSegment]) -> Result<i64, ProjectionError> {
    let found = project(value, path)?;
    found.as_i64().ok_or_else(|| ProjectionError::TypeMismatch {
        at: render_path(path),
        expected: "integer",
        found: type_name(found),
    })
}

/// 投影出一个字符串
pub fn project_str<'a>(value: &'a Value, path: &[PathSegment]) -> Result<&'a str, ProjectionError> {
    let found = project(value, path)?;
    found.as_str().ok_or_else(|| ProjectionError::TypeMismatch {
        at: render_path(path),
        expected: "string",
        found: type_name(found),
    })
}

/// 投影出一个数组
pub fn project_array<'a>(
    value: &'a Value,
    path: &[PathSegment],
) -> Result<&'a [Value], ProjectionError> {
    let found = project(value, path)?;
    match found {
        Value::Array(items) => Ok(items),
        other => Err(ProjectionError::TypeMismatch {
            at: render_path(path),
            expected: "array",
            found: type_name(other),
        }),
    }
}

#[cfg(test)]
#[path = "projector_test.rs"]
mod tests;
