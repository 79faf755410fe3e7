// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! JSON 美化输出
//!
//! 键按字典序排列，缩进4个空格，便于人工阅读接口响应

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

const INDENT: &[u8] = b"    ";

/// 递归地按键排序
///
/// 不依赖 `serde_json` 是否启用了 `preserve_order`
pub fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let mut sorted = Map::with_capacity(entries.len());
            for (key, inner) in entries {
                sorted.insert(key.clone(), sort_keys(inner));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

/// 将JSON渲染为排序后的多行文本
pub fn to_pretty_string(value: &Value) -> Result<String, serde_json::Error> {
    let sorted = sort_keys(value);
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    sorted.serialize(&mut serializer)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}
