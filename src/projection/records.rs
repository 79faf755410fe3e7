// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::projection::projector::{
    keys, project, project_array, project_i64, project_str, PathSegment, ProjectionError,
};
use crate::projection::timestamp::{epoch_to_timestamp, TimestampError};
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use serde_json::Value;

/// 国际空间站过境记录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PassEntry {
    /// 可见时长（秒）
    pub duration_seconds: i64,
    /// 升起时间（Unix秒）
    pub risetime_epoch: i64,
}

impl PassEntry {
    /// 创建过境记录
    pub fn new(duration_seconds: i64, risetime_epoch: i64) -> Self {
        Self {
            duration_seconds,
            risetime_epoch,
        }
    }

    /// 在指定时区下的升起时间
    pub fn risetime_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<Tz>, TimestampError> {
        epoch_to_timestamp(self.risetime_epoch, tz)
    }
}

/// 太空中的宇航员
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Astronaut {
    /// 姓名
    pub name: String,
    /// 所在飞行器
    pub craft: String,
}

fn field(index: usize, name: &str) -> [PathSegment; 2] {
    [PathSegment::Index(index), PathSegment::from(name)]
}

/// 将对象数组映射为过境记录
///
/// 每个元素必须带有整数字段 `duration` 和 `risetime`。
/// 遇到第一个不合格元素即整体失败，不返回部分结果。
///
/// # 参数
///
/// * `value` - JSON数组，例如过境接口响应中的 `response` 字段
///
/// # 返回值
///
/// * `Ok(Vec<PassEntry>)` - 与输入顺序一致的过境记录
/// * `Err(ProjectionError)` - 输入不是数组，或某个元素缺少字段/类型不符
pub fn to_pass_entries(value: &Value) -> Result<Vec<PassEntry>, ProjectionError> {
    let items = project_array(value, &[])?;
    (0..items.len())
        .map(|index| {
            let duration_seconds = project_i64(value, &field(index, "duration"))?;
            let risetime_epoch = project_i64(value, &field(index, "risetime"))?;
            Ok(PassEntry::new(duration_seconds, risetime_epoch))
        })
        .collect()
}

/// 从完整的过境接口响应中取出过境记录
pub fn iss_passes(body: &Value) -> Result<Vec<PassEntry>, ProjectionError> {
    to_pass_entries(project(body, &keys(["response"]))?)
}

/// 将对象数组映射为宇航员列表
///
/// 与 [`to_pass_entries`] 相同的失败语义，字段为字符串 `name` 和 `craft`
pub fn to_astronauts(value: &Value) -> Result<Vec<Astronaut>, ProjectionError> {
    let items = project_array(value, &[])?;
    (0..items.len())
        .map(|index| {
            let name = project_str(value, &field(index, "name"))?;
            let craft = project_str(value, &field(index, "craft"))?;
            Ok(Astronaut {
                name: name.to_string(),
                craft: craft.to_string(),
            })
        })
        .collect()
}

/// 从完整的宇航员接口响应中取出人员列表
pub fn astronauts(body: &Value) -> Result<Vec<Astronaut>, ProjectionError> {
    to_astronauts(project(body, &keys(["people"]))?)
}
