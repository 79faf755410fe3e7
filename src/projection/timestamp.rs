// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Local, TimeZone};
use std::fmt;
use thiserror::Error;

/// 人类可读时间格式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 时间戳转换错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// 超出可表示范围的Unix秒
    #[error("Epoch seconds {0} out of range")]
    OutOfRange(i64),
    /// 非法的UTC偏移量
    #[error("Invalid UTC offset: {0} seconds")]
    InvalidOffset(i32),
}

/// 将Unix秒转换为指定时区的时间
///
/// 结果只取决于输入和时区，与运行环境无关
///
/// # 参数
///
/// * `epoch_seconds` - Unix秒
/// * `tz` - 目标时区
pub fn epoch_to_timestamp<Tz: TimeZone>(
    epoch_seconds: i64,
    tz: &Tz,
) -> Result<DateTime<Tz>, TimestampError> {
    tz.timestamp_opt(epoch_seconds, 0)
        .single()
        .ok_or(TimestampError::OutOfRange(epoch_seconds))
}

/// 将Unix秒转换为本机时区的时间
///
/// 结果取决于宿主机的时区设置，不同环境下输出不同。
/// 需要确定性结果时使用 [`epoch_to_timestamp`] 并显式传入时区。
pub fn epoch_to_local_timestamp(epoch_seconds: i64) -> Result<DateTime<Local>, TimestampError> {
    epoch_to_timestamp(epoch_seconds, &Local)
}

/// 按 `YYYY-MM-DD HH:MM:SS` 格式化时间
pub fn format_timestamp<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// 显示用时区
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    /// 本机时区
    Local,
    /// 固定UTC偏移
    Fixed(FixedOffset),
}

impl DisplayZone {
    /// 从UTC偏移秒数创建，东为正
    pub fn from_offset_seconds(seconds: i32) -> Result<Self, TimestampError> {
        FixedOffset::east_opt(seconds)
            .map(DisplayZone::Fixed)
            .ok_or(TimestampError::InvalidOffset(seconds))
    }

    /// 将Unix秒格式化为该时区下的可读时间
    pub fn format_epoch(&self, epoch_seconds: i64) -> Result<String, TimestampError> {
        match self {
            DisplayZone::Local => Ok(format_timestamp(&epoch_to_local_timestamp(epoch_seconds)?)),
            DisplayZone::Fixed(offset) => {
                Ok(format_timestamp(&epoch_to_timestamp(epoch_seconds, offset)?))
            }
        }
    }
}
