// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 客户端模块
///
/// 端点构造、HTTP传输与JSON查询
pub mod client;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 投影模块
///
/// 从解码后的JSON中按路径取值，并转换时间戳
pub mod projection;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
