// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// JSON 美化输出与日志初始化
pub mod json_print;
pub mod telemetry;
