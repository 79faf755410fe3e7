// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::client::reqwest_transport::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::projection::timestamp::{DisplayZone, TimestampError};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 应用程序配置设置
///
/// 包含HTTP客户端、观测点坐标和时间显示配置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// HTTP客户端配置
    pub client: ClientSettings,
    /// 观测点配置
    pub observer: ObserverSettings,
    /// 时间显示配置
    #[serde(default)]
    pub display: DisplaySettings,
}

/// HTTP客户端配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    /// 接口基础URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// User-Agent
    pub user_agent: String,
}

impl ClientSettings {
    /// 请求超时时间
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 观测点配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ObserverSettings {
    /// 纬度
    pub latitude: f64,
    /// 经度
    pub longitude: f64,
}

/// 时间显示配置设置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplaySettings {
    /// UTC偏移（秒，东为正）；未设置时使用本机时区
    pub utc_offset_seconds: Option<i32>,
}

impl DisplaySettings {
    /// 解析显示用时区
    pub fn zone(&self) -> Result<DisplayZone, TimestampError> {
        match self.utc_offset_seconds {
            Some(seconds) => DisplayZone::from_offset_seconds(seconds),
            None => Ok(DisplayZone::Local),
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和 `SKYQUERY__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// 从指定目录加载配置
    ///
    /// # Arguments
    ///
    /// * `dir` - 存放 `default.*` 与 `{APP_ENVIRONMENT}.*` 配置文件的目录
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults()?
            .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false))
            .add_source(File::with_name(&dir.join(&env).to_string_lossy()).required(false))
            .add_source(Environment::with_prefix("SKYQUERY").separator("__"));

        builder.build()?.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            // Default client settings
            .set_default("client.base_url", "http://api.open-notify.org/")?
            .set_default("client.timeout_secs", DEFAULT_TIMEOUT.as_secs())?
            .set_default("client.user_agent", DEFAULT_USER_AGENT)?
            // New York City
            .set_default("observer.latitude", 40.71)?
            .set_default("observer.longitude", -74.0)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
