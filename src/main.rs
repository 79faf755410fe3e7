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

use serde_json::Value;
use skyquery::client::{Endpoint, QueryClient, QueryResult, ReqwestTransport, StatusCategory};
use skyquery::config::settings::Settings;
use skyquery::projection::{astronauts, iss_passes, DisplayZone};
use skyquery::utils::json_print::to_pretty_string;
use skyquery::utils::telemetry;
use std::sync::Arc;
use tracing::{info, warn};

/// 主函数
///
/// 依次演示：访问不存在的端点、查询在轨宇航员、查询空间站过境时间
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting skyquery...");

    // 2. Load configuration
    let settings = Settings::new()?;
    let zone = settings.display.zone()?;
    info!(base_url = %settings.client.base_url, ?zone, "Configuration loaded");

    // 3. Build client
    let transport =
        ReqwestTransport::with_options(settings.client.timeout(), &settings.client.user_agent)?;
    let client = QueryClient::new(Arc::new(transport));
    let base = Endpoint::parse(&settings.client.base_url)?;

    // 4. Walk through the endpoints
    probe_missing_endpoint(&client, &base).await?;
    show_astronauts(&client, &base).await?;
    show_passes(&client, &base, &settings, zone).await?;

    info!("Done");
    Ok(())
}

/// 访问不存在的端点并打印状态码
async fn probe_missing_endpoint(client: &QueryClient, base: &Endpoint) -> anyhow::Result<()> {
    let endpoint = base.join("this-api-doesnt-exist")?;
    let result = client.fetch(&endpoint).await;

    match result.status_code() {
        Some(code) => println!("{} -> {} ({})", endpoint, code, StatusCategory::of(code)),
        None => println!("{} -> no response", endpoint),
    }
    Ok(())
}

/// 查询在轨宇航员
async fn show_astronauts(client: &QueryClient, base: &Endpoint) -> anyhow::Result<()> {
    let endpoint = base.join("astros.json")?;
    let Some(body) = success_body(&endpoint, client.fetch(&endpoint).await) else {
        return Ok(());
    };

    println!("{}", to_pretty_string(&body)?);
    for person in astronauts(&body)? {
        println!("{} ({})", person.name, person.craft);
    }
    Ok(())
}

/// 查询观测点上空的过境时间
async fn show_passes(
    client: &QueryClient,
    base: &Endpoint,
    settings: &Settings,
    zone: DisplayZone,
) -> anyhow::Result<()> {
    let endpoint = base
        .join("iss-pass.json")?
        .with_param("lat", settings.observer.latitude)
        .with_param("lon", settings.observer.longitude);
    let Some(body) = success_body(&endpoint, client.fetch(&endpoint).await) else {
        return Ok(());
    };

    println!("{}", to_pretty_string(&body)?);

    let passes = iss_passes(&body)?;
    let risetimes: Vec<i64> = passes.iter().map(|p| p.risetime_epoch).collect();
    println!("{:?}", risetimes);

    for pass in &passes {
        println!(
            "{}  ({} s visible)",
            zone.format_epoch(pass.risetime_epoch)?,
            pass.duration_seconds
        );
    }
    Ok(())
}

fn success_body(endpoint: &Endpoint, result: QueryResult) -> Option<Value> {
    match result {
        QueryResult::Success { status_code, body } => {
            info!(%endpoint, status_code, "Request succeeded");
            Some(body)
        }
        QueryResult::Failure(failure) => {
            warn!(
                %endpoint,
                kind = %failure.kind,
                status_code = ?failure.status_code,
                category = ?failure.category(),
                "Request failed: {}",
                failure.detail
            );
            None
        }
    }
}
