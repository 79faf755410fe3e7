// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use skyquery::utils::telemetry;

#[test]
fn test_telemetry_initialization_is_idempotent() {
    telemetry::init_telemetry();
    telemetry::init_telemetry();

    // 结构化日志
    tracing::info!(
        endpoint = "http://api.open-notify.org/astros.json",
        status_code = 200,
        "Request succeeded"
    );
    tracing::warn!(kind = "http error", status_code = 404, "Request failed");
}
