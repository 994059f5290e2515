// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Shared fixtures for integration tests

use serde_json::{json, Value};

/// Minimal valid Component configuration.
pub fn component_config() -> Value {
    json!({
        "metadata": { "name": "db", "namespace": "prod" },
        "spec": { "type": "database", "hidden": true },
    })
}

/// Topology configuration with a nested selector path.
pub fn topology_config() -> Value {
    json!({
        "metadata": { "name": "payments", "namespace": "prod" },
        "spec": {
            "schedule": "@every 5m",
            "type": "application",
            "components": [
                {
                    "name": "payments-db",
                    "type": "database",
                    "checks": [
                        { "inline": { "http": [ { "url": "https://example.com/health" } ] } },
                    ],
                    "selectors": [
                        { "labelSelector": "app=payments,tier=db" },
                    ],
                },
            ],
        },
    })
}
