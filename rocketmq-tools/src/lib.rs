// Copyright 2023 The RocketMQ Rust Authors
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

//! RocketMQ Tools - admin client and CLI utilities
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   CLI Layer (rocketmq_cli, bin/)        │
//! │  - Command parsing (clap)               │
//! │  - Config layering (tools_config)       │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │         Sub-commands (commands/)        │
//! │  - consumer: updateSubGroupList         │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │        Admin API (admin/)               │
//! │  - MQAdminExt trait                     │
//! │  - DefaultMQAdminExt                    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```bash
//! rocketmq-admin-cli-rust consumer updateSubGroupList -n 127.0.0.1:9876 -c DefaultCluster -f groups.json
//! ```

// Admin API layer
pub mod admin;

pub mod commands;

pub mod log;
pub mod tools_config;

// CLI entry point
pub mod rocketmq_cli;

pub use rocketmq_error::RocketMQError;
pub use rocketmq_error::RocketMQResult;
pub use rocketmq_error::ToolsError;
