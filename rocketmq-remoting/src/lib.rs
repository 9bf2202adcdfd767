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

//! Remoting protocol support for the RocketMQ admin tools.
//!
//! Only the request/response subset the admin client needs lives here: the
//! remoting command frame and its codec, request and response codes, the
//! protocol bodies exchanged with name servers and brokers, and a small TCP
//! client that issues one request at a time.

pub mod clients;
pub mod code;
pub mod codec;
pub mod protocol;

pub use crate::protocol::RemotingSerializable;
