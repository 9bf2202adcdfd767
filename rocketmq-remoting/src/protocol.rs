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

use std::fmt;

use rocketmq_error::RocketMQResult;
use rocketmq_error::SerializationError;
use serde::de;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

pub mod body;
pub mod remoting_command;
pub mod route;
pub mod subscription;

#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash, Serialize)]
pub enum LanguageCode {
    JAVA,
    CPP,
    DOTNET,
    PYTHON,
    DELPHI,
    ERLANG,
    RUBY,
    OTHER,
    HTTP,
    GO,
    PHP,
    OMS,
    #[default]
    RUST,
}

impl LanguageCode {
    pub fn from_name(name: &str) -> Self {
        match name {
            "JAVA" => LanguageCode::JAVA,
            "CPP" => LanguageCode::CPP,
            "DOTNET" => LanguageCode::DOTNET,
            "PYTHON" => LanguageCode::PYTHON,
            "DELPHI" => LanguageCode::DELPHI,
            "ERLANG" => LanguageCode::ERLANG,
            "RUBY" => LanguageCode::RUBY,
            "HTTP" => LanguageCode::HTTP,
            "GO" => LanguageCode::GO,
            "PHP" => LanguageCode::PHP,
            "OMS" => LanguageCode::OMS,
            "RUST" => LanguageCode::RUST,
            _ => LanguageCode::OTHER,
        }
    }
}

// Peers may run newer releases that know languages this enum does not.
impl<'de> Deserialize<'de> for LanguageCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(LanguageCode::from_name(name.as_str()))
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash, Serialize, Deserialize)]
pub enum SerializeType {
    #[default]
    JSON,
    ROCKETMQ,
}

impl SerializeType {
    pub fn value_of(code: u8) -> Option<Self> {
        match code {
            0 => Some(SerializeType::JSON),
            1 => Some(SerializeType::ROCKETMQ),
            _ => None,
        }
    }

    pub fn get_code(&self) -> u8 {
        match self {
            SerializeType::JSON => 0,
            SerializeType::ROCKETMQ => 1,
        }
    }
}

impl fmt::Display for SerializeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// JSON codec for request and response bodies.
pub trait RemotingSerializable {
    /// The output type after deserialization.
    type Output;

    /// Decode a body into the corresponding type.
    fn decode<'a>(bytes: &'a [u8]) -> RocketMQResult<Self::Output>
    where
        Self::Output: de::Deserialize<'a>,
    {
        serde_json::from_slice::<Self::Output>(bytes)
            .map_err(|e| SerializationError::decode_failed("JSON", e.to_string()).into())
    }

    fn encode(&self) -> RocketMQResult<Vec<u8>>
    where
        Self: Serialize,
    {
        serde_json::to_vec(self).map_err(|e| SerializationError::encode_failed("JSON", e.to_string()).into())
    }
}
