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

/// Macro to define response code enums with automatic conversion implementations.
/// This reduces code duplication and makes maintenance easier.
macro_rules! define_response_code {
    (
        $(#[$enum_meta:meta])*
        pub enum $enum_name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:expr
            ),* $(,)?
        },
        default = $default:ident
    ) => {
        $(#[$enum_meta])*
        #[repr(i32)]
        pub enum $enum_name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )*
        }

        impl From<$enum_name> for i32 {
            #[inline]
            fn from(value: $enum_name) -> Self {
                value as i32
            }
        }

        impl From<i32> for $enum_name {
            #[inline]
            fn from(value: i32) -> Self {
                match value {
                    $($value => $enum_name::$variant,)*
                    _ => $enum_name::$default,
                }
            }
        }

        impl $enum_name {
            /// Convert to i32 value
            #[inline]
            pub const fn to_i32(self) -> i32 {
                self as i32
            }

            /// Check if this is a success response
            #[inline]
            pub const fn is_success(&self) -> bool {
                matches!(self, Self::Success)
            }

            /// Check if this is an error response
            #[inline]
            pub const fn is_error(&self) -> bool {
                !self.is_success()
            }
        }
    };
}

define_response_code! {
    #[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
    pub enum ResponseCode {
        Success = 0,
        SystemError = 1,
        SystemBusy = 2,
        RequestCodeNotSupported = 3,
        ServiceNotAvailable = 14,
        VersionNotSupported = 15,
        NoPermission = 16,
        SubscriptionGroupNotExist = 26,
    },
    default = SystemError
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_zero() {
        assert_eq!(ResponseCode::from(0), ResponseCode::Success);
        assert!(ResponseCode::Success.is_success());
        assert!(!ResponseCode::Success.is_error());
    }

    #[test]
    fn unknown_code_maps_to_system_error() {
        assert_eq!(ResponseCode::from(123456), ResponseCode::SystemError);
        assert!(ResponseCode::from(123456).is_error());
        assert_eq!(ResponseCode::NoPermission.to_i32(), 16);
    }
}
