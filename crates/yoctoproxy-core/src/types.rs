/*!
 * Core data types for yoctoproxy.
 *
 * Hardware identifiers, invalid-value sentinels on both sides of the native
 * boundary, and the enum re-basing convention shared by every proxy.
 */
use std::fmt;

use serde::{Deserialize, Serialize};

/// Status code returned by native setters and commands on success
pub const SUCCESS: i32 = 0;

/// Native sentinel for an unreadable unsigned integer
pub const NATIVE_INVALID_UINT: i32 = -1;

/// Native sentinel for an unreadable string
pub const NATIVE_INVALID_STRING: &str = "!INVALID!";

/// Native sentinel for an unreadable enumerated value
pub const NATIVE_INVALID_ENUM: i32 = -1;

/// Proxy sentinel for an unreadable unsigned integer
pub const INVALID_UINT: i32 = -1;

/// Proxy sentinel for an unreadable string
pub const INVALID_STRING: &str = "";

/// Map a native string value to its proxy representation
pub fn proxy_string(native: String) -> String {
    if native == NATIVE_INVALID_STRING {
        INVALID_STRING.to_string()
    } else {
        native
    }
}

/// Map a native unsigned integer to its proxy representation
pub fn proxy_uint(native: i32) -> i32 {
    if native < 0 {
        INVALID_UINT
    } else {
        native
    }
}

/// The identifier of one hardware function, `MODULE.functionId`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HardwareId(String);

impl HardwareId {
    /// Create a hardware id from module serial number and function id
    pub fn new<S: AsRef<str>, F: AsRef<str>>(serial: S, function: F) -> Self {
        Self(format!("{}.{}", serial.as_ref(), function.as_ref()))
    }

    /// Create a hardware id from its string form
    pub fn from_string<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_string())
    }

    /// Get the string representation of the id
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The module part (serial number or module logical name)
    pub fn module(&self) -> &str {
        match self.0.split_once('.') {
            Some((module, _)) => module,
            None => "",
        }
    }

    /// The function part
    pub fn function(&self) -> &str {
        match self.0.split_once('.') {
            Some((_, function)) => function,
            None => &self.0,
        }
    }

    /// Whether this id carries a module part
    pub fn is_qualified(&self) -> bool {
        !self.module().is_empty()
    }
}

impl fmt::Display for HardwareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for HardwareId {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl From<String> for HardwareId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// An enumeration re-based between native and proxy encodings.
///
/// Natively, valid members start at 0 and -1 means invalid. On the proxy side
/// 0 means invalid and members start at 1.
pub trait Rebased: Copy + Sized {
    /// The invalid member
    const INVALID: Self;

    /// Build from a proxy code; codes outside the member range give `INVALID`
    fn from_code(code: i32) -> Self;

    /// The proxy code of this member
    fn code(self) -> i32;

    /// Build from a native value (`n + 1`)
    fn from_native(native: i32) -> Self {
        Self::from_code(native.saturating_add(1))
    }

    /// The native value of this member (`code - 1`)
    fn to_native(self) -> i32 {
        self.code() - 1
    }

    /// Whether this is the invalid member
    fn is_invalid(self) -> bool {
        self.code() == 0
    }
}

/// Declare a proxy enumeration with an `Invalid` member at code 0.
///
/// Members listed in the macro take codes 1, 2, ... in order, which matches
/// the native 0-based order shifted by one.
#[macro_export]
macro_rules! rebased_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis enum $name {
            /// Value is unknown or could not be read
            #[default]
            Invalid,
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            const MEMBERS: &'static [$name] = &[$name::Invalid, $($name::$variant),+];
        }

        impl $crate::types::Rebased for $name {
            const INVALID: Self = $name::Invalid;

            fn from_code(code: i32) -> Self {
                usize::try_from(code)
                    .ok()
                    .and_then(|index| Self::MEMBERS.get(index))
                    .copied()
                    .unwrap_or($name::Invalid)
            }

            fn code(self) -> i32 {
                self as i32
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    rebased_enum! {
        /// Test enumeration
        pub enum Level {
            /// Low
            Low,
            /// High
            High,
        }
    }

    #[test]
    fn test_hardware_id_parts() {
        let id = HardwareId::new("RS232MK3-12345", "serialPort");
        assert_eq!(id.as_str(), "RS232MK3-12345.serialPort");
        assert_eq!(id.module(), "RS232MK3-12345");
        assert_eq!(id.function(), "serialPort");
        assert!(id.is_qualified());

        let bare: HardwareId = "myPort".into();
        assert_eq!(bare.module(), "");
        assert_eq!(bare.function(), "myPort");
        assert!(!bare.is_qualified());
        assert_eq!(format!("{}", bare), "myPort");
    }

    #[test]
    fn test_rebased_from_native_shifts_up() {
        assert_eq!(Level::from_native(NATIVE_INVALID_ENUM), Level::Invalid);
        assert_eq!(Level::from_native(0), Level::Low);
        assert_eq!(Level::from_native(1), Level::High);
        assert_eq!(Level::from_native(7), Level::Invalid);
        assert_eq!(Level::from_native(i32::MAX), Level::Invalid);
    }

    #[test]
    fn test_rebased_to_native_shifts_down() {
        assert_eq!(Level::Low.code(), 1);
        assert_eq!(Level::Low.to_native(), 0);
        assert_eq!(Level::High.to_native(), 1);
        assert_eq!(Level::Invalid.to_native(), -1);
        assert!(Level::default().is_invalid());
        assert_eq!(Level::INVALID, Level::Invalid);
    }

    #[test]
    fn test_sentinel_mapping() {
        assert_eq!(proxy_string(NATIVE_INVALID_STRING.to_string()), "");
        assert_eq!(proxy_string("9600,8N1".to_string()), "9600,8N1");
        assert_eq!(proxy_uint(NATIVE_INVALID_UINT), INVALID_UINT);
        assert_eq!(proxy_uint(i32::MIN), INVALID_UINT);
        assert_eq!(proxy_uint(12), 12);
    }
}
