/*!
 * Simulated function object: property store, call log and scripted replies.
 */

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError, RwLock, Weak};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use yoctoproxy_core::types::{HardwareId, NATIVE_INVALID_STRING, NATIVE_INVALID_UINT, SUCCESS};

use super::{HubState, SimClass};
use crate::function::{read_lock, write_lock};
use crate::native::ValueCallback;

/// Status returned by writes and actions on an offline function
pub const DEVICE_NOT_FOUND: i32 = -4;

/// One write or action received by a simulated function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimCall {
    /// Native method name, e.g. `set_voltage_level`
    pub method: String,
    /// Arguments, in call order
    pub args: Vec<Value>,
}

/// A simulated native function object
pub struct SimFunction {
    hub: Weak<HubState>,
    class: SimClass,
    serial: String,
    function_id: String,
    online: AtomicBool,
    properties: RwLock<HashMap<String, Value>>,
    replies: RwLock<HashMap<String, VecDeque<Value>>>,
    calls: Mutex<Vec<SimCall>>,
    callback: RwLock<Option<ValueCallback>>,
}

impl fmt::Debug for SimFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimFunction")
            .field("class", &self.class)
            .field("hardware_id", &self.hardware_id_str())
            .field("online", &self.online())
            .finish()
    }
}

impl SimFunction {
    pub(crate) fn new(hub: Weak<HubState>, class: SimClass, serial: &str, function_id: &str) -> Self {
        let mut properties = HashMap::new();
        properties.insert("logical_name".to_string(), Value::from(""));
        properties.insert("advertised_value".to_string(), Value::from(""));
        Self {
            hub,
            class,
            serial: serial.to_string(),
            function_id: function_id.to_string(),
            online: AtomicBool::new(false),
            properties: RwLock::new(properties),
            replies: RwLock::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            callback: RwLock::new(None),
        }
    }

    /// An offline object that belongs to no module
    pub(crate) fn detached(class: SimClass) -> Self {
        Self::new(Weak::new(), class, "", "")
    }

    /// Function class
    pub fn class(&self) -> SimClass {
        self.class
    }

    /// Serial number of the hosting module, empty when detached
    pub fn serial(&self) -> &str {
        &self.serial
    }

    pub(crate) fn hub(&self) -> &Weak<HubState> {
        &self.hub
    }

    pub(crate) fn online(&self) -> bool {
        self.online.load(Ordering::Acquire)
    }

    pub(crate) fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::Release);
    }

    pub(crate) fn hardware_id_str(&self) -> String {
        if self.serial.is_empty() {
            NATIVE_INVALID_STRING.to_string()
        } else {
            HardwareId::new(&self.serial, &self.function_id).to_string()
        }
    }

    pub(crate) fn function_id_str(&self) -> String {
        if self.serial.is_empty() {
            NATIVE_INVALID_STRING.to_string()
        } else {
            self.function_id.clone()
        }
    }

    pub(crate) fn answers_to(&self, name: &str) -> bool {
        if name.is_empty() || self.serial.is_empty() {
            return false;
        }
        let logical = self.logical();
        name == self.hardware_id_str()
            || (!logical.is_empty() && name == logical)
            || (!logical.is_empty() && HardwareId::new(&self.serial, &logical).as_str() == name)
    }

    pub(crate) fn logical(&self) -> String {
        read_lock(&self.properties)
            .get("logical_name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// Set a property as if the device changed it; nothing is logged
    pub fn set_property(&self, name: &str, value: impl Into<Value>) {
        write_lock(&self.properties).insert(name.to_string(), value.into());
    }

    /// Current value of a property, if set
    pub fn property(&self, name: &str) -> Option<Value> {
        read_lock(&self.properties).get(name).cloned()
    }

    /// Queue a reply for the next call to `method`
    pub fn push_reply(&self, method: &str, reply: impl Into<Value>) {
        write_lock(&self.replies)
            .entry(method.to_string())
            .or_default()
            .push_back(reply.into());
    }

    /// Every write and action received so far
    pub fn calls(&self) -> Vec<SimCall> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Calls received for one method
    pub fn calls_to(&self, method: &str) -> Vec<SimCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.method == method)
            .collect()
    }

    /// Forget the received calls
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }

    /// Publish a new advertised value and notify the registered callback
    pub fn advertise(&self, value: &str) {
        self.set_property("advertised_value", value);
        if !self.online() {
            return;
        }
        let callback = read_lock(&self.callback).clone();
        if let Some(callback) = callback {
            callback(value);
        }
    }

    pub(crate) fn set_callback(&self, callback: Option<ValueCallback>) {
        *write_lock(&self.callback) = callback;
    }

    pub(crate) fn get_str(&self, name: &str) -> String {
        if !self.online() {
            return NATIVE_INVALID_STRING.to_string();
        }
        read_lock(&self.properties)
            .get(name)
            .and_then(Value::as_str)
            .map_or_else(|| NATIVE_INVALID_STRING.to_string(), str::to_string)
    }

    pub(crate) fn get_int(&self, name: &str) -> i32 {
        if !self.online() {
            return NATIVE_INVALID_UINT;
        }
        read_lock(&self.properties)
            .get(name)
            .and_then(Value::as_i64)
            .and_then(|v| i32::try_from(v).ok())
            .unwrap_or(NATIVE_INVALID_UINT)
    }

    fn record(&self, method: &str, args: Vec<Value>) {
        trace!(hardware_id = %self.hardware_id_str(), method, ?args, "simulated call");
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SimCall {
                method: method.to_string(),
                args,
            });
    }

    /// Log a property write and store the value
    pub(crate) fn put(&self, method: &str, name: &str, value: impl Into<Value>) -> i32 {
        if !self.online() {
            return DEVICE_NOT_FOUND;
        }
        let value = value.into();
        self.record(method, vec![value.clone()]);
        self.set_property(name, value);
        SUCCESS
    }

    /// Log an action and return its scripted status, `SUCCESS` by default
    pub(crate) fn act(&self, method: &str, args: Vec<Value>) -> i32 {
        if !self.online() {
            return DEVICE_NOT_FOUND;
        }
        self.record(method, args);
        self.reply(method).unwrap_or(SUCCESS)
    }

    /// Log a query and return its scripted reply, or the type's default
    pub(crate) fn query<T: DeserializeOwned + Default>(&self, method: &str, args: Vec<Value>) -> T {
        if !self.online() {
            return T::default();
        }
        self.record(method, args);
        self.reply(method).unwrap_or_default()
    }

    fn reply<T: DeserializeOwned>(&self, method: &str) -> Option<T> {
        let reply = write_lock(&self.replies).get_mut(method)?.pop_front()?;
        serde_json::from_value(reply).ok()
    }
}

/// Arguments for the call log
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        vec![$(serde_json::json!($arg)),*]
    };
}

pub(crate) use args;

#[cfg(test)]
mod tests {
    use super::*;

    fn plugged() -> SimFunction {
        let function = SimFunction::new(Weak::new(), SimClass::SerialPort, "RS232MK3-00001", "serialPort");
        function.set_online(true);
        function
    }

    #[test]
    fn test_unset_properties_read_as_sentinels() {
        let function = plugged();
        assert_eq!(function.get_str("serial_mode"), NATIVE_INVALID_STRING);
        assert_eq!(function.get_int("voltage_level"), NATIVE_INVALID_UINT);
        assert_eq!(function.get_str("logical_name"), "");
    }

    #[test]
    fn test_put_logs_and_stores() {
        let function = plugged();
        assert_eq!(function.put("set_serial_mode", "serial_mode", "9600,8N1"), SUCCESS);
        assert_eq!(function.get_str("serial_mode"), "9600,8N1");
        assert_eq!(
            function.calls(),
            vec![SimCall {
                method: "set_serial_mode".to_string(),
                args: vec![Value::from("9600,8N1")],
            }]
        );
    }

    #[test]
    fn test_offline_function_rejects_writes() {
        let function = plugged();
        function.set_online(false);
        assert_eq!(function.put("set_protocol", "protocol", "Line"), DEVICE_NOT_FOUND);
        assert!(function.calls().is_empty());
        assert_eq!(function.get_str("protocol"), NATIVE_INVALID_STRING);
    }

    #[test]
    fn test_replies_are_consumed_in_order() {
        let function = plugged();
        function.push_reply("query_line", "first");
        function.push_reply("query_line", "second");
        let a: String = function.query("query_line", args!["AT", 100]);
        let b: String = function.query("query_line", args!["AT", 100]);
        let c: String = function.query("query_line", args!["AT", 100]);
        assert_eq!((a.as_str(), b.as_str(), c.as_str()), ("first", "second", ""));
        assert_eq!(function.calls_to("query_line").len(), 3);
    }
}
