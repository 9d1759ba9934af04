/*!
 * Proxy base shared by every function type.
 *
 * A proxy is either linked to a native function object or unlinked. Explicit
 * accessors go to the native object and fail with `NotConnected` when
 * unlinked; cached accessors read a snapshot refreshed by the arrival,
 * configuration-change and value-change hooks.
 */
use std::any::Any;
use std::fmt::{self, Debug};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, trace};

use yoctoproxy_core::types::{
    proxy_string, proxy_uint, Rebased, INVALID_STRING, INVALID_UINT, SUCCESS,
};

use crate::error::{ProxyError, Result};
use crate::native::{NativeFunction, NativeLibrary, ValueCallback};

pub(crate) fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Link state between a proxy and its native function object
pub enum Link<N: ?Sized> {
    /// No native function object yet
    Unlinked,
    /// Bound to a native function object, which may itself be offline
    Linked(Arc<N>),
}

impl<N: ?Sized> Link<N> {
    /// Whether a native object is bound
    pub fn is_linked(&self) -> bool {
        matches!(self, Link::Linked(_))
    }

    /// The bound native object, if any
    pub fn native(&self) -> Option<&Arc<N>> {
        match self {
            Link::Linked(native) => Some(native),
            Link::Unlinked => None,
        }
    }
}

impl<N: ?Sized> Clone for Link<N> {
    fn clone(&self) -> Self {
        match self {
            Link::Unlinked => Link::Unlinked,
            Link::Linked(native) => Link::Linked(Arc::clone(native)),
        }
    }
}

impl<N: ?Sized + Debug> Debug for Link<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Link::Unlinked => f.write_str("Unlinked"),
            Link::Linked(native) => f.debug_tuple("Linked").field(native).finish(),
        }
    }
}

/// One cached property value with its invalid sentinel
#[derive(Debug)]
pub(crate) struct Cached<T> {
    value: RwLock<T>,
    invalid: T,
}

impl<T: Clone + PartialEq> Cached<T> {
    pub(crate) fn new(invalid: T) -> Self {
        Self {
            value: RwLock::new(invalid.clone()),
            invalid,
        }
    }

    pub(crate) fn load(&self) -> T {
        read_lock(&self.value).clone()
    }

    pub(crate) fn store(&self, value: T) {
        *write_lock(&self.value) = value;
    }

    pub(crate) fn invalid(&self) -> T {
        self.invalid.clone()
    }
}

impl Cached<String> {
    pub(crate) fn string() -> Self {
        Self::new(INVALID_STRING.to_string())
    }
}

impl Cached<i32> {
    pub(crate) fn uint() -> Self {
        Self::new(INVALID_UINT)
    }
}

impl<E: Rebased + PartialEq> Cached<E> {
    pub(crate) fn enumeration() -> Self {
        Self::new(E::INVALID)
    }
}

/// Event published by proxies when the native library reports a change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProxyEvent {
    /// The function became reachable
    Arrival {
        /// Function class name
        class: String,
        /// Hardware id of the function
        hardware_id: String,
        /// When the event was observed
        at: DateTime<Utc>,
    },
    /// The function is no longer reachable
    Removal {
        /// Function class name
        class: String,
        /// Hardware id of the function
        hardware_id: String,
        /// When the event was observed
        at: DateTime<Utc>,
    },
    /// The hosting module configuration changed
    ConfigChanged {
        /// Function class name
        class: String,
        /// Hardware id of the function
        hardware_id: String,
        /// When the event was observed
        at: DateTime<Utc>,
    },
    /// The function published a new advertised value
    ValueChanged {
        /// Function class name
        class: String,
        /// Hardware id of the function
        hardware_id: String,
        /// The advertised value
        value: String,
        /// When the event was observed
        at: DateTime<Utc>,
    },
}

impl ProxyEvent {
    /// Hardware id of the function the event is about
    pub fn hardware_id(&self) -> &str {
        match self {
            ProxyEvent::Arrival { hardware_id, .. }
            | ProxyEvent::Removal { hardware_id, .. }
            | ProxyEvent::ConfigChanged { hardware_id, .. }
            | ProxyEvent::ValueChanged { hardware_id, .. } => hardware_id,
        }
    }

    /// Function class name the event is about
    pub fn class(&self) -> &str {
        match self {
            ProxyEvent::Arrival { class, .. }
            | ProxyEvent::Removal { class, .. }
            | ProxyEvent::ConfigChanged { class, .. }
            | ProxyEvent::ValueChanged { class, .. } => class,
        }
    }

    /// JSON rendering of the event
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Identity fields cached from the native object on arrival
#[derive(Debug, Clone, Default)]
struct Identity {
    hardware_id: String,
    function_id: String,
    serial_number: String,
    friendly_name: String,
}

/// State and behavior common to every proxy.
///
/// `N` is the native trait object type the proxy forwards to.
pub struct FunctionProxy<N: ?Sized> {
    class_name: &'static str,
    func: RwLock<String>,
    link: RwLock<Link<N>>,
    online: AtomicBool,
    identity: RwLock<Identity>,
    logical_name: Cached<String>,
    advertised_value: Cached<String>,
    events: broadcast::Sender<ProxyEvent>,
}

impl<N: ?Sized + Debug> Debug for FunctionProxy<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionProxy")
            .field("class", &self.class_name)
            .field("func", &*read_lock(&self.func))
            .field("link", &*read_lock(&self.link))
            .field("online", &self.online.load(Ordering::Acquire))
            .finish()
    }
}

impl<N: ?Sized + NativeFunction> FunctionProxy<N> {
    /// Create an unlinked proxy base
    pub fn new(class_name: &'static str, func: &str, events: broadcast::Sender<ProxyEvent>) -> Self {
        Self {
            class_name,
            func: RwLock::new(func.to_string()),
            link: RwLock::new(Link::Unlinked),
            online: AtomicBool::new(false),
            identity: RwLock::new(Identity::default()),
            logical_name: Cached::string(),
            advertised_value: Cached::string(),
            events,
        }
    }

    /// Function class name, e.g. `SerialPort`
    pub fn class_name(&self) -> &'static str {
        self.class_name
    }

    /// Name the proxy was resolved with (or the adopted hardware id)
    pub fn function_name(&self) -> String {
        read_lock(&self.func).clone()
    }

    pub(crate) fn adopt_function_name(&self, func: &str) {
        *write_lock(&self.func) = func.to_string();
    }

    /// Whether a native object is linked
    pub fn is_linked(&self) -> bool {
        read_lock(&self.link).is_linked()
    }

    /// Whether the function was reachable at the last hook
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::Acquire)
    }

    pub(crate) fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::Release);
    }

    pub(crate) fn set_link(&self, link: Link<N>) {
        *write_lock(&self.link) = link;
    }

    /// The linked native object, or `NotConnected`
    pub fn native(&self) -> Result<Arc<N>> {
        match &*read_lock(&self.link) {
            Link::Linked(native) => Ok(Arc::clone(native)),
            Link::Unlinked => Err(ProxyError::NotConnected(self.class_name)),
        }
    }

    /// Run `f` against the linked native object
    pub fn with_native<T>(&self, f: impl FnOnce(&N) -> T) -> Result<T> {
        let native = self.native()?;
        Ok(f(&*native))
    }

    /// The linked native object when the proxy is online
    pub(crate) fn online_native(&self) -> Option<Arc<N>> {
        if !self.is_online() {
            return None;
        }
        read_lock(&self.link).native().cloned()
    }

    pub(crate) fn get_string(&self, f: impl FnOnce(&N) -> String) -> Result<String> {
        self.with_native(|native| proxy_string(f(native)))
    }

    pub(crate) fn set_string(&self, newval: &str, f: impl FnOnce(&N, &str) -> i32) -> Result<i32> {
        let native = self.native()?;
        if newval == INVALID_STRING {
            return Ok(SUCCESS);
        }
        Ok(f(&*native, newval))
    }

    pub(crate) fn get_uint(&self, f: impl FnOnce(&N) -> i32) -> Result<i32> {
        self.with_native(|native| proxy_uint(f(native)))
    }

    pub(crate) fn set_uint(&self, newval: i32, f: impl FnOnce(&N, i32) -> i32) -> Result<i32> {
        let native = self.native()?;
        if newval == INVALID_UINT {
            return Ok(SUCCESS);
        }
        Ok(f(&*native, newval))
    }

    pub(crate) fn get_enum<E: Rebased>(&self, f: impl FnOnce(&N) -> i32) -> Result<E> {
        self.with_native(|native| E::from_native(f(native)))
    }

    pub(crate) fn set_enum<E: Rebased>(&self, newval: E, f: impl FnOnce(&N, i32) -> i32) -> Result<i32> {
        let native = self.native()?;
        if newval.is_invalid() {
            return Ok(SUCCESS);
        }
        Ok(f(&*native, newval.to_native()))
    }

    /// Cached value when online, the invalid sentinel otherwise
    pub(crate) fn read_cached<T: Clone + PartialEq>(&self, cell: &Cached<T>) -> T {
        if self.is_online() {
            cell.load()
        } else {
            cell.invalid()
        }
    }

    /// Write through to the device only when online and the value changes.
    ///
    /// The cache keeps its old value when the device rejects the write.
    pub(crate) fn write_cached<T: Clone + PartialEq>(
        &self,
        cell: &Cached<T>,
        newval: T,
        write: impl FnOnce(&N, &T) -> i32,
    ) {
        let Some(native) = self.online_native() else {
            return;
        };
        if newval == cell.invalid() || newval == cell.load() {
            return;
        }
        let status = write(&*native, &newval);
        if status != SUCCESS {
            debug!(class = self.class_name, status, "cached write rejected");
            return;
        }
        cell.store(newval);
    }

    /// Hardware id cached at arrival, or the empty string
    pub fn hardware_id(&self) -> String {
        read_lock(&self.identity).hardware_id.clone()
    }

    /// Function id cached at arrival
    pub fn function_id(&self) -> String {
        read_lock(&self.identity).function_id.clone()
    }

    /// Serial number of the hosting module, cached at arrival
    pub fn serial_number(&self) -> String {
        read_lock(&self.identity).serial_number.clone()
    }

    /// Friendly name cached at arrival
    pub fn friendly_name(&self) -> String {
        read_lock(&self.identity).friendly_name.clone()
    }

    /// Logical name, read from the device
    pub fn logical_name(&self) -> Result<String> {
        self.get_string(|n| n.logical_name())
    }

    /// Change the logical name on the device
    pub fn set_logical_name(&self, newval: &str) -> Result<i32> {
        self.set_string(newval, |n, v| n.set_logical_name(v))
    }

    /// Logical name from the cache
    pub fn cached_logical_name(&self) -> String {
        self.read_cached(&self.logical_name)
    }

    /// Change the logical name when online and different from the cache
    pub fn set_cached_logical_name(&self, newval: &str) {
        self.write_cached(&self.logical_name, newval.to_string(), |n, v| n.set_logical_name(v));
    }

    /// Advertised value, read from the device
    pub fn advertised_value(&self) -> Result<String> {
        self.get_string(|n| n.advertised_value())
    }

    /// Last advertised value received through the value callback
    pub fn cached_advertised_value(&self) -> String {
        self.read_cached(&self.advertised_value)
    }

    /// Refresh identity and logical name from the native object
    pub(crate) fn function_arrival(&self) {
        let Ok(native) = self.native() else {
            return;
        };
        let identity = Identity {
            hardware_id: proxy_string(native.hardware_id()),
            function_id: proxy_string(native.function_id()),
            serial_number: proxy_string(native.serial_number()),
            friendly_name: proxy_string(native.friendly_name()),
        };
        debug!(class = self.class_name, hardware_id = %identity.hardware_id, "function arrival");
        *write_lock(&self.identity) = identity;
        self.advertised_value.store(proxy_string(native.advertised_value()));
    }

    /// Refresh configuration fields held by the base
    pub(crate) fn module_config_has_changed(&self) {
        if let Ok(native) = self.native() {
            self.logical_name.store(proxy_string(native.logical_name()));
        }
    }

    /// Record a new advertised value
    pub(crate) fn value_change_callback(&self, value: &str) {
        trace!(class = self.class_name, value, "advertised value");
        self.advertised_value.store(value.to_string());
    }

    pub(crate) fn publish(&self, event: ProxyEvent) {
        // No subscriber is fine.
        let _ = self.events.send(event);
    }

    pub(crate) fn arrival_event(&self) -> ProxyEvent {
        ProxyEvent::Arrival {
            class: self.class_name.to_string(),
            hardware_id: self.hardware_id(),
            at: Utc::now(),
        }
    }

    pub(crate) fn removal_event(&self) -> ProxyEvent {
        ProxyEvent::Removal {
            class: self.class_name.to_string(),
            hardware_id: self.hardware_id(),
            at: Utc::now(),
        }
    }

    pub(crate) fn config_event(&self) -> ProxyEvent {
        ProxyEvent::ConfigChanged {
            class: self.class_name.to_string(),
            hardware_id: self.hardware_id(),
            at: Utc::now(),
        }
    }

    pub(crate) fn value_event(&self, value: &str) -> ProxyEvent {
        ProxyEvent::ValueChanged {
            class: self.class_name.to_string(),
            hardware_id: self.hardware_id(),
            value: value.to_string(),
            at: Utc::now(),
        }
    }
}

/// A function type that can be resolved and managed by the proxy registry
pub trait ProxyKind: Debug + Send + Sync + Sized + 'static {
    /// Native trait object type the proxy forwards to
    type Native: ?Sized + NativeFunction;

    /// Function class name, e.g. `SerialPort`
    const CLASS_NAME: &'static str;

    /// Resolve the native object by name
    fn find_native(library: &dyn NativeLibrary, func: &str) -> Arc<Self::Native>;

    /// First reachable native object of this type
    fn first_native(library: &dyn NativeLibrary) -> Option<Arc<Self::Native>>;

    /// Next native object of this type in enumeration order
    fn next_native(native: &Self::Native) -> Option<Arc<Self::Native>>;

    /// Build the proxy around an unlinked base
    fn from_base(base: FunctionProxy<Self::Native>) -> Self;

    /// The proxy base
    fn base(&self) -> &FunctionProxy<Self::Native>;

    /// Pull constant and derived properties into the cache
    fn function_arrival(&self) {}

    /// Pull configuration properties into the cache
    fn module_config_has_changed(&self) {}

    /// Update fields derived from the advertised value
    fn value_change_callback(&self, _value: &str) {}
}

/// Object-safe view of a proxy used by the registry
pub trait ManagedProxy: Send + Sync + Debug {
    /// Function class name
    fn class_name(&self) -> &'static str;

    /// Name the proxy was resolved with
    fn function_name(&self) -> String;

    /// Cached hardware id
    fn hardware_id(&self) -> String;

    /// Cached module serial number
    fn serial_number(&self) -> String;

    /// Whether a native object is linked
    fn is_linked(&self) -> bool;

    /// Whether the function was reachable at the last hook
    fn is_online(&self) -> bool;

    /// Hardware id of the function the proxy would link to, when it is reachable
    fn reachable_hardware_id(&self, library: &dyn NativeLibrary) -> Option<String>;

    /// Re-resolve and link the native object; returns whether it is reachable
    fn relink(self: Arc<Self>, library: &dyn NativeLibrary) -> bool;

    /// The function became reachable
    fn arrival(&self);

    /// The function is no longer reachable
    fn removal(&self);

    /// The hosting module configuration changed
    fn config_changed(&self);

    /// A new advertised value was published
    fn value_changed(&self, value: &str);

    /// Upcast for typed retrieval
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<P: ProxyKind> ManagedProxy for P {
    fn class_name(&self) -> &'static str {
        P::CLASS_NAME
    }

    fn function_name(&self) -> String {
        self.base().function_name()
    }

    fn hardware_id(&self) -> String {
        self.base().hardware_id()
    }

    fn serial_number(&self) -> String {
        self.base().serial_number()
    }

    fn is_linked(&self) -> bool {
        self.base().is_linked()
    }

    fn is_online(&self) -> bool {
        self.base().is_online()
    }

    fn reachable_hardware_id(&self, library: &dyn NativeLibrary) -> Option<String> {
        let native = resolve_native::<P>(&self.base().function_name(), library)?;
        if !native.is_online() {
            return None;
        }
        Some(proxy_string(native.hardware_id())).filter(|id| !id.is_empty())
    }

    fn relink(self: Arc<Self>, library: &dyn NativeLibrary) -> bool {
        let func = self.base().function_name();
        let Some(native) = resolve_native::<P>(&func, library) else {
            return false;
        };
        if func.is_empty() {
            self.base().adopt_function_name(&proxy_string(native.hardware_id()));
        }
        let online = native.is_online();
        link_to_hardware(&self, native);
        online
    }

    fn arrival(&self) {
        let base = self.base();
        base.set_online(true);
        base.function_arrival();
        P::function_arrival(self);
        base.module_config_has_changed();
        P::module_config_has_changed(self);
        base.publish(base.arrival_event());
    }

    fn removal(&self) {
        let base = self.base();
        base.set_online(false);
        debug!(class = P::CLASS_NAME, hardware_id = %base.hardware_id(), "function removal");
        base.publish(base.removal_event());
    }

    fn config_changed(&self) {
        let base = self.base();
        base.module_config_has_changed();
        P::module_config_has_changed(self);
        base.publish(base.config_event());
    }

    fn value_changed(&self, value: &str) {
        let base = self.base();
        base.value_change_callback(value);
        P::value_change_callback(self, value);
        base.publish(base.value_event(value));
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// Native object for a requested name, or the first reachable one when the name is empty
fn resolve_native<P: ProxyKind>(func: &str, library: &dyn NativeLibrary) -> Option<Arc<P::Native>> {
    if func.is_empty() {
        P::first_native(library)
    } else {
        Some(P::find_native(library, func))
    }
}

/// Bind a proxy to a native object and route its value callback to the proxy
pub(crate) fn link_to_hardware<P: ProxyKind>(proxy: &Arc<P>, native: Arc<P::Native>) {
    let weak = Arc::downgrade(proxy);
    let callback: ValueCallback = Arc::new(move |value: &str| {
        if let Some(proxy) = weak.upgrade() {
            proxy.value_changed(value);
        }
    });
    native.register_value_callback(Some(callback));
    proxy.base().set_link(Link::Linked(native));
}

/// Hardware ids of every reachable function of type `P`, in enumeration order
pub(crate) fn similar_functions<P: ProxyKind>(library: &dyn NativeLibrary) -> Vec<String> {
    let mut ids = Vec::new();
    let mut current = P::first_native(library);
    while let Some(native) = current {
        ids.push(proxy_string(native.hardware_id()));
        current = P::next_native(&native);
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::NativeSerialPort;

    #[test]
    fn test_link_states() {
        let link: Link<dyn NativeSerialPort> = Link::Unlinked;
        assert!(!link.is_linked());
        assert!(link.native().is_none());
        assert_eq!(format!("{:?}", link), "Unlinked");
    }

    #[test]
    fn test_cached_starts_invalid() {
        let text = Cached::string();
        assert_eq!(text.load(), INVALID_STRING);
        text.store("9600,8N1".to_string());
        assert_eq!(text.load(), "9600,8N1");
        assert_eq!(text.invalid(), "");

        let number = Cached::uint();
        assert_eq!(number.load(), INVALID_UINT);
    }

    #[test]
    fn test_unlinked_base_reports_not_connected() {
        let (events, _) = broadcast::channel(4);
        let base: FunctionProxy<dyn NativeSerialPort> = FunctionProxy::new("SerialPort", "modem", events);
        assert_eq!(base.function_name(), "modem");
        assert!(!base.is_linked());

        let err = base.logical_name().unwrap_err();
        assert_eq!(err.to_string(), "No SerialPort connected");
        assert!(base.set_logical_name("x").unwrap_err().is_not_connected());
        assert_eq!(base.cached_logical_name(), INVALID_STRING);
        base.set_cached_logical_name("ignored");
        assert_eq!(base.hardware_id(), "");
    }

    #[test_log::test]
    fn test_rejected_cached_write_keeps_cache() {
        use crate::proxies::SerialPortProxy;
        use crate::registry::ProxyManager;
        use crate::sim::{SimClass, SimHub};

        let hub = SimHub::new();
        let port = hub.add_function("RS232MK3-00001", SimClass::SerialPort, "serialPort");
        port.set_property("serial_mode", "9600,8N1");
        hub.plug("RS232MK3-00001");
        let manager = ProxyManager::new(Arc::new(hub.clone()));
        let proxy = manager.find::<SerialPortProxy>("RS232MK3-00001.serialPort");

        // Unplugged without a removal notification: the proxy still believes it is online.
        hub.unplug("RS232MK3-00001");
        proxy.set_cached_serial_mode("115200,8N1");
        assert!(proxy.is_online());
        assert_eq!(proxy.cached_serial_mode(), "9600,8N1");

        hub.plug("RS232MK3-00001");
        proxy.set_cached_serial_mode("115200,8N1");
        assert_eq!(proxy.cached_serial_mode(), "115200,8N1");
        assert_eq!(port.calls_to("set_serial_mode").len(), 1);
    }

    #[test]
    fn test_event_json_carries_variant_and_fields() {
        let event = ProxyEvent::ValueChanged {
            class: "ColorSensor".to_string(),
            hardware_id: "YCOLMK01-00010.colorSensor".to_string(),
            value: "FF0000".to_string(),
            at: Utc::now(),
        };
        let json: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();
        assert_eq!(json["ValueChanged"]["value"], "FF0000");
        assert_eq!(json["ValueChanged"]["class"], "ColorSensor");
        assert_eq!(event.class(), "ColorSensor");
    }
}
