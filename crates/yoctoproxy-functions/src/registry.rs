/*!
 * Proxy registry.
 *
 * Identity map from hardware function to proxy instance. Entries are created
 * on first resolution and live as long as the manager.
 */
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use yoctoproxy_core::config::ProxyConfig;
use yoctoproxy_core::types::proxy_string;

use crate::function::{
    link_to_hardware, read_lock, similar_functions, write_lock, FunctionProxy, ManagedProxy,
    ProxyEvent, ProxyKind,
};
use crate::native::{NativeFunction, NativeLibrary};

/// Registry key: function class plus hardware id (or requested name while unresolved)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProxyKey {
    /// Function class name
    pub class: &'static str,
    /// Hardware id, requested name, or empty for the unnamed placeholder
    pub id: String,
}

impl ProxyKey {
    fn new(class: &'static str, id: &str) -> Self {
        Self {
            class,
            id: id.to_string(),
        }
    }
}

impl fmt::Display for ProxyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.class, self.id)
    }
}

/// Proxy manager: resolves function names to proxies and dispatches
/// native-library notifications to them
pub struct ProxyManager {
    library: Arc<dyn NativeLibrary>,
    proxies: RwLock<BTreeMap<ProxyKey, Arc<dyn ManagedProxy>>>,
    event_sender: broadcast::Sender<ProxyEvent>,
}

impl fmt::Debug for ProxyManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyManager")
            .field("library", &self.library)
            .field("proxies", &read_lock(&self.proxies).keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ProxyManager {
    /// Create a manager over a native library with default settings
    pub fn new(library: Arc<dyn NativeLibrary>) -> Self {
        Self::with_config(library, &ProxyConfig::default())
    }

    /// Create a manager over a native library
    pub fn with_config(library: Arc<dyn NativeLibrary>, config: &ProxyConfig) -> Self {
        let (event_sender, _) = broadcast::channel(config.event_channel_capacity.max(1));
        Self {
            library,
            proxies: RwLock::new(BTreeMap::new()),
            event_sender,
        }
    }

    /// The wrapped native library
    pub fn library(&self) -> &Arc<dyn NativeLibrary> {
        &self.library
    }

    /// Subscribe to proxy events
    pub fn subscribe(&self) -> broadcast::Receiver<ProxyEvent> {
        self.event_sender.subscribe()
    }

    /// Resolve a proxy of type `P` by name.
    ///
    /// An empty name selects an existing proxy of the type, then the first
    /// reachable function. Resolution never fails: an unknown or offline
    /// function yields an offline (possibly unlinked) proxy.
    pub fn find<P: ProxyKind>(&self, func: &str) -> Arc<P> {
        let mut proxies = write_lock(&self.proxies);

        if func.is_empty() {
            return self.find_unnamed::<P>(&mut proxies);
        }

        let native = P::find_native(self.library.as_ref(), func);
        let hardware_id = proxy_string(native.hardware_id());
        for id in [hardware_id.as_str(), func] {
            if id.is_empty() {
                continue;
            }
            if let Some(existing) = lookup::<P>(&proxies, &ProxyKey::new(P::CLASS_NAME, id)) {
                return existing;
            }
        }

        let key_id = if hardware_id.is_empty() { func } else { &hardware_id };
        let proxy = self.create::<P>(func);
        let online = native.is_online();
        link_to_hardware(&proxy, native);
        proxies.insert(ProxyKey::new(P::CLASS_NAME, key_id), proxy.clone());
        debug!(class = P::CLASS_NAME, func, key = key_id, online, "created proxy");
        drop(proxies);

        if online {
            proxy.arrival();
        }
        proxy
    }

    fn find_unnamed<P: ProxyKind>(
        &self,
        proxies: &mut BTreeMap<ProxyKey, Arc<dyn ManagedProxy>>,
    ) -> Arc<P> {
        if let Some(existing) = lookup::<P>(proxies, &ProxyKey::new(P::CLASS_NAME, "")) {
            return existing;
        }
        let existing = proxies
            .iter()
            .filter(|(key, _)| key.class == P::CLASS_NAME)
            .find_map(|(_, proxy)| Arc::clone(proxy).into_any().downcast::<P>().ok());
        if let Some(existing) = existing {
            return existing;
        }

        match P::first_native(self.library.as_ref()) {
            Some(native) => {
                let hardware_id = proxy_string(native.hardware_id());
                let proxy = self.create::<P>(&hardware_id);
                let online = native.is_online();
                link_to_hardware(&proxy, native);
                proxies.insert(ProxyKey::new(P::CLASS_NAME, &hardware_id), proxy.clone());
                debug!(class = P::CLASS_NAME, hardware_id = %hardware_id, "adopted first function");
                if online {
                    proxy.arrival();
                }
                proxy
            }
            None => {
                let proxy = self.create::<P>("");
                proxies.insert(ProxyKey::new(P::CLASS_NAME, ""), proxy.clone());
                debug!(class = P::CLASS_NAME, "no function available, created unlinked proxy");
                proxy
            }
        }
    }

    fn create<P: ProxyKind>(&self, func: &str) -> Arc<P> {
        let base = FunctionProxy::new(P::CLASS_NAME, func, self.event_sender.clone());
        Arc::new(P::from_base(base))
    }

    /// Hardware ids of every reachable function of type `P`
    pub fn similar_functions<P: ProxyKind>(&self) -> Vec<String> {
        similar_functions::<P>(self.library.as_ref())
    }

    /// Snapshot of every registered proxy
    pub fn proxies(&self) -> Vec<Arc<dyn ManagedProxy>> {
        read_lock(&self.proxies).values().cloned().collect()
    }

    /// Number of registered proxies
    pub fn count(&self) -> usize {
        read_lock(&self.proxies).len()
    }

    /// Native notification: a module became reachable.
    ///
    /// Every offline proxy is re-resolved; those that now reach their
    /// function get the arrival refresh. A function is linked to at most one
    /// proxy: when a reachable function already has a proxy registered under
    /// its hardware id, any other proxy resolving to it is dropped from the
    /// registry instead of being linked, and later lookups by its name
    /// return the registered proxy.
    pub fn device_arrival(&self, serial: &str) {
        let offline: Vec<_> = read_lock(&self.proxies)
            .iter()
            .filter(|(_, proxy)| !proxy.is_online())
            .map(|(key, proxy)| (key.clone(), Arc::clone(proxy)))
            .collect();

        let mut arrived = 0;
        for (key, proxy) in offline {
            let Some(hardware_id) = proxy.reachable_hardware_id(self.library.as_ref()) else {
                continue;
            };
            if self.is_claimed(&key, &hardware_id, &proxy) {
                self.retire(&key, &proxy, &hardware_id);
                continue;
            }
            if !Arc::clone(&proxy).relink(self.library.as_ref()) {
                continue;
            }
            proxy.arrival();
            arrived += 1;
            self.rekey(&key, &proxy);
        }
        info!(serial, arrived, "device arrival");
    }

    /// Whether another proxy is registered under `hardware_id`
    fn is_claimed(&self, key: &ProxyKey, hardware_id: &str, proxy: &Arc<dyn ManagedProxy>) -> bool {
        read_lock(&self.proxies)
            .get(&ProxyKey::new(key.class, hardware_id))
            .is_some_and(|owner| !Arc::ptr_eq(owner, proxy))
    }

    /// Drop a proxy whose function is already served by another proxy
    fn retire(&self, key: &ProxyKey, proxy: &Arc<dyn ManagedProxy>, hardware_id: &str) {
        let mut proxies = write_lock(&self.proxies);
        if proxies.get(key).is_some_and(|current| Arc::ptr_eq(current, proxy)) {
            proxies.remove(key);
        }
        warn!(key = %key, hardware_id, "function already has a proxy, alias dropped");
    }

    /// Move a proxy registered under a requested name to its hardware id
    fn rekey(&self, key: &ProxyKey, proxy: &Arc<dyn ManagedProxy>) {
        let hardware_id = proxy.hardware_id();
        if hardware_id.is_empty() || hardware_id == key.id {
            return;
        }
        let mut proxies = write_lock(&self.proxies);
        proxies.remove(key);
        proxies.insert(ProxyKey::new(key.class, &hardware_id), Arc::clone(proxy));
        debug!(from = %key, hardware_id = %hardware_id, "proxy re-keyed");
    }

    /// Native notification: a module is no longer reachable
    pub fn device_removal(&self, serial: &str) {
        let mut removed = 0;
        for proxy in self.proxies() {
            if proxy.is_online() && proxy.serial_number() == serial {
                proxy.removal();
                removed += 1;
            }
        }
        if removed == 0 {
            warn!(serial, "device removal with no online proxy");
        } else {
            info!(serial, removed, "device removal");
        }
    }

    /// Native notification: a module configuration changed
    pub fn module_config_changed(&self, serial: &str) {
        for proxy in self.proxies() {
            if proxy.is_online() && proxy.serial_number() == serial {
                proxy.config_changed();
            }
        }
        debug!(serial, "module configuration changed");
    }
}

fn lookup<P: ProxyKind>(
    proxies: &BTreeMap<ProxyKey, Arc<dyn ManagedProxy>>,
    key: &ProxyKey,
) -> Option<Arc<P>> {
    let proxy = proxies.get(key)?;
    match Arc::clone(proxy).into_any().downcast::<P>() {
        Ok(proxy) => Some(proxy),
        Err(_) => {
            warn!(key = %key, "registered proxy has an unexpected type");
            None
        }
    }
}

/// A shared proxy manager that can be cloned
#[derive(Debug, Clone)]
pub struct SharedProxyManager(Arc<ProxyManager>);

impl SharedProxyManager {
    /// Create a new shared manager
    pub fn new(library: Arc<dyn NativeLibrary>) -> Self {
        Self(Arc::new(ProxyManager::new(library)))
    }

    /// Get a reference to the manager
    pub fn manager(&self) -> &ProxyManager {
        &self.0
    }
}

impl AsRef<ProxyManager> for SharedProxyManager {
    fn as_ref(&self) -> &ProxyManager {
        self.manager()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxies::{I2cPortProxy, SerialPortProxy};
    use crate::sim::{SimClass, SimHub};

    fn manager_with(hub: &SimHub) -> ProxyManager {
        ProxyManager::new(Arc::new(hub.clone()))
    }

    #[test_log::test]
    fn test_named_resolution_is_deduplicated() {
        let hub = SimHub::new();
        let port = hub.add_function("RS232MK3-00001", SimClass::SerialPort, "serialPort");
        port.set_property("logical_name", "modem");
        hub.plug("RS232MK3-00001");
        let manager = manager_with(&hub);

        let by_id = manager.find::<SerialPortProxy>("RS232MK3-00001.serialPort");
        let by_name = manager.find::<SerialPortProxy>("modem");
        assert!(Arc::ptr_eq(&by_id, &by_name));
        assert_eq!(manager.count(), 1);
    }

    #[test_log::test]
    fn test_unnamed_resolution_adopts_first_function() {
        let hub = SimHub::new();
        hub.add_function("YI2CMK01-00002", SimClass::I2cPort, "i2cPort");
        hub.plug("YI2CMK01-00002");
        let manager = manager_with(&hub);

        let first = manager.find::<I2cPortProxy>("");
        assert_eq!(first.function_name(), "YI2CMK01-00002.i2cPort");
        assert!(first.is_online());
        let again = manager.find::<I2cPortProxy>("");
        assert!(Arc::ptr_eq(&first, &again));
    }

    #[test_log::test]
    fn test_unnamed_resolution_without_function_is_unlinked() {
        let hub = SimHub::new();
        let manager = manager_with(&hub);

        let proxy = manager.find::<I2cPortProxy>("");
        assert!(!proxy.is_linked());
        assert!(!proxy.is_online());
        let again = manager.find::<I2cPortProxy>("");
        assert!(Arc::ptr_eq(&proxy, &again));
    }

    #[test_log::test]
    fn test_classes_are_kept_apart() {
        let hub = SimHub::new();
        hub.add_function("RS232MK3-00001", SimClass::SerialPort, "serialPort");
        hub.add_function("YI2CMK01-00002", SimClass::I2cPort, "i2cPort");
        hub.plug("RS232MK3-00001");
        hub.plug("YI2CMK01-00002");
        let manager = manager_with(&hub);

        let serial = manager.find::<SerialPortProxy>("");
        let i2c = manager.find::<I2cPortProxy>("");
        assert_eq!(serial.hardware_id(), "RS232MK3-00001.serialPort");
        assert_eq!(i2c.hardware_id(), "YI2CMK01-00002.i2cPort");
        assert_eq!(manager.count(), 2);
    }

    #[test_log::test]
    fn test_arrival_relinks_proxy_created_while_absent() {
        let hub = SimHub::new();
        let manager = manager_with(&hub);
        let proxy = manager.find::<SerialPortProxy>("RS485MK2-00003.serialPort");
        assert!(!proxy.is_online());
        assert_eq!(proxy.hardware_id(), "");

        let port = hub.add_function("RS485MK2-00003", SimClass::SerialPort, "serialPort");
        port.set_property("serial_mode", "19200,8N1");
        hub.plug("RS485MK2-00003");
        manager.device_arrival("RS485MK2-00003");

        assert!(proxy.is_online());
        assert_eq!(proxy.hardware_id(), "RS485MK2-00003.serialPort");
        assert_eq!(proxy.cached_serial_mode(), "19200,8N1");
    }

    #[test_log::test]
    fn test_unnamed_placeholder_yields_to_named_proxy_on_arrival() {
        let hub = SimHub::new();
        let manager = manager_with(&hub);
        let placeholder = manager.find::<SerialPortProxy>("");
        assert!(!placeholder.is_linked());

        let port = hub.add_function("RS232MK3-00001", SimClass::SerialPort, "serialPort");
        hub.plug("RS232MK3-00001");
        let named = manager.find::<SerialPortProxy>("RS232MK3-00001.serialPort");
        manager.device_arrival("RS232MK3-00001");
        port.advertise("HELLO");

        assert_eq!(named.cached_advertised_value(), "HELLO");
        assert!(!placeholder.is_linked());
        assert_eq!(placeholder.cached_advertised_value(), "");
        assert_eq!(manager.count(), 1);
        assert!(Arc::ptr_eq(&manager.find::<SerialPortProxy>(""), &named));
    }

    #[test_log::test]
    fn test_logical_name_alias_merges_into_hardware_id_proxy() {
        let hub = SimHub::new();
        let manager = manager_with(&hub);
        let by_name = manager.find::<SerialPortProxy>("modem");
        let by_id = manager.find::<SerialPortProxy>("RS232MK3-00001.serialPort");
        assert!(!Arc::ptr_eq(&by_name, &by_id));

        let port = hub.add_function("RS232MK3-00001", SimClass::SerialPort, "serialPort");
        port.set_property("logical_name", "modem");
        hub.plug("RS232MK3-00001");
        manager.device_arrival("RS232MK3-00001");
        port.advertise("X");

        assert_eq!(manager.count(), 1);
        let again = manager.find::<SerialPortProxy>("modem");
        assert!(Arc::ptr_eq(&again, &by_id));
        assert!(Arc::ptr_eq(
            &manager.find::<SerialPortProxy>("RS232MK3-00001.serialPort"),
            &by_id
        ));
        assert_eq!(by_id.cached_advertised_value(), "X");
        assert!(by_id.is_online());
        assert!(!by_name.is_online());
    }

    #[test_log::test]
    fn test_removal_and_config_change_follow_serial_number() {
        let hub = SimHub::new();
        let port = hub.add_function("RS232MK3-00001", SimClass::SerialPort, "serialPort");
        port.set_property("protocol", "Line");
        hub.plug("RS232MK3-00001");
        let manager = manager_with(&hub);
        let proxy = manager.find::<SerialPortProxy>("RS232MK3-00001.serialPort");
        assert_eq!(proxy.cached_protocol(), "Line");

        port.set_property("protocol", "Frame:15ms");
        manager.module_config_changed("OTHER-00000");
        assert_eq!(proxy.cached_protocol(), "Line");
        manager.module_config_changed("RS232MK3-00001");
        assert_eq!(proxy.cached_protocol(), "Frame:15ms");

        hub.unplug("RS232MK3-00001");
        manager.device_removal("RS232MK3-00001");
        assert!(!proxy.is_online());
        assert_eq!(proxy.cached_protocol(), "");
    }

    #[test_log::test]
    fn test_events_are_broadcast() {
        let hub = SimHub::new();
        let port = hub.add_function("RS232MK3-00001", SimClass::SerialPort, "serialPort");
        let manager = manager_with(&hub);
        let mut events = manager.subscribe();

        hub.plug("RS232MK3-00001");
        let proxy = manager.find::<SerialPortProxy>("RS232MK3-00001.serialPort");
        port.advertise("AT+OK");
        hub.unplug("RS232MK3-00001");
        manager.device_removal("RS232MK3-00001");

        let arrival = events.try_recv().unwrap();
        assert!(matches!(arrival, ProxyEvent::Arrival { .. }));
        assert_eq!(arrival.hardware_id(), "RS232MK3-00001.serialPort");
        match events.try_recv().unwrap() {
            ProxyEvent::ValueChanged { value, class, .. } => {
                assert_eq!(value, "AT+OK");
                assert_eq!(class, "SerialPort");
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert!(matches!(events.try_recv().unwrap(), ProxyEvent::Removal { .. }));
        assert_eq!(proxy.cached_advertised_value(), "");
    }
}
