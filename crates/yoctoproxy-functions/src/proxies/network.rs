/*!
 * Network interface proxy.
 *
 * Covers addressing, DNS/NTP settings, the embedded HTTP server and the
 * HTTP callback configuration of a networked module.
 */
use std::sync::Arc;

use yoctoproxy_core::rebased_enum;
use yoctoproxy_core::types::{proxy_string, proxy_uint, Rebased};

use crate::error::Result;
use crate::function::{Cached, FunctionProxy, ProxyKind};
use crate::native::{NativeLibrary, NativeNetwork};

rebased_enum! {
    /// Readiness of the network link
    pub enum Readiness {
        /// No network interface
        Down,
        /// Interface present, no link
        Exists,
        /// Physical link up
        Linked,
        /// LAN reachable
        LanOk,
        /// Internet reachable
        WwwOk,
    }
}

rebased_enum! {
    /// Whether the module answers discovery requests
    pub enum Discoverable {
        /// Discovery disabled
        False,
        /// Discovery enabled
        True,
    }
}

rebased_enum! {
    /// HTTP method used for callbacks
    pub enum CallbackMethod {
        /// POST
        Post,
        /// GET
        Get,
        /// PUT
        Put,
    }
}

rebased_enum! {
    /// Payload encoding used for callbacks
    pub enum CallbackEncoding {
        /// HTML form
        Form,
        /// JSON
        Json,
        /// JSON array
        JsonArray,
        /// CSV
        Csv,
        /// Native API format
        YoctoApi,
        /// Numerical JSON
        JsonNum,
        /// Emoncms
        Emoncms,
        /// Azure event hub
        Azure,
        /// InfluxDB
        Influxdb,
        /// MQTT
        Mqtt,
        /// Native API format, compressed JSON
        YoctoApiJzon,
        /// PRTG
        Prtg,
        /// InfluxDB 2
        InfluxdbV2,
    }
}

/// Proxy for a network interface
#[derive(Debug)]
pub struct NetworkProxy {
    base: FunctionProxy<dyn NativeNetwork>,
    mac_address: Cached<String>,
    ip_config: Cached<String>,
    primary_dns: Cached<String>,
    secondary_dns: Cached<String>,
    ntp_server: Cached<String>,
    http_port: Cached<i32>,
    default_page: Cached<String>,
    discoverable: Cached<Discoverable>,
    www_watchdog_delay: Cached<i32>,
    callback_url: Cached<String>,
    callback_method: Cached<CallbackMethod>,
    callback_encoding: Cached<CallbackEncoding>,
    callback_initial_delay: Cached<i32>,
    callback_schedule: Cached<String>,
    callback_min_delay: Cached<i32>,
    callback_max_delay: Cached<i32>,
}

impl ProxyKind for NetworkProxy {
    type Native = dyn NativeNetwork;

    const CLASS_NAME: &'static str = "Network";

    fn find_native(library: &dyn NativeLibrary, func: &str) -> Arc<Self::Native> {
        library.find_network(func)
    }

    fn first_native(library: &dyn NativeLibrary) -> Option<Arc<Self::Native>> {
        library.first_network()
    }

    fn next_native(native: &Self::Native) -> Option<Arc<Self::Native>> {
        native.next_network()
    }

    fn from_base(base: FunctionProxy<Self::Native>) -> Self {
        Self {
            base,
            mac_address: Cached::string(),
            ip_config: Cached::string(),
            primary_dns: Cached::string(),
            secondary_dns: Cached::string(),
            ntp_server: Cached::string(),
            http_port: Cached::uint(),
            default_page: Cached::string(),
            discoverable: Cached::enumeration(),
            www_watchdog_delay: Cached::uint(),
            callback_url: Cached::string(),
            callback_method: Cached::enumeration(),
            callback_encoding: Cached::enumeration(),
            callback_initial_delay: Cached::uint(),
            callback_schedule: Cached::string(),
            callback_min_delay: Cached::uint(),
            callback_max_delay: Cached::uint(),
        }
    }

    fn base(&self) -> &FunctionProxy<Self::Native> {
        &self.base
    }

    fn function_arrival(&self) {
        if let Ok(n) = self.base.native() {
            self.mac_address.store(proxy_string(n.mac_address()));
        }
    }

    fn module_config_has_changed(&self) {
        let Ok(n) = self.base.native() else {
            return;
        };
        self.ip_config.store(proxy_string(n.ip_config()));
        self.primary_dns.store(proxy_string(n.primary_dns()));
        self.secondary_dns.store(proxy_string(n.secondary_dns()));
        self.ntp_server.store(proxy_string(n.ntp_server()));
        self.http_port.store(proxy_uint(n.http_port()));
        self.default_page.store(proxy_string(n.default_page()));
        self.discoverable
            .store(Discoverable::from_native(n.discoverable()));
        self.www_watchdog_delay
            .store(proxy_uint(n.www_watchdog_delay()));
        self.callback_url.store(proxy_string(n.callback_url()));
        self.callback_method
            .store(CallbackMethod::from_native(n.callback_method()));
        self.callback_encoding
            .store(CallbackEncoding::from_native(n.callback_encoding()));
        self.callback_initial_delay
            .store(proxy_uint(n.callback_initial_delay()));
        self.callback_schedule
            .store(proxy_string(n.callback_schedule()));
        self.callback_min_delay
            .store(proxy_uint(n.callback_min_delay()));
        self.callback_max_delay
            .store(proxy_uint(n.callback_max_delay()));
    }
}

function_proxy_common!(NetworkProxy);

impl NetworkProxy {
    /// Current readiness of the network link
    pub fn readiness(&self) -> Result<Readiness> {
        self.base.get_enum(|n| n.readiness())
    }

    /// MAC address
    pub fn mac_address(&self) -> Result<String> {
        self.base.get_string(|n| n.mac_address())
    }

    /// MAC address from the cache
    pub fn cached_mac_address(&self) -> String {
        self.base.read_cached(&self.mac_address)
    }

    /// IP address currently in use
    pub fn ip_address(&self) -> Result<String> {
        self.base.get_string(|n| n.ip_address())
    }

    /// Subnet mask currently in use
    pub fn subnet_mask(&self) -> Result<String> {
        self.base.get_string(|n| n.subnet_mask())
    }

    /// Gateway currently in use
    pub fn router(&self) -> Result<String> {
        self.base.get_string(|n| n.router())
    }

    /// DNS server currently in use
    pub fn current_dns(&self) -> Result<String> {
        self.base.get_string(|n| n.current_dns())
    }

    /// IP configuration string
    pub fn ip_config(&self) -> Result<String> {
        self.base.get_string(|n| n.ip_config())
    }

    /// Change the IP configuration string
    pub fn set_ip_config(&self, newval: &str) -> Result<i32> {
        self.base.set_string(newval, |n, v| n.set_ip_config(v))
    }

    /// IP configuration from the cache
    pub fn cached_ip_config(&self) -> String {
        self.base.read_cached(&self.ip_config)
    }

    /// Change the IP configuration when online and different from the cache
    pub fn set_cached_ip_config(&self, newval: &str) {
        self.base
            .write_cached(&self.ip_config, newval.to_string(), |n, v| n.set_ip_config(v));
    }

    /// Primary DNS server
    pub fn primary_dns(&self) -> Result<String> {
        self.base.get_string(|n| n.primary_dns())
    }

    /// Change the primary DNS server
    pub fn set_primary_dns(&self, newval: &str) -> Result<i32> {
        self.base.set_string(newval, |n, v| n.set_primary_dns(v))
    }

    /// Primary DNS server from the cache
    pub fn cached_primary_dns(&self) -> String {
        self.base.read_cached(&self.primary_dns)
    }

    /// Change the primary DNS server when online and different from the cache
    pub fn set_cached_primary_dns(&self, newval: &str) {
        self.base
            .write_cached(&self.primary_dns, newval.to_string(), |n, v| n.set_primary_dns(v));
    }

    /// Secondary DNS server
    pub fn secondary_dns(&self) -> Result<String> {
        self.base.get_string(|n| n.secondary_dns())
    }

    /// Change the secondary DNS server
    pub fn set_secondary_dns(&self, newval: &str) -> Result<i32> {
        self.base.set_string(newval, |n, v| n.set_secondary_dns(v))
    }

    /// Secondary DNS server from the cache
    pub fn cached_secondary_dns(&self) -> String {
        self.base.read_cached(&self.secondary_dns)
    }

    /// Change the secondary DNS server when online and different from the cache
    pub fn set_cached_secondary_dns(&self, newval: &str) {
        self.base.write_cached(&self.secondary_dns, newval.to_string(), |n, v| {
            n.set_secondary_dns(v)
        });
    }

    /// NTP server
    pub fn ntp_server(&self) -> Result<String> {
        self.base.get_string(|n| n.ntp_server())
    }

    /// Change the NTP server
    pub fn set_ntp_server(&self, newval: &str) -> Result<i32> {
        self.base.set_string(newval, |n, v| n.set_ntp_server(v))
    }

    /// NTP server from the cache
    pub fn cached_ntp_server(&self) -> String {
        self.base.read_cached(&self.ntp_server)
    }

    /// Change the NTP server when online and different from the cache
    pub fn set_cached_ntp_server(&self, newval: &str) {
        self.base
            .write_cached(&self.ntp_server, newval.to_string(), |n, v| n.set_ntp_server(v));
    }

    /// User password (masked by the device)
    pub fn user_password(&self) -> Result<String> {
        self.base.get_string(|n| n.user_password())
    }

    /// Change the user password
    pub fn set_user_password(&self, newval: &str) -> Result<i32> {
        self.base.set_string(newval, |n, v| n.set_user_password(v))
    }

    /// Admin password (masked by the device)
    pub fn admin_password(&self) -> Result<String> {
        self.base.get_string(|n| n.admin_password())
    }

    /// Change the admin password
    pub fn set_admin_password(&self, newval: &str) -> Result<i32> {
        self.base.set_string(newval, |n, v| n.set_admin_password(v))
    }

    /// Embedded HTTP server port
    pub fn http_port(&self) -> Result<i32> {
        self.base.get_uint(|n| n.http_port())
    }

    /// Change the embedded HTTP server port
    pub fn set_http_port(&self, newval: i32) -> Result<i32> {
        self.base.set_uint(newval, |n, v| n.set_http_port(v))
    }

    /// HTTP port from the cache
    pub fn cached_http_port(&self) -> i32 {
        self.base.read_cached(&self.http_port)
    }

    /// Change the HTTP port when online and different from the cache
    pub fn set_cached_http_port(&self, newval: i32) {
        self.base
            .write_cached(&self.http_port, newval, |n, v| n.set_http_port(*v));
    }

    /// Default HTML page
    pub fn default_page(&self) -> Result<String> {
        self.base.get_string(|n| n.default_page())
    }

    /// Change the default HTML page
    pub fn set_default_page(&self, newval: &str) -> Result<i32> {
        self.base.set_string(newval, |n, v| n.set_default_page(v))
    }

    /// Default page from the cache
    pub fn cached_default_page(&self) -> String {
        self.base.read_cached(&self.default_page)
    }

    /// Change the default page when online and different from the cache
    pub fn set_cached_default_page(&self, newval: &str) {
        self.base.write_cached(&self.default_page, newval.to_string(), |n, v| {
            n.set_default_page(v)
        });
    }

    /// Discovery activation
    pub fn discoverable(&self) -> Result<Discoverable> {
        self.base.get_enum(|n| n.discoverable())
    }

    /// Change the discovery activation
    pub fn set_discoverable(&self, newval: Discoverable) -> Result<i32> {
        self.base.set_enum(newval, |n, v| n.set_discoverable(v))
    }

    /// Discovery activation from the cache
    pub fn cached_discoverable(&self) -> Discoverable {
        self.base.read_cached(&self.discoverable)
    }

    /// Change the discovery activation when online and different from the cache
    pub fn set_cached_discoverable(&self, newval: Discoverable) {
        self.base.write_cached(&self.discoverable, newval, |n, v| {
            n.set_discoverable(v.to_native())
        });
    }

    /// Reboot delay when the WWW is unreachable, in seconds
    pub fn www_watchdog_delay(&self) -> Result<i32> {
        self.base.get_uint(|n| n.www_watchdog_delay())
    }

    /// Change the WWW watchdog delay
    pub fn set_www_watchdog_delay(&self, newval: i32) -> Result<i32> {
        self.base.set_uint(newval, |n, v| n.set_www_watchdog_delay(v))
    }

    /// WWW watchdog delay from the cache
    pub fn cached_www_watchdog_delay(&self) -> i32 {
        self.base.read_cached(&self.www_watchdog_delay)
    }

    /// Change the WWW watchdog delay when online and different from the cache
    pub fn set_cached_www_watchdog_delay(&self, newval: i32) {
        self.base.write_cached(&self.www_watchdog_delay, newval, |n, v| {
            n.set_www_watchdog_delay(*v)
        });
    }

    /// HTTP callback URL
    pub fn callback_url(&self) -> Result<String> {
        self.base.get_string(|n| n.callback_url())
    }

    /// Change the HTTP callback URL
    pub fn set_callback_url(&self, newval: &str) -> Result<i32> {
        self.base.set_string(newval, |n, v| n.set_callback_url(v))
    }

    /// Callback URL from the cache
    pub fn cached_callback_url(&self) -> String {
        self.base.read_cached(&self.callback_url)
    }

    /// Change the callback URL when online and different from the cache
    pub fn set_cached_callback_url(&self, newval: &str) {
        self.base.write_cached(&self.callback_url, newval.to_string(), |n, v| {
            n.set_callback_url(v)
        });
    }

    /// HTTP callback method
    pub fn callback_method(&self) -> Result<CallbackMethod> {
        self.base.get_enum(|n| n.callback_method())
    }

    /// Change the HTTP callback method
    pub fn set_callback_method(&self, newval: CallbackMethod) -> Result<i32> {
        self.base.set_enum(newval, |n, v| n.set_callback_method(v))
    }

    /// Callback method from the cache
    pub fn cached_callback_method(&self) -> CallbackMethod {
        self.base.read_cached(&self.callback_method)
    }

    /// Change the callback method when online and different from the cache
    pub fn set_cached_callback_method(&self, newval: CallbackMethod) {
        self.base.write_cached(&self.callback_method, newval, |n, v| {
            n.set_callback_method(v.to_native())
        });
    }

    /// HTTP callback encoding
    pub fn callback_encoding(&self) -> Result<CallbackEncoding> {
        self.base.get_enum(|n| n.callback_encoding())
    }

    /// Change the HTTP callback encoding
    pub fn set_callback_encoding(&self, newval: CallbackEncoding) -> Result<i32> {
        self.base.set_enum(newval, |n, v| n.set_callback_encoding(v))
    }

    /// Callback encoding from the cache
    pub fn cached_callback_encoding(&self) -> CallbackEncoding {
        self.base.read_cached(&self.callback_encoding)
    }

    /// Change the callback encoding when online and different from the cache
    pub fn set_cached_callback_encoding(&self, newval: CallbackEncoding) {
        self.base.write_cached(&self.callback_encoding, newval, |n, v| {
            n.set_callback_encoding(v.to_native())
        });
    }

    /// HTTP callback credentials (masked by the device)
    pub fn callback_credentials(&self) -> Result<String> {
        self.base.get_string(|n| n.callback_credentials())
    }

    /// Change the HTTP callback credentials
    pub fn set_callback_credentials(&self, newval: &str) -> Result<i32> {
        self.base
            .set_string(newval, |n, v| n.set_callback_credentials(v))
    }

    /// Delay before the first callback, in seconds
    pub fn callback_initial_delay(&self) -> Result<i32> {
        self.base.get_uint(|n| n.callback_initial_delay())
    }

    /// Change the delay before the first callback
    pub fn set_callback_initial_delay(&self, newval: i32) -> Result<i32> {
        self.base
            .set_uint(newval, |n, v| n.set_callback_initial_delay(v))
    }

    /// Initial callback delay from the cache
    pub fn cached_callback_initial_delay(&self) -> i32 {
        self.base.read_cached(&self.callback_initial_delay)
    }

    /// Change the initial callback delay when online and different from the cache
    pub fn set_cached_callback_initial_delay(&self, newval: i32) {
        self.base.write_cached(&self.callback_initial_delay, newval, |n, v| {
            n.set_callback_initial_delay(*v)
        });
    }

    /// Callback schedule
    pub fn callback_schedule(&self) -> Result<String> {
        self.base.get_string(|n| n.callback_schedule())
    }

    /// Change the callback schedule
    pub fn set_callback_schedule(&self, newval: &str) -> Result<i32> {
        self.base
            .set_string(newval, |n, v| n.set_callback_schedule(v))
    }

    /// Callback schedule from the cache
    pub fn cached_callback_schedule(&self) -> String {
        self.base.read_cached(&self.callback_schedule)
    }

    /// Change the callback schedule when online and different from the cache
    pub fn set_cached_callback_schedule(&self, newval: &str) {
        self.base.write_cached(&self.callback_schedule, newval.to_string(), |n, v| {
            n.set_callback_schedule(v)
        });
    }

    /// Minimum delay between callbacks, in seconds
    pub fn callback_min_delay(&self) -> Result<i32> {
        self.base.get_uint(|n| n.callback_min_delay())
    }

    /// Change the minimum delay between callbacks
    pub fn set_callback_min_delay(&self, newval: i32) -> Result<i32> {
        self.base.set_uint(newval, |n, v| n.set_callback_min_delay(v))
    }

    /// Minimum callback delay from the cache
    pub fn cached_callback_min_delay(&self) -> i32 {
        self.base.read_cached(&self.callback_min_delay)
    }

    /// Change the minimum callback delay when online and different from the cache
    pub fn set_cached_callback_min_delay(&self, newval: i32) {
        self.base.write_cached(&self.callback_min_delay, newval, |n, v| {
            n.set_callback_min_delay(*v)
        });
    }

    /// Maximum delay between callbacks, in seconds
    pub fn callback_max_delay(&self) -> Result<i32> {
        self.base.get_uint(|n| n.callback_max_delay())
    }

    /// Change the maximum delay between callbacks
    pub fn set_callback_max_delay(&self, newval: i32) -> Result<i32> {
        self.base.set_uint(newval, |n, v| n.set_callback_max_delay(v))
    }

    /// Maximum callback delay from the cache
    pub fn cached_callback_max_delay(&self) -> i32 {
        self.base.read_cached(&self.callback_max_delay)
    }

    /// Change the maximum callback delay when online and different from the cache
    pub fn set_cached_callback_max_delay(&self, newval: i32) {
        self.base.write_cached(&self.callback_max_delay, newval, |n, v| {
            n.set_callback_max_delay(*v)
        });
    }

    /// Current drawn from the PoE supply, in mA
    pub fn poe_current(&self) -> Result<i32> {
        self.base.get_uint(|n| n.poe_current())
    }

    /// Use DHCP, falling back to the given static configuration
    pub fn use_dhcp(
        &self,
        fallback_ip_addr: &str,
        fallback_subnet_mask_len: i32,
        fallback_router: &str,
    ) -> Result<i32> {
        self.base.with_native(|n| {
            n.use_dhcp(fallback_ip_addr, fallback_subnet_mask_len, fallback_router)
        })
    }

    /// Use DHCP with automatic link-local fallback
    pub fn use_dhcp_auto(&self) -> Result<i32> {
        self.base.with_native(|n| n.use_dhcp_auto())
    }

    /// Use a static IP configuration
    pub fn use_static_ip(&self, ip_address: &str, subnet_mask_len: i32, router: &str) -> Result<i32> {
        self.base
            .with_native(|n| n.use_static_ip(ip_address, subnet_mask_len, router))
    }

    /// Ping a host and return the report
    pub fn ping(&self, host: &str) -> Result<String> {
        self.base.with_native(|n| n.ping(host))
    }

    /// Trigger an HTTP callback now
    pub fn trigger_callback(&self) -> Result<i32> {
        self.base.with_native(|n| n.trigger_callback())
    }

    /// Schedule callbacks at a fixed interval, e.g. `"5m"` with a 0s offset
    pub fn set_periodic_callback_schedule(&self, interval: &str, offset: i32) -> Result<i32> {
        self.base
            .with_native(|n| n.set_periodic_callback_schedule(interval, offset))
    }

    /// Set callback credentials from a user name and password
    pub fn callback_login(&self, username: &str, password: &str) -> Result<i32> {
        self.base
            .with_native(|n| n.callback_login(username, password))
    }
}
