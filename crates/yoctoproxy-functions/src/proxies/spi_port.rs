/*!
 * SPI port proxy.
 */
use std::sync::Arc;

use yoctoproxy_core::rebased_enum;
use yoctoproxy_core::types::{proxy_string, proxy_uint, Rebased};

use crate::error::Result;
use crate::function::{Cached, FunctionProxy, ProxyKind};
use crate::native::{NativeLibrary, NativeSpiPort};
use crate::port::{MessagePort, StreamPort, VoltageLevel};
use crate::records::{wrap_records, SpiSnoopingRecord};

rebased_enum! {
    /// Polarity of the slave-select line
    pub enum SsPolarity {
        /// Slave selected when SS is low
        ActiveLow,
        /// Slave selected when SS is high
        ActiveHigh,
    }
}

rebased_enum! {
    /// Sampling of input bits on shift edges
    pub enum ShiftSampling {
        /// Standard sampling
        Off,
        /// Sampling delayed by half a clock
        On,
    }
}

/// Proxy for an SPI bus master
#[derive(Debug)]
pub struct SpiPortProxy {
    base: FunctionProxy<dyn NativeSpiPort>,
    spi_mode: Cached<String>,
    protocol: Cached<String>,
    voltage_level: Cached<VoltageLevel>,
    ss_polarity: Cached<SsPolarity>,
    shift_sampling: Cached<ShiftSampling>,
    job_max_task: Cached<i32>,
    job_max_size: Cached<i32>,
}

impl ProxyKind for SpiPortProxy {
    type Native = dyn NativeSpiPort;

    const CLASS_NAME: &'static str = "SpiPort";

    fn find_native(library: &dyn NativeLibrary, func: &str) -> Arc<Self::Native> {
        library.find_spi_port(func)
    }

    fn first_native(library: &dyn NativeLibrary) -> Option<Arc<Self::Native>> {
        library.first_spi_port()
    }

    fn next_native(native: &Self::Native) -> Option<Arc<Self::Native>> {
        native.next_spi_port()
    }

    fn from_base(base: FunctionProxy<Self::Native>) -> Self {
        Self {
            base,
            spi_mode: Cached::string(),
            protocol: Cached::string(),
            voltage_level: Cached::enumeration(),
            ss_polarity: Cached::enumeration(),
            shift_sampling: Cached::enumeration(),
            job_max_task: Cached::uint(),
            job_max_size: Cached::uint(),
        }
    }

    fn base(&self) -> &FunctionProxy<Self::Native> {
        &self.base
    }

    fn function_arrival(&self) {
        if let Ok(n) = self.base.native() {
            self.job_max_task.store(proxy_uint(n.job_max_task()));
            self.job_max_size.store(proxy_uint(n.job_max_size()));
        }
    }

    fn module_config_has_changed(&self) {
        if let Ok(n) = self.base.native() {
            self.spi_mode.store(proxy_string(n.spi_mode()));
            self.protocol.store(proxy_string(n.protocol()));
            self.voltage_level.store(VoltageLevel::from_native(n.voltage_level()));
            self.ss_polarity.store(SsPolarity::from_native(n.ss_polarity()));
            self.shift_sampling
                .store(ShiftSampling::from_native(n.shift_sampling()));
        }
    }
}

function_proxy_common!(SpiPortProxy);

impl MessagePort for SpiPortProxy {
    type Port = dyn NativeSpiPort;

    fn port(&self) -> &FunctionProxy<dyn NativeSpiPort> {
        &self.base
    }
}

impl StreamPort for SpiPortProxy {
    type Stream = dyn NativeSpiPort;

    fn stream(&self) -> &FunctionProxy<dyn NativeSpiPort> {
        &self.base
    }
}

impl SpiPortProxy {
    /// SPI mode, e.g. `125000,0,msb`
    pub fn spi_mode(&self) -> Result<String> {
        self.base.get_string(|n| n.spi_mode())
    }

    /// Change the SPI mode
    pub fn set_spi_mode(&self, newval: &str) -> Result<i32> {
        self.base.set_string(newval, |n, v| n.set_spi_mode(v))
    }

    /// SPI mode from the cache
    pub fn cached_spi_mode(&self) -> String {
        self.base.read_cached(&self.spi_mode)
    }

    /// Change the SPI mode when online and different from the cache
    pub fn set_cached_spi_mode(&self, newval: &str) {
        self.base
            .write_cached(&self.spi_mode, newval.to_string(), |n, v| n.set_spi_mode(v));
    }

    /// Slave-select polarity
    pub fn ss_polarity(&self) -> Result<SsPolarity> {
        self.base.get_enum(|n| n.ss_polarity())
    }

    /// Change the slave-select polarity
    pub fn set_ss_polarity(&self, newval: SsPolarity) -> Result<i32> {
        self.base.set_enum(newval, |n, v| n.set_ss_polarity(v))
    }

    /// Slave-select polarity from the cache
    pub fn cached_ss_polarity(&self) -> SsPolarity {
        self.base.read_cached(&self.ss_polarity)
    }

    /// Change the slave-select polarity when online and different from the cache
    pub fn set_cached_ss_polarity(&self, newval: SsPolarity) {
        self.base.write_cached(&self.ss_polarity, newval, |n, v| {
            n.set_ss_polarity(v.to_native())
        });
    }

    /// Shift sampling mode
    pub fn shift_sampling(&self) -> Result<ShiftSampling> {
        self.base.get_enum(|n| n.shift_sampling())
    }

    /// Change the shift sampling mode
    pub fn set_shift_sampling(&self, newval: ShiftSampling) -> Result<i32> {
        self.base.set_enum(newval, |n, v| n.set_shift_sampling(v))
    }

    /// Shift sampling mode from the cache
    pub fn cached_shift_sampling(&self) -> ShiftSampling {
        self.base.read_cached(&self.shift_sampling)
    }

    /// Change the shift sampling mode when online and different from the cache
    pub fn set_cached_shift_sampling(&self, newval: ShiftSampling) {
        self.base.write_cached(&self.shift_sampling, newval, |n, v| {
            n.set_shift_sampling(v.to_native())
        });
    }

    /// Protocol from the cache
    pub fn cached_protocol(&self) -> String {
        self.base.read_cached(&self.protocol)
    }

    /// Change the protocol when online and different from the cache
    pub fn set_cached_protocol(&self, newval: &str) {
        self.base
            .write_cached(&self.protocol, newval.to_string(), |n, v| n.set_protocol(v));
    }

    /// Voltage level from the cache
    pub fn cached_voltage_level(&self) -> VoltageLevel {
        self.base.read_cached(&self.voltage_level)
    }

    /// Change the voltage level when online and different from the cache
    pub fn set_cached_voltage_level(&self, newval: VoltageLevel) {
        self.base.write_cached(&self.voltage_level, newval, |n, v| {
            n.set_voltage_level(v.to_native())
        });
    }

    /// Maximum number of tasks in a job, from the cache
    pub fn cached_job_max_task(&self) -> i32 {
        self.base.read_cached(&self.job_max_task)
    }

    /// Maximum job file size, from the cache
    pub fn cached_job_max_size(&self) -> i32 {
        self.base.read_cached(&self.job_max_size)
    }

    /// Drive the slave-select line manually
    pub fn set_ss(&self, val: i32) -> Result<i32> {
        self.base.with_native(|n| n.set_ss(val))
    }

    /// Messages captured by the snooping buffer
    pub fn snoop_messages(&self, max_wait: i32) -> Result<Vec<SpiSnoopingRecord>> {
        self.base
            .with_native(|n| wrap_records(n.snoop_messages(max_wait)))
    }

    /// At most `max_msg` messages captured by the snooping buffer
    pub fn snoop_messages_ex(&self, max_wait: i32, max_msg: i32) -> Result<Vec<SpiSnoopingRecord>> {
        self.base
            .with_native(|n| wrap_records(n.snoop_messages_ex(max_wait, max_msg)))
    }
}
