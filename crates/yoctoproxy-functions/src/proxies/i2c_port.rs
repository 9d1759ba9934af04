/*!
 * I2C port proxy.
 */
use std::sync::Arc;

use yoctoproxy_core::rebased_enum;
use yoctoproxy_core::types::{proxy_string, proxy_uint, Rebased};

use crate::error::Result;
use crate::function::{Cached, FunctionProxy, ProxyKind};
use crate::native::{NativeI2cPort, NativeLibrary};
use crate::port::MessagePort;
use crate::records::{wrap_records, I2cSnoopingRecord};

rebased_enum! {
    /// Voltage level of the I2C bus
    pub enum I2cVoltageLevel {
        /// Bus powered off
        Off,
        /// 3.3V
        V3_3,
        /// 1.8V
        V1_8,
    }
}

/// Proxy for an I2C bus master
#[derive(Debug)]
pub struct I2cPortProxy {
    base: FunctionProxy<dyn NativeI2cPort>,
    i2c_mode: Cached<String>,
    protocol: Cached<String>,
    i2c_voltage_level: Cached<I2cVoltageLevel>,
    job_max_task: Cached<i32>,
    job_max_size: Cached<i32>,
}

impl ProxyKind for I2cPortProxy {
    type Native = dyn NativeI2cPort;

    const CLASS_NAME: &'static str = "I2cPort";

    fn find_native(library: &dyn NativeLibrary, func: &str) -> Arc<Self::Native> {
        library.find_i2c_port(func)
    }

    fn first_native(library: &dyn NativeLibrary) -> Option<Arc<Self::Native>> {
        library.first_i2c_port()
    }

    fn next_native(native: &Self::Native) -> Option<Arc<Self::Native>> {
        native.next_i2c_port()
    }

    fn from_base(base: FunctionProxy<Self::Native>) -> Self {
        Self {
            base,
            i2c_mode: Cached::string(),
            protocol: Cached::string(),
            i2c_voltage_level: Cached::enumeration(),
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
            self.i2c_mode.store(proxy_string(n.i2c_mode()));
            self.protocol.store(proxy_string(n.protocol()));
            self.i2c_voltage_level
                .store(I2cVoltageLevel::from_native(n.i2c_voltage_level()));
        }
    }
}

function_proxy_common!(I2cPortProxy);

impl MessagePort for I2cPortProxy {
    type Port = dyn NativeI2cPort;

    fn port(&self) -> &FunctionProxy<dyn NativeI2cPort> {
        &self.base
    }
}

impl I2cPortProxy {
    /// I2C mode, e.g. `400kbps,2000ms,NoRestart`
    pub fn i2c_mode(&self) -> Result<String> {
        self.base.get_string(|n| n.i2c_mode())
    }

    /// Change the I2C mode
    pub fn set_i2c_mode(&self, newval: &str) -> Result<i32> {
        self.base.set_string(newval, |n, v| n.set_i2c_mode(v))
    }

    /// I2C mode from the cache
    pub fn cached_i2c_mode(&self) -> String {
        self.base.read_cached(&self.i2c_mode)
    }

    /// Change the I2C mode when online and different from the cache
    pub fn set_cached_i2c_mode(&self, newval: &str) {
        self.base
            .write_cached(&self.i2c_mode, newval.to_string(), |n, v| n.set_i2c_mode(v));
    }

    /// Voltage level of the bus
    pub fn i2c_voltage_level(&self) -> Result<I2cVoltageLevel> {
        self.base.get_enum(|n| n.i2c_voltage_level())
    }

    /// Change the voltage level of the bus
    pub fn set_i2c_voltage_level(&self, newval: I2cVoltageLevel) -> Result<i32> {
        self.base.set_enum(newval, |n, v| n.set_i2c_voltage_level(v))
    }

    /// Voltage level from the cache
    pub fn cached_i2c_voltage_level(&self) -> I2cVoltageLevel {
        self.base.read_cached(&self.i2c_voltage_level)
    }

    /// Change the voltage level when online and different from the cache
    pub fn set_cached_i2c_voltage_level(&self, newval: I2cVoltageLevel) {
        self.base.write_cached(&self.i2c_voltage_level, newval, |n, v| {
            n.set_i2c_voltage_level(v.to_native())
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

    /// Maximum number of tasks in a job, from the cache
    pub fn cached_job_max_task(&self) -> i32 {
        self.base.read_cached(&self.job_max_task)
    }

    /// Maximum job file size, from the cache
    pub fn cached_job_max_size(&self) -> i32 {
        self.base.read_cached(&self.job_max_size)
    }

    /// Send a binary buffer to a slave
    pub fn i2c_send_bin(&self, slave_addr: i32, buff: &[u8]) -> Result<i32> {
        self.base.with_native(|n| n.i2c_send_bin(slave_addr, buff))
    }

    /// Send byte values to a slave
    pub fn i2c_send_array(&self, slave_addr: i32, values: &[i32]) -> Result<i32> {
        self.base.with_native(|n| n.i2c_send_array(slave_addr, values))
    }

    /// Send a buffer to a slave and read `rcv_count` bytes back
    pub fn i2c_send_and_receive_bin(&self, slave_addr: i32, buff: &[u8], rcv_count: i32) -> Result<Vec<u8>> {
        self.base
            .with_native(|n| n.i2c_send_and_receive_bin(slave_addr, buff, rcv_count))
    }

    /// Send byte values to a slave and read `rcv_count` bytes back
    pub fn i2c_send_and_receive_array(
        &self,
        slave_addr: i32,
        values: &[i32],
        rcv_count: i32,
    ) -> Result<Vec<i32>> {
        self.base
            .with_native(|n| n.i2c_send_and_receive_array(slave_addr, values, rcv_count))
    }

    /// Send a start condition followed by the slave address
    pub fn write_start(&self, slave_addr: i32) -> Result<i32> {
        self.base.with_native(|n| n.write_start(slave_addr))
    }

    /// Send a repeated start condition followed by the slave address
    pub fn write_restart(&self, slave_addr: i32) -> Result<i32> {
        self.base.with_native(|n| n.write_restart(slave_addr))
    }

    /// Send a stop condition
    pub fn write_stop(&self) -> Result<i32> {
        self.base.with_native(|n| n.write_stop())
    }

    /// Messages captured by the snooping buffer
    pub fn snoop_messages(&self, max_wait: i32) -> Result<Vec<I2cSnoopingRecord>> {
        self.base
            .with_native(|n| wrap_records(n.snoop_messages(max_wait)))
    }

    /// At most `max_msg` messages captured by the snooping buffer
    pub fn snoop_messages_ex(&self, max_wait: i32, max_msg: i32) -> Result<Vec<I2cSnoopingRecord>> {
        self.base
            .with_native(|n| wrap_records(n.snoop_messages_ex(max_wait, max_msg)))
    }
}
