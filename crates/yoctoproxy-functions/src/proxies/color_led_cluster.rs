/*!
 * RGB LED cluster proxy.
 *
 * Colors are 24-bit values, `0xRRGGBB` or `0xHHSSLL`. LED ranges are given as
 * a start index and a count; blink sequences are addressed by index.
 */
use std::sync::Arc;

use yoctoproxy_core::rebased_enum;
use yoctoproxy_core::types::{proxy_uint, Rebased};

use crate::error::Result;
use crate::function::{Cached, FunctionProxy, ProxyKind};
use crate::native::{NativeColorLedCluster, NativeLibrary};

rebased_enum! {
    /// Type of the driven LEDs
    pub enum LedType {
        /// RGB LEDs
        Rgb,
        /// RGBW LEDs
        Rgbw,
        /// WS2811 controllers
        Ws2811,
    }
}

/// Proxy for a cluster of addressable RGB LEDs
#[derive(Debug)]
pub struct ColorLedClusterProxy {
    base: FunctionProxy<dyn NativeColorLedCluster>,
    active_led_count: Cached<i32>,
    led_type: Cached<LedType>,
    max_led_count: Cached<i32>,
    blink_seq_max_count: Cached<i32>,
    blink_seq_max_size: Cached<i32>,
}

impl ProxyKind for ColorLedClusterProxy {
    type Native = dyn NativeColorLedCluster;

    const CLASS_NAME: &'static str = "ColorLedCluster";

    fn find_native(library: &dyn NativeLibrary, func: &str) -> Arc<Self::Native> {
        library.find_color_led_cluster(func)
    }

    fn first_native(library: &dyn NativeLibrary) -> Option<Arc<Self::Native>> {
        library.first_color_led_cluster()
    }

    fn next_native(native: &Self::Native) -> Option<Arc<Self::Native>> {
        native.next_color_led_cluster()
    }

    fn from_base(base: FunctionProxy<Self::Native>) -> Self {
        Self {
            base,
            active_led_count: Cached::uint(),
            led_type: Cached::enumeration(),
            max_led_count: Cached::uint(),
            blink_seq_max_count: Cached::uint(),
            blink_seq_max_size: Cached::uint(),
        }
    }

    fn base(&self) -> &FunctionProxy<Self::Native> {
        &self.base
    }

    fn function_arrival(&self) {
        if let Ok(n) = self.base.native() {
            self.max_led_count.store(proxy_uint(n.max_led_count()));
            self.blink_seq_max_count
                .store(proxy_uint(n.blink_seq_max_count()));
            self.blink_seq_max_size.store(proxy_uint(n.blink_seq_max_size()));
        }
    }

    fn module_config_has_changed(&self) {
        if let Ok(n) = self.base.native() {
            self.active_led_count.store(proxy_uint(n.active_led_count()));
            self.led_type.store(LedType::from_native(n.led_type()));
        }
    }
}

function_proxy_common!(ColorLedClusterProxy);

impl ColorLedClusterProxy {
    /// Number of LEDs currently handled
    pub fn active_led_count(&self) -> Result<i32> {
        self.base.get_uint(|n| n.active_led_count())
    }

    /// Change the number of LEDs handled
    pub fn set_active_led_count(&self, newval: i32) -> Result<i32> {
        self.base.set_uint(newval, |n, v| n.set_active_led_count(v))
    }

    /// Number of active LEDs from the cache
    pub fn cached_active_led_count(&self) -> i32 {
        self.base.read_cached(&self.active_led_count)
    }

    /// Change the number of active LEDs when online and different from the cache
    pub fn set_cached_active_led_count(&self, newval: i32) {
        self.base
            .write_cached(&self.active_led_count, newval, |n, v| n.set_active_led_count(*v));
    }

    /// LED type
    pub fn led_type(&self) -> Result<LedType> {
        self.base.get_enum(|n| n.led_type())
    }

    /// Change the LED type
    pub fn set_led_type(&self, newval: LedType) -> Result<i32> {
        self.base.set_enum(newval, |n, v| n.set_led_type(v))
    }

    /// LED type from the cache
    pub fn cached_led_type(&self) -> LedType {
        self.base.read_cached(&self.led_type)
    }

    /// Change the LED type when online and different from the cache
    pub fn set_cached_led_type(&self, newval: LedType) {
        self.base
            .write_cached(&self.led_type, newval, |n, v| n.set_led_type(v.to_native()));
    }

    /// Maximum number of LEDs supported
    pub fn max_led_count(&self) -> Result<i32> {
        self.base.get_uint(|n| n.max_led_count())
    }

    /// Maximum number of LEDs from the cache
    pub fn cached_max_led_count(&self) -> i32 {
        self.base.read_cached(&self.max_led_count)
    }

    /// Maximum number of LEDs animated by blink sequences
    pub fn dynamic_led_count(&self) -> Result<i32> {
        self.base.get_uint(|n| n.dynamic_led_count())
    }

    /// Maximum number of blink sequences
    pub fn blink_seq_max_count(&self) -> Result<i32> {
        self.base.get_uint(|n| n.blink_seq_max_count())
    }

    /// Maximum number of blink sequences, from the cache
    pub fn cached_blink_seq_max_count(&self) -> i32 {
        self.base.read_cached(&self.blink_seq_max_count)
    }

    /// Maximum length of a blink sequence
    pub fn blink_seq_max_size(&self) -> Result<i32> {
        self.base.get_uint(|n| n.blink_seq_max_size())
    }

    /// Maximum length of a blink sequence, from the cache
    pub fn cached_blink_seq_max_size(&self) -> i32 {
        self.base.read_cached(&self.blink_seq_max_size)
    }

    /// Set consecutive LEDs to an RGB color
    pub fn set_rgb_color(&self, led_index: i32, count: i32, rgb_value: i32) -> Result<i32> {
        self.base
            .with_native(|n| n.set_rgb_color(led_index, count, rgb_value))
    }

    /// Set the power-on RGB color of consecutive LEDs
    pub fn set_rgb_color_at_power_on(&self, led_index: i32, count: i32, rgb_value: i32) -> Result<i32> {
        self.base
            .with_native(|n| n.set_rgb_color_at_power_on(led_index, count, rgb_value))
    }

    /// Set the power-on HSL color of consecutive LEDs
    pub fn set_hsl_color_at_power_on(&self, led_index: i32, count: i32, hsl_value: i32) -> Result<i32> {
        self.base
            .with_native(|n| n.set_hsl_color_at_power_on(led_index, count, hsl_value))
    }

    /// Set consecutive LEDs to an HSL color
    pub fn set_hsl_color(&self, led_index: i32, count: i32, hsl_value: i32) -> Result<i32> {
        self.base
            .with_native(|n| n.set_hsl_color(led_index, count, hsl_value))
    }

    /// Transition consecutive LEDs to an RGB color over `delay` ms
    pub fn rgb_move(&self, led_index: i32, count: i32, rgb_value: i32, delay: i32) -> Result<i32> {
        self.base
            .with_native(|n| n.rgb_move(led_index, count, rgb_value, delay))
    }

    /// Transition consecutive LEDs to an HSL color over `delay` ms
    pub fn hsl_move(&self, led_index: i32, count: i32, hsl_value: i32, delay: i32) -> Result<i32> {
        self.base
            .with_native(|n| n.hsl_move(led_index, count, hsl_value, delay))
    }

    /// Append an RGB transition to a blink sequence
    pub fn add_rgb_move_to_blink_seq(&self, seq_index: i32, rgb_value: i32, delay: i32) -> Result<i32> {
        self.base
            .with_native(|n| n.add_rgb_move_to_blink_seq(seq_index, rgb_value, delay))
    }

    /// Append an HSL transition to a blink sequence
    pub fn add_hsl_move_to_blink_seq(&self, seq_index: i32, hsl_value: i32, delay: i32) -> Result<i32> {
        self.base
            .with_native(|n| n.add_hsl_move_to_blink_seq(seq_index, hsl_value, delay))
    }

    /// Append a mirror instruction to a blink sequence
    pub fn add_mirror_to_blink_seq(&self, seq_index: i32) -> Result<i32> {
        self.base.with_native(|n| n.add_mirror_to_blink_seq(seq_index))
    }

    /// Append a jump to another blink sequence
    pub fn add_jump_to_blink_seq(&self, seq_index: i32, link_seq: i32) -> Result<i32> {
        self.base
            .with_native(|n| n.add_jump_to_blink_seq(seq_index, link_seq))
    }

    /// Append an unlink instruction to a blink sequence
    pub fn add_unlink_to_blink_seq(&self, seq_index: i32) -> Result<i32> {
        self.base.with_native(|n| n.add_unlink_to_blink_seq(seq_index))
    }

    /// Bind consecutive LEDs to a blink sequence
    pub fn link_led_to_blink_seq(&self, led_index: i32, count: i32, seq_index: i32, offset: i32) -> Result<i32> {
        self.base
            .with_native(|n| n.link_led_to_blink_seq(led_index, count, seq_index, offset))
    }

    /// Bind consecutive LEDs to a blink sequence at power-on
    pub fn link_led_to_blink_seq_at_power_on(
        &self,
        led_index: i32,
        count: i32,
        seq_index: i32,
        offset: i32,
    ) -> Result<i32> {
        self.base.with_native(|n| {
            n.link_led_to_blink_seq_at_power_on(led_index, count, seq_index, offset)
        })
    }

    /// Bind consecutive LEDs to a blink sequence with evenly spread offsets
    pub fn link_led_to_periodic_blink_seq(
        &self,
        led_index: i32,
        count: i32,
        seq_index: i32,
        periods: i32,
    ) -> Result<i32> {
        self.base.with_native(|n| {
            n.link_led_to_periodic_blink_seq(led_index, count, seq_index, periods)
        })
    }

    /// Unbind consecutive LEDs from any blink sequence
    pub fn unlink_led_from_blink_seq(&self, led_index: i32, count: i32) -> Result<i32> {
        self.base
            .with_native(|n| n.unlink_led_from_blink_seq(led_index, count))
    }

    /// Start a blink sequence
    pub fn start_blink_seq(&self, seq_index: i32) -> Result<i32> {
        self.base.with_native(|n| n.start_blink_seq(seq_index))
    }

    /// Stop a blink sequence
    pub fn stop_blink_seq(&self, seq_index: i32) -> Result<i32> {
        self.base.with_native(|n| n.stop_blink_seq(seq_index))
    }

    /// Stop and clear a blink sequence
    pub fn reset_blink_seq(&self, seq_index: i32) -> Result<i32> {
        self.base.with_native(|n| n.reset_blink_seq(seq_index))
    }

    /// Configure whether a blink sequence starts at power-on
    pub fn set_blink_seq_state_at_power_on(&self, seq_index: i32, autostart: i32) -> Result<i32> {
        self.base
            .with_native(|n| n.set_blink_seq_state_at_power_on(seq_index, autostart))
    }

    /// Change the speed of a blink sequence, in per mille
    pub fn set_blink_seq_speed(&self, seq_index: i32, speed: i32) -> Result<i32> {
        self.base
            .with_native(|n| n.set_blink_seq_speed(seq_index, speed))
    }

    /// Save current colors and sequence bindings as the power-on state
    pub fn save_leds_config_at_power_on(&self) -> Result<i32> {
        self.base.with_native(|n| n.save_leds_config_at_power_on())
    }

    /// Save a blink sequence to flash
    pub fn save_blink_seq(&self, seq_index: i32) -> Result<i32> {
        self.base.with_native(|n| n.save_blink_seq(seq_index))
    }

    /// Set RGB colors from a packed buffer, 3 bytes per LED
    pub fn set_rgb_color_buffer(&self, led_index: i32, buff: &[u8]) -> Result<i32> {
        self.base
            .with_native(|n| n.set_rgb_color_buffer(led_index, buff))
    }

    /// Set RGB colors from a list of 24-bit values
    pub fn set_rgb_color_array(&self, led_index: i32, rgb_list: &[i32]) -> Result<i32> {
        self.base
            .with_native(|n| n.set_rgb_color_array(led_index, rgb_list))
    }

    /// Transition LEDs starting at `led_index` to a list of RGB colors
    pub fn rgb_array_ofs_move(&self, led_index: i32, rgb_list: &[i32], delay: i32) -> Result<i32> {
        self.base
            .with_native(|n| n.rgb_array_ofs_move(led_index, rgb_list, delay))
    }

    /// Transition LEDs starting at 0 to a list of RGB colors
    pub fn rgb_array_move(&self, rgb_list: &[i32], delay: i32) -> Result<i32> {
        self.base.with_native(|n| n.rgb_array_move(rgb_list, delay))
    }

    /// Set HSL colors from a packed buffer, 3 bytes per LED
    pub fn set_hsl_color_buffer(&self, led_index: i32, buff: &[u8]) -> Result<i32> {
        self.base
            .with_native(|n| n.set_hsl_color_buffer(led_index, buff))
    }

    /// Set HSL colors from a list of 24-bit values
    pub fn set_hsl_color_array(&self, led_index: i32, hsl_list: &[i32]) -> Result<i32> {
        self.base
            .with_native(|n| n.set_hsl_color_array(led_index, hsl_list))
    }

    /// Transition LEDs starting at 0 to a list of HSL colors
    pub fn hsl_array_move(&self, hsl_list: &[i32], delay: i32) -> Result<i32> {
        self.base.with_native(|n| n.hsl_array_move(hsl_list, delay))
    }

    /// Transition LEDs starting at `led_index` to a list of HSL colors
    pub fn hsl_array_ofs_move(&self, led_index: i32, hsl_list: &[i32], delay: i32) -> Result<i32> {
        self.base
            .with_native(|n| n.hsl_array_ofs_move(led_index, hsl_list, delay))
    }

    /// Current RGB colors as a packed buffer
    pub fn rgb_color_buffer(&self, led_index: i32, count: i32) -> Result<Vec<u8>> {
        self.base
            .with_native(|n| n.rgb_color_buffer(led_index, count))
    }

    /// Current RGB colors as 24-bit values
    pub fn rgb_color_array(&self, led_index: i32, count: i32) -> Result<Vec<i32>> {
        self.base
            .with_native(|n| n.rgb_color_array(led_index, count))
    }

    /// Power-on RGB colors as 24-bit values
    pub fn rgb_color_array_at_power_on(&self, led_index: i32, count: i32) -> Result<Vec<i32>> {
        self.base
            .with_native(|n| n.rgb_color_array_at_power_on(led_index, count))
    }

    /// Blink sequence each LED is bound to
    pub fn linked_seq_array(&self, led_index: i32, count: i32) -> Result<Vec<i32>> {
        self.base
            .with_native(|n| n.linked_seq_array(led_index, count))
    }

    /// Signatures of blink sequences, to detect changes
    pub fn blink_seq_signatures(&self, seq_index: i32, count: i32) -> Result<Vec<i32>> {
        self.base
            .with_native(|n| n.blink_seq_signatures(seq_index, count))
    }

    /// Current speed of blink sequences
    pub fn blink_seq_state_speed(&self, seq_index: i32, count: i32) -> Result<Vec<i32>> {
        self.base
            .with_native(|n| n.blink_seq_state_speed(seq_index, count))
    }

    /// Power-on autostart flags of blink sequences
    pub fn blink_seq_state_at_power_on(&self, seq_index: i32, count: i32) -> Result<Vec<i32>> {
        self.base
            .with_native(|n| n.blink_seq_state_at_power_on(seq_index, count))
    }

    /// Running flags of blink sequences
    pub fn blink_seq_state(&self, seq_index: i32, count: i32) -> Result<Vec<i32>> {
        self.base
            .with_native(|n| n.blink_seq_state(seq_index, count))
    }
}
