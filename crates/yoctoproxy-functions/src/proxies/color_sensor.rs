/*!
 * Color sensor proxy.
 *
 * The sensor advertises its state as 16 hex digits,
 * `RRGGBB HHSSLL SS CC`: estimated RGB, estimated HSL, saturation bitmask
 * and LED current in mA. The proxy keeps these in its cache so they can be
 * read without a device round-trip.
 */
use std::sync::Arc;

use tracing::trace;

use yoctoproxy_core::rebased_enum;
use yoctoproxy_core::types::{proxy_uint, Rebased};

use crate::error::Result;
use crate::function::{Cached, FunctionProxy, ProxyKind};
use crate::native::{NativeColorSensor, NativeLibrary};

rebased_enum! {
    /// Model used to estimate the color
    pub enum EstimationModel {
        /// Color of a lit surface
        Reflection,
        /// Color of a light source
        Emission,
    }
}

rebased_enum! {
    /// Sensor working mode
    pub enum WorkingMode {
        /// Automatic settings
        Auto,
        /// Manual settings
        Expert,
        /// Automatic gain only
        Autogain,
    }
}

rebased_enum! {
    /// Closest simple color
    pub enum NearSimpleColor {
        /// Brown
        Brown,
        /// Red
        Red,
        /// Orange
        Orange,
        /// Yellow
        Yellow,
        /// White
        White,
        /// Gray
        Gray,
        /// Black
        Black,
        /// Green
        Green,
        /// Blue
        Blue,
        /// Purple
        Purple,
        /// Pink
        Pink,
    }
}

/// Fields carried by the advertised value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AdvertisedColor {
    rgb: i32,
    hsl: i32,
    saturation: i32,
    led_current: i32,
}

impl AdvertisedColor {
    fn parse(value: &str) -> Option<Self> {
        if value.len() != 16 || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let field = |range: std::ops::Range<usize>| i32::from_str_radix(&value[range], 16).ok();
        Some(Self {
            rgb: field(0..6)?,
            hsl: field(6..12)?,
            saturation: field(12..14)?,
            led_current: field(14..16)?,
        })
    }
}

/// Proxy for a color sensor
#[derive(Debug)]
pub struct ColorSensorProxy {
    base: FunctionProxy<dyn NativeColorSensor>,
    estimation_model: Cached<EstimationModel>,
    working_mode: Cached<WorkingMode>,
    led_current: Cached<i32>,
    led_calibration: Cached<i32>,
    integration_time: Cached<i32>,
    gain: Cached<i32>,
    estimated_rgb: Cached<i32>,
    estimated_hsl: Cached<i32>,
    saturation: Cached<i32>,
}

impl ProxyKind for ColorSensorProxy {
    type Native = dyn NativeColorSensor;

    const CLASS_NAME: &'static str = "ColorSensor";

    fn find_native(library: &dyn NativeLibrary, func: &str) -> Arc<Self::Native> {
        library.find_color_sensor(func)
    }

    fn first_native(library: &dyn NativeLibrary) -> Option<Arc<Self::Native>> {
        library.first_color_sensor()
    }

    fn next_native(native: &Self::Native) -> Option<Arc<Self::Native>> {
        native.next_color_sensor()
    }

    fn from_base(base: FunctionProxy<Self::Native>) -> Self {
        Self {
            base,
            estimation_model: Cached::enumeration(),
            working_mode: Cached::enumeration(),
            led_current: Cached::uint(),
            led_calibration: Cached::uint(),
            integration_time: Cached::uint(),
            gain: Cached::uint(),
            estimated_rgb: Cached::uint(),
            estimated_hsl: Cached::uint(),
            saturation: Cached::uint(),
        }
    }

    fn base(&self) -> &FunctionProxy<Self::Native> {
        &self.base
    }

    fn function_arrival(&self) {
        let value = self.base.cached_advertised_value();
        self.value_change_callback(&value);
    }

    fn module_config_has_changed(&self) {
        if let Ok(n) = self.base.native() {
            self.estimation_model
                .store(EstimationModel::from_native(n.estimation_model()));
            self.working_mode
                .store(WorkingMode::from_native(n.working_mode()));
            self.led_current.store(proxy_uint(n.led_current()));
            self.led_calibration.store(proxy_uint(n.led_calibration()));
            self.integration_time.store(proxy_uint(n.integration_time()));
            self.gain.store(proxy_uint(n.gain()));
        }
    }

    fn value_change_callback(&self, value: &str) {
        let Some(color) = AdvertisedColor::parse(value) else {
            trace!(value, "advertised value is not a color report");
            return;
        };
        self.estimated_rgb.store(color.rgb);
        self.estimated_hsl.store(color.hsl);
        self.saturation.store(color.saturation);
        self.led_current.store(color.led_current);
    }
}

function_proxy_common!(ColorSensorProxy);

impl ColorSensorProxy {
    /// Color estimation model
    pub fn estimation_model(&self) -> Result<EstimationModel> {
        self.base.get_enum(|n| n.estimation_model())
    }

    /// Change the color estimation model
    pub fn set_estimation_model(&self, newval: EstimationModel) -> Result<i32> {
        self.base.set_enum(newval, |n, v| n.set_estimation_model(v))
    }

    /// Estimation model from the cache
    pub fn cached_estimation_model(&self) -> EstimationModel {
        self.base.read_cached(&self.estimation_model)
    }

    /// Change the estimation model when online and different from the cache
    pub fn set_cached_estimation_model(&self, newval: EstimationModel) {
        self.base.write_cached(&self.estimation_model, newval, |n, v| {
            n.set_estimation_model(v.to_native())
        });
    }

    /// Working mode
    pub fn working_mode(&self) -> Result<WorkingMode> {
        self.base.get_enum(|n| n.working_mode())
    }

    /// Change the working mode
    pub fn set_working_mode(&self, newval: WorkingMode) -> Result<i32> {
        self.base.set_enum(newval, |n, v| n.set_working_mode(v))
    }

    /// Working mode from the cache
    pub fn cached_working_mode(&self) -> WorkingMode {
        self.base.read_cached(&self.working_mode)
    }

    /// Change the working mode when online and different from the cache
    pub fn set_cached_working_mode(&self, newval: WorkingMode) {
        self.base.write_cached(&self.working_mode, newval, |n, v| {
            n.set_working_mode(v.to_native())
        });
    }

    /// Illumination LED current, in mA
    pub fn led_current(&self) -> Result<i32> {
        self.base.get_uint(|n| n.led_current())
    }

    /// Change the illumination LED current
    pub fn set_led_current(&self, newval: i32) -> Result<i32> {
        self.base.set_uint(newval, |n, v| n.set_led_current(v))
    }

    /// LED current from the cache
    pub fn cached_led_current(&self) -> i32 {
        self.base.read_cached(&self.led_current)
    }

    /// Change the LED current when online and different from the cache
    pub fn set_cached_led_current(&self, newval: i32) {
        self.base
            .write_cached(&self.led_current, newval, |n, v| n.set_led_current(*v));
    }

    /// LED current used for calibration
    pub fn led_calibration(&self) -> Result<i32> {
        self.base.get_uint(|n| n.led_calibration())
    }

    /// Change the LED current used for calibration
    pub fn set_led_calibration(&self, newval: i32) -> Result<i32> {
        self.base.set_uint(newval, |n, v| n.set_led_calibration(v))
    }

    /// Calibration LED current from the cache
    pub fn cached_led_calibration(&self) -> i32 {
        self.base.read_cached(&self.led_calibration)
    }

    /// Change the calibration LED current when online and different from the cache
    pub fn set_cached_led_calibration(&self, newval: i32) {
        self.base
            .write_cached(&self.led_calibration, newval, |n, v| n.set_led_calibration(*v));
    }

    /// Integration time, in ms
    pub fn integration_time(&self) -> Result<i32> {
        self.base.get_uint(|n| n.integration_time())
    }

    /// Change the integration time
    pub fn set_integration_time(&self, newval: i32) -> Result<i32> {
        self.base.set_uint(newval, |n, v| n.set_integration_time(v))
    }

    /// Integration time from the cache
    pub fn cached_integration_time(&self) -> i32 {
        self.base.read_cached(&self.integration_time)
    }

    /// Change the integration time when online and different from the cache
    pub fn set_cached_integration_time(&self, newval: i32) {
        self.base
            .write_cached(&self.integration_time, newval, |n, v| n.set_integration_time(*v));
    }

    /// Sensor gain
    pub fn gain(&self) -> Result<i32> {
        self.base.get_uint(|n| n.gain())
    }

    /// Change the sensor gain
    pub fn set_gain(&self, newval: i32) -> Result<i32> {
        self.base.set_uint(newval, |n, v| n.set_gain(v))
    }

    /// Gain from the cache
    pub fn cached_gain(&self) -> i32 {
        self.base.read_cached(&self.gain)
    }

    /// Change the gain when online and different from the cache
    pub fn set_cached_gain(&self, newval: i32) {
        self.base.write_cached(&self.gain, newval, |n, v| n.set_gain(*v));
    }

    /// Saturation bitmask of the sensor channels
    pub fn saturation(&self) -> Result<i32> {
        self.base.get_uint(|n| n.saturation())
    }

    /// Saturation bitmask from the last advertised value
    pub fn cached_saturation(&self) -> i32 {
        self.base.read_cached(&self.saturation)
    }

    /// Estimated color as `0xRRGGBB`
    pub fn estimated_rgb(&self) -> Result<i32> {
        self.base.get_uint(|n| n.estimated_rgb())
    }

    /// Estimated RGB color from the last advertised value
    pub fn cached_estimated_rgb(&self) -> i32 {
        self.base.read_cached(&self.estimated_rgb)
    }

    /// Estimated color as `0xHHSSLL`
    pub fn estimated_hsl(&self) -> Result<i32> {
        self.base.get_uint(|n| n.estimated_hsl())
    }

    /// Estimated HSL color from the last advertised value
    pub fn cached_estimated_hsl(&self) -> i32 {
        self.base.read_cached(&self.estimated_hsl)
    }

    /// Estimated color in the CIE XYZ space
    pub fn estimated_xyz(&self) -> Result<String> {
        self.base.get_string(|n| n.estimated_xyz())
    }

    /// Estimated color in the OkLab space
    pub fn estimated_ok_lab(&self) -> Result<String> {
        self.base.get_string(|n| n.estimated_ok_lab())
    }

    /// Closest RAL color
    pub fn near_ral1(&self) -> Result<String> {
        self.base.get_string(|n| n.near_ral1())
    }

    /// Second closest RAL color
    pub fn near_ral2(&self) -> Result<String> {
        self.base.get_string(|n| n.near_ral2())
    }

    /// Third closest RAL color
    pub fn near_ral3(&self) -> Result<String> {
        self.base.get_string(|n| n.near_ral3())
    }

    /// Closest HTML color name
    pub fn near_html_color(&self) -> Result<String> {
        self.base.get_string(|n| n.near_html_color())
    }

    /// Closest simple color
    pub fn near_simple_color_index(&self) -> Result<NearSimpleColor> {
        self.base.get_enum(|n| n.near_simple_color_index())
    }

    /// Name of the closest simple color
    pub fn near_simple_color(&self) -> Result<String> {
        self.base.get_string(|n| n.near_simple_color())
    }

    /// Turn the illumination LED off
    pub fn turn_led_off(&self) -> Result<i32> {
        self.base.with_native(|n| n.turn_led_off())
    }

    /// Turn the illumination LED on
    pub fn turn_led_on(&self) -> Result<i32> {
        self.base.with_native(|n| n.turn_led_on())
    }

    /// Save the calibration LED current to flash
    pub fn save_led_calibration(&self) -> Result<i32> {
        self.base.with_native(|n| n.save_led_calibration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advertised_color_parses_fields() {
        let color = AdvertisedColor::parse("FF80401E6E7F0314").unwrap();
        assert_eq!(color.rgb, 0xFF8040);
        assert_eq!(color.hsl, 0x1E6E7F);
        assert_eq!(color.saturation, 0x03);
        assert_eq!(color.led_current, 0x14);
    }

    #[test]
    fn test_advertised_color_rejects_malformed() {
        assert_eq!(AdvertisedColor::parse("FF8040"), None);
        assert_eq!(AdvertisedColor::parse("FF80401E6E7F03ZZ"), None);
        assert_eq!(AdvertisedColor::parse("+F80401E6E7F0314"), None);
        assert_eq!(AdvertisedColor::parse("éé80401E6E7F0314"), None);
        assert_eq!(AdvertisedColor::parse("FF80401E6E7F031400"), None);
    }

    #[test]
    fn test_enum_codes_follow_declaration_order() {
        assert_eq!(NearSimpleColor::from_native(0), NearSimpleColor::Brown);
        assert_eq!(NearSimpleColor::from_native(10), NearSimpleColor::Pink);
        assert_eq!(NearSimpleColor::from_native(11), NearSimpleColor::Invalid);
        assert_eq!(WorkingMode::Autogain.to_native(), 2);
    }
}
