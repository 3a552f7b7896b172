//! This module is the seam between the color math and whatever actually talks to lights. A
//! [`Light`] is the device record as the bridge reports it, and [`DeviceColor`] is what a light gets
//! told: a chromaticity it can reproduce and a brightness. Turning any color into a `DeviceColor`
//! for a particular light means converting it to xyY and fitting the chromaticity into that light's
//! gamut, which the [`GamutRegistry`] picks by model.

use crate::bound::Bound;
use crate::chromaticity::Chromaticity;
use crate::color::{Color, XYZColor};
use crate::colors::{LChColor, LinearRGBColor, SRGBColor, XyYColor};
use crate::gamut::GamutTriangle;
use crate::registry::GamutRegistry;

/// A light as reported by the bridge. Serializes with the bridge's field names.
///
/// The bridge documents `uniqueid` as always present but has been seen to leave it out, and
/// numeric ids are only known once a light has been enumerated, so both are optional.
///
/// # Example
/// ```
/// # use xygamut::device::Light;
/// # use xygamut::registry::GamutRegistry;
/// # use xygamut::colors::SRGBColor;
/// let light = Light::new("Desk lamp", "LCT001");
/// let color = light.color_from_srgb("#FF0000".parse::<SRGBColor>().unwrap(), &GamutRegistry::builtin());
/// assert!(xygamut::in_gamut(color.xy, light.gamut(&GamutRegistry::builtin())));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    /// The device's hardware identifier, if the bridge reported one.
    #[serde(rename = "uniqueid", default, skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    /// The bridge's numeric id for the light, if it has been assigned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    /// The user-facing name.
    pub name: String,
    /// The bridge's description of the kind of light, e.g. "Extended color light".
    #[serde(rename = "type", default)]
    pub light_type: String,
    /// The model identifier, which decides the gamut.
    #[serde(rename = "modelid", default)]
    pub model_id: String,
    /// The marketing name of the product, if reported.
    #[serde(rename = "productname", default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    /// Whether the bridge can currently reach the light.
    #[serde(default)]
    pub reachable: bool,
}

/// A color as a light accepts it: a chromaticity inside its gamut and a brightness, where 1 is the
/// brightness of the reference white.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceColor {
    /// The chromaticity, already fitted into the light's gamut.
    pub xy: Chromaticity,
    /// The luminance Y of the requested color. Not clamped: a color brighter than white comes out
    /// above 1.
    pub brightness: f64,
}

impl DeviceColor {
    /// Makes a device color for the given gamut out of an XYZ color: its chromaticity is fitted
    /// into the gamut and its luminance becomes the brightness.
    pub fn from_xyz(xyz: XYZColor, gamut: &GamutTriangle) -> DeviceColor {
        let xyy = XyYColor::from_xyz(xyz).clamp(gamut);
        DeviceColor {
            xy: xyy.chromaticity(),
            brightness: xyy.luminance,
        }
    }

    /// The brightness on the bridge's 0-254 scale, clamping brightness to between 0 and 1 first.
    /// # Example
    /// ```
    /// # use xygamut::device::DeviceColor;
    /// # use xygamut::chromaticity::Chromaticity;
    /// let color = DeviceColor { xy: Chromaticity::new(0.3, 0.3), brightness: 0.5 };
    /// assert_eq!(color.bri(), 127);
    /// ```
    pub fn bri(&self) -> u8 {
        (self.brightness.max(0.0).min(1.0) * 254.0).round() as u8
    }
}

impl Light {
    /// Makes a light record with just a name and a model, as for a light that hasn't been
    /// enumerated yet.
    pub fn new(name: &str, model_id: &str) -> Light {
        Light {
            unique_id: None,
            id: None,
            name: name.to_string(),
            light_type: String::new(),
            model_id: model_id.to_string(),
            product_name: None,
            reachable: false,
        }
    }

    /// A name to identify the light by in logs: the unique id if there is one, otherwise the name.
    pub fn label(&self) -> &str {
        self.unique_id.as_deref().unwrap_or(&self.name)
    }

    /// The gamut this light can reproduce, according to the registry.
    pub fn gamut<'a>(&self, registry: &'a GamutRegistry) -> &'a GamutTriangle {
        registry.gamut_for_model(&self.model_id)
    }

    /// The closest color this light can show to the given XYZ color.
    pub fn color_from_xyz(&self, xyz: XYZColor, registry: &GamutRegistry) -> DeviceColor {
        let color = DeviceColor::from_xyz(xyz, self.gamut(registry));
        trace!("{}: {:?} -> {:?}", self.label(), xyz, color);
        color
    }

    /// The closest color this light can show to the given linear RGB color.
    pub fn color_from_rgb(&self, rgb: LinearRGBColor, registry: &GamutRegistry) -> DeviceColor {
        self.color_from_xyz(rgb.to_xyz(), registry)
    }

    /// The closest color this light can show to the given sRGB color.
    pub fn color_from_srgb(&self, srgb: SRGBColor, registry: &GamutRegistry) -> DeviceColor {
        self.color_from_xyz(srgb.to_xyz(), registry)
    }

    /// The closest color this light can show to the given LCh color.
    pub fn color_from_lch(&self, lch: LChColor, registry: &GamutRegistry) -> DeviceColor {
        self.color_from_xyz(lch.to_xyz(), registry)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::gamut::{in_gamut, GAMUT_A, GAMUT_B, GAMUT_C};
    use crate::white_point::D65;

    #[test]
    fn test_deserialize_light() {
        let json = r#"{
            "uniqueid": "00:17:88:01:00:bd:c7:b9-0b",
            "id": 3,
            "name": "Hue color lamp 1",
            "type": "Extended color light",
            "modelid": "LCT015",
            "productname": "Hue color lamp",
            "reachable": true
        }"#;
        let light: Light = serde_json::from_str(json).unwrap();
        assert_eq!(
            light.unique_id.as_deref(),
            Some("00:17:88:01:00:bd:c7:b9-0b")
        );
        assert_eq!(light.id, Some(3));
        assert_eq!(light.light_type, "Extended color light");
        assert_eq!(light.product_name.as_deref(), Some("Hue color lamp"));
        assert!(light.reachable);
        assert_eq!(light.label(), "00:17:88:01:00:bd:c7:b9-0b");
    }

    #[test]
    fn test_deserialize_light_without_ids() {
        let json = r#"{"name": "Living room", "modelid": "LCT001"}"#;
        let light: Light = serde_json::from_str(json).unwrap();
        assert_eq!(light.unique_id, None);
        assert_eq!(light.id, None);
        assert!(!light.reachable);
        assert_eq!(light.label(), "Living room");
        assert_eq!(light, Light::new("Living room", "LCT001"));
        // missing ids stay missing on the way back out
        let out = serde_json::to_value(&light).unwrap();
        assert!(out.get("uniqueid").is_none());
        assert!(out.get("id").is_none());
    }

    #[test]
    fn test_gamut_by_model() {
        let registry = GamutRegistry::builtin();
        assert_eq!(Light::new("a", "LST001").gamut(&registry), &GAMUT_A);
        assert_eq!(Light::new("b", "LCT003").gamut(&registry), &GAMUT_B);
        assert_eq!(Light::new("c", "LCT016").gamut(&registry), &GAMUT_C);
        assert_eq!(Light::new("?", "ACME42").gamut(&registry), &GAMUT_C);
    }

    #[test]
    fn test_white_passes_through() {
        let registry = GamutRegistry::builtin();
        let light = Light::new("lamp", "LCT015");
        let color = light.color_from_rgb(
            LinearRGBColor {
                r: 1.,
                g: 1.,
                b: 1.,
            },
            &registry,
        );
        assert!((color.xy.x - D65.x).abs() <= 1e-3);
        assert!((color.xy.y - D65.y).abs() <= 1e-3);
        assert_eq!(color.bri(), 254);
    }

    #[test]
    fn test_saturated_colors_fitted_per_model() {
        let registry = GamutRegistry::builtin();
        let green = LinearRGBColor {
            r: 0.,
            g: 1.,
            b: 0.,
        };
        for model in &["LST001", "LCT001", "LCT015"] {
            let light = Light::new("lamp", model);
            let color = light.color_from_rgb(green, &registry);
            assert!(in_gamut(color.xy, light.gamut(&registry)));
            assert!((color.brightness - 0.7151522).abs() <= 1e-9);
        }
        // sRGB green is outside gamut B, so the B light can't show it as-is
        let b_light = Light::new("old bulb", "LCT001");
        let fitted = b_light.color_from_rgb(green, &registry);
        assert!(fitted.xy.distance(&Chromaticity::new(0.3, 0.6)) > 1e-3);
    }

    #[test]
    fn test_lch_pipeline() {
        let registry = GamutRegistry::builtin();
        let light = Light::new("strip", "LST002");
        // a saturated blue-purple
        let lch = LChColor {
            l: 30.,
            c: 130.,
            h: -1.0,
        };
        let color = light.color_from_lch(lch, &registry);
        assert!(in_gamut(color.xy, &GAMUT_C));
        let xyz = lch.to_xyz();
        assert!((color.brightness - xyz.y).abs() <= 1e-12);
    }

    #[test]
    fn test_black_goes_to_white_point() {
        let registry = GamutRegistry::builtin();
        let light = Light::new("lamp", "LCT015");
        let color = light.color_from_srgb(SRGBColor::from_u8(0, 0, 0), &registry);
        assert_eq!(color.xy, D65.chromaticity());
        assert_eq!(color.bri(), 0);
    }

    #[test]
    fn test_bri_clamps() {
        let xy = Chromaticity::new(0.3, 0.3);
        assert_eq!(DeviceColor { xy, brightness: -0.5 }.bri(), 0);
        assert_eq!(DeviceColor { xy, brightness: 2.0 }.bri(), 254);
        assert_eq!(DeviceColor { xy, brightness: f64::NAN }.bri(), 0);
    }
}
