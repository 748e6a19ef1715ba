//! Surface meteorology conversions for the boreas toolkit.
//!
//! Small closed-form relations used to derive the fields the observation
//! nudging input format expects from raw station reports: saturation
//! vapor pressure and density, absolute humidity, wind vector
//! decomposition, and sea-level pressure reduction.
//!
//! Temperatures are in degrees Celsius unless a parameter says Kelvin,
//! pressures in the unit the station reports (the reduction preserves
//! it), wind speed in m/s and direction in meteorological degrees.

/// Universal molar gas constant, J/(mol K).
pub const R: f64 = 8.314462618;

/// Molar mass of dry air, kg/mol.
pub const MD: f64 = 0.02896546;

/// Specific gas constant of dry air, J/(kg K).
pub const RD: f64 = R / MD;

/// Standard gravitational acceleration, m/s^2.
pub const G: f64 = 9.80665;

/// Molar mass of water, g/mol.
const MW_WATER: f64 = 18.0;

/// Saturation water vapor pressure in Pa over liquid water.
///
/// August-Roche-Magnus form with the Alduchov-Eskridge coefficients:
/// `610.94 * exp(17.625 T / (T + 243.04))`, `t_c` in Celsius.
pub fn saturation_water_vapor_pressure(t_c: f64) -> f64 {
    0.61094 * (17.625 * t_c / (t_c + 243.04)).exp() * 1e3
}

/// Saturation vapor density in g/m^3 via the ideal gas law.
///
/// Uses the rounded molar gas constant 8.31 J/(mol K) and 18 g/mol for
/// water, matching the station pipeline this feeds.
pub fn saturation_vapor_density(t_c: f64) -> f64 {
    let vp = saturation_water_vapor_pressure(t_c);
    vp / (8.31 * (t_c + 273.15)) * MW_WATER
}

/// Absolute humidity in g/m^3 from temperature and relative humidity.
pub fn absolute_humidity(t_c: f64, rh_percent: f64) -> f64 {
    saturation_vapor_density(t_c) * rh_percent / 100.0
}

/// Zonal wind component from speed and meteorological direction.
pub fn u_from_vector(speed: f64, direction_deg: f64) -> f64 {
    direction_deg.to_radians().cos() * speed
}

/// Meridional wind component from speed and meteorological direction.
pub fn v_from_vector(speed: f64, direction_deg: f64) -> f64 {
    direction_deg.to_radians().sin() * speed
}

/// Reduces station pressure to sea level.
///
/// Scale height `H = RD * T / G` with `t_k` in Kelvin; the result keeps
/// the unit of `pressure`.
pub fn slp_from_station_pressure(pressure: f64, elevation_m: f64, t_k: f64) -> f64 {
    let scale_height = RD * t_k / G;
    pressure * (elevation_m / scale_height).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svp_at_freezing_point() {
        // The Magnus fit pins 610.94 Pa at 0 degC, within a pascal of
        // the 611.94 value quoted for the triple point.
        assert!((saturation_water_vapor_pressure(0.0) - 610.94).abs() < 1e-9);
        assert!((saturation_water_vapor_pressure(0.0) - 611.94).abs() <= 1.0);
    }

    #[test]
    fn svp_increases_with_temperature() {
        assert!(
            saturation_water_vapor_pressure(30.0) > saturation_water_vapor_pressure(10.0)
        );
    }

    #[test]
    fn vapor_density_near_room_temperature() {
        // ~17.3 g/m^3 at 20 degC is the textbook value.
        let rho = saturation_vapor_density(20.0);
        assert!((rho - 17.3).abs() < 0.3, "got {rho}");
    }

    #[test]
    fn wind_components_on_axes() {
        assert!((u_from_vector(10.0, 0.0) - 10.0).abs() < 1e-6);
        assert!(v_from_vector(10.0, 0.0).abs() < 1e-6);
        assert!((v_from_vector(10.0, 90.0) - 10.0).abs() < 1e-6);
        assert!(u_from_vector(10.0, 90.0).abs() < 1e-6);
    }

    #[test]
    fn wind_components_preserve_magnitude() {
        let (u, v) = (u_from_vector(7.5, 215.0), v_from_vector(7.5, 215.0));
        assert!((u.hypot(v) - 7.5).abs() < 1e-9);
    }

    #[test]
    fn slp_exceeds_station_pressure_above_sea_level() {
        let slp = slp_from_station_pressure(950.0, 500.0, 288.15);
        assert!(slp > 950.0);
        // 500 m at 15 degC reduces by roughly 6 percent.
        assert!((slp / 950.0 - 1.061).abs() < 0.005, "got ratio {}", slp / 950.0);
    }

    #[test]
    fn slp_at_sea_level_is_identity() {
        assert_eq!(slp_from_station_pressure(1013.25, 0.0, 288.15), 1013.25);
    }

    #[test]
    fn dry_air_gas_constant_value() {
        assert!((RD - 287.05).abs() < 0.01);
    }
}
