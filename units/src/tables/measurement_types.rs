/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::unit_defs::*;
use crate::PreciseUnit;

lazy_static! {
    static ref MEASUREMENT_TYPES: HashMap<&'static str, PreciseUnit> = {
        let area = M.pow(2);
        let volume = M.pow(3);
        let speed = M / S;
        [
            ("", ONE),
            ("arb", ONE),
            ("arbitrary", ONE),
            ("dimensionless", ONE),
            ("ratio", ONE),
            ("fraction", ONE),
            ("length", M),
            ("len", M),
            ("distance", M),
            ("height", M),
            ("depth", M),
            ("width", M),
            ("diameter", M),
            ("thickness", M),
            ("wavelength", M),
            ("invlen", M.invert()),
            ("wavenumber", M.invert()),
            ("area", area),
            ("volume", volume),
            ("vol", volume),
            ("fluidvolume", L),
            ("time", S),
            ("duration", S),
            ("mass", KG),
            ("weight", KG),
            ("current", A),
            ("electriccurrent", A),
            ("temperature", K),
            ("temp", K),
            ("thermodynamictemperature", K),
            ("celsiustemperature", DEG_C),
            ("amount", MOL),
            ("substance", MOL),
            ("luminousintensity", CD),
            ("luminousflux", LM),
            ("illuminance", LX),
            ("speed", speed),
            ("velocity", speed),
            ("acceleration", speed / S),
            ("force", N),
            ("pressure", PA),
            ("stress", PA),
            ("energy", J),
            ("work", J),
            ("heat", J),
            ("power", W),
            ("frequency", HZ),
            ("charge", C),
            ("electriccharge", C),
            ("voltage", V),
            ("potential", V),
            ("electricpotential", V),
            ("resistance", OHM),
            ("impedance", OHM),
            ("conductance", SIEMENS),
            ("capacitance", F),
            ("inductance", H),
            ("magneticflux", WB),
            ("magneticfluxdensity", T),
            ("angle", RAD),
            ("planeangle", RAD),
            ("solidangle", SR),
            ("angularvelocity", RAD / S),
            ("density", KG / volume),
            ("massconcentration", KG / volume),
            ("concentration", MOL / volume),
            ("molarity", MOLAR),
            ("molality", MOL / KG),
            ("flow", volume / S),
            ("volumetricflow", volume / S),
            ("massflow", KG / S),
            ("viscosity", PA * S),
            ("dynamicviscosity", PA * S),
            ("kinematicviscosity", area / S),
            ("torque", N * M),
            ("momentum", KG * speed),
            ("thermalconductivity", W / M / K),
            ("heatcapacity", J / K),
            ("specificheat", J / KG / K),
            ("entropy", J / K),
            ("irradiance", W / area),
            ("radioactivity", BQ),
            ("activity", BQ),
            ("absorbeddose", GY),
            ("catalyticactivity", KAT),
            ("currency", CURRENCY),
            ("money", CURRENCY),
            ("count", COUNT),
            ("number", COUNT),
            ("information", BYTE),
            ("data", BYTE),
            ("datarate", BIT / S),
            ("bandwidth", BIT / S),
        ]
        .into_iter()
        .collect()
    };
}

/// Default SI unit for a kind of measurement ("length", "speed",
/// "amount of substance", ...). Returns the error unit when unknown.
pub fn default_unit(measurement_type: &str) -> PreciseUnit {
    match measurement_type {
        "L" => return M,
        "M" => return KG,
        "T" => return S,
        "\u{398}" => return K,
        "I" => return A,
        "N" => return MOL,
        "J" => return CD,
        _ => {}
    }
    let normalized: String = measurement_type
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect::<String>()
        .to_lowercase();
    lookup_type(&normalized)
}

fn lookup_type(name: &str) -> PreciseUnit {
    if let Some(unit) = MEASUREMENT_TYPES.get(name) {
        return *unit;
    }
    if let Some(rest) = name.strip_prefix("quantityof") {
        return lookup_type(rest);
    }
    if let Some(pos) = name.rfind("of") {
        return lookup_type(&name[..pos]);
    }
    if let Some(pos) = name.find(['(', '[', '{']) {
        return lookup_type(&name[..pos]);
    }
    if let Some(rest) = name.strip_prefix("inv") {
        let unit = lookup_type(rest);
        if !unit.is_error() {
            return unit.invert();
        }
    }
    if name.ends_with("rto") || name.ends_with("fr") {
        return ONE;
    }
    for suffix in ["quantities", "quantity", "measure"] {
        if let Some(rest) = name.strip_suffix(suffix) {
            return lookup_type(rest);
        }
    }
    match name.strip_suffix('s') {
        Some(rest) if !rest.is_empty() => lookup_type(rest),
        _ => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::default_unit;
    use crate::unit_defs::{ERROR, KG, M, MOL, S};

    #[test]
    fn measurement_types() {
        assert_eq!(default_unit("length"), M);
        assert_eq!(default_unit("Mass"), KG);
        assert_eq!(default_unit("amount of substance"), MOL);
        assert_eq!(default_unit("speed"), M / S);
        assert_eq!(default_unit("distances"), M);
        assert_eq!(default_unit("inv length"), M.invert());
        assert_eq!(default_unit("T"), S);
        assert_eq!(default_unit("unicorn horn"), ERROR);
    }
}
