//! Utilidades de validación
//!
//! Validadores custom compartidos entre DTOs y controllers.

use regex::Regex;
use std::sync::OnceLock;
use validator::ValidationError;

fn spot_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Nombres tipo "A1", "B-12", "Norte 3"; letras/dígitos con separadores simples
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 _\-]{0,63}$").unwrap())
}

/// Validar el nombre de una plaza de aparcamiento
pub fn validate_spot_name(value: &str) -> Result<(), ValidationError> {
    if !spot_name_regex().is_match(value.trim()) {
        let mut error = ValidationError::new("spot_name");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar coordenadas geográficas
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        let mut error = ValidationError::new("coordinates");
        error.add_param("latitude".into(), &lat);
        error.add_param("longitude".into(), &lon);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_spot_name() {
        assert!(validate_spot_name("A1").is_ok());
        assert!(validate_spot_name("B-12").is_ok());
        assert!(validate_spot_name("Norte 3").is_ok());
        assert!(validate_spot_name("").is_err());
        assert!(validate_spot_name("-lead").is_err());
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(41.39, 2.17).is_ok());
        assert!(validate_coordinates(91.0, 0.0).is_err());
        assert!(validate_coordinates(0.0, -181.0).is_err());
    }
}
