//! Cálculo de tarifas
//!
//! La única fuente de verdad para tarifas es el `price_per_hour` de la
//! plaza. El recargo por overstay aplica un multiplicador configurable
//! (app_settings) sobre esa tarifa; no existen constantes de precio.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

/// Desglose del recargo por exceso de estancia
#[derive(Debug, Clone, PartialEq)]
pub struct OverstayCharge {
    /// Horas facturables, redondeadas hacia arriba
    pub hours: i64,
    pub fee: Decimal,
}

/// Calcular el recargo por check-out tardío.
///
/// El tiempo facturable es lo que excede de `end_time` más el periodo de
/// gracia; dentro de la gracia no se cobra nada. Se factura por horas
/// completas iniciadas: `ceil(facturable / 1h) × tarifa × multiplicador`.
pub fn overstay_charge(
    end_time: DateTime<Utc>,
    check_out: DateTime<Utc>,
    grace: Duration,
    hourly_rate: Decimal,
    multiplier: Decimal,
) -> Option<OverstayCharge> {
    let chargeable = check_out - end_time - grace;
    let secs = chargeable.num_seconds();
    if secs <= 0 {
        return None;
    }

    let hours = (secs + 3599) / 3600;
    let fee = Decimal::from(hours) * hourly_rate * multiplier;

    Some(OverstayCharge { hours, fee })
}

/// Coste de extender una reserva `extra_hours` horas
pub fn extension_cost(extra_hours: i64, hourly_rate: Decimal) -> Decimal {
    Decimal::from(extra_hours) * hourly_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 29, hour, min, 0).unwrap()
    }

    fn grace15() -> Duration {
        Duration::minutes(15)
    }

    #[test]
    fn test_no_charge_within_grace() {
        // Salida 10 minutos tarde con 15 de gracia: sin recargo
        let charge = overstay_charge(
            t(12, 0),
            t(12, 10),
            grace15(),
            Decimal::new(200, 0),
            Decimal::ONE,
        );
        assert!(charge.is_none());
    }

    #[test]
    fn test_no_charge_at_exact_grace_boundary() {
        let charge = overstay_charge(
            t(12, 0),
            t(12, 15),
            grace15(),
            Decimal::new(200, 0),
            Decimal::ONE,
        );
        assert!(charge.is_none());
    }

    #[test]
    fn test_no_charge_on_early_checkout() {
        let charge = overstay_charge(
            t(12, 0),
            t(11, 30),
            grace15(),
            Decimal::new(200, 0),
            Decimal::ONE,
        );
        assert!(charge.is_none());
    }

    #[test]
    fn test_one_hour_charged_past_grace() {
        // Escenario del flujo de escaneo: fin 12:00, salida 12:20, gracia 15
        // => 5 minutos facturables => 1 hora completa
        let charge = overstay_charge(
            t(12, 0),
            t(12, 20),
            grace15(),
            Decimal::new(200, 0),
            Decimal::ONE,
        )
        .unwrap();
        assert_eq!(charge.hours, 1);
        assert_eq!(charge.fee, Decimal::new(200, 0));
    }

    #[test]
    fn test_partial_second_hour_rounds_up() {
        // 65 minutos facturables => 2 horas
        let charge = overstay_charge(
            t(12, 0),
            t(13, 20),
            grace15(),
            Decimal::new(150, 0),
            Decimal::ONE,
        )
        .unwrap();
        assert_eq!(charge.hours, 2);
        assert_eq!(charge.fee, Decimal::new(300, 0));
    }

    #[test]
    fn test_multiplier_scales_fee() {
        let charge = overstay_charge(
            t(12, 0),
            t(12, 30),
            grace15(),
            Decimal::new(100, 0),
            Decimal::new(15, 1), // 1.5x
        )
        .unwrap();
        assert_eq!(charge.hours, 1);
        assert_eq!(charge.fee, Decimal::new(150, 0));
    }

    #[test]
    fn test_extension_cost_proportional() {
        let rate = Decimal::new(200, 0);
        assert_eq!(extension_cost(1, rate), Decimal::new(200, 0));
        assert_eq!(extension_cost(3, rate), Decimal::new(600, 0));
    }
}
