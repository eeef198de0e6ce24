//! Calculadora financiera
//!
//! Funciones puras y deterministas, sin I/O. Todo valor monetario se
//! redondea a 2 decimales con redondeo estándar (mitad hacia afuera)
//! en el punto de persistencia. Las validaciones de negativos ocurren
//! antes, en los controllers: aquí solo entran valores no negativos.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::{expense::Expense, freight::Freight, fueling::Fueling};

const KG_PER_TON: i64 = 1000;

/// Redondeo monetario estándar a 2 decimales
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Valor del frete: peso en kg por tarifa por tonelada
///
/// La división por 1000 convierte kilogramos a toneladas; el divisor es
/// una constante, nunca hay división por cero.
pub fn compute_freight_value(departure_weight_kg: Decimal, rate_per_ton: Decimal) -> Decimal {
    round_money(departure_weight_kg * rate_per_ton / Decimal::from(KG_PER_TON))
}

/// Comisión del motorista sobre el valor del frete
pub fn compute_commission(value: Decimal, commission_percent: Decimal) -> Decimal {
    round_money(value * commission_percent / Decimal::from(100))
}

/// Total de un abastecimiento: arla + diésel, cualquiera puede ser cero
pub fn compute_fueling_total(
    arla_liters: Decimal,
    arla_price_per_liter: Decimal,
    diesel_liters: Decimal,
    diesel_price_per_liter: Decimal,
) -> Decimal {
    round_money(arla_liters * arla_price_per_liter + diesel_liters * diesel_price_per_liter)
}

/// Totales agregados de un ciclo o de un portafolio de ciclos
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CycleTotals {
    pub freight_total: Decimal,
    pub commission_total: Decimal,
    pub loss_total: Decimal,
    pub fueling_total: Decimal,
    pub expense_total: Decimal,
}

impl CycleTotals {
    pub fn add(&mut self, other: &CycleTotals) {
        self.freight_total += other.freight_total;
        self.commission_total += other.commission_total;
        self.loss_total += other.loss_total;
        self.fueling_total += other.fueling_total;
        self.expense_total += other.expense_total;
    }
}

/// Sumar los registros hijos de un ciclo
pub fn aggregate_cycle(
    freights: &[Freight],
    fuelings: &[Fueling],
    expenses: &[Expense],
) -> CycleTotals {
    let mut totals = CycleTotals::default();

    for freight in freights {
        totals.freight_total += freight.value;
        totals.commission_total += freight.commission_value;
        totals.loss_total += freight.loss_value;
    }
    for fueling in fuelings {
        totals.fueling_total += fueling.total;
    }
    for expense in expenses {
        totals.expense_total += expense.value;
    }

    totals
}

/// Suma elemento a elemento de los agregados por ciclo
pub fn aggregate_portfolio<'a>(per_cycle: impl IntoIterator<Item = &'a CycleTotals>) -> CycleTotals {
    let mut totals = CycleTotals::default();
    for cycle_totals in per_cycle {
        totals.add(cycle_totals);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn sample_freight(value: &str, commission: &str, loss: &str) -> Freight {
        Freight {
            id: Uuid::new_v4(),
            cycle_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            origin: "Sorriso".to_string(),
            destination: "Santos".to_string(),
            departure_weight: dec("20000"),
            arrival_weight: None,
            rate_per_ton: dec("150"),
            value: dec(value),
            commission_percent: dec("10"),
            commission_value: dec(commission),
            loss_value: dec(loss),
            departure_photo_url: "/uploads/freights/a.jpg".to_string(),
            arrival_photo_url: None,
            created_at: Utc::now(),
        }
    }

    fn sample_fueling(total: &str) -> Fueling {
        Fueling {
            id: Uuid::new_v4(),
            cycle_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
            station: "Posto Ipiranga".to_string(),
            odometer: dec("152000"),
            arla_liters: dec("10"),
            arla_price_per_liter: dec("2.5"),
            diesel_liters: dec("0"),
            diesel_price_per_liter: dec("0"),
            total: dec(total),
            odometer_photo_url: "/uploads/fuelings/km.jpg".to_string(),
            receipt_photo_url: "/uploads/fuelings/nf.jpg".to_string(),
            created_at: Utc::now(),
        }
    }

    fn sample_expense(value: &str) -> Expense {
        Expense {
            id: Uuid::new_v4(),
            cycle_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
            description: "Pedágio".to_string(),
            value: dec(value),
            receipt_photo_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_freight_value_formula() {
        // 20000 kg * R$150/ton / 1000 = R$3000.00
        assert_eq!(
            compute_freight_value(dec("20000"), dec("150")),
            dec("3000.00")
        );
    }

    #[test]
    fn test_freight_value_zero_inputs() {
        assert_eq!(compute_freight_value(Decimal::ZERO, dec("150")), dec("0.00"));
        assert_eq!(compute_freight_value(dec("20000"), Decimal::ZERO), dec("0.00"));
    }

    #[test]
    fn test_freight_value_rounding() {
        // 333 kg * 10.01 / 1000 = 3.33333 -> 3.33
        assert_eq!(compute_freight_value(dec("333"), dec("10.01")), dec("3.33"));
        // 125 kg * 100.20 / 1000 = 12.525 -> 12.53 (mitad hacia afuera)
        assert_eq!(compute_freight_value(dec("125"), dec("100.20")), dec("12.53"));
    }

    #[test]
    fn test_commission_formula() {
        assert_eq!(compute_commission(dec("3000"), dec("10")), dec("300.00"));
        assert_eq!(compute_commission(dec("3000"), Decimal::ZERO), dec("0.00"));
        assert_eq!(compute_commission(dec("3000"), dec("100")), dec("3000.00"));
    }

    #[test]
    fn test_fueling_total_additive() {
        assert_eq!(
            compute_fueling_total(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
            dec("0.00")
        );
        assert_eq!(
            compute_fueling_total(dec("10"), dec("2.5"), Decimal::ZERO, Decimal::ZERO),
            dec("25.00")
        );
        assert_eq!(
            compute_fueling_total(dec("10"), dec("2.5"), dec("200"), dec("5.89")),
            dec("1203.00")
        );
    }

    #[test]
    fn test_fueling_total_four_decimal_inputs() {
        // 150.5 L * 5.8990 = 887.7995 -> 887.80
        assert_eq!(
            compute_fueling_total(Decimal::ZERO, Decimal::ZERO, dec("150.5"), dec("5.8990")),
            dec("887.80")
        );
    }

    #[test]
    fn test_aggregate_cycle() {
        let freights = vec![
            sample_freight("3000.00", "300.00", "0"),
            sample_freight("1500.50", "150.05", "20.00"),
        ];
        let fuelings = vec![sample_fueling("25.00"), sample_fueling("887.80")];
        let expenses = vec![sample_expense("42.90")];

        let totals = aggregate_cycle(&freights, &fuelings, &expenses);
        assert_eq!(totals.freight_total, dec("4500.50"));
        assert_eq!(totals.commission_total, dec("450.05"));
        assert_eq!(totals.loss_total, dec("20.00"));
        assert_eq!(totals.fueling_total, dec("912.80"));
        assert_eq!(totals.expense_total, dec("42.90"));
    }

    #[test]
    fn test_aggregate_cycle_idempotent() {
        let freights = vec![sample_freight("3000.00", "300.00", "5.00")];
        let fuelings = vec![sample_fueling("25.00")];
        let expenses = vec![sample_expense("10.00")];

        let first = aggregate_cycle(&freights, &fuelings, &expenses);
        let second = aggregate_cycle(&freights, &fuelings, &expenses);
        assert_eq!(first, second);
    }

    #[test]
    fn test_aggregate_cycle_empty() {
        let totals = aggregate_cycle(&[], &[], &[]);
        assert_eq!(totals, CycleTotals::default());
    }

    #[test]
    fn test_aggregate_portfolio() {
        let a = CycleTotals {
            freight_total: dec("3000.00"),
            commission_total: dec("300.00"),
            loss_total: dec("0"),
            fueling_total: dec("100.00"),
            expense_total: dec("50.00"),
        };
        let b = CycleTotals {
            freight_total: dec("3000.00"),
            commission_total: dec("300.00"),
            loss_total: dec("12.50"),
            fueling_total: dec("0"),
            expense_total: dec("7.50"),
        };

        let portfolio = aggregate_portfolio([&a, &b]);
        assert_eq!(portfolio.freight_total, dec("6000.00"));
        assert_eq!(portfolio.commission_total, dec("600.00"));
        assert_eq!(portfolio.loss_total, dec("12.50"));
        assert_eq!(portfolio.fueling_total, dec("100.00"));
        assert_eq!(portfolio.expense_total, dec("57.50"));

        // Portafolio vacío -> todo cero
        assert_eq!(aggregate_portfolio([]), CycleTotals::default());
    }
}
