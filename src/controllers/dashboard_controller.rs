//! Controller del dashboard
//!
//! Agrega el portafolio de ciclos del actor: totales financieros,
//! conteos por estado y los ciclos más recientes. Admite filtro por
//! estado y por rango de fechas de salida.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::models::{
    actor::Actor,
    cycle::{Cycle, CycleStatus, StatusFilter},
};
use crate::repositories::{
    CycleRepository, ExpenseRepository, FreightRepository, FuelingRepository, SettingsRepository,
};
use crate::services::{
    access_control::{self, ChildKind},
    finance::{self, CycleTotals},
};
use crate::utils::errors::AppError;

const DEFAULT_RECENT_CYCLES: usize = 5;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub status: StatusFilter,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub recent: Option<usize>,
}

/// Totales de un ciclo individual dentro del resumen
#[derive(Debug, Serialize)]
pub struct CycleSummary {
    pub cycle: Cycle,
    pub totals: CycleTotals,
}

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub totals: CycleTotals,
    pub open_count: usize,
    pub closed_count: usize,
    pub cycle_count: usize,
    pub recent_cycles: Vec<CycleSummary>,
}

pub struct DashboardController {
    cycles: CycleRepository,
    freights: FreightRepository,
    fuelings: FuelingRepository,
    expenses: ExpenseRepository,
    settings: SettingsRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            cycles: CycleRepository::new(pool.clone()),
            freights: FreightRepository::new(pool.clone()),
            fuelings: FuelingRepository::new(pool.clone()),
            expenses: ExpenseRepository::new(pool.clone()),
            settings: SettingsRepository::new(pool),
        }
    }

    pub async fn build_summary(
        &self,
        actor: &Actor,
        query: DashboardQuery,
    ) -> Result<DashboardSummary, AppError> {
        let admin_id = actor.scope_admin_id().ok_or_else(|| {
            AppError::Unauthorized("El token no tiene un administrador asociado".to_string())
        })?;

        let scoped = if actor.is_admin() {
            self.cycles.find_by_admin(admin_id).await?
        } else {
            self.cycles.find_by_admin_and_driver(admin_id, actor.id).await?
        };

        // Filtro por rango de fechas de salida y por estado
        let cycles: Vec<Cycle> = scoped
            .into_iter()
            .filter(|cycle| {
                let date = cycle.departure_at.date_naive();
                query.from.map_or(true, |from| date >= from)
                    && query.to.map_or(true, |to| date <= to)
                    && query.status.matches(cycle.status)
            })
            .collect();

        let permissions = self.settings.get_permissions(actor.id).await?;
        let include_fuelings =
            access_control::can_view_kind(actor, &permissions, ChildKind::Fuelings);
        let include_expenses =
            access_control::can_view_kind(actor, &permissions, ChildKind::Expenses);

        let mut per_cycle = Vec::with_capacity(cycles.len());
        for cycle in cycles {
            let freights = self.freights.find_by_cycle(cycle.id).await?;
            let fuelings = if include_fuelings {
                self.fuelings.find_by_cycle(cycle.id).await?
            } else {
                Vec::new()
            };
            let expenses = if include_expenses {
                self.expenses.find_by_cycle(cycle.id).await?
            } else {
                Vec::new()
            };

            let totals = finance::aggregate_cycle(&freights, &fuelings, &expenses);
            per_cycle.push(CycleSummary { cycle, totals });
        }

        let totals = finance::aggregate_portfolio(per_cycle.iter().map(|s| &s.totals));
        let open_count = per_cycle
            .iter()
            .filter(|s| s.cycle.status == CycleStatus::Open)
            .count();
        let closed_count = per_cycle.len() - open_count;
        let cycle_count = per_cycle.len();

        // Los ciclos vienen ordenados por fecha de salida descendente
        let recent = query.recent.unwrap_or(DEFAULT_RECENT_CYCLES);
        per_cycle.truncate(recent);

        Ok(DashboardSummary {
            totals,
            open_count,
            closed_count,
            cycle_count,
            recent_cycles: per_cycle,
        })
    }
}
