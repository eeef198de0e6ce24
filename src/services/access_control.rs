//! Control de acceso
//!
//! Reglas de mutación y visibilidad sobre ciclos y sus registros hijos.
//! Se evalúa siempre antes de cualquier escritura; sin efectos
//! secundarios.

use crate::models::{
    actor::{Actor, Role},
    cycle::{Cycle, CycleStatus},
    settings::DriverPermissions,
};

/// Tipos de registro hijo cuya visibilidad puede restringirse por motorista
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
    Freights,
    Fuelings,
    Expenses,
    TireChanges,
}

/// Un admin puede mutar cualquier ciclo suyo sin importar el estado.
/// Un motorista solo puede mutar ciclos abiertos que le fueron asignados;
/// un ciclo cerrado queda de solo lectura para él permanentemente.
pub fn can_mutate(actor: &Actor, cycle: &Cycle) -> bool {
    match actor.role {
        Role::Admin => actor.id == cycle.admin_id,
        Role::Driver => {
            cycle.status == CycleStatus::Open
                && cycle.driver_id == actor.id
                && actor.admin_id == Some(cycle.admin_id)
        }
    }
}

/// Cerrar es una transición única open -> closed, exclusiva del admin
/// dueño. Sobre un ciclo ya cerrado la respuesta es rechazo, no no-op.
pub fn can_close(actor: &Actor, cycle: &Cycle) -> bool {
    actor.role == Role::Admin && actor.id == cycle.admin_id && cycle.status == CycleStatus::Open
}

/// Lectura de un ciclo: el admin dueño, o el motorista asignado
pub fn can_view(actor: &Actor, cycle: &Cycle) -> bool {
    match actor.role {
        Role::Admin => actor.id == cycle.admin_id,
        Role::Driver => cycle.driver_id == actor.id && actor.admin_id == Some(cycle.admin_id),
    }
}

/// Visibilidad por tipo de registro. Los fretes son siempre visibles
/// para el motorista asignado; los demás dependen de sus permisos.
pub fn can_view_kind(actor: &Actor, permissions: &DriverPermissions, kind: ChildKind) -> bool {
    if actor.role == Role::Admin {
        return true;
    }
    match kind {
        ChildKind::Freights => true,
        ChildKind::Fuelings => permissions.view_fuelings,
        ChildKind::Expenses => permissions.view_expenses,
        ChildKind::TireChanges => permissions.view_tire_changes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn cycle(admin_id: Uuid, driver_id: Uuid, status: CycleStatus) -> Cycle {
        Cycle {
            id: Uuid::new_v4(),
            admin_id,
            driver_id,
            car_id: Uuid::new_v4(),
            description: "Viagem Sorriso-Santos".to_string(),
            departure_at: Utc::now(),
            departure_odometer: Decimal::from(1000),
            departure_photo_url: "/uploads/cycles/km.jpg".to_string(),
            status,
            created_at: Utc::now(),
        }
    }

    fn admin(id: Uuid) -> Actor {
        Actor {
            id,
            role: Role::Admin,
            admin_id: None,
        }
    }

    fn driver(id: Uuid, admin_id: Uuid) -> Actor {
        Actor {
            id,
            role: Role::Driver,
            admin_id: Some(admin_id),
        }
    }

    #[test]
    fn test_admin_mutates_own_cycle_any_status() {
        let admin_id = Uuid::new_v4();
        let driver_id = Uuid::new_v4();
        let actor = admin(admin_id);

        assert!(can_mutate(&actor, &cycle(admin_id, driver_id, CycleStatus::Open)));
        assert!(can_mutate(&actor, &cycle(admin_id, driver_id, CycleStatus::Closed)));
    }

    #[test]
    fn test_admin_cannot_mutate_foreign_cycle() {
        let actor = admin(Uuid::new_v4());
        let other = cycle(Uuid::new_v4(), Uuid::new_v4(), CycleStatus::Open);
        assert!(!can_mutate(&actor, &other));
        assert!(!can_view(&actor, &other));
    }

    #[test]
    fn test_driver_gate_on_status() {
        let admin_id = Uuid::new_v4();
        let driver_id = Uuid::new_v4();
        let actor = driver(driver_id, admin_id);

        assert!(can_mutate(&actor, &cycle(admin_id, driver_id, CycleStatus::Open)));
        // Ciclo cerrado: solo lectura para el motorista, para siempre
        assert!(!can_mutate(&actor, &cycle(admin_id, driver_id, CycleStatus::Closed)));
        assert!(can_view(&actor, &cycle(admin_id, driver_id, CycleStatus::Closed)));
    }

    #[test]
    fn test_driver_cannot_mutate_unassigned_cycle() {
        let admin_id = Uuid::new_v4();
        let actor = driver(Uuid::new_v4(), admin_id);
        let unassigned = cycle(admin_id, Uuid::new_v4(), CycleStatus::Open);

        assert!(!can_mutate(&actor, &unassigned));
        assert!(!can_view(&actor, &unassigned));
    }

    #[test]
    fn test_close_only_open_cycles() {
        let admin_id = Uuid::new_v4();
        let driver_id = Uuid::new_v4();
        let actor = admin(admin_id);

        assert!(can_close(&actor, &cycle(admin_id, driver_id, CycleStatus::Open)));
        // Re-cerrar un ciclo cerrado se rechaza, no es un no-op
        assert!(!can_close(&actor, &cycle(admin_id, driver_id, CycleStatus::Closed)));
    }

    #[test]
    fn test_close_denied_to_driver_and_foreign_admin() {
        let admin_id = Uuid::new_v4();
        let driver_id = Uuid::new_v4();
        let open = cycle(admin_id, driver_id, CycleStatus::Open);

        assert!(!can_close(&driver(driver_id, admin_id), &open));
        assert!(!can_close(&admin(Uuid::new_v4()), &open));
    }

    #[test]
    fn test_view_kind_permissions() {
        let admin_id = Uuid::new_v4();
        let driver_id = Uuid::new_v4();
        let actor = driver(driver_id, admin_id);

        let mut perms = DriverPermissions::default_for(driver_id);
        perms.view_fuelings = false;
        perms.view_expenses = false;

        // Fretes siempre visibles para el motorista asignado
        assert!(can_view_kind(&actor, &perms, ChildKind::Freights));
        assert!(!can_view_kind(&actor, &perms, ChildKind::Fuelings));
        assert!(!can_view_kind(&actor, &perms, ChildKind::Expenses));
        assert!(can_view_kind(&actor, &perms, ChildKind::TireChanges));

        // El admin ignora los permisos de motorista
        let admin_actor = admin(admin_id);
        assert!(can_view_kind(&admin_actor, &perms, ChildKind::Fuelings));
    }
}
