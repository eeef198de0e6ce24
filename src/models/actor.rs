//! Actor autenticado
//!
//! El contexto de actor se construye en el middleware de autenticación
//! a partir del JWT y se pasa explícitamente a cada operación del core.
//! El core nunca lee estado de sesión ambiental.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rol del actor - el sistema solo tiene dos roles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Driver,
}

/// Actor autenticado que se inyecta en cada request
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: Uuid,
    pub role: Role,
    /// Presente solo para motoristas: referencia a su administrador
    pub admin_id: Option<Uuid>,
}

impl Actor {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Administrador cuyo portafolio ve este actor: él mismo si es admin,
    /// o su administrador vinculado si es motorista.
    pub fn scope_admin_id(&self) -> Option<Uuid> {
        match self.role {
            Role::Admin => Some(self.id),
            Role::Driver => self.admin_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_admin_id() {
        let admin_id = Uuid::new_v4();
        let admin = Actor {
            id: admin_id,
            role: Role::Admin,
            admin_id: None,
        };
        assert_eq!(admin.scope_admin_id(), Some(admin_id));

        let driver = Actor {
            id: Uuid::new_v4(),
            role: Role::Driver,
            admin_id: Some(admin_id),
        };
        assert_eq!(driver.scope_admin_id(), Some(admin_id));
        assert!(!driver.is_admin());
    }
}
