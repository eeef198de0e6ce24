//! Middleware de autenticación JWT
//!
//! Decodifica el token Bearer, construye el Actor y lo inyecta en las
//! extensions de la request. El core recibe el actor ya resuelto; aquí
//! es el único lugar donde se tocan tokens.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::EnvironmentConfig;
use crate::models::actor::{Actor, Role};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Claims del JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// ID del actor (admin o motorista)
    pub sub: String,
    pub role: Role,
    /// Solo para motoristas: su administrador vinculado
    pub admin_id: Option<String>,
    pub exp: usize,
    pub iat: usize,
}

/// Convertir claims validados en un Actor
///
/// Un token de motorista sin admin_id está mal emitido y se rechaza.
pub fn actor_from_claims(claims: &Claims) -> Result<Actor, AppError> {
    let id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("ID de actor inválido en el token".to_string()))?;

    let admin_id = match (&claims.role, &claims.admin_id) {
        (Role::Admin, _) => None,
        (Role::Driver, Some(raw)) => Some(Uuid::parse_str(raw).map_err(|_| {
            AppError::Unauthorized("ID de administrador inválido en el token".to_string())
        })?),
        (Role::Driver, None) => {
            return Err(AppError::Unauthorized(
                "El token de motorista no tiene administrador asociado".to_string(),
            ))
        }
    };

    Ok(Actor {
        id,
        role: claims.role,
        admin_id,
    })
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    // Decodificar y validar JWT
    let token_data = decode::<Claims>(
        auth_header,
        &DecodingKey::from_secret(state.config.jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;

    let actor = actor_from_claims(&token_data.claims)?;

    // Inyectar el actor en las extensions
    request.extensions_mut().insert(actor);

    Ok(next.run(request).await)
}

fn issue_token(
    actor_id: Uuid,
    role: Role,
    admin_id: Option<Uuid>,
    expires_in: Duration,
    config: &EnvironmentConfig,
) -> Result<(String, DateTime<Utc>), AppError> {
    let now = Utc::now();
    let expires_at = now + expires_in;

    let claims = Claims {
        sub: actor_id.to_string(),
        role,
        admin_id: admin_id.map(|id| id.to_string()),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());
    let token = encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Error generando JWT: {}", e)))?;

    Ok((token, expires_at))
}

/// Generar token de sesión para un actor ya autenticado
pub fn generate_actor_token(
    actor: &Actor,
    config: &EnvironmentConfig,
) -> Result<(String, DateTime<Utc>), AppError> {
    issue_token(
        actor.id,
        actor.role,
        actor.admin_id,
        Duration::seconds(config.jwt_expiration as i64),
        config,
    )
}

/// Generar token de invitación para que un motorista acceda a su espacio
///
/// El token ya es un token de motorista válido, con vigencia extendida,
/// que el front incrusta en el enlace de invitación.
pub fn generate_driver_invite_token(
    driver_id: Uuid,
    admin_id: Uuid,
    config: &EnvironmentConfig,
) -> Result<(String, DateTime<Utc>), AppError> {
    issue_token(
        driver_id,
        Role::Driver,
        Some(admin_id),
        Duration::seconds(config.invite_expiration as i64),
        config,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "test".to_string(),
            port: 3000,
            host: "127.0.0.1".to_string(),
            jwt_secret: "secreto-de-prueba".to_string(),
            jwt_expiration: 3600,
            invite_expiration: 604800,
            cors_origins: vec!["*".to_string()],
            upload_dir: "uploads".to_string(),
            app_base_url: "http://localhost:5173".to_string(),
        }
    }

    fn decode_claims(token: &str, config: &EnvironmentConfig) -> Claims {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(config.jwt_secret.as_ref()),
            &Validation::default(),
        )
        .unwrap()
        .claims
    }

    #[test]
    fn test_admin_token_round_trip() {
        let config = test_config();
        let actor = Actor {
            id: Uuid::new_v4(),
            role: Role::Admin,
            admin_id: None,
        };

        let (token, _) = generate_actor_token(&actor, &config).unwrap();
        let decoded = actor_from_claims(&decode_claims(&token, &config)).unwrap();

        assert_eq!(decoded.id, actor.id);
        assert_eq!(decoded.role, Role::Admin);
        assert_eq!(decoded.admin_id, None);
    }

    #[test]
    fn test_invite_token_builds_driver_actor() {
        let config = test_config();
        let driver_id = Uuid::new_v4();
        let admin_id = Uuid::new_v4();

        let (token, expires_at) =
            generate_driver_invite_token(driver_id, admin_id, &config).unwrap();
        assert!(expires_at > Utc::now());

        let decoded = actor_from_claims(&decode_claims(&token, &config)).unwrap();
        assert_eq!(decoded.id, driver_id);
        assert_eq!(decoded.role, Role::Driver);
        assert_eq!(decoded.admin_id, Some(admin_id));
    }

    #[test]
    fn test_driver_claims_without_admin_rejected() {
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            role: Role::Driver,
            admin_id: None,
            exp: 0,
            iat: 0,
        };

        assert!(matches!(
            actor_from_claims(&claims),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_malformed_subject_rejected() {
        let claims = Claims {
            sub: "no-es-un-uuid".to_string(),
            role: Role::Admin,
            admin_id: None,
            exp: 0,
            iat: 0,
        };

        assert!(actor_from_claims(&claims).is_err());
    }
}
