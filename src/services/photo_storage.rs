//! Almacenamiento de fotos de evidencia
//!
//! Colaborador de blobs: recibe las fotos como data URLs base64 (así las
//! produce el front con FileReader), las decodifica y las escribe en
//! disco bajo UPLOAD_DIR. Devuelve la URL pública que se persiste en la
//! fila. La subida ocurre antes del insert; si el insert falla, la
//! operación completa se reporta como fallida y el archivo queda
//! huérfano hasta un reintento.

use std::path::PathBuf;

use base64::{engine::general_purpose::STANDARD, Engine};
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Prefijo público bajo el cual main.rs sirve el directorio de uploads
pub const PUBLIC_PREFIX: &str = "/uploads";

#[derive(Debug, Clone)]
pub struct PhotoStorage {
    root: PathBuf,
}

/// Payload decodificado de un data URL de imagen
#[derive(Debug, PartialEq)]
pub struct DecodedPhoto {
    pub extension: &'static str,
    pub bytes: Vec<u8>,
}

/// Decodificar un data URL `data:image/...;base64,<payload>`
pub fn decode_data_url(data_url: &str) -> Result<DecodedPhoto, AppError> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| AppError::Validation("La foto debe ser un data URL".to_string()))?;

    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| AppError::Validation("La foto debe venir codificada en base64".to_string()))?;

    let extension = match mime {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        other => {
            return Err(AppError::Validation(format!(
                "Tipo de imagen no soportado: {}",
                other
            )))
        }
    };

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| AppError::Validation(format!("Base64 inválido en la foto: {}", e)))?;

    if bytes.is_empty() {
        return Err(AppError::Validation("La foto está vacía".to_string()));
    }

    Ok(DecodedPhoto { extension, bytes })
}

impl PhotoStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Guardar una foto en el bucket indicado y devolver su URL pública
    pub async fn save(&self, bucket: &str, data_url: &str) -> Result<String, AppError> {
        let photo = decode_data_url(data_url)?;

        let dir = self.root.join(bucket);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::Storage(format!("No se pudo crear el directorio de fotos: {}", e)))?;

        let file_name = format!("{}.{}", Uuid::new_v4(), photo.extension);
        let path = dir.join(&file_name);
        tokio::fs::write(&path, &photo.bytes)
            .await
            .map_err(|e| AppError::Storage(format!("No se pudo escribir la foto: {}", e)))?;

        Ok(format!("{}/{}/{}", PUBLIC_PREFIX, bucket, file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_data_url_jpeg() {
        // "hola" en base64
        let decoded = decode_data_url("data:image/jpeg;base64,aG9sYQ==").unwrap();
        assert_eq!(decoded.extension, "jpg");
        assert_eq!(decoded.bytes, b"hola");
    }

    #[test]
    fn test_decode_data_url_png() {
        let decoded = decode_data_url("data:image/png;base64,aG9sYQ==").unwrap();
        assert_eq!(decoded.extension, "png");
    }

    #[test]
    fn test_decode_rejects_non_data_url() {
        assert!(decode_data_url("https://example.com/foto.jpg").is_err());
        assert!(decode_data_url("aG9sYQ==").is_err());
    }

    #[test]
    fn test_decode_rejects_unsupported_mime() {
        assert!(decode_data_url("data:application/pdf;base64,aG9sYQ==").is_err());
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        assert!(decode_data_url("data:image/jpeg;base64,$$$").is_err());
    }

    #[test]
    fn test_decode_rejects_empty_payload() {
        assert!(decode_data_url("data:image/jpeg;base64,").is_err());
    }

    #[tokio::test]
    async fn test_save_writes_file_and_returns_url() {
        let dir = std::env::temp_dir().join(format!("fotos-test-{}", Uuid::new_v4()));
        let storage = PhotoStorage::new(&dir);

        let url = storage
            .save("cycles", "data:image/jpeg;base64,aG9sYQ==")
            .await
            .unwrap();

        assert!(url.starts_with("/uploads/cycles/"));
        assert!(url.ends_with(".jpg"));

        let file_name = url.rsplit('/').next().unwrap();
        let contents = tokio::fs::read(dir.join("cycles").join(file_name))
            .await
            .unwrap();
        assert_eq!(contents, b"hola");

        tokio::fs::remove_dir_all(&dir).await.ok();
    }
}
