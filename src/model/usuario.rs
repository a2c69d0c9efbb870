use super::UsuarioId;
use serde::{Deserialize, Serialize};

/// A system user. Users are the editors recorded in the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: UsuarioId,
    pub username: String,
    pub nombre_completo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsuarioCreate {
    pub username: String,
    pub nombre_completo: String,
}

/// The resolved identity of whoever is making a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Editor {
    pub id: UsuarioId,
    pub username: String,
}

impl From<&Usuario> for Editor {
    fn from(usuario: &Usuario) -> Self {
        Self {
            id: usuario.id,
            username: usuario.username.clone(),
        }
    }
}

/// A mutation payload paired with the editor responsible for it.
#[derive(Debug, Clone)]
pub struct Edit<P> {
    pub editor: Editor,
    pub data: P,
}

impl<P> Edit<P> {
    pub fn new(editor: Editor, data: P) -> Self {
        Self { editor, data }
    }
}
