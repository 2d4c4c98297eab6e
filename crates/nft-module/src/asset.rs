//! # Asset Minter
//!
//! Creates `Asset` records from caller-supplied bytes. Anyone may mint, any
//! number of times, once the module is published. Assets are immutable
//! after creation and are never burned.
//!
//! ## Text Fields
//!
//! All three fields arrive as raw bytes and are decoded as UTF-8 before any
//! id is allocated. One bad field aborts the mint; the error names the
//! field and the byte offset where decoding stopped.

use serde::{Deserialize, Serialize};
use tracing::info;

use nft_core::{decode_text, ObjectId};
use nft_object::{Declared, ExecutionError, Module, Object, TxContext};

use crate::init::NftModule;

/// A uniquely owned digital asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    id: ObjectId,
    /// Title.
    pub titulo: String,
    /// Description.
    pub descricao: String,
    /// Image location (URL or content URI).
    pub imagem_url: String,
}

impl Asset {
    /// The asset's id.
    pub fn id(&self) -> &ObjectId {
        &self.id
    }
}

impl Object for Asset {
    fn type_tag() -> String {
        format!("{}::Asset", NftModule::NAME)
    }

    fn id(&self) -> &ObjectId {
        &self.id
    }
}

impl Declared for Asset {
    type Module = NftModule;
}

/// Mint an asset and transfer it to the sender.
///
/// # Errors
///
/// `ExecutionError::Encoding` if any field is not valid UTF-8. Nothing is
/// created in that case.
pub fn mint(
    titulo: &[u8],
    descricao: &[u8],
    imagem_url: &[u8],
    ctx: &mut TxContext,
) -> Result<(), ExecutionError> {
    let titulo = decode_text(titulo).map_err(|e| e.for_field("titulo"))?;
    let descricao = decode_text(descricao).map_err(|e| e.for_field("descricao"))?;
    let imagem_url = decode_text(imagem_url).map_err(|e| e.for_field("imagem_url"))?;

    let asset = Asset {
        id: ctx.fresh_id()?,
        titulo,
        descricao,
        imagem_url,
    };
    let owner = ctx.sender();
    info!(asset = %asset.id, %owner, titulo = %asset.titulo, "asset minted");
    ctx.transfer(asset, owner)
}
