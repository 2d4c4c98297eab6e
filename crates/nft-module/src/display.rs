//! # Display Registrar
//!
//! Registers the presentation template viewers use to render an `Asset`.
//! Requires the module's publisher by reference; the capability stays with
//! its holder.
//!
//! Calling this twice registers two independent displays. Consumers that
//! need a single template can list them with
//! `Ledger::objects_of_type::<Display<Asset>>()`.

use tracing::info;

use nft_object::{Display, ExecutionError, Object, Publisher, TxContext};

use crate::asset::Asset;
use crate::init::NftModule;

/// Presentation keys and templates, in registration order.
pub const DISPLAY_FIELDS: [(&str, &str); 3] = [
    ("titulo", "{titulo}"),
    ("descricao", "{descricao}"),
    ("image_url", "{imagem_url}"),
];

/// Create, activate, and hand the `Asset` display to the sender.
pub fn create_display(
    publisher: &Publisher<NftModule>,
    ctx: &mut TxContext,
) -> Result<(), ExecutionError> {
    let mut template = Display::<Asset>::new_with_fields(publisher, DISPLAY_FIELDS, ctx)?;
    template.update_version(ctx)?;
    let owner = ctx.sender();
    info!(display = %template.id(), %owner, version = template.version(), "asset display registered");
    ctx.transfer(template, owner)
}
