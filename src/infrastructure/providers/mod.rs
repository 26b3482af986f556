pub mod crypto;
pub mod paypal;
pub mod stripe;

use crate::application::registry::ProviderRegistry;
use crate::domain::ports::IdGeneratorArc;
use crate::error::Result;

/// Builds a registry with every builtin provider family wired to the given
/// id source.
pub fn builtin_registry(ids: IdGeneratorArc) -> Result<ProviderRegistry> {
    let mut registry = ProviderRegistry::new();
    registry.register(stripe::family(ids.clone())?)?;
    registry.register(paypal::family(ids.clone())?)?;
    registry.register(crypto::family(ids)?)?;
    Ok(registry)
}
