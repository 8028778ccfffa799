//! Asset identity seam.
//!
//! Whether an asset is native or a claim on an asset from the counterparty
//! is decided outside the crate. The exchange only asks which identifier to
//! pay out in.

/// Resolves the identifier used when paying out an asset received over `route`.
pub trait AssetResolver {
    /// Identifier to pay `asset` out in, given the counterparty `route`
    fn payout_asset(&self, route: &str, asset: &str) -> String;
}

/// Pays out every asset under its own identifier
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl AssetResolver for Passthrough {
    fn payout_asset(&self, _route: &str, asset: &str) -> String {
        asset.to_string()
    }
}

impl<F> AssetResolver for F
where
    F: Fn(&str, &str) -> String,
{
    fn payout_asset(&self, route: &str, asset: &str) -> String {
        self(route, asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough() {
        assert_eq!(Passthrough.payout_asset("channel-0", "marscoin"), "marscoin");
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |route: &str, asset: &str| format!("{route}/{asset}");
        assert_eq!(resolver.payout_asset("channel-0", "marscoin"), "channel-0/marscoin");
    }
}
