pub mod asset;
pub mod font;

pub use asset::{AssetKind, AssetUrlProvider, MapAssetProvider, PrefixAssetProvider};
pub use font::{FontCollector, FontRequest, GoogleFontsCollector, NoFontCollector};
