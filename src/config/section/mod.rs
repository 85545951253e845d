//! Configuration section definitions.
//!
//! Each module corresponds to a section in `realty.toml`:
//!
//! | Module    | TOML Section | Purpose                                  |
//! |-----------|--------------|------------------------------------------|
//! | `agent`   | `[agent]`    | Agent identity, address, geo, social     |
//! | `build`   | `[build]`    | Output paths, generators, deferred loads |
//! | `listing` | `[listing]`  | Featured listing (Product schema)        |
//! | `market`  | `[market]`   | Market statistics and overrides          |
//! | `serve`   | `[serve]`    | Development server                       |
//! | `site`    | `[site]`     | Site URL and social preview              |

mod agent;
mod build;
mod listing;
mod market;
mod serve;
mod site;

pub use agent::AgentConfig;
pub use build::{BuildConfig, DeferredKind, DeferredResource};
pub use listing::ListingConfig;
pub use market::{MarketConfig, MarketStats};
pub use serve::ServeConfig;
pub use site::SiteInfoConfig;
