//! Configuration sections of `assetmap.toml`.
//!
//! | Section     | Purpose                                      |
//! |-------------|----------------------------------------------|
//! | `[assets]`  | Asset tree location                          |
//! | `[mapping]` | Output selection (json / go package)         |

mod assets;
mod mapping;

pub use assets::AssetsConfig;
pub use mapping::MappingConfig;
