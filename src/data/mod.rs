/// Data layer: records, loading, filtering and per-state aggregation.
///
/// Architecture:
/// ```text
///   uploaded .csv bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → LicenseTable (Licenses split into tokens)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  provider / specialty selection → Vec<&Record>
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  explode tokens, colour providers, group by state
///   └───────────┘
///        │
///        ▼
///     MapView  (view::render ties the stages together)
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod view;
