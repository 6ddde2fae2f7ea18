/// Data layer: core types, loading, normalisation and table operations.
///
/// Architecture:
/// ```text
///  {hitters|pitchers}_{YY}[_contract|_pitches].csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse files → Dataset (memoised by store)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ currency  │  classify columns, rewrite "$1,200" → 1200.0
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   ops     │  concat / filter / transpose / top-N
///   └──────────┘
/// ```

pub mod currency;
pub mod export;
pub mod loader;
pub mod model;
pub mod ops;
pub mod pitch_mix;
pub mod store;

#[cfg(test)]
pub mod fixtures;
