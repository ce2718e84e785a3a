/// Data layer: core types, loading, and the small numeric helpers both
/// front-ends share.
///
/// Architecture:
/// ```text
///   mesh.txt   series_*.txt
///        │          │
///        ▼          ▼
///   ┌──────────────────┐
///   │      loader      │  text → Matrix (NaN tokens → fill value)
///   └──────────────────┘
///            │
///            ▼
///   ┌──────────────────┐
///   │  Mesh / Series   │  1-D vs frame matrix, mesh length check
///   └──────────────────┘
///            │
///     ┌──────┴───────┐
///     ▼              ▼
///  ┌───────┐   ┌──────────┐
///  │ stats │   │ sampling │  axis ranges, frame strides
///  └───────┘   └──────────┘
/// ```

pub mod catalog;
pub mod loader;
pub mod model;
pub mod sampling;
pub mod stats;
