
use super::{ConvertOptions, UnmappablePolicy};

pub(super) fn strict() -> ConvertOptions {
    ConvertOptions {
        unmappable: UnmappablePolicy::Error,
        ..ConvertOptions::default()
    }
}
